use contracts::domain::common::EntityStatus;
use contracts::system::users::{drops_last_owner, Permissions, Section, User, UserForm, UserRole};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::modal_controller::ModalController;
use crate::system::users::store::use_users;

/// Permission map from the per-section checkboxes
fn collect_permissions(toggles: &[(Section, bool)]) -> Permissions {
    let mut permissions = Permissions::default();
    for (section, allowed) in toggles {
        permissions.set(*section, *allowed);
    }
    permissions
}

#[component]
pub fn UserDetails(modal: ModalController<User>) -> impl IntoView {
    let store = use_users();

    let existing = modal.data();
    let editing_id = existing.as_ref().map(|u| u.id);
    let title_text = match &existing {
        Some(u) => format!("Edit user: {}", u.name),
        None => "New user".to_string(),
    };
    let initial = existing.as_ref().map(UserForm::from_user).unwrap_or_default();
    let initial_permissions = initial
        .permissions
        .clone()
        .unwrap_or_else(Permissions::editor_default);

    let name = RwSignal::new(initial.name);
    let email = RwSignal::new(initial.email);
    let role = RwSignal::new(initial.role.as_str().to_string());
    let status = RwSignal::new(initial.status.as_str().to_string());
    let toggles: Vec<(Section, RwSignal<bool>)> = Section::ALL
        .iter()
        .map(|s| (*s, RwSignal::new(initial_permissions.allows(*s))))
        .collect();
    let toggles = StoredValue::new(toggles);

    let is_editor = move || UserRole::from_str_or_default(&role.get()) == UserRole::Editor;

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let role = UserRole::from_str_or_default(&role.get_untracked());
        let permissions = (role == UserRole::Editor).then(|| {
            toggles.with_value(|t| {
                let values: Vec<(Section, bool)> =
                    t.iter().map(|(s, v)| (*s, v.get_untracked())).collect();
                collect_permissions(&values)
            })
        });
        let form = UserForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            role,
            status: EntityStatus::from_str_or_default(&status.get_untracked()),
            permissions,
        };
        if let Err(msg) = form.validate() {
            set_error.set(Some(msg));
            return;
        }
        if let Some(id) = editing_id {
            let blocked = store.with_untracked(|users| {
                users
                    .iter()
                    .find(|u| u.id == id)
                    .is_some_and(|current| drops_last_owner(users, current, &form))
            });
            if blocked {
                set_error.set(Some(
                    "The last active owner must stay an active owner".to_string(),
                ));
                return;
            }
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match editing_id {
                Some(id) => match store.update(id, form).await {
                    Ok(_) => modal.close_modal(),
                    Err(e) => {
                        log::error!("Failed to save user: {}", e);
                        set_error.set(Some(format!("Save failed: {}", e)));
                        set_saving.set(false);
                    }
                },
                None => {
                    store.create(form).await;
                    modal.close_modal();
                }
            }
        });
    };

    let disabled = Signal::derive(move || saving.get());

    view! {
        <Modal title=title_text on_close=modal.close_callback()>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__row">
                <div class="form__group">
                    <Label>"Name *"</Label>
                    <Input value=name disabled=disabled />
                </div>
                <div class="form__group">
                    <Label>"Email *"</Label>
                    <Input value=email input_type=InputType::Email disabled=disabled />
                </div>
            </div>

            <div class="form__row">
                <div class="form__group">
                    <Label>"Role"</Label>
                    <Select value=role>
                        {UserRole::ALL
                            .iter()
                            .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                            .collect_view()}
                    </Select>
                </div>
                <div class="form__group">
                    <Label>"Status"</Label>
                    <Select value=status>
                        <option value=EntityStatus::Active.as_str()>{EntityStatus::Active.label()}</option>
                        <option value=EntityStatus::Inactive.as_str()>{EntityStatus::Inactive.label()}</option>
                    </Select>
                </div>
            </div>

            <Show when=is_editor>
                <div class="form__group">
                    <Label>"Editor permissions"</Label>
                    <div class="permissions-grid">
                        {toggles
                            .get_value()
                            .into_iter()
                            .map(|(section, checked)| {
                                view! { <Checkbox checked=checked label=section.label() /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| modal.close_modal()
                    disabled=disabled
                >
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=disabled>
                    {icon("save")}
                    {move || if saving.get() { " Saving..." } else { " Save" }}
                </Button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_permissions() {
        let p = collect_permissions(&[(Section::Posts, true), (Section::Users, false)]);
        assert!(p.allows(Section::Posts));
        assert!(!p.allows(Section::Users));
        assert!(!p.allows(Section::Media));
        assert_eq!(p.granted_count(), 1);
    }

    #[test]
    fn test_seeded_owner_cannot_be_demoted() {
        let users = crate::system::users::store::seed();
        let owner = &users[0];
        let mut form = UserForm::from_user(owner);
        assert!(!drops_last_owner(&users, owner, &form));

        form.role = UserRole::Admin;
        assert!(drops_last_owner(&users, owner, &form));

        let mut form = UserForm::from_user(owner);
        form.status = EntityStatus::Inactive;
        assert!(drops_last_owner(&users, owner, &form));

        let admin = &users[1];
        let mut form = UserForm::from_user(admin);
        form.role = UserRole::Viewer;
        assert!(!drops_last_owner(&users, admin, &form));
    }
}
