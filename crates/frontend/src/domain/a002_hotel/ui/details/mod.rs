use contracts::domain::a002_hotel::aggregate::{Hotel, HotelForm};
use contracts::domain::common::EntityStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_hotel::store::use_properties;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::modal_controller::ModalController;

#[component]
pub fn HotelDetails(modal: ModalController<Hotel>) -> impl IntoView {
    let store = use_properties();

    let existing = modal.data();
    let editing_id = existing.as_ref().map(|h| h.id);
    let title_text = match &existing {
        Some(h) => format!("Edit property: {}", h.name),
        None => "New property".to_string(),
    };
    let initial = existing.as_ref().map(HotelForm::from_hotel).unwrap_or_default();

    let name = RwSignal::new(initial.name);
    let email = RwSignal::new(initial.email);
    let phone = RwSignal::new(initial.phone);
    let address = RwSignal::new(initial.address);
    let website = RwSignal::new(initial.website);
    let status = RwSignal::new(initial.status.as_str().to_string());

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let form = HotelForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            address: address.get_untracked(),
            website: website.get_untracked(),
            status: EntityStatus::from_str_or_default(&status.get_untracked()),
        };
        if let Err(msg) = form.validate() {
            set_error.set(Some(msg));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match editing_id {
                Some(id) => match store.update(id, form).await {
                    Ok(_) => modal.close_modal(),
                    Err(e) => {
                        log::error!("Failed to save property: {}", e);
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

            <div class="form__group">
                <Label>"Name *"</Label>
                <Input value=name disabled=disabled />
            </div>

            <div class="form__row">
                <div class="form__group">
                    <Label>"Email"</Label>
                    <Input value=email input_type=InputType::Email disabled=disabled />
                </div>
                <div class="form__group">
                    <Label>"Phone"</Label>
                    <Input value=phone disabled=disabled />
                </div>
            </div>

            <div class="form__group">
                <Label>"Address"</Label>
                <Input value=address disabled=disabled />
            </div>

            <div class="form__row">
                <div class="form__group">
                    <Label>"Website"</Label>
                    <Input value=website placeholder="https://" disabled=disabled />
                </div>
                <div class="form__group">
                    <Label>"Status"</Label>
                    <Select value=status>
                        <option value=EntityStatus::Active.as_str()>{EntityStatus::Active.label()}</option>
                        <option value=EntityStatus::Inactive.as_str()>{EntityStatus::Inactive.label()}</option>
                    </Select>
                </div>
            </div>

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
