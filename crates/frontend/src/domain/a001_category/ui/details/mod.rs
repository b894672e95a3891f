use contracts::domain::a001_category::aggregate::{Category, CategoryForm, CategoryKind};
use contracts::domain::common::EntityStatus;
use contracts::shared::translation::{language_name, StubTranslation};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_category::store::use_categories;
use crate::shared::config::use_config;
use crate::shared::icons::{icon, CATEGORY_ICONS};
use crate::shared::modal::Modal;
use crate::shared::modal_controller::ModalController;
use crate::shared::translation::translate_stub;

/// Writes the title/description being edited back into the form.
///
/// An empty translation is dropped unless it belongs to the default locale.
fn commit_translation(
    form: &mut CategoryForm,
    locale: &str,
    default_locale: &str,
    title: String,
    description: String,
) {
    if title.trim().is_empty() && description.trim().is_empty() && locale != default_locale {
        form.translations.remove(locale);
        return;
    }
    let t = form.translation_mut(locale);
    t.title = title;
    t.description = description;
}

/// Stores a finished auto-translation for `target`.
///
/// Returns `true` when `target` is still the locale on screen and the inputs
/// should show the result; otherwise it goes into the form only.
fn store_translation(
    form: &mut CategoryForm,
    target: &str,
    shown: &str,
    stub: &StubTranslation,
) -> bool {
    if target == shown {
        return true;
    }
    let t = form.translation_mut(target);
    t.title = stub.title.to_string();
    t.description = stub.description.to_string();
    false
}

/// Create/edit dialog for a category; `modal.data()` is `None` for a new one
#[component]
pub fn CategoryDetails(modal: ModalController<Category>) -> impl IntoView {
    let store = use_categories();
    let config = use_config();
    let default_locale = StoredValue::new(config.default_locale.clone());
    let supported_locales = config.supported_locales.clone();
    let translation_latency = config.translation_latency_ms;

    let existing = modal.data();
    let editing_id = existing.as_ref().map(|c| c.id);
    let title_text = match &existing {
        Some(c) => format!("Edit category: {}", c.slug),
        None => "New category".to_string(),
    };

    let initial = existing
        .as_ref()
        .map(CategoryForm::from_category)
        .unwrap_or_else(|| CategoryForm {
            icon: "tag".into(),
            ..Default::default()
        });

    let form = RwSignal::new(initial.clone());
    let slug = RwSignal::new(initial.slug.clone());
    let icon_key = RwSignal::new(initial.icon.clone());
    let status = RwSignal::new(initial.status.as_str().to_string());
    let kind = RwSignal::new(initial.kind.as_str().to_string());
    let system_locked = initial.kind == CategoryKind::System && editing_id.is_some();

    let locale = RwSignal::new(config.default_locale.clone());
    let current = initial.translations.get(&config.default_locale).cloned().unwrap_or_default();
    let title = RwSignal::new(current.title);
    let description = RwSignal::new(current.description);

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let (translating, set_translating) = signal(false);

    let commit_current = move || {
        let loc = locale.get_untracked();
        form.update(|f| {
            commit_translation(
                f,
                &loc,
                &default_locale.get_value(),
                title.get_untracked(),
                description.get_untracked(),
            )
        });
    };

    let switch_locale = move |next: String| {
        commit_current();
        let t = form.with_untracked(|f| f.translations.get(&next).cloned().unwrap_or_default());
        title.set(t.title);
        description.set(t.description);
        locale.set(next);
    };

    let auto_translate = move |_| {
        let target = locale.get_untracked();
        set_translating.set(true);
        set_error.set(None);
        spawn_local(async move {
            match translate_stub(&target, translation_latency).await {
                Ok(t) => {
                    let shown = locale.get_untracked();
                    if form.try_update(|f| store_translation(f, &target, &shown, t)) == Some(true) {
                        title.set(t.title.to_string());
                        description.set(t.description.to_string());
                    }
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_translating.set(false);
        });
    };

    let on_save = move |_| {
        commit_current();
        let mut data = form.get_untracked();
        data.slug = slug.get_untracked();
        data.icon = icon_key.get_untracked();
        data.status = EntityStatus::from_str_or_default(&status.get_untracked());
        if !system_locked {
            data.kind = CategoryKind::from_str_or_default(&kind.get_untracked());
        }

        if let Err(msg) = data.validate(&default_locale.get_value()) {
            set_error.set(Some(msg));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match editing_id {
                Some(id) => match store.update(id, data).await {
                    Ok(_) => modal.close_modal(),
                    Err(e) => {
                        log::error!("Failed to save category: {}", e);
                        set_error.set(Some(format!("Save failed: {}", e)));
                        set_saving.set(false);
                    }
                },
                None => {
                    store.create(data).await;
                    modal.close_modal();
                }
            }
        });
    };

    let busy = Signal::derive(move || saving.get() || translating.get());

    view! {
        <Modal title=title_text on_close=modal.close_callback()>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__row">
                <div class="form__group">
                    <Label>"Slug *"</Label>
                    <Input value=slug placeholder="e.g. wellness" disabled=busy />
                </div>
                <div class="form__group">
                    <Label>"Icon"</Label>
                    <Select value=icon_key>
                        {CATEGORY_ICONS
                            .iter()
                            .map(|key| view! { <option value=*key>{*key}</option> })
                            .collect_view()}
                    </Select>
                    <span class="form__icon-preview">{move || icon(&icon_key.get())}</span>
                </div>
            </div>

            <div class="form__row">
                <div class="form__group">
                    <Label>"Status"</Label>
                    <Select value=status>
                        <option value=EntityStatus::Active.as_str()>{EntityStatus::Active.label()}</option>
                        <option value=EntityStatus::Inactive.as_str()>{EntityStatus::Inactive.label()}</option>
                    </Select>
                </div>
                <div class="form__group">
                    <Label>"Type"</Label>
                    <Select value=kind disabled=system_locked>
                        <option value="custom">"Custom"</option>
                        <option value="system">"System"</option>
                    </Select>
                </div>
            </div>

            <div class="form__locale-tabs">
                {icon("globe")}
                {supported_locales
                    .into_iter()
                    .map(|loc| {
                        let loc_for_class = loc.clone();
                        let loc_for_click = loc.clone();
                        let label = loc.to_uppercase();
                        view! {
                            <button
                                class="locale-tab"
                                class:locale-tab--active=move || locale.get() == loc_for_class
                                title=language_name(&loc).to_string()
                                disabled=move || busy.get()
                                on:click=move |_| switch_locale(loc_for_click.clone())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="form__group">
                <Label>
                    {move || {
                        let loc = locale.get();
                        let required = if loc == default_locale.get_value() { " *" } else { "" };
                        format!("Title ({}){}", language_name(&loc), required)
                    }}
                </Label>
                <Input value=title disabled=busy />
            </div>

            <div class="form__group">
                <Label>"Description"</Label>
                <Textarea value=description attr:rows=3 disabled=busy />
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=auto_translate
                    disabled=busy
                >
                    {icon("globe")}
                    {move || if translating.get() { " Translating..." } else { " Auto-translate" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| modal.close_modal()
                    disabled=Signal::derive(move || saving.get())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=busy
                >
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
    fn test_commit_translation() {
        let mut form = CategoryForm::default();
        commit_translation(&mut form, "en", "en", "Spa".into(), String::new());
        commit_translation(&mut form, "de", "en", "Wellness".into(), "Sauna".into());
        assert_eq!(form.translations["en"].title, "Spa");
        assert_eq!(form.translations["de"].description, "Sauna");

        // clearing a secondary locale drops it, the default one stays
        commit_translation(&mut form, "de", "en", " ".into(), String::new());
        commit_translation(&mut form, "en", "en", String::new(), String::new());
        assert!(!form.translations.contains_key("de"));
        assert!(form.translations.contains_key("en"));
    }

    #[test]
    fn test_translation_for_hidden_locale_goes_to_form() {
        let de = contracts::shared::translation::stub_translation("de").unwrap();
        let mut form = CategoryForm::default();
        form.translation_mut("en").title = "Spa".into();

        assert!(store_translation(&mut form, "de", "de", de));
        assert!(!form.translations.contains_key("de"));

        // user switched to "en" while "de" was being translated
        assert!(!store_translation(&mut form, "de", "en", de));
        assert_eq!(form.translations["de"].title, de.title);
        assert_eq!(form.translations["en"].title, "Spa");
    }
}
