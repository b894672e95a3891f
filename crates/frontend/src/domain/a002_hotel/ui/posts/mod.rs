//! Posts of one property: list plus an inline editor.

use chrono::Utc;
use contracts::domain::a002_hotel::aggregate::{HotelId, HotelPost, HotelPostForm, PostStatus};
use contracts::shared::translation::language_name;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_hotel::store::use_properties;
use crate::shared::config::use_config;
use crate::shared::date_utils::format_relative;
use crate::shared::dialogs::confirm;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::modal_controller::{use_modal, ModalController};

const EXCERPT_CHARS: usize = 120;

fn post_status_badge(status: PostStatus) -> AnyView {
    match status {
        PostStatus::Published => view! { <span class="badge badge--success">"Published"</span> }.into_any(),
        PostStatus::Draft => view! { <span class="badge badge--warning">"Draft"</span> }.into_any(),
    }
}

/// Dialog listing the posts of the hotel in `modal.data()`
#[component]
pub fn HotelPosts(modal: ModalController<HotelId>) -> impl IntoView {
    let store = use_properties();
    let Some(hotel_id) = modal.data() else {
        return ().into_any();
    };

    let editor = use_modal::<HotelPost>();
    let (error, set_error) = signal::<Option<String>>(None);

    let hotel = Memo::new(move |_| store.get(&hotel_id));
    let title_text = hotel
        .get_untracked()
        .map(|h| format!("Posts: {}", h.name))
        .unwrap_or_else(|| "Posts".to_string());

    let delete_post = move |post: HotelPost| {
        if !confirm(&format!("Delete post '{}'?", post.title)) {
            return;
        }
        set_error.set(None);
        spawn_local(async move {
            if let Err(e) = store.delete_post(hotel_id, post.id).await {
                log::error!("Failed to delete post: {}", e);
                set_error.set(Some(e.to_string()));
            }
        });
    };

    let post_list = move || {
        let now = Utc::now();
        let posts = hotel.get().map(|h| h.posts).unwrap_or_default();
        if posts.is_empty() {
            return view! { <div class="table__empty">"No posts yet"</div> }.into_any();
        }
        view! {
            <div class="post-list">
                {posts
                    .into_iter()
                    .map(|post| {
                        let for_edit = post.clone();
                        let for_delete = post.clone();
                        view! {
                            <div class="post-list__item">
                                <div class="post-list__header">
                                    <span class="post-list__title">{post.title.clone()}</span>
                                    {post_status_badge(post.status)}
                                    <span class="badge badge--neutral">{post.locale.to_uppercase()}</span>
                                    <span class="post-list__date">{format_relative(&post.updated_at, &now)}</span>
                                    <div class="post-list__actions">
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| editor.open_modal(Some(for_edit.clone()))
                                            attr:title="Edit"
                                        >
                                            {icon("edit")}
                                        </Button>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| delete_post(for_delete.clone())
                                            attr:title="Delete"
                                        >
                                            {icon("delete")}
                                        </Button>
                                    </div>
                                </div>
                                <div class="post-list__excerpt">{post.excerpt(EXCERPT_CHARS)}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <Modal title=title_text on_close=modal.close_callback() class="modal--wide">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || {
                if editor.is_open() {
                    view! { <PostEditor hotel_id=hotel_id editor=editor /> }.into_any()
                } else {
                    view! {
                        <div class="post-list__wrapper">
                            <div class="post-list__toolbar">
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| editor.open_modal(None)
                                >
                                    {icon("plus")}
                                    " New post"
                                </Button>
                            </div>
                            {post_list}
                        </div>
                    }
                    .into_any()
                }
            }}
        </Modal>
    }
    .into_any()
}

#[component]
fn PostEditor(hotel_id: HotelId, editor: ModalController<HotelPost>) -> impl IntoView {
    let store = use_properties();
    let config = use_config();

    let existing = editor.data();
    let editing_id = existing.as_ref().map(|p| p.id);
    let initial = existing
        .as_ref()
        .map(HotelPostForm::from_post)
        .unwrap_or_else(|| HotelPostForm {
            locale: config.default_locale.clone(),
            ..Default::default()
        });

    let title = RwSignal::new(initial.title);
    let content = RwSignal::new(initial.content);
    let locale = RwSignal::new(initial.locale);
    let status = RwSignal::new(initial.status.as_str().to_string());

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let form = HotelPostForm {
            title: title.get_untracked(),
            content: content.get_untracked(),
            locale: locale.get_untracked(),
            status: PostStatus::from_str_or_default(&status.get_untracked()),
        };
        if let Err(msg) = form.validate() {
            set_error.set(Some(msg));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = match editing_id {
                Some(post_id) => store.update_post(hotel_id, post_id, form).await,
                None => store.add_post(hotel_id, form).await,
            };
            match result {
                Ok(_) => editor.close_modal(),
                Err(e) => {
                    log::error!("Failed to save post: {}", e);
                    set_error.set(Some(format!("Save failed: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    let disabled = Signal::derive(move || saving.get());

    view! {
        <div class="post-editor">
            <h3 class="post-editor__title">
                {if editing_id.is_some() { "Edit post" } else { "New post" }}
            </h3>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Title *"</Label>
                <Input value=title disabled=disabled />
            </div>

            <div class="form__row">
                <div class="form__group">
                    <Label>"Language"</Label>
                    <Select value=locale>
                        {config
                            .supported_locales
                            .iter()
                            .map(|loc| view! { <option value=loc.clone()>{language_name(loc).to_string()}</option> })
                            .collect_view()}
                    </Select>
                </div>
                <div class="form__group">
                    <Label>"Status"</Label>
                    <Select value=status>
                        <option value="draft">"Draft"</option>
                        <option value="published">"Published"</option>
                    </Select>
                </div>
            </div>

            <div class="form__group">
                <Label>"Content (HTML)"</Label>
                <Textarea value=content attr:rows=8 disabled=disabled />
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| editor.close_modal()
                    disabled=disabled
                >
                    "Back"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=disabled>
                    {icon("save")}
                    {move || if saving.get() { " Saving..." } else { " Save" }}
                </Button>
            </div>
        </div>
    }
}
