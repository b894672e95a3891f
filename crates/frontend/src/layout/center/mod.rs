use crate::layout::global_context::AppGlobalContext;
use crate::layout::registry::render_page;
use leptos::prelude::*;

/// Center zone: renders the active page
#[component]
pub fn Center() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div data-zone="center" class="app-main__content" style="flex: 1; overflow: auto;">
            {move || render_page(ctx.active.get())}
        </div>
    }
}
