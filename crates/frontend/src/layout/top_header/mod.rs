//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title and the current page.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Hotel CMS"</span>
                <span class="top-header__breadcrumb">
                    {icon("chevron-right")}
                    {move || ctx.active.get().label()}
                </span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    title="Reset layout"
                    on:click=move |_| ctx.reset_layout()
                >
                    {icon("layout-dashboard")}
                </button>
            </div>
        </div>
    }
}
