//! Application shell - root layout of the admin UI (Shell + Sidebar + active page).

use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <Shell left=|| view! { <Sidebar /> }.into_any() />
    }
}
