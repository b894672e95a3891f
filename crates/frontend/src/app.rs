use crate::app_shell::AppShell;
use crate::domain::a001_category::store::provide_categories;
use crate::domain::a002_hotel::store::provide_properties;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AppConfig;
use crate::system::users::store::provide_users;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();

    // Stores are created once and shared by every page through context.
    provide_categories(config.latency_ms);
    provide_properties(config.latency_ms);
    provide_users(config.latency_ms);

    provide_context(config);
    provide_context(AppGlobalContext::restore());

    view! {
        <AppShell />
    }
}
