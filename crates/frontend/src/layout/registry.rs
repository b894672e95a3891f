//! Page registry: the single place mapping a [`Page`] to its view.

use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_hotel::ui::list::HotelList;
use crate::dashboards::OverviewDashboard;
use crate::layout::global_context::Page;
use crate::system::users::ui::list::UsersList;
use leptos::prelude::*;

pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Overview => view! { <OverviewDashboard /> }.into_any(),
        Page::Categories => view! { <CategoryList /> }.into_any(),
        Page::Properties => view! { <HotelList /> }.into_any(),
        Page::Users => view! { <UsersList /> }.into_any(),
    }
}
