use chrono::Utc;
use contracts::domain::a002_hotel::aggregate::{Hotel, HotelPost};
use leptos::prelude::*;

use crate::domain::a001_category::store::use_categories;
use crate::domain::a002_hotel::store::use_properties;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_relative;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::users::store::use_users;

const RECENT_POSTS: usize = 5;

/// Most recently updated posts across all hotels, newest first
fn recent_posts(hotels: &[Hotel], limit: usize) -> Vec<(String, HotelPost)> {
    let mut posts: Vec<(String, HotelPost)> = hotels
        .iter()
        .flat_map(|h| h.posts.iter().map(move |p| (h.name.clone(), p.clone())))
        .collect();
    posts.sort_by(|a, b| b.1.updated_at.cmp(&a.1.updated_at));
    posts.truncate(limit);
    posts
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let categories = use_categories();
    let properties = use_properties();
    let users = use_users();

    let active_categories = Signal::derive(move || {
        categories.with_items(|items| items.iter().filter(|c| c.status.is_active()).count())
    });
    let total_posts = Signal::derive(move || {
        properties.with_items(|items| items.iter().map(|h| h.posts.len()).sum::<usize>())
    });
    let published_posts = Signal::derive(move || {
        properties.with_items(|items| items.iter().map(Hotel::published_count).sum::<usize>())
    });
    let active_users = Signal::derive(move || {
        users.with_items(|items| items.iter().filter(|u| u.status.is_active()).count())
    });

    let recent = move || {
        let now = Utc::now();
        properties
            .with_items(|items| recent_posts(items, RECENT_POSTS))
            .into_iter()
            .map(|(hotel_name, post)| {
                view! {
                    <li class="recent-posts__item">
                        <span class="recent-posts__title">{post.title.clone()}</span>
                        <span class="recent-posts__hotel">{hotel_name}</span>
                        <span class="recent-posts__date">{format_relative(&post.updated_at, &now)}</span>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Overview"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-card-grid">
                    <StatCard
                        label="Categories"
                        icon_name="tag"
                        value=Signal::derive(move || categories.len())
                        subtitle=Signal::derive(move || Some(format!("{} active", active_categories.get())))
                        on_click=Callback::new(move |_| ctx.navigate(Page::Categories))
                    />
                    <StatCard
                        label="Properties"
                        icon_name="building"
                        value=Signal::derive(move || properties.len())
                        on_click=Callback::new(move |_| ctx.navigate(Page::Properties))
                    />
                    <StatCard
                        label="Posts"
                        icon_name="file-text"
                        value=total_posts
                        subtitle=Signal::derive(move || Some(format!("{} published", published_posts.get())))
                    />
                    <StatCard
                        label="Users"
                        icon_name="users"
                        value=Signal::derive(move || users.len())
                        subtitle=Signal::derive(move || Some(format!("{} active", active_users.get())))
                        on_click=Callback::new(move |_| ctx.navigate(Page::Users))
                    />
                </div>

                <div class="recent-posts">
                    <h2 class="recent-posts__heading">"Recently updated posts"</h2>
                    <ul class="recent-posts__list">{recent}</ul>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_hotel::store::seed;

    #[test]
    fn test_recent_posts_newest_first() {
        let recent = recent_posts(&seed(), 2);
        let titles: Vec<&str> = recent.iter().map(|(_, p)| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Wintersaison 2024", "Renovated suites"]);
        assert_eq!(recent[0].0, "Alpine Lodge");
    }
}
