//! Sidebar navigation between the admin pages

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: &'static [Page],
}

const MENU_GROUPS: &[MenuGroup] = &[
    MenuGroup {
        label: "Dashboard",
        items: &[Page::Overview],
    },
    MenuGroup {
        label: "Content",
        items: &[Page::Categories, Page::Properties],
    },
    MenuGroup {
        label: "Administration",
        items: &[Page::Users],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div class="app-sidebar__content">
            {MENU_GROUPS
                .iter()
                .map(|group| {
                    view! {
                        <div class="app-sidebar__group">
                            <div class="app-sidebar__group-label">{group.label}</div>
                            {group
                                .items
                                .iter()
                                .map(|&page| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.is_active(page)
                                            style:padding-left="12px"
                                            on:click=move |_| ctx.navigate(page)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(page.icon())}
                                                <span>{page.label()}</span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_in_menu_once() {
        for page in Page::ALL {
            let count = MENU_GROUPS
                .iter()
                .flat_map(|g| g.items.iter())
                .filter(|p| **p == page)
                .count();
            assert_eq!(count, 1, "{:?}", page);
        }
    }
}
