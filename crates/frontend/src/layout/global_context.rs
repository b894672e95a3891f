use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::storage;

const UI_PREFS_KEY: &str = "cms_admin_ui";

/// Top-level page shown in the center zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Overview,
    Categories,
    Properties,
    Users,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Overview, Page::Categories, Page::Properties, Page::Users];

    pub fn key(&self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::Categories => "a001_category",
            Page::Properties => "a002_hotel",
            Page::Users => "sys_users",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Categories => "Categories",
            Page::Properties => "Properties",
            Page::Users => "Users",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Overview => "layout-dashboard",
            Page::Categories => "tag",
            Page::Properties => "building",
            Page::Users => "users",
        }
    }
}

/// Layout state remembered between visits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct UiPrefs {
    left_open: bool,
    active: Page,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self {
            left_open: true,
            active: Page::Overview,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self::from_prefs(UiPrefs::default())
    }

    /// Restore layout from `localStorage` and keep it saved on change
    pub fn restore() -> Self {
        let prefs = storage::load_json::<UiPrefs>(UI_PREFS_KEY).unwrap_or_default();
        let ctx = Self::from_prefs(prefs);

        Effect::new(move |_| {
            let prefs = UiPrefs {
                left_open: ctx.left_open.get(),
                active: ctx.active.get(),
            };
            storage::save_json(UI_PREFS_KEY, &prefs);
        });
        ctx
    }

    fn from_prefs(prefs: UiPrefs) -> Self {
        Self {
            active: RwSignal::new(prefs.active),
            left_open: RwSignal::new(prefs.left_open),
        }
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: {}", page.key());
        self.active.set(page);
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.active.get() == page
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    /// Forget remembered layout and return to defaults
    pub fn reset_layout(&self) {
        storage::remove(UI_PREFS_KEY);
        let defaults = UiPrefs::default();
        self.left_open.set(defaults.left_open);
        self.active.set(defaults.active);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefs_partial_json() {
        let prefs: UiPrefs = serde_json::from_str(r#"{"active":"users"}"#).unwrap();
        assert_eq!(prefs.active, Page::Users);
        assert!(prefs.left_open);
    }

    #[test]
    fn test_navigate_and_toggle() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            assert!(ctx.is_active(Page::Overview));

            ctx.navigate(Page::Properties);
            assert!(ctx.is_active(Page::Properties));

            ctx.toggle_left();
            assert!(!ctx.left_open.get());
        });
    }
}
