//! Categories store, seeded with mock data and shared through context.

use contracts::domain::a001_category::aggregate::{
    Category, CategoryId, CategoryKind, CategoryTranslation,
};
use contracts::domain::common::EntityStatus;
use leptos::prelude::*;
use std::collections::BTreeMap;

use crate::shared::entity_store::EntityStore;

pub type CategoryStore = EntityStore<Category>;

fn translations(items: &[(&str, &str, &str)]) -> BTreeMap<String, CategoryTranslation> {
    items
        .iter()
        .map(|(locale, title, description)| {
            (
                locale.to_string(),
                CategoryTranslation {
                    title: title.to_string(),
                    description: description.to_string(),
                },
            )
        })
        .collect()
}

pub fn seed() -> Vec<Category> {
    vec![
        Category {
            id: CategoryId::from_u128(0x1001),
            slug: "general".into(),
            icon: "building".into(),
            status: EntityStatus::Active,
            kind: CategoryKind::System,
            feature_count: 12,
            translations: translations(&[
                ("en", "General", "Basic property facilities"),
                ("de", "Allgemein", "Grundausstattung der Unterkunft"),
            ]),
        },
        Category {
            id: CategoryId::from_u128(0x1002),
            slug: "internet".into(),
            icon: "wifi".into(),
            status: EntityStatus::Active,
            kind: CategoryKind::System,
            feature_count: 4,
            translations: translations(&[("en", "Internet", "Wi-Fi and wired access")]),
        },
        Category {
            id: CategoryId::from_u128(0x1003),
            slug: "food-and-drink".into(),
            icon: "coffee".into(),
            status: EntityStatus::Active,
            kind: CategoryKind::Custom,
            feature_count: 7,
            translations: translations(&[
                ("en", "Food & Drink", "Restaurants, bars and breakfast"),
                ("fr", "Restauration", "Restaurants, bars et petit-déjeuner"),
            ]),
        },
        Category {
            id: CategoryId::from_u128(0x1004),
            slug: "wellness".into(),
            icon: "droplet".into(),
            status: EntityStatus::Active,
            kind: CategoryKind::Custom,
            feature_count: 5,
            translations: translations(&[("en", "Wellness", "Spa, sauna and pool")]),
        },
        Category {
            id: CategoryId::from_u128(0x1005),
            slug: "vip".into(),
            icon: "star".into(),
            status: EntityStatus::Inactive,
            kind: CategoryKind::Custom,
            feature_count: 0,
            translations: translations(&[("en", "VIP", "Premium services")]),
        },
    ]
}

/// Create the store and put it into context
pub fn provide_categories(latency_ms: u32) -> CategoryStore {
    let store = EntityStore::new(seed(), latency_ms);
    provide_context(store);
    store
}

pub fn use_categories() -> CategoryStore {
    expect_context::<CategoryStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Entity;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_unique_and_slugs_valid() {
        let items = seed();
        let ids: HashSet<_> = items.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), items.len());
        for c in &items {
            let form = contracts::domain::a001_category::aggregate::CategoryForm::from_category(c);
            assert!(form.validate("en").is_ok(), "{}", c.slug);
        }
    }

    #[test]
    fn test_use_categories_shares_one_store() {
        let owner = Owner::new();
        owner.with(|| {
            let provided = provide_categories(0);
            let used = use_categories();
            futures::executor::block_on(used.delete(CategoryId::from_u128(0x1005)));
            assert_eq!(provided.len(), 4);
        });
    }
}
