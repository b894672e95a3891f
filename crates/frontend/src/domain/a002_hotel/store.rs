//! Properties store plus the nested post operations.

use chrono::{TimeZone, Utc};
use contracts::domain::a002_hotel::aggregate::{
    Hotel, HotelId, HotelPost, HotelPostForm, HotelPostId, PostStatus,
};
use contracts::domain::common::{AggregateId, EntityStatus};
use contracts::shared::error::StoreError;
use leptos::prelude::*;

use crate::shared::entity_store::EntityStore;

pub type PropertyStore = EntityStore<Hotel>;

impl EntityStore<Hotel> {
    /// Append a post to the hotel's list
    pub async fn add_post(
        &self,
        hotel_id: HotelId,
        form: HotelPostForm,
    ) -> Result<HotelPost, StoreError> {
        self.mutate(hotel_id, move |hotel| Ok(hotel.add_post(form))).await
    }

    pub async fn update_post(
        &self,
        hotel_id: HotelId,
        post_id: HotelPostId,
        form: HotelPostForm,
    ) -> Result<HotelPost, StoreError> {
        self.mutate(hotel_id, move |hotel| hotel.update_post(&post_id, form))
            .await
    }

    /// Remove a post; an unknown post id is a no-op, an unknown hotel is an error
    pub async fn delete_post(
        &self,
        hotel_id: HotelId,
        post_id: HotelPostId,
    ) -> Result<(), StoreError> {
        let removed = self
            .mutate(hotel_id, move |hotel| Ok(hotel.remove_post(&post_id)))
            .await?;
        if removed.is_some() {
            log::debug!("Post deleted: {}", post_id.as_string());
        }
        Ok(())
    }
}

fn post(
    id: u128,
    hotel_id: HotelId,
    title: &str,
    content: &str,
    locale: &str,
    status: PostStatus,
    day: u32,
) -> HotelPost {
    HotelPost {
        id: HotelPostId::from_u128(id),
        hotel_id,
        title: title.into(),
        content: content.into(),
        locale: locale.into(),
        status,
        updated_at: Utc
            .with_ymd_and_hms(2024, 5, day, 9, 30, 0)
            .single()
            .unwrap_or_else(Utc::now),
    }
}

pub fn seed() -> Vec<Hotel> {
    let grand = HotelId::from_u128(0x2001);
    let alpine = HotelId::from_u128(0x2002);
    let harbor = HotelId::from_u128(0x2003);

    vec![
        Hotel {
            id: grand,
            name: "Grand Plaza Hotel".into(),
            email: "info@grandplaza.example".into(),
            phone: "+1 555 0100".into(),
            address: "1 Central Square, Springfield".into(),
            website: "https://grandplaza.example".into(),
            status: EntityStatus::Active,
            posts: vec![
                post(
                    0x3001,
                    grand,
                    "Summer terrace is open",
                    "<p>Our <strong>rooftop terrace</strong> welcomes guests every evening.</p>",
                    "en",
                    PostStatus::Published,
                    2,
                ),
                post(
                    0x3002,
                    grand,
                    "Renovated suites",
                    "<p>All suites on floors 8-10 were renovated this spring.</p>",
                    "en",
                    PostStatus::Draft,
                    14,
                ),
            ],
        },
        Hotel {
            id: alpine,
            name: "Alpine Lodge".into(),
            email: "welcome@alpinelodge.example".into(),
            phone: "+41 27 555 01 20".into(),
            address: "Bergstrasse 12, Zermatt".into(),
            website: String::new(),
            status: EntityStatus::Active,
            posts: vec![post(
                0x3003,
                alpine,
                "Wintersaison 2024",
                "<p>Skipass-Pakete ab sofort buchbar.</p>",
                "de",
                PostStatus::Published,
                20,
            )],
        },
        Hotel {
            id: harbor,
            name: "Harbor View Inn".into(),
            email: "stay@harborview.example".into(),
            phone: String::new(),
            address: "Pier 4, Portsmouth".into(),
            website: String::new(),
            status: EntityStatus::Inactive,
            posts: Vec::new(),
        },
    ]
}

pub fn provide_properties(latency_ms: u32) -> PropertyStore {
    let store = EntityStore::new(seed(), latency_ms);
    provide_context(store);
    store
}

pub fn use_properties() -> PropertyStore {
    expect_context::<PropertyStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn post_form(title: &str) -> HotelPostForm {
        HotelPostForm {
            title: title.into(),
            content: "<p>body</p>".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_seed_posts_point_to_owner() {
        for hotel in seed() {
            for p in &hotel.posts {
                assert_eq!(p.hotel_id, hotel.id);
            }
        }
    }

    #[test]
    fn test_post_operations() {
        let owner = Owner::new();
        owner.with(|| {
            let store = EntityStore::new(seed(), 0);
            let hotel_id = HotelId::from_u128(0x2003);

            let created = block_on(store.add_post(hotel_id, post_form("Opening"))).unwrap();
            assert_eq!(created.hotel_id, hotel_id);
            assert_eq!(store.get(&hotel_id).unwrap().posts, vec![created.clone()]);

            let updated =
                block_on(store.update_post(hotel_id, created.id, post_form("Grand opening")))
                    .unwrap();
            assert_eq!(updated.title, "Grand opening");
            assert!(updated.updated_at >= created.updated_at);

            block_on(store.delete_post(hotel_id, created.id)).unwrap();
            assert!(store.get(&hotel_id).unwrap().posts.is_empty());

            // already gone
            block_on(store.delete_post(hotel_id, created.id)).unwrap();
        });
    }

    #[test]
    fn test_post_operations_on_missing_targets() {
        let owner = Owner::new();
        owner.with(|| {
            let store = EntityStore::new(seed(), 0);
            let before = store.all();
            let missing_hotel = HotelId::from_u128(0xdead);

            let err = block_on(store.add_post(missing_hotel, post_form("x"))).unwrap_err();
            assert!(matches!(err, StoreError::NotFound { entity: "Property", .. }));

            let err = block_on(store.update_post(
                HotelId::from_u128(0x2001),
                HotelPostId::from_u128(0xdead),
                post_form("x"),
            ))
            .unwrap_err();
            assert!(matches!(err, StoreError::NotFound { entity: "Post", .. }));

            assert_eq!(store.all(), before);
        });
    }

    #[test]
    fn test_deleting_hotel_drops_its_posts() {
        let owner = Owner::new();
        owner.with(|| {
            let store = EntityStore::new(seed(), 0);
            block_on(store.delete(HotelId::from_u128(0x2001)));
            let posts: usize = store.all().iter().map(|h| h.posts.len()).sum();
            assert_eq!(posts, 1);
        });
    }
}
