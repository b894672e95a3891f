//! Reactive in-memory store shared by the entity pages.
//!
//! Wraps an [`EntityCollection`] in a signal and exposes async CRUD methods
//! that first wait for a simulated round-trip, then mutate the collection in
//! a single signal update. Several operations may be in flight at once; each
//! one applies against the latest state, so none of them loses another's
//! write.

use contracts::domain::common::{AggregateId, Entity};
use contracts::shared::collection::EntityCollection;
use contracts::shared::error::StoreError;
use leptos::prelude::*;

use super::latency::simulate_latency;

pub struct EntityStore<T>
where
    T: Entity + Send + Sync + 'static,
{
    items: RwSignal<EntityCollection<T>>,
    pending: RwSignal<usize>,
    latency_ms: u32,
}

impl<T> Clone for EntityStore<T>
where
    T: Entity + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EntityStore<T> where T: Entity + Send + Sync + 'static {}

impl<T> EntityStore<T>
where
    T: Entity + Send + Sync + 'static,
{
    pub fn new(seed: Vec<T>, latency_ms: u32) -> Self {
        log::debug!("{} store seeded with {} records", T::collection_name(), seed.len());
        Self {
            items: RwSignal::new(EntityCollection::from_items(seed)),
            pending: RwSignal::new(0),
            latency_ms,
        }
    }

    /// Current records (tracked)
    pub fn all(&self) -> Vec<T> {
        self.items.with(|c| c.items().to_vec())
    }

    /// Records as a derived signal, for `use_filters` and `For`
    pub fn signal(&self) -> Signal<Vec<T>> {
        let items = self.items;
        Signal::derive(move || items.with(|c| c.items().to_vec()))
    }

    pub fn get(&self, id: &T::Id) -> Option<T> {
        self.items.with(|c| c.get(id).cloned())
    }

    pub fn get_untracked(&self, id: &T::Id) -> Option<T> {
        self.items.with_untracked(|c| c.get(id).cloned())
    }

    /// Read the records in place (tracked)
    pub fn with_items<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        self.items.with(|c| f(c.items()))
    }

    /// Read the records without subscribing, e.g. from event handlers
    pub fn with_untracked<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        self.items.with_untracked(|c| f(c.items()))
    }

    pub fn len(&self) -> usize {
        self.items.with(|c| c.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True while at least one simulated request is in flight
    pub fn is_loading(&self) -> bool {
        self.pending.get() > 0
    }

    /// Append a new record; `None` only when the store was disposed mid-request
    pub async fn create(&self, form: T::Form) -> Option<T> {
        self.begin();
        simulate_latency(self.latency_ms).await;
        let created = self.items.try_update(|c| c.create(form));
        self.finish();

        match &created {
            Some(item) => log::debug!("{} created: {}", T::element_name(), item.id().as_string()),
            None => log::warn!("{} store disposed before create", T::collection_name()),
        }
        created
    }

    pub async fn update(&self, id: T::Id, form: T::Form) -> Result<T, StoreError> {
        self.mutate(id, move |item| {
            item.apply_form(form);
            Ok(item.clone())
        })
        .await
    }

    /// Apply `f` to the record with `id` after the simulated round-trip.
    ///
    /// The collection is left untouched when `f` fails.
    pub async fn mutate<R, F>(&self, id: T::Id, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut T) -> Result<R, StoreError>,
    {
        self.begin();
        simulate_latency(self.latency_ms).await;

        let mut result = Err(StoreError::not_found::<T>(&id));
        self.items.update(|c| {
            let mut draft = c.clone();
            result = draft.update_with(&id, f);
            if result.is_ok() {
                *c = draft;
            }
        });
        self.finish();

        match &result {
            Ok(_) => log::debug!("{} updated: {}", T::element_name(), id.as_string()),
            Err(e) => log::error!("{}", e),
        }
        result
    }

    /// Remove the record; an unknown id is a silent no-op
    pub async fn delete(&self, id: T::Id) {
        self.begin();
        simulate_latency(self.latency_ms).await;
        let mut removed = false;
        self.items.update(|c| removed = c.delete(&id).is_some());
        self.finish();

        if removed {
            log::debug!("{} deleted: {}", T::element_name(), id.as_string());
        }
    }

    fn begin(&self) {
        self.pending.update(|n| *n += 1);
    }

    fn finish(&self) {
        self.pending.update(|n| *n = n.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::{Category, CategoryForm, CategoryId};
    use contracts::domain::common::EntityStatus;
    use futures::executor::block_on;

    fn form(slug: &str, status: EntityStatus) -> CategoryForm {
        let mut f = CategoryForm {
            slug: slug.to_string(),
            status,
            ..Default::default()
        };
        f.translation_mut("en").title = slug.to_uppercase();
        f
    }

    fn store() -> EntityStore<Category> {
        let store = EntityStore::new(Vec::new(), 0);
        block_on(async {
            store.create(form("general", EntityStatus::Active)).await;
            store.create(form("vip", EntityStatus::Inactive)).await;
        });
        store
    }

    #[test]
    fn test_create_update_delete() {
        let owner = Owner::new();
        owner.with(|| {
            let store = store();
            assert_eq!(store.len(), 2);

            let created = block_on(store.create(form("spa", EntityStatus::Active))).unwrap();
            assert_eq!(store.len(), 3);
            assert_eq!(store.get(&created.id), Some(created.clone()));

            let before = store.all();
            let updated = block_on(store.update(created.id, form("wellness", EntityStatus::Inactive)))
                .unwrap();
            let after = store.all();
            assert_eq!(updated.slug, "wellness");
            assert_eq!(after[0], before[0]);
            assert_eq!(after[1], before[1]);
            assert_eq!(after[2], updated);

            block_on(store.delete(created.id));
            assert_eq!(store.all(), before[..2].to_vec());
            assert!(!store.is_loading());
        });
    }

    #[test]
    fn test_update_missing_fails_and_delete_missing_is_noop() {
        let owner = Owner::new();
        owner.with(|| {
            let store = store();
            let before = store.all();
            let missing = CategoryId::from_u128(404);

            let err = block_on(store.update(missing, form("x", EntityStatus::Active))).unwrap_err();
            assert!(matches!(err, StoreError::NotFound { entity: "Category", .. }));

            block_on(store.delete(missing));
            assert_eq!(store.all(), before);
        });
    }

    #[test]
    fn test_failed_mutation_leaves_collection_untouched() {
        let owner = Owner::new();
        owner.with(|| {
            let store = store();
            let before = store.all();
            let id = before[0].id;

            let res: Result<(), StoreError> = block_on(store.mutate(id, |c| {
                c.slug = "changed".into();
                Err(StoreError::NotFound {
                    entity: "Post",
                    id: "x".into(),
                })
            }));

            assert!(res.is_err());
            assert_eq!(store.all(), before);
        });
    }
}
