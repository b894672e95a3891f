//! In-memory entity collection: create/update/delete over an ordered `Vec`.

use serde::{Deserialize, Serialize};

use super::error::StoreError;
use crate::domain::common::{AggregateId, Entity};

/// Ordered, in-memory collection of entities.
///
/// - `create` appends a record with a freshly generated id
/// - `update` replaces only the matching record, `NotFound` if absent
/// - `delete` removes the matching record, silent no-op if absent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityCollection<T> {
    items: Vec<T>,
}

impl<T> Default for EntityCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> EntityCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == *id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Append a new record built from `form` and return it.
    pub fn create(&mut self, form: T::Form) -> T {
        let item = T::from_form(T::Id::generate(), form);
        self.insert(item.clone());
        item
    }

    /// Append an already built record
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    /// Apply `form` to the record with `id` and return the updated record.
    pub fn update(&mut self, id: &T::Id, form: T::Form) -> Result<T, StoreError> {
        self.update_with(id, move |item| {
            item.apply_form(form);
            Ok(item.clone())
        })
    }

    /// Run `f` against the record with `id`.
    ///
    /// Used for nested mutations; an error from `f` is returned as is.
    pub fn update_with<R, F>(&mut self, id: &T::Id, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut T) -> Result<R, StoreError>,
    {
        match self.items.iter_mut().find(|item| item.id() == *id) {
            Some(item) => f(item),
            None => Err(StoreError::not_found::<T>(id)),
        }
    }

    /// Remove the record with `id`, returning it if it was present.
    pub fn delete(&mut self, id: &T::Id) -> Option<T> {
        let pos = self.items.iter().position(|item| item.id() == *id)?;
        Some(self.items.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityStatus;
    use crate::uuid_id;

    uuid_id!(NoteId);

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: NoteId,
        title: String,
        status: EntityStatus,
        views: u32,
    }

    #[derive(Debug, Clone)]
    struct NoteForm {
        title: String,
        status: EntityStatus,
    }

    impl Entity for Note {
        type Id = NoteId;
        type Form = NoteForm;

        fn id(&self) -> NoteId {
            self.id
        }

        fn from_form(id: NoteId, form: NoteForm) -> Self {
            Self {
                id,
                title: form.title,
                status: form.status,
                views: 0,
            }
        }

        fn apply_form(&mut self, form: NoteForm) {
            self.title = form.title;
            self.status = form.status;
        }

        fn collection_name() -> &'static str {
            "notes"
        }

        fn element_name() -> &'static str {
            "Note"
        }
    }

    fn form(title: &str) -> NoteForm {
        NoteForm {
            title: title.to_string(),
            status: EntityStatus::Active,
        }
    }

    fn seeded() -> EntityCollection<Note> {
        let mut c = EntityCollection::new();
        for title in ["first", "second", "third"] {
            c.create(form(title));
        }
        c
    }

    #[test]
    fn test_create_appends_one_record() {
        let mut c = seeded();
        let before = c.len();
        let created = c.create(NoteForm {
            title: "fourth".into(),
            status: EntityStatus::Inactive,
        });

        assert_eq!(c.len(), before + 1);
        assert_eq!(created.title, "fourth");
        assert_eq!(created.status, EntityStatus::Inactive);
        assert_eq!(created.views, 0);
        assert_eq!(c.items().last(), Some(&created));
    }

    #[test]
    fn test_update_changes_only_target() {
        let mut c = seeded();
        let second = c.items()[1].id;
        c.update_with(&second, |n| {
            n.views = 7;
            Ok(())
        })
        .unwrap();
        let before = c.items().to_vec();
        let target = before[1].id;

        let updated = c.update(&target, form("renamed")).unwrap();

        assert_eq!(updated.title, "renamed");
        // fields outside the form survive
        assert_eq!(updated.views, 7);
        assert_eq!(c.items()[0], before[0]);
        assert_eq!(c.items()[2], before[2]);
        assert_eq!(c.items()[1], updated);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut c = seeded();
        let before = c.clone();
        let missing = NoteId::from_u128(999);

        let err = c.update(&missing, form("x")).unwrap_err();

        assert_eq!(
            err,
            StoreError::NotFound {
                entity: "Note",
                id: missing.as_string(),
            }
        );
        assert_eq!(c, before);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut c = seeded();
        let target = c.items()[0].id;

        let removed = c.delete(&target);

        assert_eq!(removed.map(|n| n.title), Some("first".to_string()));
        assert_eq!(c.len(), 2);
        assert!(!c.contains(&target));
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut c = seeded();
        let before = c.clone();

        assert!(c.delete(&NoteId::from_u128(999)).is_none());
        assert_eq!(c, before);
    }

    #[test]
    fn test_update_with_propagates_inner_error() {
        let mut c = seeded();
        let target = c.items()[0].id;
        let before = c.clone();

        let res: Result<(), StoreError> =
            c.update_with(&target, |_| Err(StoreError::not_found::<Note>(&target)));

        assert!(res.is_err());
        assert_eq!(c, before);
    }
}
