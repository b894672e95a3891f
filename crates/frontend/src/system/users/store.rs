//! Admin users store.

use contracts::domain::common::EntityStatus;
use contracts::system::users::{Permissions, Section, User, UserId, UserRole};
use leptos::prelude::*;

use crate::shared::entity_store::EntityStore;

pub type UserStore = EntityStore<User>;

pub fn seed() -> Vec<User> {
    let mut editor_media = Permissions::editor_default();
    editor_media.set(Section::Media, false);

    vec![
        User {
            id: UserId::from_u128(0x4001),
            name: "Anna Keller".into(),
            email: "anna@hotelcms.example".into(),
            role: UserRole::Owner,
            status: EntityStatus::Active,
            permissions: None,
        },
        User {
            id: UserId::from_u128(0x4002),
            name: "Marc Dubois".into(),
            email: "marc@hotelcms.example".into(),
            role: UserRole::Admin,
            status: EntityStatus::Active,
            permissions: None,
        },
        User {
            id: UserId::from_u128(0x4003),
            name: "Sofia Rossi".into(),
            email: "sofia@hotelcms.example".into(),
            role: UserRole::Editor,
            status: EntityStatus::Active,
            permissions: Some(editor_media),
        },
        User {
            id: UserId::from_u128(0x4004),
            name: "Tom Baker".into(),
            email: "tom@hotelcms.example".into(),
            role: UserRole::Viewer,
            status: EntityStatus::Inactive,
            permissions: None,
        },
    ]
}

pub fn provide_users(latency_ms: u32) -> UserStore {
    let store = EntityStore::new(seed(), latency_ms);
    provide_context(store);
    store
}

pub fn use_users() -> UserStore {
    expect_context::<UserStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::users::UserForm;

    #[test]
    fn test_seed_is_normalized() {
        for user in seed() {
            let form = UserForm::from_user(&user);
            assert!(form.validate().is_ok(), "{}", user.email);
            assert_eq!(form.clone().normalize(), form, "{}", user.email);
        }
    }

    #[test]
    fn test_seed_editor_rights() {
        let users = seed();
        let editor = users.iter().find(|u| u.role == UserRole::Editor).unwrap();
        assert!(editor.can_edit(Section::Posts));
        assert!(!editor.can_edit(Section::Media));
        assert!(!editor.can_edit(Section::Users));
    }
}
