use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::common::{Entity, EntityStatus};
use crate::shared::filter::Filterable;
use crate::uuid_id;

uuid_id!(
    /// Уникальный идентификатор пользователя админки
    UserId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Owner,
    Admin,
    Editor,
    #[default]
    Viewer,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Owner,
        UserRole::Admin,
        UserRole::Editor,
        UserRole::Viewer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Owner => "owner",
            UserRole::Admin => "admin",
            UserRole::Editor => "editor",
            UserRole::Viewer => "viewer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Owner => "Owner",
            UserRole::Admin => "Admin",
            UserRole::Editor => "Editor",
            UserRole::Viewer => "Viewer",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "owner" => UserRole::Owner,
            "admin" => UserRole::Admin,
            "editor" => UserRole::Editor,
            _ => UserRole::Viewer,
        }
    }
}

/// Раздел админки, на который выдаётся право редактирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Categories,
    Features,
    Properties,
    Posts,
    Media,
    Users,
    Analytics,
    Settings,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Categories,
        Section::Features,
        Section::Properties,
        Section::Posts,
        Section::Media,
        Section::Users,
        Section::Analytics,
        Section::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Categories => "Categories",
            Section::Features => "Features",
            Section::Properties => "Properties",
            Section::Posts => "Posts",
            Section::Media => "Media",
            Section::Users => "Users",
            Section::Analytics => "Analytics",
            Section::Settings => "Settings",
        }
    }
}

/// Права редактора по разделам (для остальных ролей не используются)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permissions(pub BTreeMap<Section, bool>);

impl Permissions {
    /// Контентные разделы открыты, административные закрыты
    pub fn editor_default() -> Self {
        Self(
            Section::ALL
                .iter()
                .map(|s| {
                    let allowed = !matches!(
                        s,
                        Section::Users | Section::Analytics | Section::Settings
                    );
                    (*s, allowed)
                })
                .collect(),
        )
    }

    pub fn allows(&self, section: Section) -> bool {
        self.0.get(&section).copied().unwrap_or(false)
    }

    pub fn set(&mut self, section: Section, allowed: bool) {
        self.0.insert(section, allowed);
    }

    pub fn granted_count(&self) -> usize {
        self.0.values().filter(|v| **v).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: EntityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
}

impl User {
    /// Может ли пользователь редактировать раздел
    pub fn can_edit(&self, section: Section) -> bool {
        if !self.status.is_active() {
            return false;
        }
        match self.role {
            UserRole::Owner | UserRole::Admin => true,
            UserRole::Viewer => false,
            UserRole::Editor => self
                .permissions
                .as_ref()
                .map(|p| p.allows(section))
                .unwrap_or(false),
        }
    }

    pub fn is_active_owner(&self) -> bool {
        self.role == UserRole::Owner && self.status.is_active()
    }

    /// Инициалы для аватара
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Единственный активный владелец в списке
pub fn is_last_active_owner(users: &[User], user: &User) -> bool {
    user.is_active_owner() && users.iter().filter(|u| u.is_active_owner()).count() == 1
}

/// Сохранение формы лишит систему последнего активного владельца
pub fn drops_last_owner(users: &[User], user: &User, form: &UserForm) -> bool {
    let stays_owner = form.role == UserRole::Owner && form.status.is_active();
    is_last_active_owner(users, user) && !stays_owner
}

impl Entity for User {
    type Id = UserId;
    type Form = UserForm;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn from_form(id: Self::Id, form: Self::Form) -> Self {
        let form = form.normalize();
        Self {
            id,
            name: form.name,
            email: form.email,
            role: form.role,
            status: form.status,
            permissions: form.permissions,
        }
    }

    fn apply_form(&mut self, form: Self::Form) {
        let form = form.normalize();
        self.name = form.name;
        self.email = form.email;
        self.role = form.role;
        self.status = form.status;
        self.permissions = form.permissions;
    }

    fn collection_name() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "User"
    }
}

impl Filterable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn facet_value(&self, facet: &str) -> Option<String> {
        match facet {
            "role" => Some(self.role.as_str().to_string()),
            "status" => Some(self.status.as_str().to_string()),
            _ => None,
        }
    }
}

/// Форма создания/редактирования пользователя
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: EntityStatus,
    pub permissions: Option<Permissions>,
}

impl UserForm {
    pub fn from_user(u: &User) -> Self {
        Self {
            name: u.name.clone(),
            email: u.email.clone(),
            role: u.role,
            status: u.status,
            permissions: u.permissions.clone(),
        }
    }

    /// Права хранятся только у редакторов; редактор без прав получает набор по умолчанию
    pub fn normalize(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_lowercase();
        self.permissions = match self.role {
            UserRole::Editor => Some(self.permissions.unwrap_or_else(Permissions::editor_default)),
            _ => None,
        };
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required".into());
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
            _ => Err("Email address is not valid".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::collection::EntityCollection;
    use crate::shared::filter::{apply_filters, FilterCriteria};

    fn form(name: &str, role: UserRole) -> UserForm {
        UserForm {
            name: name.to_string(),
            email: format!("{}@hotel.test", name.to_lowercase().replace(' ', ".")),
            role,
            status: EntityStatus::Active,
            permissions: None,
        }
    }

    #[test]
    fn test_role_rules() {
        let mut c = EntityCollection::<User>::new();
        let owner = c.create(form("Olga Owner", UserRole::Owner));
        let viewer = c.create(form("Victor Viewer", UserRole::Viewer));
        let editor = c.create(form("Emma Editor", UserRole::Editor));

        assert!(owner.can_edit(Section::Settings));
        assert!(!viewer.can_edit(Section::Posts));
        assert!(editor.can_edit(Section::Posts));
        assert!(!editor.can_edit(Section::Users));
    }

    #[test]
    fn test_permissions_only_for_editors() {
        let mut f = form("Alex Admin", UserRole::Admin);
        f.permissions = Some(Permissions::editor_default());
        assert_eq!(f.normalize().permissions, None);

        let editor = form("Emma Editor", UserRole::Editor).normalize();
        assert_eq!(editor.permissions, Some(Permissions::editor_default()));
    }

    #[test]
    fn test_demoting_editor_drops_permissions() {
        let mut c = EntityCollection::<User>::new();
        let mut f = form("Emma Editor", UserRole::Editor);
        let mut perms = Permissions::default();
        perms.set(Section::Media, true);
        f.permissions = Some(perms);
        let editor = c.create(f);
        assert!(editor.can_edit(Section::Media));
        assert!(!editor.can_edit(Section::Posts));

        let updated = c.update(&editor.id, form("Emma Editor", UserRole::Viewer)).unwrap();
        assert_eq!(updated.permissions, None);
    }

    #[test]
    fn test_inactive_user_cannot_edit() {
        let mut f = form("Olga Owner", UserRole::Owner);
        f.status = EntityStatus::Inactive;
        let mut c = EntityCollection::<User>::new();
        let user = c.create(f);
        assert!(!user.can_edit(Section::Categories));
    }

    #[test]
    fn test_filter_by_role_and_search() {
        let mut c = EntityCollection::<User>::new();
        c.create(form("Olga Owner", UserRole::Owner));
        let emma = c.create(form("Emma Editor", UserRole::Editor));
        c.create(form("Eddie Editor", UserRole::Editor));

        let criteria = FilterCriteria::new().with_search("EMMA").with_facet("role", "editor");
        assert_eq!(apply_filters(c.items(), &criteria), vec![emma]);
    }

    #[test]
    fn test_last_active_owner_guard() {
        let mut c = EntityCollection::<User>::new();
        let olga = c.create(form("Olga Owner", UserRole::Owner));
        let alex = c.create(form("Alex Admin", UserRole::Admin));
        assert!(is_last_active_owner(c.items(), &olga));
        assert!(!is_last_active_owner(c.items(), &alex));

        let demoted = form("Olga Owner", UserRole::Admin);
        assert!(drops_last_owner(c.items(), &olga, &demoted));
        let mut deactivated = form("Olga Owner", UserRole::Owner);
        deactivated.status = EntityStatus::Inactive;
        assert!(drops_last_owner(c.items(), &olga, &deactivated));
        assert!(!drops_last_owner(c.items(), &olga, &form("Olga O.", UserRole::Owner)));

        let oscar = c.create(form("Oscar Owner", UserRole::Owner));
        assert!(!is_last_active_owner(c.items(), &olga));
        assert!(!drops_last_owner(c.items(), &oscar, &demoted));
    }

    #[test]
    fn test_validate_and_initials() {
        assert!(form("Olga Owner", UserRole::Owner).validate().is_ok());
        let mut f = form("Olga Owner", UserRole::Owner);
        f.email = "olga".into();
        assert!(f.validate().is_err());

        let mut c = EntityCollection::<User>::new();
        assert_eq!(c.create(form("olga owner", UserRole::Owner)).initials(), "OO");
    }
}
