use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::common::{Entity, EntityStatus};
use crate::shared::filter::Filterable;
use crate::uuid_id;

// ============================================================================
// ID Type
// ============================================================================

uuid_id!(
    /// Уникальный идентификатор категории
    CategoryId
);

// ============================================================================
// Enums
// ============================================================================

/// Тип категории: системные нельзя удалить из интерфейса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    System,
    #[default]
    Custom,
}

impl CategoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::System => "system",
            CategoryKind::Custom => "custom",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "system" => CategoryKind::System,
            _ => CategoryKind::Custom,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Локализованные title/description категории
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTranslation {
    pub title: String,
    pub description: String,
}

/// Категория характеристик объекта размещения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub slug: String,
    /// Ключ иконки (см. `shared::icons` во frontend)
    pub icon: String,
    pub status: EntityStatus,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    #[serde(rename = "featureCount")]
    pub feature_count: u32,
    /// locale -> перевод
    pub translations: BTreeMap<String, CategoryTranslation>,
}

impl Category {
    /// Заголовок на заданном языке; если он пуст или перевода нет, берётся первый
    /// непустой из остальных, затем slug
    pub fn title(&self, locale: &str) -> &str {
        self.translations
            .get(locale)
            .filter(|t| !t.title.is_empty())
            .or_else(|| self.translations.values().find(|t| !t.title.is_empty()))
            .map(|t| t.title.as_str())
            .unwrap_or(self.slug.as_str())
    }

    pub fn description(&self, locale: &str) -> &str {
        self.translations
            .get(locale)
            .map(|t| t.description.as_str())
            .unwrap_or("")
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }
}

impl Entity for Category {
    type Id = CategoryId;
    type Form = CategoryForm;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn from_form(id: Self::Id, form: Self::Form) -> Self {
        Self {
            id,
            slug: form.slug.trim().to_string(),
            icon: form.icon,
            status: form.status,
            kind: form.kind,
            feature_count: 0,
            translations: form.translations,
        }
    }

    fn apply_form(&mut self, form: Self::Form) {
        self.slug = form.slug.trim().to_string();
        self.icon = form.icon;
        self.status = form.status;
        // системная категория остаётся системной
        if self.kind != CategoryKind::System {
            self.kind = form.kind;
        }
        self.translations = form.translations;
    }

    fn collection_name() -> &'static str {
        "categories"
    }

    fn element_name() -> &'static str {
        "Category"
    }
}

impl Filterable for Category {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.slug.as_str()];
        fields.extend(self.translations.values().map(|t| t.title.as_str()));
        fields
    }

    fn facet_value(&self, facet: &str) -> Option<String> {
        match facet {
            "status" => Some(self.status.as_str().to_string()),
            "kind" | "type" => Some(self.kind.as_str().to_string()),
            _ => None,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Форма создания/редактирования категории
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryForm {
    pub slug: String,
    pub icon: String,
    pub status: EntityStatus,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    pub translations: BTreeMap<String, CategoryTranslation>,
}

impl CategoryForm {
    pub fn from_category(c: &Category) -> Self {
        Self {
            slug: c.slug.clone(),
            icon: c.icon.clone(),
            status: c.status,
            kind: c.kind,
            translations: c.translations.clone(),
        }
    }

    pub fn translation_mut(&mut self, locale: &str) -> &mut CategoryTranslation {
        self.translations.entry(locale.to_string()).or_default()
    }

    /// Проверка обязательных полей формы
    pub fn validate(&self, default_locale: &str) -> Result<(), String> {
        let slug = self.slug.trim();
        if slug.is_empty() {
            return Err("Slug is required".into());
        }
        if !slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err("Slug may contain only lowercase letters, digits, '-' and '_'".into());
        }
        let has_title = self
            .translations
            .get(default_locale)
            .map(|t| !t.title.trim().is_empty())
            .unwrap_or(false);
        if !has_title {
            return Err(format!("Title ({}) is required", default_locale));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::collection::EntityCollection;
    use crate::shared::filter::{apply_filters, FilterCriteria};

    fn form(slug: &str, status: EntityStatus, title: &str) -> CategoryForm {
        let mut f = CategoryForm {
            slug: slug.to_string(),
            icon: "tag".to_string(),
            status,
            kind: CategoryKind::Custom,
            translations: BTreeMap::new(),
        };
        f.translation_mut("en").title = title.to_string();
        f
    }

    #[test]
    fn test_filter_by_status() {
        let mut c = EntityCollection::<Category>::new();
        let general = c.create(form("general", EntityStatus::Active, "General"));
        c.create(form("vip", EntityStatus::Inactive, "VIP"));

        let result = apply_filters(c.items(), &FilterCriteria::new().with_facet("status", "active"));

        assert_eq!(result, vec![general]);
    }

    #[test]
    fn test_search_covers_translated_titles() {
        let mut c = EntityCollection::<Category>::new();
        let mut f = form("pool", EntityStatus::Active, "Pool");
        f.translation_mut("de").title = "Schwimmbad".to_string();
        c.create(f);
        c.create(form("parking", EntityStatus::Active, "Parking"));

        let result = apply_filters(c.items(), &FilterCriteria::new().with_search("schwimm"));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].slug, "pool");
    }

    #[test]
    fn test_update_keeps_feature_count() {
        let mut c = EntityCollection::<Category>::new();
        let created = c.create(form("wifi", EntityStatus::Active, "Wi-Fi"));
        c.update_with(&created.id, |cat| {
            cat.feature_count = 4;
            Ok(())
        })
        .unwrap();

        let updated = c
            .update(&created.id, form("internet", EntityStatus::Inactive, "Internet"))
            .unwrap();

        assert_eq!(updated.slug, "internet");
        assert_eq!(updated.status, EntityStatus::Inactive);
        assert_eq!(updated.feature_count, 4);
    }

    #[test]
    fn test_title_fallback() {
        let mut c = EntityCollection::<Category>::new();
        let cat = c.create(form("spa", EntityStatus::Active, "Spa"));
        assert_eq!(cat.title("en"), "Spa");
        assert_eq!(cat.title("fr"), "Spa");

        let empty = c.create(CategoryForm {
            slug: "bare".into(),
            ..Default::default()
        });
        assert_eq!(empty.title("en"), "bare");

        let mut f = form("sauna", EntityStatus::Active, "Sauna");
        f.translation_mut("de").title = String::new();
        let partial = c.create(f);
        assert_eq!(partial.title("de"), "Sauna");
    }

    #[test]
    fn test_system_kind_survives_update() {
        let mut c = EntityCollection::<Category>::new();
        let mut f = form("general", EntityStatus::Active, "General");
        f.kind = CategoryKind::System;
        let general = c.create(f);

        let updated = c
            .update(&general.id, form("general", EntityStatus::Inactive, "General"))
            .unwrap();
        assert_eq!(updated.kind, CategoryKind::System);
        assert_eq!(updated.status, EntityStatus::Inactive);

        let custom = c.create(form("spa", EntityStatus::Active, "Spa"));
        let mut promote = form("spa", EntityStatus::Active, "Spa");
        promote.kind = CategoryKind::System;
        assert_eq!(c.update(&custom.id, promote).unwrap().kind, CategoryKind::System);
    }

    #[test]
    fn test_validate() {
        assert!(form("general", EntityStatus::Active, "General").validate("en").is_ok());
        assert!(form("", EntityStatus::Active, "General").validate("en").is_err());
        assert!(form("Bad Slug", EntityStatus::Active, "General").validate("en").is_err());
        assert!(form("general", EntityStatus::Active, " ").validate("en").is_err());
    }

    #[test]
    fn test_serde_field_names() {
        let mut c = EntityCollection::<Category>::new();
        let cat = c.create(form("general", EntityStatus::Active, "General"));
        let json = serde_json::to_value(&cat).unwrap();
        assert_eq!(json["type"], "custom");
        assert_eq!(json["status"], "active");
        assert_eq!(json["featureCount"], 0);
    }
}
