use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateId, Entity, EntityStatus};
use crate::shared::error::StoreError;
use crate::shared::filter::Filterable;
use crate::uuid_id;

// ============================================================================
// ID Types
// ============================================================================

uuid_id!(
    /// Уникальный идентификатор объекта размещения (отеля)
    HotelId
);

uuid_id!(
    /// Уникальный идентификатор публикации отеля
    HotelPostId
);

// ============================================================================
// Posts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "published" => PostStatus::Published,
            _ => PostStatus::Draft,
        }
    }
}

/// Публикация (новость, описание, акция) объекта размещения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelPost {
    pub id: HotelPostId,
    /// Обратная ссылка на отель-владельца
    #[serde(rename = "hotelId")]
    pub hotel_id: HotelId,
    pub title: String,
    /// HTML-содержимое из редактора
    pub content: String,
    pub locale: String,
    pub status: PostStatus,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl HotelPost {
    pub fn from_form(id: HotelPostId, hotel_id: HotelId, form: HotelPostForm) -> Self {
        Self {
            id,
            hotel_id,
            title: form.title,
            content: form.content,
            locale: form.locale,
            status: form.status,
            updated_at: Utc::now(),
        }
    }

    pub fn apply_form(&mut self, form: HotelPostForm) {
        self.title = form.title;
        self.content = form.content;
        self.locale = form.locale;
        self.status = form.status;
        self.updated_at = Utc::now();
    }

    /// Текст без HTML-разметки, обрезанный до `max_chars` символов
    pub fn excerpt(&self, max_chars: usize) -> String {
        let text = strip_tags(&self.content);
        if text.chars().count() <= max_chars {
            return text;
        }
        let mut cut: String = text.chars().take(max_chars).collect();
        cut.push('…');
        cut
    }
}

fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Форма создания/редактирования публикации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelPostForm {
    pub title: String,
    pub content: String,
    pub locale: String,
    pub status: PostStatus,
}

impl Default for HotelPostForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            locale: "en".to_string(),
            status: PostStatus::Draft,
        }
    }
}

impl HotelPostForm {
    pub fn from_post(p: &HotelPost) -> Self {
        Self {
            title: p.title.clone(),
            content: p.content.clone(),
            locale: p.locale.clone(),
            status: p.status,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Post title is required".into());
        }
        if self.locale.trim().is_empty() {
            return Err("Post language is required".into());
        }
        Ok(())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Объект размещения (отель) с упорядоченным списком публикаций
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub website: String,
    pub status: EntityStatus,
    pub posts: Vec<HotelPost>,
}

impl Hotel {
    pub fn post(&self, post_id: &HotelPostId) -> Option<&HotelPost> {
        self.posts.iter().find(|p| p.id == *post_id)
    }

    pub fn add_post(&mut self, form: HotelPostForm) -> HotelPost {
        let post = HotelPost::from_form(HotelPostId::generate(), self.id, form);
        self.posts.push(post.clone());
        post
    }

    pub fn update_post(
        &mut self,
        post_id: &HotelPostId,
        form: HotelPostForm,
    ) -> Result<HotelPost, StoreError> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == *post_id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "Post",
                id: post_id.as_string(),
            })?;
        post.apply_form(form);
        Ok(post.clone())
    }

    pub fn remove_post(&mut self, post_id: &HotelPostId) -> Option<HotelPost> {
        let pos = self.posts.iter().position(|p| p.id == *post_id)?;
        Some(self.posts.remove(pos))
    }

    pub fn published_count(&self) -> usize {
        self.posts
            .iter()
            .filter(|p| p.status == PostStatus::Published)
            .count()
    }
}

impl Entity for Hotel {
    type Id = HotelId;
    type Form = HotelForm;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn from_form(id: Self::Id, form: Self::Form) -> Self {
        Self {
            id,
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone,
            address: form.address,
            website: form.website,
            status: form.status,
            posts: Vec::new(),
        }
    }

    fn apply_form(&mut self, form: Self::Form) {
        self.name = form.name.trim().to_string();
        self.email = form.email.trim().to_string();
        self.phone = form.phone;
        self.address = form.address;
        self.website = form.website;
        self.status = form.status;
    }

    fn collection_name() -> &'static str {
        "properties"
    }

    fn element_name() -> &'static str {
        "Property"
    }
}

impl Filterable for Hotel {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.address.as_str()]
    }

    fn facet_value(&self, facet: &str) -> Option<String> {
        match facet {
            "status" => Some(self.status.as_str().to_string()),
            _ => None,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Форма создания/редактирования объекта размещения
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotelForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub website: String,
    pub status: EntityStatus,
}

impl HotelForm {
    pub fn from_hotel(h: &Hotel) -> Self {
        Self {
            name: h.name.clone(),
            email: h.email.clone(),
            phone: h.phone.clone(),
            address: h.address.clone(),
            website: h.website.clone(),
            status: h.status,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Property name is required".into());
        }
        let email = self.email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err("Email address is not valid".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::collection::EntityCollection;

    fn hotel_form(name: &str) -> HotelForm {
        HotelForm {
            name: name.to_string(),
            email: "info@example.com".to_string(),
            ..Default::default()
        }
    }

    fn post_form(title: &str, status: PostStatus) -> HotelPostForm {
        HotelPostForm {
            title: title.to_string(),
            content: "<p>Hello <b>world</b></p>".to_string(),
            status,
            ..Default::default()
        }
    }

    #[test]
    fn test_posts_keep_order_and_back_reference() {
        let mut c = EntityCollection::<Hotel>::new();
        let hotel = c.create(hotel_form("Grand"));

        let first = c
            .update_with(&hotel.id, |h| Ok(h.add_post(post_form("one", PostStatus::Draft))))
            .unwrap();
        let second = c
            .update_with(&hotel.id, |h| Ok(h.add_post(post_form("two", PostStatus::Published))))
            .unwrap();

        let stored = c.get(&hotel.id).unwrap();
        assert_eq!(stored.posts, vec![first.clone(), second]);
        assert_eq!(first.hotel_id, hotel.id);
        assert_eq!(stored.published_count(), 1);
    }

    #[test]
    fn test_update_post_missing_is_not_found() {
        let mut c = EntityCollection::<Hotel>::new();
        let hotel = c.create(hotel_form("Grand"));
        let missing = HotelPostId::from_u128(5);

        let err = c
            .update_with(&hotel.id, |h| h.update_post(&missing, post_form("x", PostStatus::Draft)))
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::NotFound {
                entity: "Post",
                id: missing.as_string(),
            }
        );
    }

    #[test]
    fn test_update_hotel_keeps_posts() {
        let mut c = EntityCollection::<Hotel>::new();
        let hotel = c.create(hotel_form("Grand"));
        c.update_with(&hotel.id, |h| Ok(h.add_post(post_form("one", PostStatus::Draft))))
            .unwrap();

        let updated = c.update(&hotel.id, hotel_form("Grand Palace")).unwrap();

        assert_eq!(updated.name, "Grand Palace");
        assert_eq!(updated.posts.len(), 1);
    }

    #[test]
    fn test_delete_hotel_drops_posts() {
        let mut c = EntityCollection::<Hotel>::new();
        let hotel = c.create(hotel_form("Grand"));
        c.update_with(&hotel.id, |h| Ok(h.add_post(post_form("one", PostStatus::Draft))))
            .unwrap();

        let removed = c.delete(&hotel.id).unwrap();

        assert_eq!(removed.posts.len(), 1);
        assert!(c.is_empty());
    }

    #[test]
    fn test_remove_post_missing_is_noop() {
        let mut c = EntityCollection::<Hotel>::new();
        let hotel = c.create(hotel_form("Grand"));

        let removed = c
            .update_with(&hotel.id, |h| Ok(h.remove_post(&HotelPostId::from_u128(1))))
            .unwrap();

        assert!(removed.is_none());
    }

    #[test]
    fn test_excerpt_strips_html() {
        let mut c = EntityCollection::<Hotel>::new();
        let hotel = c.create(hotel_form("Grand"));
        let post = c
            .update_with(&hotel.id, |h| Ok(h.add_post(post_form("one", PostStatus::Draft))))
            .unwrap();

        assert_eq!(post.excerpt(100), "Hello world");
        assert_eq!(post.excerpt(5), "Hello…");
    }

    #[test]
    fn test_validate() {
        assert!(hotel_form("Grand").validate().is_ok());
        assert!(hotel_form("  ").validate().is_err());
        let mut f = hotel_form("Grand");
        f.email = "nope".into();
        assert!(f.validate().is_err());
        assert!(post_form("", PostStatus::Draft).validate().is_err());
    }
}
