use thiserror::Error;

use crate::domain::common::{AggregateId, Entity};

/// Ошибки операций над коллекцией сущностей
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Запись с указанным ID отсутствует в коллекции
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl StoreError {
    pub fn not_found<T: Entity>(id: &T::Id) -> Self {
        StoreError::NotFound {
            entity: T::element_name(),
            id: id.as_string(),
        }
    }
}

/// Ошибки заглушки машинного перевода
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("Translation to '{0}' is not supported")]
    UnsupportedLocale(String),
}
