//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod aggregate_root;
pub mod entity_status;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::Entity;
pub use entity_status::EntityStatus;
