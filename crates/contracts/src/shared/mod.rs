pub mod collection;
pub mod error;
pub mod filter;
pub mod translation;
