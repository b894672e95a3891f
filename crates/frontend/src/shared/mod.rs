pub mod components;
pub mod config;
pub mod date_utils;
pub mod dialogs;
pub mod entity_store;
pub mod filters;
pub mod icons;
pub mod latency;
pub mod list_utils;
pub mod modal;
pub mod modal_controller;
pub mod page_frame;
pub mod page_standard;
pub mod storage;
pub mod translation;
