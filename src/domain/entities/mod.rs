pub mod catalog;
pub mod event_status;
pub mod language;
pub mod translation;
