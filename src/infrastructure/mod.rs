pub mod database;
pub mod i18n;
pub mod memory;
