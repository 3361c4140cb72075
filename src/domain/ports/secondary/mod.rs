pub mod preference_store;
pub mod translation_loader;
