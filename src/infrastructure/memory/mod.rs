pub mod memory_preference_store;
