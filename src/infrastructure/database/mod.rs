pub mod entities;
pub mod pool;
pub mod preference_repository;
pub mod schema;
