pub mod resolver;
pub mod translation_service;
