use diesel_migrations::{EmbeddedMigrations, embed_migrations};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");
pub const DEFAULT_DATABASE_URL: &str = "app.db";
pub const DATABASE_URL_ENV: &str = "ATELIER_DATABASE_URL";
pub const TRANSLATIONS_DIR_ENV: &str = "ATELIER_TRANSLATIONS_DIR";
/// Settings key holding the chosen language code.
pub const LANGUAGE_SETTING_KEY: &str = "language";
