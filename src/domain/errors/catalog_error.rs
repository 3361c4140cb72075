use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid translation JSON for '{language}': {source}")]
    Json {
        language: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Cannot read translation file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Translation catalog has no tree for the fallback language '{0}'")]
    MissingFallback(&'static str),
    #[error("Translation value at '{path}' is null")]
    NullValue { path: String },
}
