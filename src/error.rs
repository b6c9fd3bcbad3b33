// src/error.rs
use std::path::PathBuf;

/// Failure to obtain dictionary records. The engine never surfaces these to
/// the user; a failed load leaves the dictionary empty.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed csv record: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed json records: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unreadable dictionary cache: {0}")]
    Cache(#[from] bincode::Error),
    #[error("dictionary cache format {found} does not match expected format {expected}")]
    CacheVersion { found: u32, expected: u32 },
    #[error("unsupported dictionary source: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Syntax error in a description payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("description payload: expected {expected} at byte {offset}")]
pub struct DescriptionError {
    pub offset: usize,
    pub expected: &'static str,
}
