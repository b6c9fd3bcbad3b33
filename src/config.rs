// File: src/config.rs
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "viet-syllable";

/// Session configuration.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```toml
/// dictionary_path = "data/tu_dien_tieng_viet.csv"
/// final_consonant_probability = 0.3
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Dictionary source (`.csv` or `.json`).
    pub dictionary_path: PathBuf,
    /// Binary cache of the parsed dictionary. `None` or an empty path
    /// disables caching.
    pub cache_path: Option<PathBuf>,
    /// Chance that the full randomizer adds a final consonant.
    pub final_consonant_probability: f64,
    /// Language tag handed to the speech program through `{lang}`.
    pub speech_language: String,
    /// External program (and leading arguments) that vocalizes text; the text
    /// is appended as the last argument and `{lang}` in an argument becomes
    /// `speech_language`. Empty means speech is only reported.
    pub speech_command: Vec<String>,
    pub log_path: PathBuf,
    /// Default filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// How many results the terminal front end lists at once.
    pub max_results_shown: usize,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            dictionary_path: data_dir.join("tu_dien_tieng_viet.csv"),
            cache_path: Some(data_dir.join("dictionary.bin")),
            final_consonant_probability: 0.5,
            speech_language: "vi-VN".to_string(),
            speech_command: Vec::new(),
            log_path: PathBuf::from("target").join("viet_syllable.log"),
            log_level: "info".to_string(),
            max_results_shown: 12,
        }
    }
}

/// `<local data dir>/viet-syllable`, or the working directory when the
/// platform has no data directory.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_toml(path),
            None => Ok(Self::default()),
        }
    }

    pub fn cache_path(&self) -> Option<&Path> {
        self.cache_path
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
