// File: src/persistence.rs
use crate::config::Config;
use crate::core::dictionary::{Dictionary, DictionaryEntry};
use crate::error::DictionaryError;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::NamedTempFile;

/// Bumped whenever the cached layout changes.
pub const CACHE_FORMAT_VERSION: u32 = 2;

/// Identifies the source file a cache was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStamp {
    pub path: PathBuf,
    pub modified: Option<SystemTime>,
    pub len: u64,
}

impl SourceStamp {
    /// Stamps `source` as it is on disk now.
    pub fn of(source: &Path) -> Result<Self, DictionaryError> {
        let metadata = fs::metadata(source)?;
        Ok(Self {
            path: source_key(source),
            modified: metadata.modified().ok(),
            len: metadata.len(),
        })
    }
}

/// The serializable form of a loaded dictionary.
#[derive(Serialize, Deserialize)]
struct CachedDictionary {
    version: u32,
    source: SourceStamp,
    entries: Vec<DictionaryEntry>,
}

/// Writes the dictionary to `path` atomically: the data goes to a temporary
/// file in the same directory, which then replaces `path`.
pub fn save_cache(
    dictionary: &Dictionary,
    source: &SourceStamp,
    path: &Path,
) -> Result<(), DictionaryError> {
    let parent_dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let state = CachedDictionary {
        version: CACHE_FORMAT_VERSION,
        source: source.clone(),
        entries: dictionary.entries().to_vec(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, &state)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn read_cache(path: &Path) -> Result<CachedDictionary, DictionaryError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: CachedDictionary = bincode::deserialize_from(reader)?;
    if state.version != CACHE_FORMAT_VERSION {
        return Err(DictionaryError::CacheVersion {
            found: state.version,
            expected: CACHE_FORMAT_VERSION,
        });
    }
    Ok(state)
}

pub fn load_cache(path: &Path) -> Result<Dictionary, DictionaryError> {
    Ok(Dictionary::from_entries(read_cache(path)?.entries))
}

/// The stamp recorded in the cache at `path`.
pub fn cached_source(path: &Path) -> Result<SourceStamp, DictionaryError> {
    Ok(read_cache(path)?.source)
}

/// Loads the configured dictionary.
///
/// A cache built from this very source (same path, size and modification
/// time) is preferred. Otherwise the source is parsed and the cache
/// rewritten; failing to read or write the cache only costs a log line.
/// With the source file gone, a cache built from that path still serves.
pub fn load_dictionary(config: &Config) -> Result<Dictionary, DictionaryError> {
    let source = config.dictionary_path.as_path();
    let stamp = SourceStamp::of(source).ok();

    if let Some(cache) = config.cache_path() {
        match read_cache(cache) {
            Ok(state) if cache_matches(&state.source, stamp.as_ref(), source) => {
                let dictionary = Dictionary::from_entries(state.entries);
                tracing::info!(path = %cache.display(), entries = dictionary.len(), "loaded dictionary cache");
                return Ok(dictionary);
            }
            Ok(state) => {
                tracing::info!(
                    path = %cache.display(),
                    built_from = %state.source.path.display(),
                    "dictionary cache is stale"
                );
            }
            Err(DictionaryError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(path = %cache.display(), %err, "ignoring dictionary cache");
            }
        }
    }

    let dictionary = Dictionary::load_source(source)?;
    tracing::info!(path = %source.display(), entries = dictionary.len(), "loaded dictionary");

    if let (Some(cache), Some(stamp)) = (config.cache_path(), stamp) {
        match save_cache(&dictionary, &stamp, cache) {
            Ok(()) => tracing::info!(path = %cache.display(), "wrote dictionary cache"),
            Err(err) => tracing::warn!(path = %cache.display(), %err, "could not write dictionary cache"),
        }
    }
    Ok(dictionary)
}

fn cache_matches(cached: &SourceStamp, current: Option<&SourceStamp>, source: &Path) -> bool {
    match current {
        Some(current) => cached == current,
        None => cached.path == source_key(source),
    }
}

/// Canonical form of `source`; for a missing file, its canonical directory
/// joined with the file name.
fn source_key(source: &Path) -> PathBuf {
    if let Ok(path) = fs::canonicalize(source) {
        return path;
    }
    let parent = source
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    match (fs::canonicalize(parent), source.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => source.to_path_buf(),
    }
}
