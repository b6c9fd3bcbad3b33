// File: src/core/dictionary.rs
use crate::core::types::EntryId;
use crate::error::DictionaryError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// A raw dictionary row, as produced by the ingestion step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryRecord {
    #[serde(default)]
    pub word: String,
    #[serde(rename = "_word_", default)]
    pub underscored: String,
    #[serde(default)]
    pub description: String,
}

/// One headword of the loaded dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Underscore-delimited headword, possibly several syllables.
    pub canonical: String,
    /// The headword with underscores turned into spaces.
    pub display: String,
    /// Undecoded description payload; see [`crate::core::description`].
    pub description: String,
    /// `canonical` wrapped in delimiters on both ends, used for matching.
    delimited: String,
}

impl DictionaryEntry {
    pub fn new(canonical: &str, description: &str) -> Self {
        let canonical: String = canonical.nfc().collect();
        let display = canonical.replace('_', " ").trim().to_string();
        let delimited = format!("_{}_", canonical.trim_matches('_'));
        Self {
            canonical,
            display,
            description: description.nfc().collect(),
            delimited,
        }
    }

    fn from_record(record: DictionaryRecord) -> Option<Self> {
        let canonical = if record.underscored.trim().is_empty() {
            let word = record.word.trim();
            if word.is_empty() {
                return None;
            }
            format!("_{}_", word.split_whitespace().collect::<Vec<_>>().join("_"))
        } else {
            record.underscored.trim().to_string()
        };
        Some(Self::new(&canonical, &record.description))
    }

    /// Whether `syllable` appears as a whole underscore-delimited token.
    pub fn contains_syllable(&self, syllable: &str) -> bool {
        !syllable.is_empty() && self.delimited.contains(&format!("_{syllable}_"))
    }

    /// The space-separated syllables of the headword.
    pub fn syllables(&self) -> impl Iterator<Item = &str> {
        self.display.split(' ').filter(|token| !token.is_empty())
    }
}

/// The process-wide, read-only word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<DictionaryEntry>) -> Self {
        Self { entries }
    }

    /// Builds the dictionary from ingestion records, dropping rows that carry
    /// no headword at all.
    pub fn from_records(records: impl IntoIterator<Item = DictionaryRecord>) -> Self {
        let mut skipped = 0usize;
        let entries = records
            .into_iter()
            .filter_map(|record| {
                let entry = DictionaryEntry::from_record(record);
                if entry.is_none() {
                    skipped += 1;
                }
                entry
            })
            .collect();
        if skipped > 0 {
            tracing::warn!(skipped, "dropped dictionary rows without a headword");
        }
        Self { entries }
    }

    /// Reads records from CSV with a `word,_word_,description` header.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DictionaryError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let records = csv_reader
            .deserialize::<DictionaryRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_records(records))
    }

    /// Reads a JSON array of records.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, DictionaryError> {
        let records: Vec<DictionaryRecord> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(records))
    }

    /// Loads a source file, choosing the format by extension.
    pub fn load_source(path: &Path) -> Result<Self, DictionaryError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let reader = || -> Result<BufReader<File>, DictionaryError> {
            Ok(BufReader::new(File::open(path)?))
        };
        match extension.as_deref() {
            Some("csv") => Self::from_csv_reader(reader()?),
            Some("json") => Self::from_json_reader(reader()?),
            _ => Err(DictionaryError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&DictionaryEntry> {
        self.entries.get(id)
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Ids of every entry containing `syllable` as a delimited token, in
    /// storage order. An empty syllable matches nothing.
    pub fn search(&self, syllable: &str) -> Vec<EntryId> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.contains_syllable(syllable))
            .map(|(id, _)| id)
            .collect()
    }
}

/// Entries of `dictionary` matching `syllable`; see [`Dictionary::search`].
pub fn search<'a>(dictionary: &'a Dictionary, syllable: &str) -> Vec<&'a DictionaryEntry> {
    dictionary
        .search(syllable)
        .into_iter()
        .map(|id| &dictionary.entries[id])
        .collect()
}
