// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Index of an entry inside a loaded [`Dictionary`](crate::core::dictionary::Dictionary).
pub type EntryId = usize;

/// The six Vietnamese tone categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Ngang,
    Sac,
    Huyen,
    Hoi,
    Nga,
    Nang,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Ngang,
        Tone::Sac,
        Tone::Huyen,
        Tone::Hoi,
        Tone::Nga,
        Tone::Nang,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Ngang => "ngang",
            Tone::Sac => "sac",
            Tone::Huyen => "huyen",
            Tone::Hoi => "hoi",
            Tone::Nga => "nga",
            Tone::Nang => "nang",
        }
    }

    /// Column of this tone in the tone table.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tone '{0}'")]
pub struct UnknownTone(pub String);

impl FromStr for Tone {
    type Err = UnknownTone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str() == s)
            .ok_or_else(|| UnknownTone(s.to_string()))
    }
}

/// The editable parts of a syllable. The nucleus is always stored bare
/// (without a tone mark); the tone is kept separately.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SyllableFields {
    pub initial: String,
    pub nucleus: String,
    pub tone: Tone,
    #[serde(rename = "final")]
    pub final_: String,
}

impl SyllableFields {
    pub fn new(initial: &str, nucleus: &str, tone: Tone, final_: &str) -> Self {
        Self {
            initial: initial.to_string(),
            nucleus: nucleus.to_string(),
            tone,
            final_: final_.to_string(),
        }
    }
}
