// File: src/core/command.rs
//! Field-overwrite macros typed into the pending buffer and run on commit.

/// Two-character vowel codes accepted by `VOW_` macros.
pub const VOWEL_CODES: [(&str, char); 12] = [
    ("a0", 'a'),
    ("a6", 'â'),
    ("a8", 'ă'),
    ("e0", 'e'),
    ("e6", 'ê'),
    ("i0", 'i'),
    ("o0", 'o'),
    ("o6", 'ô'),
    ("o7", 'ơ'),
    ("u0", 'u'),
    ("u7", 'ư'),
    ("y0", 'y'),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VowelCode {
    Known(char),
    /// A code missing from [`VOWEL_CODES`], kept so it can be shown back.
    Unknown(String),
}

impl VowelCode {
    pub fn parse(code: &str) -> Self {
        VOWEL_CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map_or_else(|| VowelCode::Unknown(code.to_string()), |(_, v)| VowelCode::Known(*v))
    }
}

/// A committed buffer, decoded once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetInitial(String),
    SetNucleus(Vec<VowelCode>),
    SetFinal(String),
    Unrecognized,
}

impl Command {
    /// `PRE_<text>`, `VOW_<code>_<code>...` or `POS_<text>`; anything else is
    /// [`Command::Unrecognized`].
    pub fn parse(buffer: &str) -> Self {
        if let Some(initial) = buffer.strip_prefix("PRE_") {
            Command::SetInitial(initial.to_string())
        } else if let Some(codes) = buffer.strip_prefix("VOW_") {
            Command::SetNucleus(parse_codes(codes))
        } else if let Some(final_) = buffer.strip_prefix("POS_") {
            Command::SetFinal(final_.to_string())
        } else {
            Command::Unrecognized
        }
    }
}

fn parse_codes(raw: &str) -> Vec<VowelCode> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split('_')
        .filter(|code| !code.is_empty())
        .map(VowelCode::parse)
        .collect()
}

/// Spells out a code sequence; unknown codes appear as `[code]`.
pub fn nucleus_from_codes(codes: &[VowelCode]) -> String {
    let mut nucleus = String::new();
    for code in codes {
        match code {
            VowelCode::Known(vowel) => nucleus.push(*vowel),
            VowelCode::Unknown(raw) => {
                nucleus.push('[');
                nucleus.push_str(raw);
                nucleus.push(']');
            }
        }
    }
    nucleus
}
