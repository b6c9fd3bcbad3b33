// File: src/core/machine.rs
//! Keystroke interpretation: selection navigation, randomization, and
//! macro accumulation and commit.
//!
//! The machine is a transition function over an explicit [`InputState`]; the
//! dictionary and random source are passed in, so every transition can be
//! replayed deterministically with a seeded generator.

use crate::core::command::{nucleus_from_codes, Command};
use crate::core::composer::compose;
use crate::core::decomposer::decompose;
use crate::core::dictionary::Dictionary;
use crate::core::inventory::{FINALS, INITIALS, NUCLEI};
use crate::core::types::{EntryId, SyllableFields, Tone};
use rand::seq::SliceRandom;
use rand::Rng;

pub const RANDOM_SYLLABLE_KEY: char = '\\';
pub const RANDOM_WORD_KEY: char = '/';
pub const COMMIT_KEY: char = '@';

/// A key press, named the way host UIs report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Char(char),
    Other(String),
}

impl Key {
    /// `"ArrowUp"`, `"ArrowDown"`, `"ArrowLeft"`, `"ArrowRight"`, or a single
    /// character. Anything else is [`Key::Other`].
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => {
                let mut chars = symbol.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Key::Char(ch),
                    _ => Key::Other(symbol.to_string()),
                }
            }
        }
    }

    /// Keys the host must not act on itself.
    pub fn is_reserved(&self) -> bool {
        match self {
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight => true,
            Key::Char(ch) => matches!(*ch, RANDOM_SYLLABLE_KEY | RANDOM_WORD_KEY | COMMIT_KEY),
            Key::Other(_) => false,
        }
    }
}

/// What a single transition did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    pub prevent_default: bool,
    pub fields_changed: bool,
    pub selection_changed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputState {
    pub fields: SyllableFields,
    /// Keys typed since the last commit or randomization.
    pub buffer: String,
    /// The composed syllable for `fields`.
    pub syllable: String,
    /// Matches for `syllable`, in dictionary order.
    pub results: Vec<EntryId>,
    /// Always `Some` and in range when `results` is non-empty, else `None`.
    pub selected: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all fields at once and derives syllable, results and
    /// selection from them.
    pub fn set_fields(&mut self, fields: SyllableFields, dictionary: &Dictionary) {
        self.fields = fields;
        self.refresh(dictionary);
    }

    /// Recomputes the syllable and runs a fresh search, selecting the first
    /// result.
    pub fn refresh(&mut self, dictionary: &Dictionary) {
        self.syllable = compose(&self.fields);
        self.results = dictionary.search(&self.syllable);
        self.selected = if self.results.is_empty() { None } else { Some(0) };
    }

    /// Selects a result directly. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.results.len() && self.selected != Some(index) {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub fn selected_entry(&self) -> Option<EntryId> {
        self.selected.and_then(|i| self.results.get(i).copied())
    }

    fn select_previous(&mut self) -> bool {
        match self.selected {
            Some(i) if i > 0 => self.select(i - 1),
            _ => false,
        }
    }

    fn select_next(&mut self) -> bool {
        match self.selected {
            Some(i) if i + 1 >= self.results.len() => self.select(0),
            Some(i) => self.select(i + 1),
            None => false,
        }
    }
}

/// Transition function over [`InputState`], bound to a dictionary.
#[derive(Debug, Clone, Copy)]
pub struct Machine<'a> {
    dictionary: &'a Dictionary,
    final_probability: f64,
}

impl<'a> Machine<'a> {
    pub fn new(dictionary: &'a Dictionary, final_probability: f64) -> Self {
        let final_probability = if final_probability.is_finite() {
            final_probability.clamp(0.0, 1.0)
        } else {
            0.5
        };
        Self { dictionary, final_probability }
    }

    /// Applies one key to `state`.
    pub fn step<R: Rng + ?Sized>(
        &self,
        mut state: InputState,
        key: &Key,
        rng: &mut R,
    ) -> (InputState, KeyOutcome) {
        let mut outcome = KeyOutcome {
            prevent_default: key.is_reserved(),
            ..KeyOutcome::default()
        };
        let before = state.selected;

        match key {
            Key::ArrowUp => {
                outcome.selection_changed = state.select_previous();
            }
            Key::ArrowDown => {
                outcome.selection_changed = state.select_next();
            }
            Key::ArrowLeft | Key::ArrowRight | Key::Other(_) => {}
            Key::Char(RANDOM_SYLLABLE_KEY) => {
                let fields = random_syllable(rng, self.final_probability);
                tracing::debug!(?fields, "random syllable");
                state.buffer.clear();
                state.set_fields(fields, self.dictionary);
                outcome.fields_changed = true;
            }
            Key::Char(RANDOM_WORD_KEY) => {
                state.buffer.clear();
                if let Some(fields) = random_dictionary_syllable(self.dictionary, rng) {
                    tracing::debug!(?fields, "random dictionary syllable");
                    state.set_fields(fields, self.dictionary);
                    outcome.fields_changed = true;
                }
            }
            Key::Char(COMMIT_KEY) => {
                let command = Command::parse(&state.buffer);
                state.buffer.clear();
                outcome.fields_changed = self.commit(&mut state, command);
            }
            Key::Char(ch) if !ch.is_control() => state.buffer.push(*ch),
            Key::Char(_) => {}
        }

        if outcome.fields_changed {
            outcome.selection_changed = state.selected != before || !state.results.is_empty();
        }
        (state, outcome)
    }

    fn commit(&self, state: &mut InputState, command: Command) -> bool {
        tracing::debug!(?command, "commit");
        let mut fields = state.fields.clone();
        match command {
            Command::SetInitial(initial) => fields.initial = initial,
            Command::SetNucleus(codes) => {
                fields.nucleus = nucleus_from_codes(&codes);
                fields.tone = Tone::Ngang;
            }
            Command::SetFinal(final_) => fields.final_ = final_,
            Command::Unrecognized => return false,
        }
        state.set_fields(fields, self.dictionary);
        true
    }
}

/// Draws a syllable from the fixed inventories. A final consonant is added
/// with probability `final_probability`.
pub fn random_syllable<R: Rng + ?Sized>(rng: &mut R, final_probability: f64) -> SyllableFields {
    let initial = INITIALS.choose(rng).copied().unwrap_or_default();
    let nucleus = NUCLEI.choose(rng).copied().unwrap_or_default();
    let final_ = if rng.gen_bool(final_probability) {
        FINALS.choose(rng).copied().unwrap_or_default()
    } else {
        ""
    };
    let tone = Tone::ALL.choose(rng).copied().unwrap_or_default();
    SyllableFields::new(initial, nucleus, tone, final_)
}

/// Decomposes one syllable of a random headword, or `None` when the
/// dictionary is empty.
pub fn random_dictionary_syllable<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    rng: &mut R,
) -> Option<SyllableFields> {
    let entry = dictionary.entries().choose(rng)?;
    let syllables: Vec<&str> = entry.syllables().collect();
    let word = syllables.choose(rng)?;
    Some(decompose(word))
}
