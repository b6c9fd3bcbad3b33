use crate::config::Config;
use crate::core::composer::speech_text;
use crate::core::description::describe;
use crate::core::dictionary::{Dictionary, DictionaryEntry};
use crate::core::machine::{InputState, Key, KeyOutcome, Machine};
use crate::core::types::SyllableFields;
use crate::error::DictionaryError;
use crate::persistence::load_dictionary;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryStatus {
    Loading,
    Ready,
    /// The load failed; searches see an empty dictionary.
    Unavailable(String),
}

/// One editing session: the dictionary, the current fields and the results
/// derived from them.
pub struct SyllableEngine {
    config: Config,
    dictionary: Dictionary,
    status: DictionaryStatus,
    state: InputState,
    rng: StdRng,
}

impl SyllableEngine {
    /// A session whose dictionary is still loading.
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: Config, rng: StdRng) -> Self {
        Self {
            config,
            dictionary: Dictionary::new(),
            status: DictionaryStatus::Loading,
            state: InputState::new(),
            rng,
        }
    }

    /// Loads the configured dictionary before returning. A failed load
    /// leaves the session usable with an empty dictionary.
    pub fn from_config_blocking(config: Config) -> Self {
        let result = load_dictionary(&config);
        let mut engine = Self::new(config);
        engine.install_dictionary(result);
        engine
    }

    /// Completes the dictionary load and re-runs the current search.
    pub fn install_dictionary(&mut self, result: Result<Dictionary, DictionaryError>) {
        match result {
            Ok(dictionary) => {
                self.dictionary = dictionary;
                self.status = DictionaryStatus::Ready;
            }
            Err(err) => {
                tracing::warn!(%err, "dictionary unavailable");
                self.dictionary = Dictionary::new();
                self.status = DictionaryStatus::Unavailable(err.to_string());
            }
        }
        self.state.refresh(&self.dictionary);
    }

    pub fn handle_key(&mut self, key: &Key) -> KeyOutcome {
        let machine = Machine::new(&self.dictionary, self.config.final_consonant_probability);
        let state = std::mem::take(&mut self.state);
        let (state, outcome) = machine.step(state, key, &mut self.rng);
        self.state = state;
        outcome
    }

    /// Selects a result directly, as a click would.
    pub fn select(&mut self, index: usize) -> bool {
        self.state.select(index)
    }

    pub fn set_fields(&mut self, fields: SyllableFields) {
        self.state.set_fields(fields, &self.dictionary);
    }

    pub fn status(&self) -> &DictionaryStatus {
        &self.status
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn fields(&self) -> &SyllableFields {
        &self.state.fields
    }

    pub fn buffer(&self) -> &str {
        &self.state.buffer
    }

    pub fn syllable(&self) -> &str {
        &self.state.syllable
    }

    pub fn results(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.state
            .results
            .iter()
            .filter_map(|&id| self.dictionary.get(id))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected
    }

    pub fn selected_entry(&self) -> Option<&DictionaryEntry> {
        self.state
            .selected_entry()
            .and_then(|id| self.dictionary.get(id))
    }

    /// Description lines of the selected result.
    pub fn descriptions(&self) -> Vec<String> {
        self.selected_entry()
            .map(|entry| describe(&entry.display, &entry.description))
            .unwrap_or_default()
    }

    /// What the speech synthesizer should say for the current syllable.
    pub fn speech_text(&self) -> String {
        speech_text(&self.state.syllable)
    }
}
