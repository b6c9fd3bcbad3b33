// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod host;
pub mod logging;
pub mod persistence;
pub mod speech;

pub use crate::config::Config;
pub use crate::core::composer::compose;
pub use crate::core::decomposer::decompose;
pub use crate::core::dictionary::{search, Dictionary, DictionaryEntry};
pub use crate::core::engine::{DictionaryStatus, SyllableEngine};
pub use crate::core::machine::{Key, KeyOutcome};
pub use crate::core::tone::apply_tone;
pub use crate::core::types::{SyllableFields, Tone};
