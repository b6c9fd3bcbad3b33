// src/core/mod.rs
pub mod command;
pub mod composer;
pub mod decomposer;
pub mod description;
pub mod dictionary;
pub mod engine;
pub mod inventory;
pub mod machine;
pub mod tone;
pub mod types;
