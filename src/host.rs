// File: src/host.rs
//! Line protocol for driving a [`SyllableEngine`] from another UI.
//!
//! One command per input line; every reply ends with a newline. Commands:
//!
//! - `KEY <symbol>`: `ACK PREVENT_DEFAULT` or `ACK PASS`, then a state dump
//! - `SELECT <n>`: a state dump, or `ERROR ...` for a bad index
//! - `STATE`: a state dump
//! - `SPEAK`: `SPEAK <text>`
//! - `EXIT`: stop reading
//!
//! Anything else gets `ERROR unknown command '<name>'`.
use crate::core::engine::{DictionaryStatus, SyllableEngine};
use crate::core::machine::Key;
use std::io::{self, Write};

/// Whether the host loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs one protocol line against `engine`, writing the reply to `out`.
pub fn handle_command(
    engine: &mut SyllableEngine,
    input: &str,
    out: &mut impl Write,
) -> io::Result<Flow> {
    let (command, argument) = input.split_once(' ').unwrap_or((input, ""));
    match command {
        "KEY" => {
            let outcome = engine.handle_key(&Key::from_symbol(argument));
            let ack = if outcome.prevent_default { "PREVENT_DEFAULT" } else { "PASS" };
            writeln!(out, "ACK {}", ack)?;
            write_state(engine, out)?;
        }
        "SELECT" => match argument.trim().parse::<usize>() {
            Ok(index) if engine.select(index) => write_state(engine, out)?,
            Ok(index) => writeln!(out, "ERROR no result {}", index)?,
            Err(_) => writeln!(out, "ERROR bad index '{}'", argument)?,
        },
        "STATE" => write_state(engine, out)?,
        "SPEAK" => writeln!(out, "SPEAK {}", engine.speech_text())?,
        "EXIT" => {
            tracing::info!("received EXIT");
            return Ok(Flow::Exit);
        }
        _ => {
            tracing::debug!("unknown command {:?}", command);
            writeln!(out, "ERROR unknown command '{}'", command)?;
        }
    }
    Ok(Flow::Continue)
}

/// Dumps the session: status, syllable, fields, buffer, results, selection
/// and descriptions, closed by `END`.
pub fn write_state(engine: &SyllableEngine, out: &mut impl Write) -> io::Result<()> {
    match engine.status() {
        DictionaryStatus::Loading => writeln!(out, "STATUS loading")?,
        DictionaryStatus::Ready => writeln!(out, "STATUS ready")?,
        DictionaryStatus::Unavailable(reason) => {
            writeln!(out, "STATUS unavailable")?;
            writeln!(out, "REASON {}", reason.replace('\n', " "))?;
        }
    }
    writeln!(out, "SYLLABLE {}", engine.syllable())?;

    let fields = engine.fields();
    writeln!(
        out,
        "FIELDS {}|{}|{}|{}",
        fields.initial, fields.nucleus, fields.tone, fields.final_
    )?;
    writeln!(out, "BUFFER {}", engine.buffer())?;

    for (i, entry) in engine.results().enumerate() {
        writeln!(out, "RESULT {} {}", i, entry.display)?;
    }
    match engine.selected_index() {
        Some(i) => writeln!(out, "SELECTED {}", i)?,
        None => writeln!(out, "SELECTED none")?,
    }
    for line in engine.descriptions() {
        writeln!(out, "DESCRIPTION {}", line.replace('\n', " "))?;
    }
    writeln!(out, "END")
}
