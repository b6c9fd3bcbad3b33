// Interactive syllable matrix in the terminal.
// Run with: cargo run --bin syllable_matrix -- --dictionary words.csv
use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;
use syllable_core::error::DictionaryError;
use syllable_core::logging::init_file_logging;
use syllable_core::persistence::load_dictionary;
use syllable_core::speech::spawn_speech;
use syllable_core::{Config, Dictionary, DictionaryStatus, Key, SyllableEngine};

#[derive(Parser, Debug)]
#[command(name = "syllable_matrix", about = "Make a Vietnamese syllable, one part at a time")]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Dictionary source, overriding the config
    #[arg(long)]
    dictionary: Option<PathBuf>,
    /// Do not read or write the dictionary cache
    #[arg(long)]
    no_cache: bool,
}

type DictionaryLoad = Receiver<Result<Dictionary, DictionaryError>>;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = Config::load_or_default(args.config.as_deref()).context("loading config")?;
    if let Some(path) = args.dictionary {
        config.dictionary_path = path;
    }
    if args.no_cache {
        config.cache_path = None;
    }
    init_file_logging(&config.log_path, &config.log_level).context("opening log file")?;
    tracing::info!("--- syllable matrix starting ---");

    let (tx, rx) = mpsc::channel();
    let load_config = config.clone();
    thread::spawn(move || {
        let _ = tx.send(load_dictionary(&load_config));
    });

    let mut engine = SyllableEngine::new(config);
    let mut stdout = io::stdout();

    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    let result = run(&mut engine, rx, &mut stdout);
    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    tracing::info!("syllable matrix shutting down");
    result
}

fn run(engine: &mut SyllableEngine, rx: DictionaryLoad, stdout: &mut io::Stdout) -> anyhow::Result<()> {
    let mut pending = Some(rx);
    let mut notice = String::new();
    draw(engine, &notice, stdout)?;

    loop {
        if let Some(load) = &pending {
            match load.try_recv() {
                Ok(result) => {
                    engine.install_dictionary(result);
                    pending = None;
                    draw(engine, &notice, stdout)?;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("dictionary loader stopped without a result");
                    pending = None;
                }
            }
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        match key_event.code {
            KeyCode::Esc => break,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => break,
            KeyCode::Enter => {
                notice = speak(engine);
            }
            _ => {
                notice.clear();
                engine.handle_key(&to_key(&key_event));
            }
        }
        draw(engine, &notice, stdout)?;
    }
    Ok(())
}

fn to_key(event: &KeyEvent) -> Key {
    match event.code {
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        KeyCode::Char(ch) => Key::Char(ch),
        other => Key::Other(format!("{:?}", other)),
    }
}

/// Hands the syllable to the configured speech program, if any.
fn speak(engine: &SyllableEngine) -> String {
    let text = engine.speech_text();
    if text.is_empty() {
        return String::new();
    }
    let config = engine.config();
    match spawn_speech(config, &text) {
        Ok(Some(_)) => format!("speaking: {}", text),
        Ok(None) => format!("[speak {}] {}", config.speech_language, text),
        Err(err) => {
            tracing::warn!(%err, "speech command failed to start");
            format!("speech unavailable: {}", err)
        }
    }
}

fn line(stdout: &mut io::Stdout, text: &str) -> io::Result<()> {
    queue!(stdout, Print(text), cursor::MoveToNextLine(1))
}

fn draw(engine: &SyllableEngine, notice: &str, stdout: &mut io::Stdout) -> io::Result<()> {
    queue!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    line(stdout, "MAKE A VIET SYLLABLE.")?;
    line(stdout, "---------------------------------------------------------------")?;
    line(stdout, "PRE_<initial>@  VOW_<codes>@  POS_<final>@   e.g. VOW_u0_y0_e6@")?;
    line(stdout, "\\ random syllable   / random word   Up/Down select   Enter speak   Esc quit")?;
    line(stdout, "")?;

    let status = match engine.status() {
        DictionaryStatus::Loading => "loading dictionary...".to_string(),
        DictionaryStatus::Ready => format!("{} words", engine.dictionary().len()),
        DictionaryStatus::Unavailable(reason) => format!("dictionary unavailable: {}", reason),
    };
    line(stdout, &format!("Dictionary: {}", status))?;

    let fields = engine.fields();
    line(
        stdout,
        &format!(
            "Initial [{}]  Nucleus [{}]  Tone [{}]  Final [{}]",
            fields.initial, fields.nucleus, fields.tone, fields.final_
        ),
    )?;
    line(stdout, &format!("Macro: [{}]", engine.buffer()))?;
    line(stdout, "")?;

    queue!(stdout, Print("Syllable: "), SetAttribute(Attribute::Bold))?;
    queue!(stdout, Print(engine.syllable()), SetAttribute(Attribute::Reset))?;
    queue!(stdout, cursor::MoveToNextLine(1))?;
    if !notice.is_empty() {
        line(stdout, notice)?;
    }
    line(stdout, "")?;

    let results: Vec<_> = engine.results().collect();
    if results.is_empty() {
        line(stdout, "No matching words.")?;
    } else {
        let shown = engine.config().max_results_shown.max(1);
        let selected = engine.selected_index().unwrap_or(0);
        // Keep the selection inside the visible window.
        let start = selected.saturating_sub(shown - 1);
        for (i, entry) in results.iter().enumerate().skip(start).take(shown) {
            let marker = if Some(i) == engine.selected_index() { ">" } else { " " };
            line(stdout, &format!("{} {}", marker, entry.display))?;
        }
        line(stdout, &format!("  ({} of {})", selected + 1, results.len()))?;
    }

    line(stdout, "")?;
    for description in engine.descriptions() {
        line(stdout, &description)?;
    }
    stdout.flush()
}
