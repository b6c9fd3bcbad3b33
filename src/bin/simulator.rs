// Line protocol for embedding the syllable engine in another UI.
// Run with: cargo run --bin syllable_host -- --dictionary words.csv
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use syllable_core::host::{handle_command, Flow};
use syllable_core::logging::init_file_logging;
use syllable_core::persistence::load_dictionary;
use syllable_core::{Config, SyllableEngine};

#[derive(Parser, Debug)]
#[command(name = "syllable_host", about = "Vietnamese syllable engine over stdin/stdout")]
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
    tracing::info!("--- syllable host starting ---");

    let (tx, rx) = mpsc::channel();
    let load_config = config.clone();
    thread::spawn(move || {
        let _ = tx.send(load_dictionary(&load_config));
    });

    let mut engine = SyllableEngine::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let input = line?;
        if let Ok(result) = rx.try_recv() {
            engine.install_dictionary(result);
        }
        tracing::debug!("host <- {:?}", input);

        let flow = handle_command(&mut engine, &input, &mut stdout)?;
        stdout.flush()?;
        if flow == Flow::Exit {
            break;
        }
    }

    tracing::info!("syllable host shutting down");
    Ok(())
}
