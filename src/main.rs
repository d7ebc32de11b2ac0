use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use rootstate::actions::Signal;
use rootstate::config::Config;
use rootstate::mvi::Reducer;
use rootstate::{features, logging, replay, Store};

#[derive(Debug, Parser)]
#[command(name = "rootstate", version, about = "Replay signals through the root reducer")]
struct Cli {
    /// Path to config file (default: ~/.config/rootstate/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a JSON Lines file of signals through the store and print the state
    Replay {
        /// File with one signal per line
        file: PathBuf,

        /// Signal kind that resets the state (repeatable, replaces config)
        #[arg(long = "reset-on", value_name = "KIND")]
        reset_on: Vec<String>,

        /// Print the state after every signal instead of only the final one
        #[arg(long)]
        each: bool,
    },
    /// Print the default state tree
    Slices,
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    logging::init_tracing(&config.logging);

    match cli.command {
        Command::Replay {
            file,
            reset_on,
            each,
        } => {
            let reset_on = if reset_on.is_empty() {
                config.reset.signals
            } else {
                reset_on
            };
            run_replay(&file, &reset_on, each)
        }
        Command::Slices => {
            let root = features::root_reducer(&config.reset.signals)?;
            print_json(&root.init(&Signal::init()))
        }
    }
}

fn run_replay(file: &Path, reset_on: &[String], each: bool) -> Result<()> {
    let reader = File::open(file)
        .map(BufReader::new)
        .with_context(|| format!("Failed to open '{}'", file.display()))?;
    let signals = replay::parse_signals(reader)?;

    let root = features::root_reducer(reset_on)?;
    let resets = signals
        .iter()
        .filter(|signal| root.resets_on(&signal.kind))
        .count();
    tracing::info!(
        signals = signals.len(),
        resets,
        file = %file.display(),
        "Replaying"
    );

    let store = Store::new(root, &Signal::init());
    let states = replay::replay(&store, signals);

    if each {
        for state in &states {
            print_json(state)?;
        }
        return Ok(());
    }

    print_json(&store.state())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
