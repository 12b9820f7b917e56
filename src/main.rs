//! # TT - Task Tracker CLI
//!
//! A small, file-backed task tracker. Tasks live in a single JSON file that
//! is read in full on every invocation and rewritten in full on every
//! mutation, so the file doubles as the system of record and the interchange
//! format.
//!
//! ## Quick Start
//!
//! ```bash
//! # Add a task
//! tt add "buy milk"
//!
//! # Work through it
//! tt mark-in-progress 1
//! tt mark-done 1
//!
//! # Change your mind about the wording
//! tt update 1 "buy oat milk"
//!
//! # List everything, or one status bucket
//! tt list
//! tt list done
//! ```
//!
//! Storage defaults to `./tasks.json`; pass `--db <path>` to point at another
//! file. Set `RUST_LOG=debug` for diagnostics.
//!
//! Exit codes: 0 on success, 1 on any failure (bad arguments, unknown ID,
//! no-op status transition, unreadable database).

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod cli;
pub mod cmd;
pub mod error;
pub mod fields;
pub mod store;
pub mod task;

use cli::Cli;
use cmd::Commands;
use error::Result;
use store::Store;

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version are successes; everything else is a usage
            // error.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Handle commands that don't need the store first.
    if let Commands::Completions { shell } = &cli.command {
        cmd::cmd_completions(*shell);
        return Ok(());
    }

    let db_path = cli.db.unwrap_or_else(|| PathBuf::from("tasks.json"));
    let store = Store::new(db_path);
    let mut tasks = store.load()?;

    match cli.command {
        Commands::Completions { .. } => unreachable!("completions handled above"),

        Commands::Add { description } => cmd::cmd_add(&store, &mut tasks, description),

        Commands::Update { id, description } => {
            cmd::cmd_update(&store, &mut tasks, id, description)
        }

        Commands::Delete { id } => cmd::cmd_delete(&store, &mut tasks, id),

        Commands::MarkInProgress { id } => cmd::cmd_mark_in_progress(&store, &mut tasks, id),

        Commands::MarkDone { id } => cmd::cmd_mark_done(&store, &mut tasks, id),

        Commands::List { status } => {
            cmd::cmd_list(&tasks, status);
            Ok(())
        }
    }
}

fn init_tracing() {
    // Tracing is opt-in via RUST_LOG; normal CLI output is unaffected.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
