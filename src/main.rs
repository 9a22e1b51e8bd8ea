//! # slackpick CLI
//!
//! `slackpick <AUTHOR> <FILE>...` prints the text of every non-link message
//! by AUTHOR, one per line. Diagnostics go to stderr; set `RUST_LOG=debug`
//! to see per-file counts.

use std::io;
use std::process;

use tracing_subscriber::EnvFilter;

use slackpick::SlackpickError;
use slackpick::cli::Args;
use slackpick::core::{run_files, write_lines};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), SlackpickError> {
    let args = Args::from_env()?;
    let lines = run_files(&args.author, &args.files)?;

    let mut stdout = io::stdout().lock();
    write_lines(&mut stdout, &lines)?;

    Ok(())
}
