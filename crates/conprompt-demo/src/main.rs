//! Number journal binary.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session saving to ./journal.txt
//! conprompt-demo --author "Ada Lovelace"
//!
//! # Custom journal file and debug logs on stderr
//! conprompt-demo --file scores.txt --log-level debug
//! ```

use std::{io, path::PathBuf};

use clap::Parser;
use conprompt::{Console, ConsoleConfig, DEFAULT_DATETIME_FORMAT, PromptError};
use conprompt_demo::{SessionConfig, SessionError, run_session};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Interactive number journal
#[derive(Parser, Debug)]
#[command(name = "conprompt-demo")]
#[command(about = "Record, summarize, save and load numbers from the console")]
#[command(version)]
struct Args {
    /// Name shown in the title banner and credits
    #[arg(short, long, default_value = "Anonymous")]
    author: String,

    /// Journal file used by save and load
    #[arg(short, long, default_value = "journal.txt")]
    file: PathBuf,

    /// Maximum number of journal entries
    #[arg(long, default_value = "32")]
    capacity: usize,

    /// Timestamp format for the banners (chrono strftime syntax)
    #[arg(long, default_value = DEFAULT_DATETIME_FORMAT)]
    datetime_format: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    // Logs go to stderr so they never interleave with prompts on stdout
    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let console_config =
        ConsoleConfig { datetime_format: args.datetime_format, ..ConsoleConfig::default() };
    let session_config = SessionConfig {
        author: args.author,
        journal_path: args.file,
        capacity: args.capacity,
        ..SessionConfig::default()
    };

    tracing::info!(path = %session_config.journal_path.display(), "starting session");

    let mut console = Console::stdio().with_config(console_config);
    match run_session(&mut console, &session_config) {
        Ok(journal) => {
            tracing::info!(entries = journal.len(), "session finished");
            Ok(())
        },
        Err(SessionError::Prompt(PromptError::InputExhausted)) => {
            tracing::info!("input closed, exiting");
            Ok(())
        },
        Err(e) => Err(e.into()),
    }
}
