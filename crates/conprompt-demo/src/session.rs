//! The interactive journal session.
//!
//! Drives a [`Console`] through the title banner, a main menu loop and the
//! closing credits. All console I/O goes through the injected console, so a
//! whole session can be replayed from a script.

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use conprompt::{Clock, Console, FileError, PromptError};
use thiserror::Error;

use crate::journal::Journal;

/// Main menu entries, in display order.
pub const MENU_OPTIONS: [&str; 8] = [
    "Record a number",
    "Record a score (0-100)",
    "Record an expense",
    "Show entries",
    "Show summary",
    "Save journal",
    "Load journal",
    "Quit",
];

/// Main menu selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Record any number.
    RecordNumber,
    /// Record a number in `[0, 100]`.
    RecordScore,
    /// Record a negative amount.
    RecordExpense,
    /// Print the entry table.
    ShowEntries,
    /// Print count, total, mean, min and max.
    ShowSummary,
    /// Write entries to the journal file.
    Save,
    /// Replace entries with the journal file's contents.
    Load,
    /// Leave the session.
    Quit,
}

impl MenuChoice {
    /// Map a 1-based menu selection to a choice.
    pub fn from_selection(selection: usize) -> Option<Self> {
        let choice = match selection {
            1 => Self::RecordNumber,
            2 => Self::RecordScore,
            3 => Self::RecordExpense,
            4 => Self::ShowEntries,
            5 => Self::ShowSummary,
            6 => Self::Save,
            7 => Self::Load,
            8 => Self::Quit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Session settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Program name shown in the title banner
    pub program_name: String,
    /// Author shown in the title and credits
    pub author: String,
    /// File used by save and load
    pub journal_path: PathBuf,
    /// Maximum number of entries
    pub capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            program_name: "Number Journal".to_string(),
            author: "Anonymous".to_string(),
            journal_path: PathBuf::from("journal.txt"),
            capacity: 32,
        }
    }
}

/// Errors that end a session early.
#[derive(Error, Debug)]
pub enum SessionError {
    /// A prompt could not complete (input closed, console failure).
    #[error("prompt failed: {0}")]
    Prompt(#[from] PromptError),

    /// Printing to the console failed.
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run one session and return the journal as it stood on exit.
///
/// # Errors
///
/// Returns [`SessionError::Prompt`] with [`PromptError::InputExhausted`] if
/// input ends before the user quits.
pub fn run_session<R, W, C>(console: &mut Console<R, W, C>, config: &SessionConfig) -> Result<Journal, SessionError>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    let mut journal = Journal::new(config.capacity);
    console.print_title(&config.program_name, &config.author)?;

    loop {
        let selection = console.menu("Main Menu", &MENU_OPTIONS)?;
        let Some(choice) = MenuChoice::from_selection(selection) else {
            tracing::warn!(selection, "menu returned an unknown selection");
            continue;
        };
        tracing::debug!(?choice, "menu choice");

        match choice {
            MenuChoice::RecordNumber => {
                let value = console.prompt_num("Enter a number: ")?;
                record(console, &mut journal, value)?;
            },
            MenuChoice::RecordScore => {
                let value = console.prompt_num_range(0.0, 100.0, "Enter a score (0-100): ")?;
                record(console, &mut journal, value)?;
            },
            MenuChoice::RecordExpense => {
                let value = console.prompt_num_neg("Enter an expense as a negative amount: ")?;
                record(console, &mut journal, value)?;
            },
            MenuChoice::ShowEntries => {
                console.print_array("Entries", journal.entries())?;
                console.pause()?;
            },
            MenuChoice::ShowSummary => show_summary(console, &journal)?,
            MenuChoice::Save => save(console, &journal, config)?,
            MenuChoice::Load => load(console, &mut journal, config)?,
            MenuChoice::Quit => {
                if console.prompt_yn("Are you sure you want to quit (Y/N)? ")? {
                    break;
                }
            },
        }
    }

    console.print_credits(&config.author)?;
    Ok(journal)
}

fn record<R: BufRead, W: Write, C: Clock>(
    console: &mut Console<R, W, C>,
    journal: &mut Journal,
    value: f64,
) -> Result<(), SessionError> {
    if journal.push(value) {
        console.print_var("Recorded", &value)?;
    } else {
        console.print_msg(&format!("Journal is full ({} entries).\n", journal.capacity()))?;
    }
    Ok(())
}

fn show_summary<R: BufRead, W: Write, C: Clock>(
    console: &mut Console<R, W, C>,
    journal: &Journal,
) -> Result<(), SessionError> {
    console.print_var("Count", &journal.len())?;
    console.print_var("Total", &journal.total())?;
    if let (Some(mean), Some(min), Some(max)) = (journal.mean(), journal.min(), journal.max()) {
        console.print_var("Mean", &mean)?;
        console.print_var("Min", &min)?;
        console.print_var("Max", &max)?;
    }
    Ok(())
}

fn save<R: BufRead, W: Write, C: Clock>(
    console: &mut Console<R, W, C>,
    journal: &Journal,
    config: &SessionConfig,
) -> Result<(), SessionError> {
    match console.write_file_lines(&config.journal_path, &journal.to_lines()) {
        Ok(()) => {
            tracing::info!(path = %config.journal_path.display(), entries = journal.len(), "journal saved");
            Ok(())
        },
        Err(err) => absorb_file_error(err),
    }
}

fn load<R: BufRead, W: Write, C: Clock>(
    console: &mut Console<R, W, C>,
    journal: &mut Journal,
    config: &SessionConfig,
) -> Result<(), SessionError> {
    // Room for blank and invalid lines next to a full journal's worth of numbers
    let mut buffer = vec![String::new(); journal.capacity() * 2];
    let count = match console.read_file_lines(&config.journal_path, &mut buffer) {
        Ok(count) => count,
        Err(err) => return absorb_file_error(err),
    };

    let report = journal.load_lines(buffer[..count].iter().map(String::as_str));
    for line in &report.invalid {
        console.print_msg(&format!("Skipped invalid line '{line}'.\n"))?;
    }
    if !report.overflow.is_empty() {
        console.print_msg(&format!(
            "Journal is full ({} entries); {} more not loaded.\n",
            journal.capacity(),
            report.overflow.len()
        ))?;
    }
    console.print_var("Loaded", &journal.len())?;
    Ok(())
}

/// File failures are already shown to the user; only a failed prompt ends the
/// session.
fn absorb_file_error(err: FileError) -> Result<(), SessionError> {
    match err {
        FileError::Prompt(e) => Err(e.into()),
        other => {
            tracing::warn!(error = %other, "file operation failed");
            Ok(())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selections_map_to_choices() {
        assert_eq!(MenuChoice::from_selection(1), Some(MenuChoice::RecordNumber));
        assert_eq!(MenuChoice::from_selection(8), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::from_selection(0), None);
        assert_eq!(MenuChoice::from_selection(9), None);
    }

    #[test]
    fn every_option_has_a_choice() {
        for selection in 1..=MENU_OPTIONS.len() {
            assert!(MenuChoice::from_selection(selection).is_some());
        }
    }

    #[test]
    fn declined_overwrite_does_not_end_session() {
        let err = FileError::OverwriteDeclined { name: "journal.txt".to_string() };
        assert!(absorb_file_error(err).is_ok());

        let err = FileError::Prompt(PromptError::InputExhausted);
        assert!(matches!(
            absorb_file_error(err),
            Err(SessionError::Prompt(PromptError::InputExhausted))
        ));
    }
}
