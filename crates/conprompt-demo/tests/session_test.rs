//! End-to-end journal sessions replayed from scripted input.

use std::{fs, io::Cursor, path::Path};

use chrono::NaiveDate;
use conprompt::{Clock, Console, NaiveDateTime, PromptError};
use conprompt_demo::{Journal, SessionConfig, SessionError, run_session};
use tempfile::tempdir;

struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(9, 30, 0).unwrap()
    }
}

fn config(dir: &Path) -> SessionConfig {
    SessionConfig {
        author: "Ada".to_string(),
        journal_path: dir.join("journal.txt"),
        capacity: 8,
        ..SessionConfig::default()
    }
}

fn run(input: &str, config: &SessionConfig) -> (Result<Journal, SessionError>, String) {
    let reader = Cursor::new(input.as_bytes().to_vec());
    let mut console = Console::new(reader, Vec::new()).with_clock(FixedClock);
    let result = run_session(&mut console, config);
    let (_, out) = console.into_parts();
    (result, String::from_utf8_lossy(&out).into_owned())
}

#[test]
fn test_record_summarize_and_quit() {
    let dir = tempdir().unwrap();
    let config = config(dir.path());

    let script = "2\n150\n88.5\n1\n-4\n5\n8\nn\n8\ny\n";
    let (result, out) = run(script, &config);

    let journal = result.unwrap();
    assert_eq!(journal.entries(), [88.5, -4.0]);

    assert!(out.starts_with("\nNumber Journal\nProgrammed by Ada\nStart Time: 19-Oct-2026 09:30:00\n\n"));
    assert!(out.contains("Main Menu\n1. Record a number\n2. Record a score (0-100)\n"));
    assert!(out.contains("Enter a score (0-100): \nPlease input a number between 0 and 100.\n"));
    assert!(out.contains("Recorded: 88.5\n"));
    assert!(out.contains("Count: 2\nTotal: 84.5\nMean: 42.25\nMin: -4\nMax: 88.5\n"));
    assert_eq!(out.matches("Are you sure you want to quit (Y/N)? ").count(), 2);
    assert!(out.ends_with("End Time: 19-Oct-2026 09:30:00\nProgrammed by Ada\nPowered by conprompt 0.1.0\n"));
}

#[test]
fn test_expense_must_be_negative() {
    let dir = tempdir().unwrap();
    let (result, out) = run("3\n12\n0\n-12\n8\ny\n", &config(dir.path()));

    assert_eq!(result.unwrap().entries(), [-12.0]);
    assert_eq!(out.matches("\nPlease input a negative number.\n").count(), 2);
}

#[test]
fn test_show_entries_waits_for_enter() {
    let dir = tempdir().unwrap();
    let (result, out) = run("1\n7\n4\n\n8\ny\n", &config(dir.path()));

    assert!(result.is_ok());
    assert!(out.contains("Entries\nIndex     Value\n0         7\n\nPress ENTER to continue . . . \n"));
}

#[test]
fn test_saved_journal_loads_in_next_session() {
    let dir = tempdir().unwrap();
    let config = config(dir.path());

    let (result, out) = run("1\n3\n1\n4.50\n6\n8\ny\n", &config);
    assert!(result.is_ok());
    assert!(out.contains("File 'journal.txt' created.\nFile 'journal.txt' written to.\n\n"));
    assert_eq!(fs::read_to_string(&config.journal_path).unwrap(), "3\n4.5\n");

    let (result, out) = run("7\n8\ny\n", &config);
    assert_eq!(result.unwrap().entries(), [3.0, 4.5]);
    assert!(out.contains("Loaded: 2\n"));
}

#[test]
fn test_declined_overwrite_keeps_file_and_session() {
    let dir = tempdir().unwrap();
    let config = config(dir.path());
    fs::write(&config.journal_path, "1\n2\n").unwrap();

    let (result, out) = run("1\n9\n6\nn\n8\ny\n", &config);

    assert_eq!(result.unwrap().entries(), [9.0]);
    assert_eq!(fs::read_to_string(&config.journal_path).unwrap(), "1\n2\n");
    assert!(out.contains("ERR: File 'journal.txt' already exists. Would you like to overwrite (Y/N)?\n"));
}

#[test]
fn test_load_reports_missing_file_and_bad_lines() {
    let dir = tempdir().unwrap();
    let config = config(dir.path());

    let (result, out) = run("7\n8\ny\n", &config);
    assert!(result.unwrap().is_empty());
    assert!(out.contains("ERR: Unable to open file '"));

    fs::write(&config.journal_path, "5\nfive\n\n6\n").unwrap();
    let (result, out) = run("7\n8\ny\n", &config);
    assert_eq!(result.unwrap().entries(), [5.0, 6.0]);
    assert!(out.contains("Skipped invalid line 'five'.\nLoaded: 2\n"));
}

#[test]
fn test_full_journal_rejects_entries() {
    let dir = tempdir().unwrap();
    let config = SessionConfig { capacity: 1, ..config(dir.path()) };

    let (result, out) = run("1\n5\n1\n6\n8\ny\n", &config);

    assert_eq!(result.unwrap().entries(), [5.0]);
    assert!(out.contains("Journal is full (1 entries).\n"));
}

#[test]
fn test_load_reports_numbers_past_capacity() {
    let dir = tempdir().unwrap();
    let config = SessionConfig { capacity: 2, ..config(dir.path()) };
    fs::write(&config.journal_path, "1\n2\n3\n").unwrap();

    let (result, out) = run("7\n8\ny\n", &config);

    assert_eq!(result.unwrap().entries(), [1.0, 2.0]);
    assert!(out.contains("Journal is full (2 entries); 1 more not loaded.\nLoaded: 2\n"));
    assert!(!out.contains("Skipped invalid line"));
}

#[test]
fn test_closed_input_ends_session() {
    let dir = tempdir().unwrap();
    let (result, out) = run("1\n", &config(dir.path()));

    assert!(matches!(result, Err(SessionError::Prompt(PromptError::InputExhausted))));
    assert!(!out.contains("End Time"));
}
