//! Error types for console prompts and file helpers.
//!
//! Format and validation failures never leave the retry loop; they are
//! rendered as corrective messages and the user is asked again. Only the
//! conditions the loop cannot recover from are surfaced through
//! [`PromptError`] and [`FileError`].

use std::io;

use thiserror::Error;

/// Errors surfaced by the prompt family.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The input stream reached end-of-file before a valid answer arrived.
    #[error("input stream exhausted before a valid answer was read")]
    InputExhausted,

    /// A menu was requested with no options to choose from.
    #[error("menu has no options")]
    EmptyMenu,

    /// A range rule whose bounds admit no value.
    #[error("empty range: no number satisfies {min} <= n <= {max}")]
    EmptyRange {
        /// Lower bound supplied by the caller
        min: f64,
        /// Upper bound supplied by the caller
        max: f64,
    },

    /// A one-sided bound that no number can meet.
    #[error("invalid bound: no number can be compared against {bound}")]
    InvalidBound {
        /// Bound supplied by the caller
        bound: f64,
    },

    /// Reading from or writing to the console failed.
    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors from the line-oriented file helpers.
///
/// For open, read and write failures the `Display` text is exactly what the
/// console shows the user.
#[derive(Error, Debug)]
pub enum FileError {
    /// The file could not be opened for reading.
    #[error("ERR: Unable to open file '{path}'. Is the file in the root folder of this program?")]
    OpenFailed {
        /// Path as given by the caller
        path: String,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The file opened but a line could not be read.
    #[error("ERR: Unable to read file '{path}'.")]
    ReadFailed {
        /// Path as given by the caller
        path: String,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The file could not be created or written.
    #[error("ERR: Unable to create file '{path}'.")]
    WriteFailed {
        /// Path as given by the caller
        path: String,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The file already existed and the user declined to overwrite it.
    #[error("ERR: File '{name}' already exists.")]
    OverwriteDeclined {
        /// Final path component of the existing file
        name: String,
    },

    /// The overwrite confirmation prompt failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),
}
