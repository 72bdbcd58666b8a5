//! Number journal: an interactive program built on [`conprompt`].
//!
//! Exercises every prompt family of the library (free numbers, bounded
//! scores, negative amounts, yes/no confirmation, menus) plus printing and
//! the file helpers. The binary in `main.rs` only parses arguments, installs
//! logging and binds the console to stdio.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod journal;
mod session;

pub use journal::{Journal, LoadReport};
pub use session::{MENU_OPTIONS, MenuChoice, SessionConfig, SessionError, run_session};
