//! Console helpers for interactive command-line programs.
//!
//! Validated prompts, formatted printing, line-oriented file I/O and small
//! formatting utilities, all driven through an injected reader and writer so
//! that sessions can be scripted in tests.
//!
//! # Components
//!
//! - [`Console`]: retry-until-valid prompts, menus and printing
//! - [`ValidationRule`]: numeric predicates and their corrective messages
//! - [`parse_number`] / [`parse_yes_no`]: line parsers used by the prompts
//! - [`ConsoleValue`]: one rendering capability for every printable type
//! - [`Clock`]: time source for title and credit banners
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use conprompt::Console;
//!
//! let input = Cursor::new("twelve\n12\n");
//! let mut console = Console::new(input, Vec::new());
//!
//! let age = console.prompt_num_range(0.0, 130.0, "Age: ").unwrap();
//! assert_eq!(age, 12.0);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod array;
mod clock;
mod config;
mod console;
mod error;
mod file;
mod format;
mod menu;
mod parse;
mod rule;

pub use array::{init_array, reset_array};
pub use chrono::NaiveDateTime;
pub use clock::{Clock, SystemClock};
pub use config::{ConsoleConfig, DEFAULT_DATETIME_FORMAT, DEFAULT_PAUSE_MESSAGE};
pub use console::{Console, NOT_A_NUMBER_MESSAGE, NOT_YES_NO_MESSAGE};
pub use error::{FileError, PromptError};
pub use file::OVERWRITE_QUESTION;
pub use format::{ConsoleValue, Float, num_to_string_no_trailing_zeros};
pub use menu::Menu;
pub use parse::{ParseError, parse_number, parse_yes_no};
pub use rule::{ValidationFailed, ValidationRule};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name and version, as shown in the credits banner.
pub fn version() -> String {
    format!("conprompt {VERSION}")
}
