//! Console configuration.

/// Default `chrono` format for banner timestamps, e.g. `19-Oct-2026 14:03:07`.
pub const DEFAULT_DATETIME_FORMAT: &str = "%d-%b-%Y %H:%M:%S";

/// Default message printed by [`Console::pause`](crate::Console::pause).
pub const DEFAULT_PAUSE_MESSAGE: &str = "Press ENTER to continue . . . \n";

/// Tunable console texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// `chrono` strftime pattern used for banner timestamps
    pub datetime_format: String,
    /// Message printed by `pause`
    pub pause_message: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            pause_message: DEFAULT_PAUSE_MESSAGE.to_string(),
        }
    }
}
