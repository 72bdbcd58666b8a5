//! The interactive console: validated prompts and formatted printing.
//!
//! [`Console`] owns one reader and one writer. Every prompt follows the same
//! retry loop:
//!
//! 1. Print the leading message once (skipped when empty or a bare newline)
//! 2. Read a line
//! 3. Parse it; on failure print a corrective message and go to 2
//! 4. Check the rule; on failure print the rule's message and go to 2
//! 5. Return the value
//!
//! The loop has no retry limit. It ends only on a valid answer, end of input
//! or an I/O failure.

use std::{
    fmt::Write as _,
    io::{self, BufRead, StdinLock, Stdout, Write},
};

use crate::{
    clock::{Clock, SystemClock},
    config::{ConsoleConfig, DEFAULT_DATETIME_FORMAT},
    error::PromptError,
    format::ConsoleValue,
    menu::Menu,
    parse::{parse_number, parse_yes_no, strip_line_terminator},
    rule::ValidationRule,
    version,
};

/// Corrective message printed when a line is not a number.
pub const NOT_A_NUMBER_MESSAGE: &str = "\nPlease input a number.\n";

/// Corrective message printed when a yes/no answer is not `y` or `n`.
pub const NOT_YES_NO_MESSAGE: &str = "\nPlease input either 'Y' or 'N'.\n";

/// Interactive console over an injected reader, writer and clock.
///
/// # Type Parameters
///
/// - `R`: line source, typically stdin or a scripted `Cursor` in tests
/// - `W`: output sink; flushed after every write
/// - `C`: wall clock used for banner timestamps
pub struct Console<R, W, C = SystemClock> {
    reader: R,
    writer: W,
    clock: C,
    config: ConsoleConfig,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R, W> Console<R, W> {
    /// Create a console with the system clock and default configuration.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer, clock: SystemClock, config: ConsoleConfig::default() }
    }
}

impl<R, W, C> Console<R, W, C> {
    /// Replace the clock used for timestamps.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Console<R, W, C2> {
        Console { reader: self.reader, writer: self.writer, clock, config: self.config }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ConsoleConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Output sink, e.g. to inspect what a scripted session printed.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Release the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write, C: Clock> Console<R, W, C> {
    /// Print `message` unless it is empty or a bare newline.
    pub fn print_msg(&mut self, message: &str) -> io::Result<()> {
        if message.is_empty() || message == "\n" {
            return Ok(());
        }
        self.write_text(message)
    }

    /// Print `"<name>: <value>"` on its own line.
    pub fn print_var<T: ConsoleValue + ?Sized>(&mut self, name: &str, value: &T) -> io::Result<()> {
        self.write_text(&format!("{name}: {}\n", value.render()))
    }

    /// Print an index/value table of `values` under an optional title.
    pub fn print_array<T: ConsoleValue>(&mut self, title: &str, values: &[T]) -> io::Result<()> {
        let mut table = format!("{:<10}{}\n", "Index", "Value");
        for (i, value) in values.iter().enumerate() {
            table.push_str(&format!("{i:<10}{}\n", value.render()));
        }
        table.push('\n');

        self.print_msg(&format!("{title}\n"))?;
        self.write_text(&table)
    }

    /// Print the program banner with the start time.
    pub fn print_title(&mut self, program: &str, author: &str) -> io::Result<()> {
        let stamp = self.date_time();
        self.write_text(&format!("\n{program}\nProgrammed by {author}\nStart Time: {stamp}\n\n"))
    }

    /// Print the closing credits with the end time and library version.
    pub fn print_credits(&mut self, author: &str) -> io::Result<()> {
        let stamp = self.date_time();
        self.write_text(&format!(
            "End Time: {stamp}\nProgrammed by {author}\nPowered by {}\n",
            version()
        ))
    }

    /// Current local time rendered with the configured format.
    ///
    /// An unusable format falls back to the default one.
    pub fn date_time(&self) -> String {
        let now = self.clock.now();
        let mut stamp = String::new();
        if write!(stamp, "{}", now.format(&self.config.datetime_format)).is_err() {
            tracing::warn!(
                format = %self.config.datetime_format,
                "unusable datetime format, falling back to default"
            );
            stamp = now.format(DEFAULT_DATETIME_FORMAT).to_string();
        }
        stamp
    }

    /// Print `message` and return the next line without its terminator.
    pub fn prompt_str(&mut self, message: &str) -> Result<String, PromptError> {
        self.print_msg(message)?;
        self.read_line()
    }

    /// Print `message` and wait for any line.
    pub fn pause_with(&mut self, message: &str) -> Result<(), PromptError> {
        self.prompt_str(message).map(drop)
    }

    /// Wait for ENTER using the configured pause message.
    pub fn pause(&mut self) -> Result<(), PromptError> {
        let message = self.config.pause_message.clone();
        self.pause_with(&message)
    }

    /// Ask until the answer is `y` or `n` (any case); `true` means yes.
    pub fn prompt_yn(&mut self, message: &str) -> Result<bool, PromptError> {
        self.print_msg(message)?;
        loop {
            let line = self.read_line()?;
            match parse_yes_no(&line) {
                Some(answer) => return Ok(answer),
                None => {
                    tracing::debug!(input = %line, "rejected yes/no answer");
                    self.write_text(NOT_YES_NO_MESSAGE)?;
                },
            }
        }
    }

    /// Ask until the answer is a number satisfying `rule`.
    ///
    /// # Errors
    ///
    /// - [`PromptError::EmptyRange`] or [`PromptError::InvalidBound`] before
    ///   any output if `rule` is unsatisfiable
    /// - [`PromptError::InputExhausted`] if input ends first
    /// - [`PromptError::Io`] if the console fails
    pub fn prompt_validated(&mut self, message: &str, rule: ValidationRule) -> Result<f64, PromptError> {
        rule.ensure_satisfiable()?;
        self.print_msg(message)?;
        loop {
            let value = self.read_number()?;
            match rule.check(value) {
                Ok(value) => return Ok(value),
                Err(rejection) => {
                    tracing::debug!(value, %rule, "input failed validation");
                    self.write_text(&format!("\n{rejection}\n"))?;
                },
            }
        }
    }

    /// Ask for any number.
    pub fn prompt_num(&mut self, message: &str) -> Result<f64, PromptError> {
        self.prompt_validated(message, ValidationRule::Unrestricted)
    }

    /// Ask for a number `>= min`.
    pub fn prompt_num_min(&mut self, min: f64, message: &str) -> Result<f64, PromptError> {
        self.prompt_validated(message, ValidationRule::MinimumInclusive(min))
    }

    /// Ask for a number `<= max`.
    pub fn prompt_num_max(&mut self, max: f64, message: &str) -> Result<f64, PromptError> {
        self.prompt_validated(message, ValidationRule::MaximumInclusive(max))
    }

    /// Ask for a number `> 0`.
    pub fn prompt_num_pos(&mut self, message: &str) -> Result<f64, PromptError> {
        self.prompt_validated(message, ValidationRule::Positive)
    }

    /// Ask for a number `< 0`.
    pub fn prompt_num_neg(&mut self, message: &str) -> Result<f64, PromptError> {
        self.prompt_validated(message, ValidationRule::Negative)
    }

    /// Ask for a number in `[min, max]`.
    pub fn prompt_num_range(&mut self, min: f64, max: f64, message: &str) -> Result<f64, PromptError> {
        self.prompt_validated(message, ValidationRule::RangeInclusive { min, max })
    }

    /// Show a numbered menu and return the 1-based selection.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::EmptyMenu`] before printing anything if
    /// `options` is empty.
    pub fn menu(&mut self, title: &str, options: &[&str]) -> Result<usize, PromptError> {
        let menu = Menu::new(title, options)?;
        self.run_menu(&menu)
    }

    /// Show a prebuilt [`Menu`] and return the 1-based selection.
    pub fn run_menu(&mut self, menu: &Menu<'_>) -> Result<usize, PromptError> {
        self.print_msg(&format!("{}\n", menu.title()))?;
        menu.render_options(&mut self.writer)?;
        self.writer.flush()?;

        // Range check guarantees 1 <= choice <= len; fractions truncate.
        let choice = self.prompt_validated("", menu.rule())? as usize;
        self.write_text("\n")?;

        tracing::debug!(choice, label = menu.label(choice), "menu selection");
        Ok(choice)
    }

    /// Read lines until one parses as a number.
    fn read_number(&mut self) -> Result<f64, PromptError> {
        loop {
            let line = self.read_line()?;
            match parse_number(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(error = %e, "rejected non-numeric input");
                    self.write_text(NOT_A_NUMBER_MESSAGE)?;
                },
            }
        }
    }

    /// Read one line, terminator removed.
    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            tracing::debug!("input exhausted");
            return Err(PromptError::InputExhausted);
        }
        strip_line_terminator(&mut line);
        Ok(line)
    }

    /// Write and flush so prompts appear before the next read blocks.
    pub(crate) fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}
