//! Numbered option menus.

use std::io::{self, Write};

use crate::{error::PromptError, rule::ValidationRule};

/// An ordered, non-empty list of options with an optional title.
///
/// Valid selections are the 1-based positions `1..=len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu<'a> {
    title: &'a str,
    options: &'a [&'a str],
}

impl<'a> Menu<'a> {
    /// Build a menu. An empty `title` means no title line.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::EmptyMenu`] if `options` is empty.
    pub fn new(title: &'a str, options: &'a [&'a str]) -> Result<Self, PromptError> {
        if options.is_empty() {
            return Err(PromptError::EmptyMenu);
        }
        Ok(Self { title, options })
    }

    /// Menu title, possibly empty.
    pub fn title(&self) -> &str {
        self.title
    }

    /// Number of options. Always at least one.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Label of the option at the 1-based `selection`.
    pub fn label(&self, selection: usize) -> Option<&str> {
        selection.checked_sub(1).and_then(|i| self.options.get(i)).copied()
    }

    /// Range rule accepting exactly the valid selections.
    pub fn rule(&self) -> ValidationRule {
        ValidationRule::RangeInclusive { min: 1.0, max: self.options.len() as f64 }
    }

    /// Write one `"<n>. <label>"` line per option.
    pub fn render_options<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (i, label) in self.options.iter().enumerate() {
            writeln!(out, "{}. {label}", i + 1)?;
        }
        Ok(())
    }
}
