//! In-memory list of recorded numbers.

use conprompt::{num_to_string_no_trailing_zeros, parse_number};

/// Bounded list of recorded numbers with simple statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Journal {
    entries: Vec<f64>,
    capacity: usize,
}

impl Journal {
    /// Create an empty journal holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity), capacity }
    }

    /// Append `value`. Returns false if the journal is full.
    pub fn push(&mut self, value: f64) -> bool {
        if self.is_full() {
            return false;
        }
        self.entries.push(value);
        true
    }

    /// Recorded values in insertion order.
    pub fn entries(&self) -> &[f64] {
        &self.entries
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of recorded values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if no more values fit.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Sum of all entries.
    pub fn total(&self) -> f64 {
        self.entries.iter().sum()
    }

    /// Arithmetic mean, or `None` when empty.
    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() { None } else { Some(self.total() / self.len() as f64) }
    }

    /// Smallest entry.
    pub fn min(&self) -> Option<f64> {
        self.entries.iter().copied().reduce(f64::min)
    }

    /// Largest entry.
    pub fn max(&self) -> Option<f64> {
        self.entries.iter().copied().reduce(f64::max)
    }

    /// Entries as file lines.
    pub fn to_lines(&self) -> Vec<String> {
        self.entries.iter().map(|v| num_to_string_no_trailing_zeros(*v)).collect()
    }

    /// Replace the entries with the numeric lines of `lines`.
    ///
    /// Blank lines are skipped. Lines that are not numbers and numbers that
    /// no longer fit are reported separately.
    pub fn load_lines<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) -> LoadReport<'a> {
        self.entries.clear();
        let mut report = LoadReport::default();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            match parse_number(line) {
                Ok(value) => {
                    if !self.push(value) {
                        report.overflow.push(line);
                    }
                },
                Err(_) => report.invalid.push(line),
            }
        }
        report
    }
}

/// Lines [`Journal::load_lines`] did not record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport<'a> {
    /// Lines that are not numbers
    pub invalid: Vec<&'a str>,
    /// Numbers dropped because the journal was full
    pub overflow: Vec<&'a str>,
}
