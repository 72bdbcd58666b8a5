//! Wall-clock abstraction for timestamped banners.
//!
//! Decouples the console from the system clock so banners can be tested with
//! a fixed time, the same way the retry loop is tested with scripted input.

use chrono::{Local, NaiveDateTime};

/// Source of the current local date and time.
pub trait Clock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Production clock reading the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
