//! Value-to-text rendering for console output.
//!
//! Every print helper is generic over [`ConsoleValue`], so integers, floats
//! and text share one implementation instead of one overload per type.

/// Render a float with no trailing fractional zeros and no trailing point.
///
/// Uses the shortest text that round-trips to the same value, so `2.50`
/// renders as `"2.5"`, `3.0` as `"3"` and `-0.0100` as `"-0.01"`.
pub fn num_to_string_no_trailing_zeros<F: Float>(value: F) -> String {
    let text = value.to_string();
    strip_trailing_zeros(&text).to_string()
}

/// Floating-point types accepted by [`num_to_string_no_trailing_zeros`].
pub trait Float: Copy + std::fmt::Display + sealed::Sealed {}

impl Float for f32 {}
impl Float for f64 {}

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Trim zeros after the decimal point, then the point itself.
///
/// Text without a decimal point is returned untouched so integer digits
/// survive.
fn strip_trailing_zeros(text: &str) -> &str {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.')
}

/// A value the console knows how to print.
pub trait ConsoleValue {
    /// Text shown for this value in variable lines and tables.
    fn render(&self) -> String;
}

macro_rules! integer_console_value {
    ($($ty:ty),*) => {
        $(
            impl ConsoleValue for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_console_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ConsoleValue for f32 {
    fn render(&self) -> String {
        num_to_string_no_trailing_zeros(*self)
    }
}

impl ConsoleValue for f64 {
    fn render(&self) -> String {
        num_to_string_no_trailing_zeros(*self)
    }
}

impl ConsoleValue for str {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl ConsoleValue for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl ConsoleValue for bool {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: ConsoleValue + ?Sized> ConsoleValue for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}
