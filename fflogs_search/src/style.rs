//! Styling helpers for terminal output.
//!
//! The [`SearchStyle`] trait applies ANSI styling via the `colored` crate.
//! Implementations for `&str` and `String` are provided so string literals can
//! be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait SearchStyle {
    fn url_style(&self) -> ColoredString;
    fn world_style(&self) -> ColoredString;
    fn data_center_style(&self) -> ColoredString;
    fn muted_style(&self) -> ColoredString;
}

impl SearchStyle for &str {
    fn url_style(&self) -> ColoredString {
        self.truecolor(102, 208, 250).underline()
    }
    fn world_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn data_center_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).bold()
    }
    fn muted_style(&self) -> ColoredString {
        self.truecolor(75, 80, 75)
    }
}

impl SearchStyle for String {
    fn url_style(&self) -> ColoredString {
        self.as_str().url_style()
    }
    fn world_style(&self) -> ColoredString {
        self.as_str().world_style()
    }
    fn data_center_style(&self) -> ColoredString {
        self.as_str().data_center_style()
    }
    fn muted_style(&self) -> ColoredString {
        self.as_str().muted_style()
    }
}
