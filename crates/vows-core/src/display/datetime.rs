//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around a calendar `Date` that renders it in long form, e.g.
/// `February 15th, 2024`.
pub struct LongDate<'a>(pub &'a Date);

impl<'a> fmt::Display for LongDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.0.day();
        let suffix = match (day % 10, day % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };
        write!(
            f,
            "{} {}{}, {}",
            self.0.strftime("%B"),
            day,
            suffix,
            self.0.year()
        )
    }
}
