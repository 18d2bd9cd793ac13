//! Calendar date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around a calendar `Date` that formats it for people.
///
/// The format is `YYYY-MM-DD (Www)`, e.g. `2024-03-01 (Fri)`, so dates stay
/// sortable while still showing the weekday work falls on.
pub struct CalendarDate<'a>(pub &'a Date);

impl fmt::Display for CalendarDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d (%a)"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_calendar_date_includes_weekday() {
        assert_eq!(
            CalendarDate(&date(2024, 3, 1)).to_string(),
            "2024-03-01 (Fri)"
        );
    }
}
