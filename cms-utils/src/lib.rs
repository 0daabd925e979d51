//! Shared utility functions for CMS crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::NaiveDate;

    /// ISO calendar date format: "YYYY-MM-DD"
    const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Length of a "YYYY-MM" month key.
    const MONTH_KEY_LEN: usize = 7;

    /// Get the "YYYY-MM" grouping key for an ISO date string.
    ///
    /// The key is the first seven characters of the string, taken as
    /// written: "2024-01-15 08:30:00", "2024-03" and
    /// "2024-02-01T01:00:00+02:00" give "2024-01", "2024-03" and "2024-02".
    /// Offsets are not applied. The prefix must be four digits, a dash and
    /// a month from 01 to 12.
    pub fn month_key(s: &str) -> Result<String, DateError> {
        let s = s.trim();
        let prefix = s
            .get(..MONTH_KEY_LEN)
            .filter(|prefix| is_month_shaped(prefix))
            .ok_or_else(|| DateError(s.to_string()))?;
        NaiveDate::parse_from_str(&format!("{}-01", prefix), DATE_FORMAT)
            .map_err(|_| DateError(s.to_string()))?;
        Ok(prefix.to_string())
    }

    fn is_month_shaped(prefix: &str) -> bool {
        prefix.bytes().enumerate().all(|(i, b)| match i {
            4 => b == b'-',
            _ => b.is_ascii_digit(),
        })
    }

}

/// Error types
pub mod error {
    use std::fmt;

    /// A date string that could not be parsed as an ISO date.
    #[derive(Debug, Clone, PartialEq)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {:?} is not an ISO date", self.0)
        }
    }

    impl std::error::Error for DateError {}
}
