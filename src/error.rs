use crate::consts::MONTHS_PER_YEAR;
use crate::prelude::*;

/// A calendar component outside the range its calendar allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum InvalidDateError {
    /// Hijri years start at 1 AH.
    #[error("invalid year: {year} (Hijri years start at 1)")]
    InvalidYear { year: i32 },

    #[error("invalid month: {month} (must be 1-{})", MONTHS_PER_YEAR)]
    InvalidMonth { month: u8 },

    /// Day is zero or exceeds the month length for that year.
    #[error("invalid day {day} for {year}-{month:02} (max {max})")]
    InvalidDay { year: i32, month: u8, day: u8, max: u8 },

    /// Valid on paper but outside the range `chrono` can represent.
    #[error("year {year} is outside the representable range")]
    Unrepresentable { year: i32 },
}

/// Failure to read a date from its `YYYY-MM-DD` text form.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "{_0}")]
    Invalid(InvalidDateError),
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::EmptyInput | Self::InvalidFormat(_) => None,
        }
    }
}

impl From<InvalidDateError> for ParseError {
    fn from(err: InvalidDateError) -> Self {
        Self::Invalid(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_month_message() {
        let err = InvalidDateError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1-12)");
    }

    #[test]
    fn test_invalid_day_message() {
        let err = InvalidDateError::InvalidDay {
            year: 1445,
            month: 2,
            day: 30,
            max: 29,
        };
        assert_eq!(err.to_string(), "invalid day 30 for 1445-02 (max 29)");
    }

    #[test]
    fn test_invalid_year_message() {
        let err = InvalidDateError::InvalidYear { year: 0 };
        assert_eq!(err.to_string(), "invalid year: 0 (Hijri years start at 1)");
    }

    #[test]
    fn test_parse_error_wraps_invalid_date() {
        let err: ParseError = InvalidDateError::InvalidMonth { month: 0 }.into();
        assert_eq!(err.to_string(), "invalid month: 0 (must be 1-12)");
        assert!(std::error::Error::source(&err).is_some());
        assert!(std::error::Error::source(&ParseError::EmptyInput).is_none());
    }

    #[test]
    fn test_errors_are_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<InvalidDateError>();
        assert_impl::<ParseError>();
    }
}
