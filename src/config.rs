//! Host-supplied settings for [`HijriCalendar`](crate::HijriCalendar).

use crate::convert::Alignment;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Number of upcoming events the calendar page lists.
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// What the calendar does with out-of-range date components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Reject with [`InvalidDateError`](crate::InvalidDateError).
    #[default]
    #[display(fmt = "strict")]
    Strict,
    /// Let the arithmetic spill into neighbouring months.
    #[display(fmt = "permissive")]
    Permissive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub validation:     Validation,
    pub alignment:      Alignment,
    pub upcoming_limit: usize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            validation:     Validation::default(),
            alignment:      Alignment::default(),
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
        }
    }
}

impl CalendarConfig {
    /// Settings that reproduce the historic web calendar exactly: no input
    /// checks and the noon-referenced pivot.
    pub const fn legacy() -> Self {
        Self {
            validation:     Validation::Permissive,
            alignment:      Alignment::Legacy,
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
        }
    }

    #[must_use]
    pub const fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    #[must_use]
    pub const fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub const fn with_upcoming_limit(mut self, upcoming_limit: usize) -> Self {
        self.upcoming_limit = upcoming_limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CalendarConfig::default();
        assert_eq!(config.validation, Validation::Strict);
        assert_eq!(config.alignment, Alignment::Civil);
        assert_eq!(config.upcoming_limit, 5);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: CalendarConfig = serde_json::from_str(r#"{"alignment": "legacy"}"#).unwrap();
        assert_eq!(config.alignment, Alignment::Legacy);
        assert_eq!(config.validation, Validation::Strict);
        assert_eq!(config.upcoming_limit, DEFAULT_UPCOMING_LIMIT);

        let config: CalendarConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CalendarConfig::default());
    }

    #[test]
    fn test_deserialize_rejects_unknown_variant() {
        let result: Result<CalendarConfig, _> =
            serde_json::from_str(r#"{"validation": "lenient"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = CalendarConfig::legacy().with_upcoming_limit(3);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"validation":"permissive","alignment":"legacy","upcoming_limit":3}"#
        );
        let parsed: CalendarConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_builders() {
        let config = CalendarConfig::default()
            .with_validation(Validation::Permissive)
            .with_alignment(Alignment::Legacy);
        assert_eq!(config, CalendarConfig::legacy());
    }
}
