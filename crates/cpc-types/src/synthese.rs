//! Activity synthesis.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ConfigurationError;

/// A calendar month in the `YYYYMM` form the synthesis endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SyntheseMonth {
    first_day: NaiveDate,
}

impl SyntheseMonth {
    /// Creates a month from its year and number (1-12).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidMonth`] for an impossible month.
    pub fn new(year: i32, month: u32) -> Result<Self, ConfigurationError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or_else(|| ConfigurationError::InvalidMonth(format!("{year:04}{month:02}")))
    }

    /// Returns the year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// Returns the month number (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// Returns the first day of the month.
    #[must_use]
    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }
}

impl std::fmt::Display for SyntheseMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.first_day.format("%Y%m"))
    }
}

impl FromStr for SyntheseMonth {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigurationError::InvalidMonth(s.to_string()));
        }
        NaiveDate::parse_from_str(&format!("{s}01"), "%Y%m%d")
            .map(|first_day| Self { first_day })
            .map_err(|_| ConfigurationError::InvalidMonth(s.to_string()))
    }
}

/// Activity counters for one parliamentarian.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheseEntry {
    /// Full display name.
    #[serde(default)]
    pub nom: String,
    /// Lookup key, when the API includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Parliamentary group acronym.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groupe_sigle: Option<String>,
    /// Activity counters and every other field returned by the API.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl SyntheseEntry {
    /// Returns a counter as an integer (`semaines_presence`, `amendements_proposes`, ...).
    #[must_use]
    pub fn counter(&self, name: &str) -> Option<i64> {
        match self.extra.get(name)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// Activity synthesis for a whole legislature or a single month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synthese {
    /// The month covered, `None` for the whole legislature.
    #[serde(skip)]
    pub month: Option<SyntheseMonth>,
    /// One entry per parliamentarian, in remote order.
    pub entries: Vec<SyntheseEntry>,
}

impl Synthese {
    /// Returns the entry for the given slug.
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<&SyntheseEntry> {
        self.entries
            .iter()
            .find(|e| e.slug.as_deref() == Some(slug))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the synthesis has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
