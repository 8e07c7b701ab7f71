//! Canonical `DD.MM.YYYY` transcript dates.
//!
//! Exports write dates as `D.M.YY`, `DD/MM/YYYY` and every mix in between.
//! [`CanonicalDate`] is the one spelling the rest of the crate works with.
//! Canonicalization is purely textual: `99.99.9999` is a well-formed
//! canonical date that simply has no calendar meaning, which
//! [`CanonicalDate::to_naive_date`] reports.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ChatStatsError, Result};

/// A zero-padded `DD.MM.YYYY` date string.
///
/// Only constructible through [`CanonicalDate::parse`] (or `FromStr`), so
/// every value has the canonical shape.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::CanonicalDate;
///
/// let date = CanonicalDate::parse("5/3/24")?;
/// assert_eq!(date.as_str(), "05.03.2024");
/// # Ok::<(), chatstats::ChatStatsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalDate(String);

impl CanonicalDate {
    /// Canonicalizes a raw `D[D][./]M[M][./]YY[YY]` token.
    ///
    /// Day and month are padded to two digits, a two-digit year is prefixed
    /// with `20`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatStatsError::InvalidDate`] when the token does not have
    /// three numeric components of the expected widths.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let parts: Vec<&str> = raw.split(['.', '/']).map(str::trim).collect();

        let [day, month, year] = parts[..] else {
            return Err(ChatStatsError::invalid_date(raw));
        };

        let numeric = |s: &str, widths: &[usize]| {
            widths.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
        };
        if !numeric(day, &[1, 2]) || !numeric(month, &[1, 2]) || !numeric(year, &[2, 4]) {
            return Err(ChatStatsError::invalid_date(raw));
        }

        let full_year = if year.len() == 2 {
            format!("20{year}")
        } else {
            year.to_string()
        };

        Ok(Self(format!("{day:0>2}.{month:0>2}.{full_year}")))
    }

    /// Returns the canonical string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interprets the date on the calendar.
    ///
    /// # Errors
    ///
    /// Returns [`ChatStatsError::InvalidDate`] for dates that are well-formed
    /// but impossible, like `31.02.2024` or `99.99.9999`.
    pub fn to_naive_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%d.%m.%Y")
            .map_err(|_| ChatStatsError::invalid_date(self.0.clone()))
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CanonicalDate {
    type Err = ChatStatsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CanonicalDate {
    type Error = ChatStatsError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CanonicalDate> for String {
    fn from(date: CanonicalDate) -> String {
        date.0
    }
}

impl From<NaiveDate> for CanonicalDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.format("%d.%m.%Y").to_string())
    }
}
