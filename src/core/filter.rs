//! Trailing time windows over a finished dataset.
//!
//! [`apply_window`] derives a fresh view of a [`ChatDataset`] restricted to
//! the last week, month, quarter, half-year or year. The base dataset is
//! never modified, so switching windows back and forth is idempotent.
//!
//! # Window Arithmetic
//!
//! | Window | Label | Cutoff |
//! |--------|-------|--------|
//! | [`AllTime`](DateWindow::AllTime) | `all-time` | none |
//! | [`LastWeek`](DateWindow::LastWeek) | `last-week` | today − 7 days |
//! | [`LastMonth`](DateWindow::LastMonth) | `last-month` | today − 1 month |
//! | [`LastThreeMonths`](DateWindow::LastThreeMonths) | `last-3-months` | today − 3 months |
//! | [`LastSixMonths`](DateWindow::LastSixMonths) | `last-6-months` | today − 6 months |
//! | [`LastYear`](DateWindow::LastYear) | `last-year` | today − 12 months |
//!
//! Month arithmetic clamps to the end of the shorter month: one month before
//! 31 March is 28 (or 29) February. The cutoff day itself is inside the
//! window.
//!
//! # Example
//!
//! ```rust
//! use chatstats::core::filter::{DateWindow, apply_window_at};
//! use chatstats::parser::TranscriptParser;
//! use chrono::NaiveDate;
//!
//! let dataset = TranscriptParser::new().analyze_str(
//!     "01.01.24, 10:00 - Alice: old news\n\
//!      20.06.24, 10:00 - Bob: fresh",
//! );
//! let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
//!
//! let view = apply_window_at(&dataset, DateWindow::LastMonth, false, today);
//! assert_eq!(view.active_members, 1);
//! assert!(view.get("Alice").is_none());
//! assert_eq!(view.silent_members, 1);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::{Days, Local, Months, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::models::{ChatDataset, MemberStats};
use crate::error::ChatStatsError;

/// Trailing time window relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateWindow {
    /// No restriction
    #[default]
    AllTime,
    /// Last 7 days
    LastWeek,
    /// Last calendar month
    LastMonth,
    /// Last 3 calendar months
    #[serde(rename = "last-3-months")]
    LastThreeMonths,
    /// Last 6 calendar months
    #[serde(rename = "last-6-months")]
    LastSixMonths,
    /// Last 12 calendar months
    LastYear,
}

impl DateWindow {
    /// Returns the selector label (`all-time`, `last-week`, ...).
    pub fn label(&self) -> &'static str {
        match self {
            DateWindow::AllTime => "all-time",
            DateWindow::LastWeek => "last-week",
            DateWindow::LastMonth => "last-month",
            DateWindow::LastThreeMonths => "last-3-months",
            DateWindow::LastSixMonths => "last-6-months",
            DateWindow::LastYear => "last-year",
        }
    }

    /// Returns all windows, narrowest last.
    pub fn all() -> &'static [DateWindow] {
        &[
            DateWindow::AllTime,
            DateWindow::LastWeek,
            DateWindow::LastMonth,
            DateWindow::LastThreeMonths,
            DateWindow::LastSixMonths,
            DateWindow::LastYear,
        ]
    }

    /// Returns all accepted selector labels.
    pub fn all_names() -> &'static [&'static str] {
        &[
            "all-time",
            "last-week",
            "last-month",
            "last-3-months",
            "last-6-months",
            "last-year",
        ]
    }

    /// Earliest date inside the window, or `None` for [`AllTime`](Self::AllTime).
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        let shifted = match self {
            DateWindow::AllTime => return None,
            DateWindow::LastWeek => today.checked_sub_days(Days::new(7)),
            DateWindow::LastMonth => today.checked_sub_months(Months::new(1)),
            DateWindow::LastThreeMonths => today.checked_sub_months(Months::new(3)),
            DateWindow::LastSixMonths => today.checked_sub_months(Months::new(6)),
            DateWindow::LastYear => today.checked_sub_months(Months::new(12)),
        };
        // Only fails near the ends of chrono's range; treat as unbounded.
        Some(shifted.unwrap_or(NaiveDate::MIN))
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DateWindow {
    type Err = ChatStatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all-time" | "all" => Ok(DateWindow::AllTime),
            "last-week" | "week" => Ok(DateWindow::LastWeek),
            "last-month" | "month" => Ok(DateWindow::LastMonth),
            "last-3-months" => Ok(DateWindow::LastThreeMonths),
            "last-6-months" => Ok(DateWindow::LastSixMonths),
            "last-year" | "year" => Ok(DateWindow::LastYear),
            _ => Err(ChatStatsError::invalid_window(s, DateWindow::all_names())),
        }
    }
}

/// Restricts a dataset to a window ending today (local time).
///
/// See [`apply_window_at`].
pub fn apply_window(
    dataset: &ChatDataset,
    window: DateWindow,
    show_silent: bool,
) -> Cow<'_, ChatDataset> {
    apply_window_at(dataset, window, show_silent, Local::now().date_naive())
}

/// Restricts a dataset to a window ending on `today`.
///
/// For [`DateWindow::AllTime`] the base dataset is returned as is.
/// Otherwise each member keeps only messages dated on or after the cutoff:
///
/// - Members with messages in the window get `message_count` equal to the
///   number kept and `is_silent = false`.
/// - Members without are listed only when `show_silent` is set, with empty
///   lists and `is_silent = true`.
/// - Dates with no calendar meaning (`99.99.9999`) are skipped with a
///   warning and never fall inside a window.
///
/// `silent_members` is measured against every member of the base dataset
/// whether or not silent rows are listed, and `total_members` is that same
/// roster size, so `active_members + silent_members == total_members`.
pub fn apply_window_at(
    dataset: &ChatDataset,
    window: DateWindow,
    show_silent: bool,
    today: NaiveDate,
) -> Cow<'_, ChatDataset> {
    let Some(cutoff) = window.cutoff(today) else {
        return Cow::Borrowed(dataset);
    };

    let mut stats = IndexMap::with_capacity(dataset.stats.len());
    let mut active_members = 0;

    for (member, base) in &dataset.stats {
        let mut kept = MemberStats::default();

        for (body, date) in base.messages.iter().zip(&base.dates) {
            match date.to_naive_date() {
                Ok(day) if day >= cutoff => kept.record(body.clone(), date.clone()),
                Ok(_) => {}
                Err(_) => warn!(%member, %date, "skipping unparseable message date"),
            }
        }

        if kept.message_count > 0 {
            active_members += 1;
            stats.insert(member.clone(), kept);
        } else if show_silent {
            stats.insert(member.clone(), MemberStats::silent());
        }
    }

    let roster = dataset.stats.len();
    debug!(%window, %cutoff, active_members, roster, "applied date window");

    Cow::Owned(ChatDataset {
        stats,
        total_members: roster,
        active_members,
        silent_members: roster - active_members,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Identity;
    use crate::parsing::CanonicalDate;
    use tracing_test::traced_test;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn member(dates: &[&str]) -> MemberStats {
        let mut stats = MemberStats::silent();
        for (i, d) in dates.iter().enumerate() {
            stats.record(format!("m{i}"), CanonicalDate::parse(d).unwrap());
        }
        stats.is_silent = dates.is_empty();
        stats
    }

    fn dataset() -> ChatDataset {
        let mut stats = IndexMap::new();
        stats.insert(Identity::new("Alice"), member(&["01.01.2024", "25.06.2024"]));
        stats.insert(Identity::new("Bob"), member(&["10.03.2024"]));
        stats.insert(Identity::new("Carol"), member(&[]));
        ChatDataset {
            stats,
            total_members: 3,
            active_members: 2,
            silent_members: 1,
        }
    }

    #[test]
    fn test_cutoffs() {
        let today = ymd(2024, 6, 30);
        assert_eq!(DateWindow::AllTime.cutoff(today), None);
        assert_eq!(DateWindow::LastWeek.cutoff(today), Some(ymd(2024, 6, 23)));
        assert_eq!(DateWindow::LastMonth.cutoff(today), Some(ymd(2024, 5, 30)));
        assert_eq!(DateWindow::LastThreeMonths.cutoff(today), Some(ymd(2024, 3, 30)));
        assert_eq!(DateWindow::LastSixMonths.cutoff(today), Some(ymd(2023, 12, 30)));
        assert_eq!(DateWindow::LastYear.cutoff(today), Some(ymd(2023, 6, 30)));
    }

    #[test]
    fn test_month_end_clamps() {
        assert_eq!(
            DateWindow::LastMonth.cutoff(ymd(2024, 3, 31)),
            Some(ymd(2024, 2, 29))
        );
        assert_eq!(
            DateWindow::LastYear.cutoff(ymd(2024, 2, 29)),
            Some(ymd(2023, 2, 28))
        );
    }

    #[test]
    fn test_all_time_is_identity() {
        let base = dataset();
        let view = apply_window_at(&base, DateWindow::AllTime, false, ymd(2024, 6, 30));
        assert!(matches!(view, Cow::Borrowed(_)));
        assert_eq!(*view, base);
    }

    #[test]
    fn test_last_week_hides_silent_by_default() {
        let base = dataset();
        let view = apply_window_at(&base, DateWindow::LastWeek, false, ymd(2024, 6, 30));

        assert_eq!(view.stats.len(), 1);
        let alice = view.get("Alice").unwrap();
        assert_eq!(alice.message_count, 1);
        assert_eq!(alice.messages, ["m1"]);
        assert_eq!(alice.dates[0].as_str(), "25.06.2024");
        assert!(!alice.is_silent);

        assert_eq!(view.active_members, 1);
        assert_eq!(view.silent_members, 2);
        assert_eq!(view.total_members, 3);
    }

    #[test]
    fn test_show_silent_lists_everyone() {
        let base = dataset();
        let view = apply_window_at(&base, DateWindow::LastWeek, true, ymd(2024, 6, 30));

        assert_eq!(view.stats.len(), 3);
        let bob = view.get("Bob").unwrap();
        assert_eq!(bob.message_count, 0);
        assert!(bob.dates.is_empty());
        assert!(bob.messages.is_empty());
        assert!(bob.is_silent);
        // Counters don't depend on the display flag.
        assert_eq!(view.active_members, 1);
        assert_eq!(view.silent_members, 2);
    }

    #[test]
    fn test_cutoff_day_is_inclusive() {
        let base = dataset();
        let view = apply_window_at(&base, DateWindow::LastWeek, false, ymd(2024, 7, 2));
        assert_eq!(view.get("Alice").unwrap().message_count, 1);

        let view = apply_window_at(&base, DateWindow::LastWeek, false, ymd(2024, 7, 3));
        assert!(view.get("Alice").is_none());
    }

    #[test]
    fn test_base_is_untouched() {
        let base = dataset();
        let snapshot = base.clone();
        let _ = apply_window_at(&base, DateWindow::LastMonth, true, ymd(2024, 6, 30));
        let _ = apply_window_at(&base, DateWindow::LastYear, false, ymd(2024, 6, 30));
        assert_eq!(base, snapshot);
    }

    #[traced_test]
    #[test]
    fn test_unparseable_dates_skipped_and_logged() {
        let mut stats = IndexMap::new();
        stats.insert(Identity::new("Dora"), member(&["99.99.9999", "29.06.2024"]));
        let base = ChatDataset {
            stats,
            total_members: 1,
            active_members: 1,
            silent_members: 0,
        };

        let view = apply_window_at(&base, DateWindow::LastYear, false, ymd(2024, 6, 30));
        let dora = view.get("Dora").unwrap();
        assert_eq!(dora.message_count, 1);
        assert_eq!(dora.dates[0].as_str(), "29.06.2024");
        assert!(logs_contain("skipping unparseable message date"));
    }

    #[test]
    fn test_window_labels_round_trip() {
        for window in DateWindow::all() {
            assert_eq!(window.label().parse::<DateWindow>().unwrap(), *window);
        }
        assert_eq!("WEEK".parse::<DateWindow>().unwrap(), DateWindow::LastWeek);
        assert!("fortnight".parse::<DateWindow>().unwrap_err().is_invalid_window());
    }

    #[test]
    fn test_window_serde_uses_labels() {
        let json = serde_json::to_string(&DateWindow::LastThreeMonths).unwrap();
        assert_eq!(json, "\"last-3-months\"");
        let parsed: DateWindow = serde_json::from_str("\"last-year\"").unwrap();
        assert_eq!(parsed, DateWindow::LastYear);
    }
}
