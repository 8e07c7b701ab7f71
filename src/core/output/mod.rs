//! Report writers.
//!
//! Every writer takes a dataset view (usually the result of
//! [`apply_window`](crate::core::filter::apply_window)) and a
//! [`SortOrder`](crate::core::models::SortOrder), and emits one row per
//! member in ranked order:
//! - [`write_csv`] / [`to_csv`] - semicolon-delimited table - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - pretty object with summary and members - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one member object per line - requires `json-output` feature
//!
//! # Choosing a Format
//!
//! | Format | Use Case | Message bodies |
//! |--------|----------|----------------|
//! | CSV | Spreadsheets, quick diffing | never |
//! | JSON | Dashboards, APIs | with `include_messages` |
//! | JSONL | Log pipelines, `jq` | with `include_messages` |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::core::output::{write_csv, write_json, to_jsonl};
//! use chatstats::core::models::{OutputConfig, SortOrder};
//! use chatstats::parser::TranscriptParser;
//!
//! let dataset = TranscriptParser::new().analyze("chat.txt")?;
//! let config = OutputConfig::new().with_dates();
//!
//! write_csv(&dataset, SortOrder::Descending, "report.csv", &config)?;
//! write_json(&dataset, SortOrder::Descending, "report.json", &config)?;
//! let lines = to_jsonl(&dataset, SortOrder::Ascending, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

#[cfg(feature = "json-output")]
use serde::Serialize;

#[cfg(feature = "json-output")]
use crate::core::models::{ChatDataset, Identity, MemberStats, OutputConfig};

/// One member row as emitted by the JSON writers.
///
/// Only includes the detail fields enabled in [`OutputConfig`].
#[cfg(feature = "json-output")]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MemberRow<'a> {
    rank: usize,
    member: &'a Identity,
    message_count: usize,
    share: f64,
    is_silent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dates: Option<Vec<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    messages: Option<&'a [String]>,
}

#[cfg(feature = "json-output")]
impl<'a> MemberRow<'a> {
    pub(crate) fn new(
        rank: usize,
        member: &'a Identity,
        stats: &'a MemberStats,
        total_messages: usize,
        config: &OutputConfig,
    ) -> Self {
        let dates = config.include_dates;
        Self {
            rank,
            member,
            message_count: stats.message_count,
            share: round_share(stats.share_of(total_messages)),
            is_silent: stats.is_silent,
            first_date: stats.first_date().filter(|_| dates).map(|d| d.as_str()),
            last_date: stats.last_date().filter(|_| dates).map(|d| d.as_str()),
            dates: dates.then(|| stats.dates.iter().map(|d| d.as_str()).collect()),
            messages: config
                .include_messages
                .then_some(stats.messages.as_slice()),
        }
    }
}

/// Ranked rows for a dataset, numbered from 1.
#[cfg(feature = "json-output")]
pub(crate) fn member_rows<'a>(
    dataset: &'a ChatDataset,
    order: crate::core::models::SortOrder,
    config: &OutputConfig,
) -> Vec<MemberRow<'a>> {
    let total = dataset.total_messages();
    dataset
        .ranked(order)
        .into_iter()
        .enumerate()
        .map(|(i, (member, stats))| MemberRow::new(i + 1, member, stats, total, config))
        .collect()
}

/// Share percentage rounded to two decimals.
#[cfg(any(feature = "csv-output", feature = "json-output"))]
pub(crate) fn round_share(share: f64) -> f64 {
    (share * 100.0).round() / 100.0
}
