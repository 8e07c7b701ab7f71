//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::{MemberRow, member_rows};
use crate::core::models::{ChatDataset, OutputConfig, SortOrder};
use crate::error::Result;

/// Top-level JSON report: roster counters followed by ranked members.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    total_members: usize,
    active_members: usize,
    silent_members: usize,
    total_messages: usize,
    members: Vec<MemberRow<'a>>,
}

/// Writes the report to a pretty-printed JSON file.
///
/// # Format
/// ```json
/// {
///   "totalMembers": 3,
///   "activeMembers": 2,
///   "silentMembers": 1,
///   "totalMessages": 3,
///   "members": [
///     {"rank": 1, "member": "Alice", "messageCount": 2, "share": 66.67, "isSilent": false},
///     ...
///   ]
/// }
/// ```
pub fn write_json(
    dataset: &ChatDataset,
    order: SortOrder,
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(dataset, order, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the report to a pretty-printed JSON string.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(dataset: &ChatDataset, order: SortOrder, config: &OutputConfig) -> Result<String> {
    let report = JsonReport {
        total_members: dataset.total_members,
        active_members: dataset.active_members,
        silent_members: dataset.silent_members,
        total_messages: dataset.total_messages(),
        members: member_rows(dataset, order, config),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
