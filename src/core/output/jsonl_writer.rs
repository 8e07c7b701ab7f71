//! JSON Lines (JSONL) output writer.
//!
//! One member object per line, in ranked order. Handy for `jq`, log
//! shippers, and appending reports from several chats into one file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::member_rows;
use crate::core::models::{ChatDataset, OutputConfig, SortOrder};
use crate::error::Result;

/// Writes the ranked members to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"rank":1,"member":"Alice","messageCount":2,"share":66.67,"isSilent":false}
/// {"rank":2,"member":"Bob","messageCount":1,"share":33.33,"isSilent":false}
/// ```
///
/// Roster counters are not repeated on every line; use JSON for those.
pub fn write_jsonl(
    dataset: &ChatDataset,
    order: SortOrder,
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(dataset, order, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts the ranked members to a JSONL string.
///
/// Same format as `write_jsonl`, but returns a String instead of writing to file.
pub fn to_jsonl(dataset: &ChatDataset, order: SortOrder, config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(dataset, order, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(
    dataset: &ChatDataset,
    order: SortOrder,
    writer: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    for row in member_rows(dataset, order, config) {
        let line = serde_json::to_string(&row)?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
