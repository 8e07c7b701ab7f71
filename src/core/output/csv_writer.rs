//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::round_share;
use crate::core::models::{ChatDataset, MemberStats, OutputConfig, SortOrder};
use crate::error::Result;

/// Writes the ranked member table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: Depends on OutputConfig
///   - Basic: `Member`, `Messages`, `Share`, `Silent`
///   - With dates: `Member`, `Messages`, `Share`, `Silent`, `FirstDate`, `LastDate`
/// - `Share` is a percentage of all messages in the view, two decimals
/// - Message bodies are never written; use JSON for those
/// - Encoding: UTF-8
pub fn write_csv(
    dataset: &ChatDataset,
    order: SortOrder,
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(dataset, order, file, config)
}

/// Converts the ranked member table to a CSV string.
///
/// Same format as `write_csv`, but returns a String instead of writing to file.
pub fn to_csv(dataset: &ChatDataset, order: SortOrder, config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(dataset, order, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(
    dataset: &ChatDataset,
    order: SortOrder,
    sink: W,
    config: &OutputConfig,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(build_header(config))?;

    let total = dataset.total_messages();
    for (member, stats) in dataset.ranked(order) {
        writer.write_record(build_record(member.as_str(), stats, total, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = vec!["Member", "Messages", "Share", "Silent"];
    if config.include_dates {
        header.push("FirstDate");
        header.push("LastDate");
    }
    header
}

/// Build CSV record for a single member.
fn build_record(
    member: &str,
    stats: &MemberStats,
    total_messages: usize,
    config: &OutputConfig,
) -> Vec<String> {
    let mut record = vec![
        member.to_string(),
        stats.message_count.to_string(),
        format!("{:.2}", round_share(stats.share_of(total_messages))),
        stats.is_silent.to_string(),
    ];

    if config.include_dates {
        record.push(stats.first_date().map(ToString::to_string).unwrap_or_default());
        record.push(stats.last_date().map(ToString::to_string).unwrap_or_default());
    }

    record
}
