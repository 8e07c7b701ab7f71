//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Report formats, including the terminal table
//! - [`LogLevel`] - Diagnostic verbosity on stderr
//! - [`render_table`] - Plain-text ranking for the terminal
//!
//! # Example
//!
//! ```rust
//! use chatstats::cli::OutputFormat;
//!
//! assert_eq!(OutputFormat::Json.file_format().unwrap().extension(), "json");
//! assert!(OutputFormat::Table.file_format().is_none());
//! ```

use std::fmt::Write as _;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{ReportConfig, TranscriptConfig};
use crate::core::filter::DateWindow;
use crate::core::models::{ChatDataset, OutputConfig, SortOrder};

/// Count messages per member of an exported group chat and find the ones
/// who never write.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats chat.txt
    chatstats chat.txt -w last-month --show-silent
    chatstats chat.txt --sort asc -f csv -o report.csv
    chatstats chat.txt -o report.json --dates --messages
    chatstats chat.txt --join-pattern '(?P<subject>.+) присоединился'")]
pub struct Args {
    /// Path to the exported transcript (.txt)
    pub input: String,

    /// Time window: all-time, last-week, last-month, last-3-months,
    /// last-6-months, last-year
    #[arg(short, long, value_name = "WINDOW", default_value = "all-time")]
    pub window: DateWindow,

    /// List members with no messages in the window
    #[arg(long)]
    pub show_silent: bool,

    /// Ranking direction: desc (most active first) or asc
    #[arg(long, value_name = "ORDER", default_value = "desc")]
    pub sort: SortOrder,

    /// Report format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    ///
    /// With the table format, the file format is taken from the extension.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Include first/last message dates (all dates in JSON)
    #[arg(long)]
    pub dates: bool,

    /// Include message bodies (JSON formats only)
    #[arg(long)]
    pub messages: bool,

    /// Extra join phrasing (regex capturing the member name); repeatable
    #[arg(long, value_name = "REGEX")]
    pub join_pattern: Vec<String>,

    /// Extra leave phrasing (regex capturing the member name); repeatable
    #[arg(long, value_name = "REGEX")]
    pub leave_pattern: Vec<String>,

    /// Diagnostic verbosity on stderr
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

impl Args {
    /// Parser configuration built from `--join-pattern`/`--leave-pattern`.
    pub fn transcript_config(&self) -> TranscriptConfig {
        let config = self
            .join_pattern
            .iter()
            .fold(TranscriptConfig::new(), |c, p| c.with_join_pattern(p));
        self.leave_pattern
            .iter()
            .fold(config, |c, p| c.with_leave_pattern(p))
    }

    /// View configuration built from `--window`, `--show-silent`, `--sort`.
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::new()
            .with_window(self.window)
            .with_show_silent(self.show_silent)
            .with_sort_order(self.sort)
    }

    /// Detail configuration built from `--dates` and `--messages`.
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig {
            include_dates: self.dates,
            include_messages: self.messages,
        }
    }
}

/// Report format options.
///
/// - [`Table`](OutputFormat::Table) - Aligned plain text for the terminal
/// - [`Csv`](OutputFormat::Csv) - Semicolon-delimited table
/// - [`Json`](OutputFormat::Json) - Summary object plus ranked members
/// - [`Jsonl`](OutputFormat::Jsonl) - One member per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned plain-text table (default)
    #[default]
    Table,

    /// CSV with semicolon delimiter
    Csv,

    /// Pretty-printed JSON
    Json,

    /// JSON Lines - one member object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl OutputFormat {
    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["table", "csv", "json", "jsonl"]
    }

    /// The library writer for this format, or `None` for the table.
    pub fn file_format(self) -> Option<crate::format::OutputFormat> {
        match self {
            OutputFormat::Table => None,
            OutputFormat::Csv => Some(crate::format::OutputFormat::Csv),
            OutputFormat::Json => Some(crate::format::OutputFormat::Json),
            OutputFormat::Jsonl => Some(crate::format::OutputFormat::Jsonl),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "Table"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

/// Diagnostic verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing_subscriber::filter::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing_subscriber::filter::LevelFilter::ERROR,
            LogLevel::Warn => tracing_subscriber::filter::LevelFilter::WARN,
            LogLevel::Info => tracing_subscriber::filter::LevelFilter::INFO,
            LogLevel::Debug => tracing_subscriber::filter::LevelFilter::DEBUG,
            LogLevel::Trace => tracing_subscriber::filter::LevelFilter::TRACE,
        }
    }
}

/// Renders the ranked members as an aligned plain-text table.
///
/// Shares are percentages of the messages in this view. Silent members are
/// tagged so they stand out in long lists.
///
/// # Example
///
/// ```rust
/// use chatstats::cli::render_table;
/// use chatstats::core::models::{OutputConfig, SortOrder};
/// use chatstats::parser::TranscriptParser;
///
/// let dataset = TranscriptParser::new().analyze_str("01.01.24, 10:00 - Alice: hi");
/// let table = render_table(&dataset, SortOrder::Descending, &OutputConfig::new());
/// assert!(table.lines().nth(2).unwrap().contains("Alice"));
/// ```
pub fn render_table(dataset: &ChatDataset, order: SortOrder, config: &OutputConfig) -> String {
    let rows = dataset.ranked(order);
    if rows.is_empty() {
        return "   (no members)\n".to_string();
    }

    let total = dataset.total_messages();
    let name_width = rows
        .iter()
        .map(|(member, _)| member.as_str().chars().count())
        .max()
        .unwrap_or(0)
        .max("Member".len());
    let rank_width = rows.len().to_string().len().max(1);

    let mut out = String::new();
    let _ = write!(
        out,
        "{:>rank_width$}  {:<name_width$}  {:>8}  {:>7}",
        "#", "Member", "Messages", "Share"
    );
    if config.include_dates {
        let _ = write!(out, "  {:<10}  {:<10}", "First", "Last");
    }
    out.push('\n');
    let rule_width = out.chars().count() - 1;
    out.push_str(&"─".repeat(rule_width));
    out.push('\n');

    for (i, (member, stats)) in rows.iter().enumerate() {
        let _ = write!(
            out,
            "{:>rank_width$}  {:<name_width$}  {:>8}  {:>6.2}%",
            i + 1,
            member.as_str(),
            stats.message_count,
            stats.share_of(total)
        );
        if config.include_dates {
            let first = stats.first_date().map(|d| d.as_str()).unwrap_or("-");
            let last = stats.last_date().map(|d| d.as_str()).unwrap_or("-");
            let _ = write!(out, "  {first:<10}  {last:<10}");
        }
        if stats.is_silent {
            out.push_str("  (silent)");
        }
        out.push('\n');
    }

    out
}
