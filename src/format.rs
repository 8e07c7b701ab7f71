//! Report format types for the chatstats library.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks. The CLI adds a terminal `table` format on top of these.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatstats::Result<()> {
//! use chatstats::format::{OutputFormat, to_format_string};
//! use chatstats::core::models::{OutputConfig, SortOrder};
//! use chatstats::parser::TranscriptParser;
//!
//! let dataset = TranscriptParser::new().analyze_str("01.01.24, 10:00 - Alice: hi");
//!
//! // Pick a writer by enum
//! let csv = to_format_string(&dataset, SortOrder::Descending, OutputFormat::Csv, &OutputConfig::new())?;
//! assert!(csv.starts_with("Member;Messages"));
//!
//! // Or detect it from the destination
//! let format = OutputFormat::from_path("report.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::{ChatDataset, OutputConfig, SortOrder};
use crate::error::ChatStatsError;

/// Report file format.
///
/// - [`Csv`](OutputFormat::Csv) - Semicolon table, opens in any spreadsheet
/// - [`Json`](OutputFormat::Json) - Summary object plus ranked member array
/// - [`Jsonl`](OutputFormat::Jsonl) - One member per line
///
/// # Example
///
/// ```rust
/// use chatstats::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// Pretty-printed JSON object
    Json,

    /// JSON Lines - one JSON object per line
    ///
    /// Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstats::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Cargo feature that provides the writer for this format.
    fn feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Errors
    ///
    /// Returns [`ChatStatsError::UnsupportedFormat`] for a missing or
    /// unknown extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstats::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/report.JSON").unwrap(), OutputFormat::Json);
    /// assert!(OutputFormat::from_path("report.txt").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatStatsError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatStatsError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a ranked report to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    dataset: &ChatDataset,
    order: SortOrder,
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatStatsError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(dataset, order, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(dataset, order, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(dataset, order, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(ChatStatsError::FeatureDisabled {
            format: format.extension(),
            feature: format.feature(),
        }),
    }
}

/// Renders a ranked report to a string in the specified format.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "json-output")]
/// # fn example() -> chatstats::Result<()> {
/// use chatstats::format::{OutputFormat, to_format_string};
/// use chatstats::core::models::{ChatDataset, OutputConfig, SortOrder};
///
/// let json = to_format_string(
///     &ChatDataset::default(),
///     SortOrder::Descending,
///     OutputFormat::Json,
///     &OutputConfig::new(),
/// )?;
/// assert!(json.contains("\"totalMembers\": 0"));
/// # Ok(())
/// # }
/// ```
#[allow(unused_variables)]
pub fn to_format_string(
    dataset: &ChatDataset,
    order: SortOrder,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ChatStatsError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(dataset, order, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(dataset, order, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(dataset, order, config),
        #[allow(unreachable_patterns)]
        _ => Err(ChatStatsError::FeatureDisabled {
            format: format.extension(),
            feature: format.feature(),
        }),
    }
}
