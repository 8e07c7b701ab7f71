//! Configuration types for parsing and reporting.
//!
//! Plain builder-style structs for library usage, without any CLI framework
//! dependencies. All of them are serde-serializable so callers can keep them
//! in their own settings files.
//!
//! - [`TranscriptConfig`] - extra join/leave phrasings for other locales
//! - [`ReportConfig`] - time window, silent-member visibility, sort order
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{ReportConfig, TranscriptConfig};
//! use chatstats::core::filter::DateWindow;
//! use chatstats::parser::TranscriptParser;
//!
//! let config = TranscriptConfig::new()
//!     .with_join_pattern(r"(?P<subject>.+) присоединился")
//!     .with_leave_pattern(r"(?P<subject>.+) вышел");
//! let parser = TranscriptParser::with_config(config)?;
//!
//! let report = ReportConfig::new()
//!     .with_window(DateWindow::LastMonth)
//!     .with_show_silent(true);
//! # Ok::<(), chatstats::ChatStatsError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::core::filter::DateWindow;
use crate::core::models::SortOrder;

/// Configuration for transcript parsing.
///
/// The built-in membership templates cover English and Turkish exports.
/// Extra templates are tried after the built-ins, in the order added. Each
/// must capture the member name, either in a group named `subject` or in
/// its first group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranscriptConfig {
    /// Additional join phrasings (regex)
    #[serde(default)]
    pub extra_join_patterns: Vec<String>,

    /// Additional leave phrasings (regex)
    #[serde(default)]
    pub extra_leave_patterns: Vec<String>,
}

impl TranscriptConfig {
    /// Creates a new configuration with built-in templates only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a join template.
    #[must_use]
    pub fn with_join_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.extra_join_patterns.push(pattern.into());
        self
    }

    /// Appends a leave template.
    #[must_use]
    pub fn with_leave_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.extra_leave_patterns.push(pattern.into());
        self
    }

    /// Returns `true` if any extra template is configured.
    pub fn has_extra_patterns(&self) -> bool {
        !self.extra_join_patterns.is_empty() || !self.extra_leave_patterns.is_empty()
    }
}

/// Configuration for the view presented to the reader.
///
/// # Example
///
/// ```rust
/// use chatstats::config::ReportConfig;
/// use chatstats::core::filter::DateWindow;
/// use chatstats::core::models::SortOrder;
///
/// let config = ReportConfig::new()
///     .with_window(DateWindow::LastThreeMonths)
///     .with_sort_order(SortOrder::Ascending);
/// assert!(!config.show_silent);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Trailing time window (default: all-time)
    #[serde(default)]
    pub window: DateWindow,

    /// Keep members with no messages in the window (default: false)
    #[serde(default)]
    pub show_silent: bool,

    /// Ranking direction (default: most active first)
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl ReportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time window.
    #[must_use]
    pub fn with_window(mut self, window: DateWindow) -> Self {
        self.window = window;
        self
    }

    /// Sets whether silent members are listed.
    #[must_use]
    pub fn with_show_silent(mut self, show: bool) -> Self {
        self.show_silent = show;
        self
    }

    /// Sets the ranking direction.
    #[must_use]
    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }
}
