//! # Chatstats
//!
//! A Rust library for counting per-member activity in exported group chat
//! transcripts and finding the members who never write.
//!
//! ## Overview
//!
//! Chatstats reads the plain-text export of a group chat (the
//! `DATE, TIME - Sender: message` format used by WhatsApp and similar apps)
//! and builds one statistics table:
//!
//! - **Message counts** per member, with every message body and date
//! - **Membership tracking** from join/leave notices (English and Turkish
//!   built in, more via [`TranscriptConfig`])
//! - **Silent members**: people who joined but never wrote
//! - **Time windows**: the same table restricted to the last week, month,
//!   quarter, half-year or year
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! let transcript = "\
//! 01.01.24, 10:00 - Alice: hello
//! 01.01.24, 10:01 - Bob: hi there
//! 02.01.24, 09:00 - Alice: second message
//! 15/3/23, 8:5 - Carol joined using this group's invite link";
//!
//! let dataset = TranscriptParser::new().analyze_str(transcript);
//!
//! assert_eq!(dataset.get("Alice").unwrap().message_count, 2);
//! assert!(dataset.get("Carol").unwrap().is_silent);
//! assert_eq!(dataset.total_members, 3);
//! assert_eq!(dataset.active_members + dataset.silent_members, dataset.total_members);
//!
//! for (member, stats) in dataset.ranked(SortOrder::Descending) {
//!     println!("{member}: {}", stats.message_count);
//! }
//! ```
//!
//! ## Time Windows
//!
//! ```rust,no_run
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let dataset = TranscriptParser::new().analyze("chat.txt")?;
//!
//!     // Base dataset is never modified; views are cheap to recompute.
//!     let month = apply_window(&dataset, DateWindow::LastMonth, true);
//!     write_json(&month, SortOrder::Descending, "last_month.json", &OutputConfig::new())?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser): file/text to dataset
//! - [`parsing`] - Line-level building blocks
//!   - [`classify_line`](parsing::classify_line), [`MembershipMatcher`](parsing::MembershipMatcher),
//!     [`CanonicalDate`](parsing::CanonicalDate), [`normalize_identity`](parsing::normalize_identity)
//! - [`config`] - [`TranscriptConfig`], [`ReportConfig`]
//! - [`core`] - Core types and functionality
//!   - [`core::models`] - [`ChatDataset`], [`MemberStats`], [`Identity`], [`OutputConfig`]
//!   - [`core::aggregator`] - [`aggregate`](core::aggregate)
//!   - [`core::filter`] - [`DateWindow`](core::DateWindow), [`apply_window`](core::apply_window)
//!   - [`core::output`] - CSV, JSON and JSONL report writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format-dispatching writers
//! - [`cli`] - CLI types (`cli` feature)
//! - [`error`] - Unified error types ([`ChatStatsError`], [`Result`])
//! - [`prelude`] - Convenient re-exports
//!
//! ## Features
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `csv-output` | [`write_csv`](core::output::write_csv), [`to_csv`](core::output::to_csv) |
//! | `json-output` | JSON and JSONL writers |
//! | `cli` | the `chatstats` binary and [`cli`] module |
//! | `gen-test` | the `gen_test` transcript generator |

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use config::{ReportConfig, TranscriptConfig};
pub use core::models::{ChatDataset, Identity, MemberStats, OutputConfig};
pub use error::{ChatStatsError, Result};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{ChatStatsError, Result};

    // Parsing
    pub use crate::parser::TranscriptParser;
    pub use crate::parsing::CanonicalDate;

    // Configuration
    pub use crate::config::{ReportConfig, TranscriptConfig};

    // Models
    pub use crate::core::models::{
        ChatDataset, ChatEvent, Identity, MemberStats, MembershipEvent, MembershipKind,
        OutputConfig, SortOrder,
    };

    // Aggregation and windows
    pub use crate::core::aggregator::aggregate;
    pub use crate::core::filter::{DateWindow, apply_window, apply_window_at};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
