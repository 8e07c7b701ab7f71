//! Core analysis logic for chatstats.
//!
//! This module contains:
//! - [`models`] - Identities, parsed events, and the statistics table
//! - [`aggregator`] - The single-pass fold that builds a [`ChatDataset`]
//! - [`filter`] - Trailing time windows over a finished dataset
//! - [`output`] - Report writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatstats::core::{
//!     ChatDataset, DateWindow, OutputConfig, SortOrder,
//!     aggregate, apply_window,
//!     write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod aggregator;
pub mod filter;
pub mod models;
pub mod output;

// Re-export main types for convenience
pub use aggregator::aggregate;
pub use filter::{DateWindow, apply_window, apply_window_at};
pub use models::{
    ChatDataset, ChatEvent, Identity, MemberStats, MembershipEvent, MembershipKind, OutputConfig,
    ParsedMessage, SortOrder,
};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
