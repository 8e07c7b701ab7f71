//! Line-level parsing utilities.
//!
//! Everything here works on one line (or one captured fragment) at a time:
//!
//! - [`text`] - invisible-character stripping and identity normalization
//! - [`date`] - canonical `DD.MM.YYYY` dates
//! - [`line`] - message vs. system-notice classification
//! - [`membership`] - join/leave extraction from notice bodies
//!
//! [`TranscriptParser`](crate::parser::TranscriptParser) strings these
//! together over a whole transcript.

pub mod date;
pub mod line;
pub mod membership;
pub mod text;

// Re-export commonly used items
pub use date::CanonicalDate;
pub use line::{LineKind, SystemNotice, classify_line};
pub use membership::{MembershipMatcher, extract_membership};
pub use text::{clean_text, normalize_identity};
