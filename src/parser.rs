//! Whole-transcript parsing.
//!
//! [`TranscriptParser`] runs every line through
//! [`classify_line`](crate::parsing::classify_line), turns system notices into
//! membership events with its [`MembershipMatcher`], and hands the resulting
//! event stream to [`aggregate`].
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::parser::TranscriptParser;
//! use chatstats::core::filter::{DateWindow, apply_window};
//!
//! let parser = TranscriptParser::new();
//! let dataset = parser.analyze("group_chat.txt")?;
//!
//! let recent = apply_window(&dataset, DateWindow::LastMonth, false);
//! println!("{} of {} members wrote last month", recent.active_members, recent.total_members);
//! # Ok(())
//! # }
//! ```
//!
//! # Line Handling
//!
//! | Line | Result |
//! |------|--------|
//! | `DATE, TIME - Sender: body` | [`ChatEvent::Message`] |
//! | `DATE, TIME - X joined the group` | [`ChatEvent::Membership`] |
//! | `DATE, TIME - X changed the subject` | dropped |
//! | continuation lines, blank lines | dropped |

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::config::TranscriptConfig;
use crate::core::aggregator::aggregate;
use crate::core::models::{ChatDataset, ChatEvent};
use crate::error::{ChatStatsError, Result};
use crate::parsing::{LineKind, MembershipMatcher, classify_line};

/// Parser for plain-text group chat transcripts.
///
/// Stateless apart from its compiled templates; one instance can parse any
/// number of transcripts, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    matcher: MembershipMatcher,
}

impl TranscriptParser {
    /// Creates a parser with the built-in English and Turkish templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with extra membership templates.
    ///
    /// # Errors
    ///
    /// Returns [`ChatStatsError::InvalidPattern`] if an extra template does
    /// not compile or captures nothing.
    pub fn with_config(config: TranscriptConfig) -> Result<Self> {
        Ok(Self {
            matcher: MembershipMatcher::with_config(&config)?,
        })
    }

    /// Extracts the meaningful events from transcript text, in order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstats::parser::TranscriptParser;
    /// use chatstats::core::models::ChatEvent;
    ///
    /// let events = TranscriptParser::new().events_str(
    ///     "01.01.24, 10:00 - Alice: hi\n\
    ///      a wrapped second line\n\
    ///      01.01.24, 10:05 - Bob left",
    /// );
    /// assert_eq!(events.len(), 2);
    /// assert!(matches!(events[1], ChatEvent::Membership(_)));
    /// ```
    pub fn events_str(&self, content: &str) -> Vec<ChatEvent> {
        let mut events = Vec::new();
        let mut discarded = 0usize;

        for (number, line) in content.lines().enumerate() {
            match classify_line(line) {
                LineKind::Message(msg) => events.push(ChatEvent::Message(msg)),
                LineKind::Notice(notice) => match self.matcher.extract(&notice.body) {
                    Some(event) => events.push(ChatEvent::Membership(event)),
                    None => {
                        trace!(line = number + 1, body = %notice.body, "ignoring system notice");
                        discarded += 1;
                    }
                },
                LineKind::Unrecognized => {
                    if !line.trim().is_empty() {
                        trace!(line = number + 1, "discarding unrecognized line");
                    }
                    discarded += 1;
                }
            }
        }

        debug!(events = events.len(), discarded, "parsed transcript");
        events
    }

    /// Reads a transcript file and extracts its events.
    ///
    /// # Errors
    ///
    /// Returns [`ChatStatsError::Io`] if the file cannot be read, or
    /// [`ChatStatsError::Utf8`] if it is not text.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<Vec<ChatEvent>> {
        let content = read_transcript(path.as_ref())?;
        Ok(self.events_str(&content))
    }

    /// Extracts events from transcript text.
    ///
    /// Never fails; provided for symmetry with [`parse`](Self::parse).
    pub fn parse_str(&self, content: &str) -> Result<Vec<ChatEvent>> {
        Ok(self.events_str(content))
    }

    /// Reads a transcript file and builds its base dataset.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse).
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<ChatDataset> {
        Ok(aggregate(self.parse(path)?))
    }

    /// Builds the base dataset from transcript text.
    ///
    /// Text that matches nothing yields an empty dataset with zero counts.
    pub fn analyze_str(&self, content: &str) -> ChatDataset {
        aggregate(self.events_str(content))
    }
}

/// Reads a file and rejects anything that is not UTF-8 text.
fn read_transcript(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes)
        .map_err(|e| ChatStatsError::utf8(format!("transcript '{}'", path.display()), e))
}
