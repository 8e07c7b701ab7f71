//! Core data models: identities, parsed events, and the statistics table.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::parsing::{CanonicalDate, normalize_identity};

/// Canonical participant key.
///
/// Two raw tokens that normalize to the same string are the same
/// participant; this is the only identity-equivalence rule.
///
/// # Example
///
/// ```rust
/// use chatstats::Identity;
///
/// assert_eq!(Identity::new("90532 123 4567"), Identity::new("+90 532 123 45 67"));
/// assert_eq!(Identity::new("\u{200B}Alice ").as_str(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Normalizes a raw sender or subject token into an identity.
    pub fn new(raw: &str) -> Self {
        Self(normalize_identity(raw))
    }

    /// Returns the canonical display string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Identity {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identity {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// A recognized message line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// Canonical message date.
    pub date: CanonicalDate,
    /// Time token as written in the export (not interpreted).
    pub time: String,
    /// Normalized sender.
    pub sender: Identity,
    /// Message body.
    pub body: String,
}

/// Direction of a membership change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipKind {
    /// Someone joined or was added.
    Join,
    /// Someone left or was removed.
    Leave,
}

/// A join or leave extracted from a system notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipEvent {
    pub kind: MembershipKind,
    pub subject: Identity,
}

impl MembershipEvent {
    pub fn join(subject: Identity) -> Self {
        Self {
            kind: MembershipKind::Join,
            subject,
        }
    }

    pub fn leave(subject: Identity) -> Self {
        Self {
            kind: MembershipKind::Leave,
            subject,
        }
    }
}

/// One meaningful transcript line, in original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChatEvent {
    Message(ParsedMessage),
    Membership(MembershipEvent),
}

/// Per-member counters.
///
/// `message_count`, `messages.len()` and `dates.len()` are always equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub message_count: usize,
    pub messages: Vec<String>,
    pub dates: Vec<CanonicalDate>,
    pub is_silent: bool,
}

impl MemberStats {
    /// A zero-message entry.
    pub fn silent() -> Self {
        Self {
            is_silent: true,
            ..Self::default()
        }
    }

    /// Appends one message, keeping the three sequences in step.
    pub fn record(&mut self, body: impl Into<String>, date: CanonicalDate) {
        self.messages.push(body.into());
        self.dates.push(date);
        self.message_count += 1;
        self.is_silent = false;
    }

    /// Percentage of `total_messages` sent by this member.
    ///
    /// Returns `0.0` when there are no messages at all.
    pub fn share_of(&self, total_messages: usize) -> f64 {
        if total_messages == 0 {
            return 0.0;
        }
        self.message_count as f64 / total_messages as f64 * 100.0
    }

    /// Date of the member's first message, in transcript order.
    pub fn first_date(&self) -> Option<&CanonicalDate> {
        self.dates.first()
    }

    /// Date of the member's latest message, in transcript order.
    pub fn last_date(&self) -> Option<&CanonicalDate> {
        self.dates.last()
    }
}

/// Direction for ranking members by message count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Most active first.
    #[default]
    #[serde(rename = "desc", alias = "descending")]
    Descending,
    /// Least active first.
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
}

impl SortOrder {
    /// Returns the opposite order.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Descending => SortOrder::Ascending,
            SortOrder::Ascending => SortOrder::Descending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Descending => write!(f, "desc"),
            SortOrder::Ascending => write!(f, "asc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "desc" | "descending" => Ok(SortOrder::Descending),
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            _ => Err(format!("Unknown sort order: '{s}'. Expected one of: desc, asc")),
        }
    }
}

/// The analysis result: per-member statistics plus roster counters.
///
/// Iteration over `stats` follows the order in which identities first
/// appeared in the transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatDataset {
    pub stats: IndexMap<Identity, MemberStats>,
    pub total_members: usize,
    pub active_members: usize,
    pub silent_members: usize,
}

impl ChatDataset {
    /// Looks up a member by canonical name.
    pub fn get(&self, member: &str) -> Option<&MemberStats> {
        self.stats.get(member)
    }

    /// Sum of message counts over all members in this view.
    pub fn total_messages(&self) -> usize {
        self.stats.values().map(|s| s.message_count).sum()
    }

    /// Members sorted by message count.
    ///
    /// The sort is stable: members with equal counts keep their map order.
    pub fn ranked(&self, order: SortOrder) -> Vec<(&Identity, &MemberStats)> {
        let mut rows: Vec<_> = self.stats.iter().collect();
        match order {
            SortOrder::Descending => {
                rows.sort_by(|(_, a), (_, b)| b.message_count.cmp(&a.message_count));
            }
            SortOrder::Ascending => {
                rows.sort_by(|(_, a), (_, b)| a.message_count.cmp(&b.message_count));
            }
        }
        rows
    }

    /// Returns `true` if no member was found.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// Controls which per-member details reports include.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Include message dates (full list in JSON, first/last in CSV).
    pub include_dates: bool,
    /// Include message bodies (JSON formats only).
    pub include_messages: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_dates(mut self) -> Self {
        self.include_dates = true;
        self
    }

    #[must_use]
    pub fn with_messages(mut self) -> Self {
        self.include_messages = true;
        self
    }
}
