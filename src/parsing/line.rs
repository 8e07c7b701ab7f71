//! Message vs. system-notice line classification.
//!
//! Both line shapes share the `[DATE, TIME] - ` prefix:
//!
//! - Message: `01.01.24, 10:00 - Alice: hello`
//! - Bracketed: `[1/15/24, 10:30:45 AM] - Bob: hi`
//! - Notice: `15/3/23, 8:05 - Carol joined using this group's invite link`
//!
//! The message pattern is tried first; a line only falls through to the
//! notice pattern when there is no `sender: ` segment after the dash.

use std::sync::LazyLock;

use regex::Regex;

use super::date::CanonicalDate;
use super::text::clean_text;
use crate::core::models::{Identity, ParsedMessage};

// [DATE, TIME] - Sender: Body
static MESSAGE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[?([0-9]{1,2}[/.][0-9]{1,2}[/.][0-9]{2,4})[,\s]+([0-9]{1,2}:[0-9]{1,2}(?::[0-9]{2})?(?:\s?[APap]\.?[Mm]\.?)?)\]?\s-\s([^:]+):\s(.+)$",
    )
    .unwrap()
});

// [DATE, TIME] - Body
static NOTICE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[?([0-9]{1,2}[/.][0-9]{1,2}[/.][0-9]{2,4})[,\s]+([0-9]{1,2}:[0-9]{1,2}(?::[0-9]{2})?(?:\s?[APap]\.?[Mm]\.?)?)\]?\s-\s(.+)$",
    )
    .unwrap()
});

/// A system notice: the text after the dash, with no sender field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemNotice {
    pub date: CanonicalDate,
    pub time: String,
    pub body: String,
}

/// Classification result for a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Message(ParsedMessage),
    Notice(SystemNotice),
    /// Matched neither grammar; contributes nothing.
    Unrecognized,
}

/// Classifies one raw transcript line.
///
/// The line is cleaned first. Sender names are normalized into an
/// [`Identity`] and dates canonicalized; the grammar only admits ASCII
/// digits in the date token, so canonicalization cannot fail for a line that
/// matched.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::{LineKind, classify_line};
///
/// match classify_line("01.01.24, 10:00 - Alice: hello") {
///     LineKind::Message(msg) => {
///         assert_eq!(msg.sender.as_str(), "Alice");
///         assert_eq!(msg.date.as_str(), "01.01.2024");
///         assert_eq!(msg.body, "hello");
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn classify_line(raw: &str) -> LineKind {
    let line = clean_text(raw);

    if let Some(caps) = MESSAGE_LINE.captures(&line) {
        let Ok(date) = CanonicalDate::parse(&caps[1]) else {
            return LineKind::Unrecognized;
        };
        let sender = Identity::new(&caps[3]);
        if sender.as_str().is_empty() {
            return LineKind::Unrecognized;
        }
        return LineKind::Message(ParsedMessage {
            date,
            time: caps[2].trim().to_string(),
            sender,
            body: caps[4].trim().to_string(),
        });
    }

    if let Some(caps) = NOTICE_LINE.captures(&line) {
        let Ok(date) = CanonicalDate::parse(&caps[1]) else {
            return LineKind::Unrecognized;
        };
        return LineKind::Notice(SystemNotice {
            date,
            time: caps[2].trim().to_string(),
            body: clean_text(&caps[3]),
        });
    }

    LineKind::Unrecognized
}
