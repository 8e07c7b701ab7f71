//! Join/leave extraction from system-notice bodies.
//!
//! Notices are matched against an ordered list of phrase templates. Join
//! templates are tried first, then leave templates; the first template that
//! captures a subject wins. Anything else (encryption banners, subject
//! changes, icon changes) yields no event.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::TranscriptConfig;
use crate::core::models::{Identity, MembershipEvent, MembershipKind};
use crate::error::{ChatStatsError, Result};

/// Built-in join phrasings, most specific first.
const JOIN_PATTERNS: &[&str] = &[
    // Turkish
    r"(?P<subject>.+) topluluk üzerinden katıldı",
    r"(?P<subject>.+) gruba katıldı",
    r"(?P<subject>.+) bu grubun davet bağlantısıyla katıldı",
    r"Siz (?P<subject>.+) kişisini eklediniz",
    r"(?P<subject>.+) kişisini eklediniz",
    // English
    r"(?P<subject>.+) joined using this group's invite link",
    r"(?P<subject>.+) joined from the community",
    r"(?P<subject>.+) joined the group",
    r"You added (?P<subject>.+)",
    r".+ added (?P<subject>.+)",
];

/// Built-in leave phrasings.
const LEAVE_PATTERNS: &[&str] = &[
    r"(?P<subject>.+) ayrıldı",
    r"(?P<subject>.+) left",
    r".+ removed (?P<subject>.+)",
];

static DEFAULT_MATCHER: LazyLock<MembershipMatcher> = LazyLock::new(|| {
    MembershipMatcher::from_patterns(JOIN_PATTERNS, LEAVE_PATTERNS).unwrap()
});

/// One phrase template: a regex plus which group holds the member name.
#[derive(Debug, Clone)]
struct Template {
    regex: Regex,
    subject_group: usize,
}

impl Template {
    fn compile(pattern: &str) -> Result<Self> {
        let regex =
            Regex::new(pattern).map_err(|e| ChatStatsError::invalid_pattern(pattern, e))?;

        let subject_group = match regex.capture_names().position(|n| n == Some("subject")) {
            Some(idx) => idx,
            None if regex.captures_len() > 1 => 1,
            None => {
                return Err(ChatStatsError::invalid_pattern(
                    pattern,
                    "pattern must capture the member name (use a group or `(?P<subject>...)`)",
                ));
            }
        };

        Ok(Self {
            regex,
            subject_group,
        })
    }

    fn subject<'a>(&self, body: &'a str) -> Option<&'a str> {
        self.regex
            .captures(body)
            .and_then(|caps| caps.get(self.subject_group))
            .map(|m| m.as_str())
    }
}

/// Ordered first-match template set.
///
/// Built-in templates always come first; templates from
/// [`TranscriptConfig`] are appended after them.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::MembershipMatcher;
/// use chatstats::core::models::MembershipKind;
///
/// let matcher = MembershipMatcher::new();
/// let event = matcher.extract("Carol joined using this group's invite link").unwrap();
/// assert_eq!(event.kind, MembershipKind::Join);
/// assert_eq!(event.subject.as_str(), "Carol");
///
/// assert!(matcher.extract("Alice changed the subject to \"Trip\"").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct MembershipMatcher {
    join: Vec<Template>,
    leave: Vec<Template>,
}

impl MembershipMatcher {
    /// Creates a matcher with the built-in templates only.
    pub fn new() -> Self {
        DEFAULT_MATCHER.clone()
    }

    /// Creates a matcher with the built-ins plus any extra templates from
    /// the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChatStatsError::InvalidPattern`] if an extra template does
    /// not compile or has no capture group.
    pub fn with_config(config: &TranscriptConfig) -> Result<Self> {
        let mut matcher = Self::new();
        for pattern in &config.extra_join_patterns {
            matcher.join.push(Template::compile(pattern)?);
        }
        for pattern in &config.extra_leave_patterns {
            matcher.leave.push(Template::compile(pattern)?);
        }
        Ok(matcher)
    }

    fn from_patterns(join: &[&str], leave: &[&str]) -> Result<Self> {
        Ok(Self {
            join: join.iter().map(|p| Template::compile(p)).collect::<Result<_>>()?,
            leave: leave.iter().map(|p| Template::compile(p)).collect::<Result<_>>()?,
        })
    }

    /// Extracts a membership event from a cleaned notice body.
    ///
    /// Returns `None` for informational notices. A subject that normalizes
    /// to an empty string is treated as no match.
    pub fn extract(&self, body: &str) -> Option<MembershipEvent> {
        let (kind, raw) = first_subject(&self.join, body)
            .map(|s| (MembershipKind::Join, s))
            .or_else(|| first_subject(&self.leave, body).map(|s| (MembershipKind::Leave, s)))?;

        let subject = Identity::new(raw);
        if subject.as_str().is_empty() {
            return None;
        }

        Some(match kind {
            MembershipKind::Join => MembershipEvent::join(subject),
            MembershipKind::Leave => MembershipEvent::leave(subject),
        })
    }
}

impl Default for MembershipMatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn first_subject<'a>(templates: &[Template], body: &'a str) -> Option<&'a str> {
    templates.iter().find_map(|t| t.subject(body))
}

/// Extracts a membership event using the built-in templates.
///
/// Shorthand for [`MembershipMatcher::new().extract(body)`](MembershipMatcher::extract).
pub fn extract_membership(body: &str) -> Option<MembershipEvent> {
    DEFAULT_MATCHER.extract(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join(body: &str) -> String {
        let event = extract_membership(body).expect("expected an event");
        assert_eq!(event.kind, MembershipKind::Join, "{body}");
        event.subject.to_string()
    }

    fn leave(body: &str) -> String {
        let event = extract_membership(body).expect("expected an event");
        assert_eq!(event.kind, MembershipKind::Leave, "{body}");
        event.subject.to_string()
    }

    #[test]
    fn test_english_joins() {
        assert_eq!(join("Carol joined using this group's invite link"), "Carol");
        assert_eq!(join("Dave joined the group"), "Dave");
        assert_eq!(join("Erin joined from the community"), "Erin");
        assert_eq!(join("You added Frank"), "Frank");
        assert_eq!(join("Alice added Grace"), "Grace");
    }

    #[test]
    fn test_turkish_joins() {
        assert_eq!(join("Ayşe topluluk üzerinden katıldı"), "Ayşe");
        assert_eq!(join("Mehmet gruba katıldı"), "Mehmet");
        assert_eq!(join("Zeynep bu grubun davet bağlantısıyla katıldı"), "Zeynep");
        assert_eq!(join("Siz Ali kişisini eklediniz"), "Ali");
        assert_eq!(join("Veli kişisini eklediniz"), "Veli");
    }

    #[test]
    fn test_leaves() {
        assert_eq!(leave("Bob left"), "Bob");
        assert_eq!(leave("Burak ayrıldı"), "Burak");
        assert_eq!(leave("Alice removed Ivan"), "Ivan");
    }

    #[test]
    fn test_join_checked_before_leave() {
        // Contains " left" but the join template matches first.
        assert_eq!(join("Bob, who left, joined the group"), "Bob, who left,");
    }

    #[test]
    fn test_phone_subjects_are_normalized() {
        assert_eq!(join("90532 123 4567 joined the group"), "+90 532 123 45 67");
        assert_eq!(leave("+90 532 123 45 67 left"), "+90 532 123 45 67");
    }

    #[test]
    fn test_informational_notices_ignored() {
        assert!(
            extract_membership(
                "Messages and calls are end-to-end encrypted. No one outside of this chat can read them."
            )
            .is_none()
        );
        assert!(extract_membership("Alice changed the subject to \"Weekend\"").is_none());
        assert!(extract_membership("Alice created group \"Book club\"").is_none());
    }

    #[test]
    fn test_blank_subject_ignored() {
        assert!(extract_membership("\u{200B} left").is_none());
    }

    #[test]
    fn test_extra_templates_appended() {
        let config = TranscriptConfig::new()
            .with_join_pattern(r"(?P<subject>.+) присоединился")
            .with_leave_pattern(r"(.+) вышел");
        let matcher = MembershipMatcher::with_config(&config).unwrap();

        let event = matcher.extract("Иван присоединился").unwrap();
        assert_eq!(event, MembershipEvent::join(Identity::new("Иван")));

        let event = matcher.extract("Иван вышел").unwrap();
        assert_eq!(event, MembershipEvent::leave(Identity::new("Иван")));

        // Built-ins still apply.
        assert!(matcher.extract("Bob left").is_some());
    }

    #[test]
    fn test_invalid_extra_templates_rejected() {
        let bad_syntax = TranscriptConfig::new().with_join_pattern("(unclosed");
        assert!(matches!(
            MembershipMatcher::with_config(&bad_syntax),
            Err(ChatStatsError::InvalidPattern { .. })
        ));

        let no_group = TranscriptConfig::new().with_leave_pattern("went away");
        assert!(matches!(
            MembershipMatcher::with_config(&no_group),
            Err(ChatStatsError::InvalidPattern { .. })
        ));
    }
}
