//! Text and identity normalization.
//!
//! Every line and every captured name passes through [`clean_text`] before any
//! pattern is applied. Sender names and membership subjects additionally go
//! through [`normalize_identity`], which folds phone-number spellings into one
//! canonical rendering so the same participant is counted once.

use std::sync::LazyLock;

use regex::Regex;

/// Country code (2-3 digits) followed by 3-3-2-2 digit groups, with optional
/// `+` and free internal whitespace.
static PHONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?([0-9]{2,3})\s*([0-9]{3})\s*([0-9]{3})\s*([0-9]{2})\s*([0-9]{2})").unwrap()
});

/// Invisible formatting characters that exports sprinkle around names and
/// line starts.
fn is_invisible(c: char) -> bool {
    matches!(c, '\u{200B}'..='\u{200D}' | '\u{FEFF}')
}

/// Removes zero-width characters and byte-order marks, then trims.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::clean_text;
///
/// assert_eq!(clean_text("\u{FEFF} Alice\u{200B} "), "Alice");
/// assert_eq!(clean_text("\u{200D}"), "");
/// ```
pub fn clean_text(text: &str) -> String {
    let stripped: String = text.chars().filter(|&c| !is_invisible(c)).collect();
    stripped.trim().to_string()
}

/// Canonicalizes a raw sender or membership subject.
///
/// Cleans the token and, if it contains a phone number, returns the number
/// as `+CC DDD DDD DD DD`. Anything else is returned cleaned but otherwise
/// unchanged.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::normalize_identity;
///
/// assert_eq!(normalize_identity("+90 532 123 45 67"), "+90 532 123 45 67");
/// assert_eq!(normalize_identity("90532 123 4567"), "+90 532 123 45 67");
/// assert_eq!(normalize_identity(" Alice "), "Alice");
/// ```
pub fn normalize_identity(raw: &str) -> String {
    let cleaned = clean_text(raw);

    match PHONE_NUMBER.captures(&cleaned) {
        Some(caps) => format!(
            "+{} {} {} {} {}",
            &caps[1], &caps[2], &caps[3], &caps[4], &caps[5]
        ),
        None => cleaned,
    }
}
