//! Phone number canonicalisation to `+7(XXX)XXX-XX-XX[ доб.N]`.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Length of a full Russian number including the country digit.
pub const CANONICAL_DIGITS: usize = 11;

/// Marker placed in front of an extension in canonical output.
pub const EXTENSION_MARKER: &str = "доб.";

static EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:доб|ext)\.?\s*(\d+)").expect("valid regex"));

/// Splits an extension such as `доб. 1234` off the raw text.
///
/// The marker must start a word, so `text` or `next` never count. Returns the remaining text with every extension occurrence removed and the
/// digits of the first one.
pub fn split_extension(raw: &str) -> (Cow<'_, str>, Option<String>) {
    let extension = EXTENSION.captures(raw).map(|caps| caps[1].to_string());
    (EXTENSION.replace_all(raw, ""), extension)
}

/// Reformat a raw phone string.
///
/// Any 11-digit number is rendered with the `+7` country code, whatever its
/// first digit was. Other lengths keep their digits untouched, with a leading
/// `+` only when the text itself starts with one. A number that loses all its
/// digits is returned empty even when it had an extension.
pub fn format_phone(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let (main, extension) = split_extension(raw);
    let had_plus = main.trim_start().starts_with('+');
    let digits: String = main.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }

    let mut formatted = if digits.len() == CANONICAL_DIGITS {
        format!(
            "+7({}){}-{}-{}",
            &digits[1..4],
            &digits[4..7],
            &digits[7..9],
            &digits[9..11]
        )
    } else if had_plus {
        format!("+{digits}")
    } else {
        digits
    };

    if let Some(ext) = extension {
        formatted.push(' ');
        formatted.push_str(EXTENSION_MARKER);
        formatted.push_str(&ext);
    }
    formatted
}
