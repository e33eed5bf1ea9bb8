//! Full-name splitting across the first three input columns.

use serde::Serialize;

/// Name components in lastname / firstname / surname order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FullName {
    pub lastname: String,
    pub firstname: String,
    pub surname: String,
}

/// Join the three name columns and re-split them on whitespace.
///
/// Column boundaries are discarded, so `"Ivanov Ivan", "", ""` and
/// `"Ivanov", "Ivan", ""` parse identically. Tokens past the third are dropped.
pub fn parse_name(first: &str, second: &str, third: &str) -> FullName {
    let joined = [first, second, third].join(" ");
    let mut tokens = joined.split_whitespace().map(str::to_string);
    FullName {
        lastname: tokens.next().unwrap_or_default(),
        firstname: tokens.next().unwrap_or_default(),
        surname: tokens.next().unwrap_or_default(),
    }
}
