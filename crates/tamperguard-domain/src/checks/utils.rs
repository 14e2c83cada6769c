use std::collections::BTreeSet;
use std::fmt::Display;

/// Case-insensitive membership, for identifiers the platform treats as case-insensitive.
///
/// Folds ASCII letters only. Package and installer ids are ASCII, so non-ASCII letters must
/// match exactly.
pub fn contains_ignore_case(accepted: &BTreeSet<String>, value: &str) -> bool {
    accepted.iter().any(|a| a.eq_ignore_ascii_case(value))
}

/// `[a, b, c]` rendering for diagnostics.
pub fn list<T: Display>(values: impl IntoIterator<Item = T>) -> String {
    let items: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}
