//! Spelling normalization for user-supplied names.
//!
//! Transliterated Sanskrit has many accepted spellings. Inputs are folded
//! to the spelling used by the lookup tables before any comparison.

use crate::error::NameError;

/// Alternate spelling → table spelling. Compared case-insensitively.
const ALIASES: [(&str, &str); 15] = [
    ("shashthi", "Shasthi"),
    ("shashti", "Shasthi"),
    ("sashti", "Shasthi"),
    ("shasti", "Shasthi"),
    ("poornima", "Purnima"),
    ("pournami", "Purnima"),
    ("pournima", "Purnima"),
    ("amavase", "Amavasya"),
    ("amavasye", "Amavasya"),
    ("ashvina", "Ashwayuja"),
    ("ashwin", "Ashwayuja"),
    ("ashwina", "Ashwayuja"),
    ("margashirsha", "Margashira"),
    ("pausha", "Pushya"),
    ("vaishakh", "Vaishakha"),
];

fn fold_token(token: &str) -> String {
    let lowered = token.to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, canonical)| canonical.to_lowercase())
        .unwrap_or(lowered)
}

/// Fold whitespace, case and known alternate spellings.
///
/// Each whitespace-separated word is folded on its own, so
/// `Shukla Shashthi` becomes `shukla shasthi`. The result is lowercase so
/// it can be compared directly against lowercased table names.
pub fn fold_name(input: &str) -> String {
    input
        .split_whitespace()
        .map(fold_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether `target` names (a part of) `computed` after folding both.
pub fn name_matches(computed: &str, target: &str) -> bool {
    let target = fold_name(target);
    !target.is_empty() && fold_name(computed).contains(&target)
}

/// Look up a table entry by folded name.
pub(crate) fn parse_from_table<T: Copy>(
    kind: &'static str,
    input: &str,
    table: &[T],
    name_of: impl Fn(T) -> &'static str,
) -> Result<T, NameError> {
    let folded = fold_name(input);
    table
        .iter()
        .copied()
        .find(|&entry| name_of(entry).to_lowercase() == folded)
        .ok_or_else(|| NameError::new(kind, input))
}
