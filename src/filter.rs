//! Query normalization and substring filtering
//!
//! Both the query and every shortcode are normalized before comparison, so
//! `Café`, `cafe` and ` CAFE ` all match the same entries.

use crate::glyphs::Entry;
use nucleo::chars;
use std::collections::HashSet;

/// Combining diacritical marks block
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Normalize text for matching
///
/// Folds Latin diacritics to their base letter, drops combining marks,
/// lower-cases and trims surrounding whitespace.
#[must_use]
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .chars()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .map(chars::normalize)
        .flat_map(char::to_lowercase)
        .collect();

    folded.trim().to_string()
}

/// Compute the filtered view for `query` as indices into `entries`
///
/// An empty (normalized) query yields every entry in source order. Otherwise
/// the result holds the entries whose normalized key contains the normalized
/// query, in source order, with entries whose normalized key was already seen
/// dropped.
#[must_use]
pub fn filter_indices(entries: &[Entry], query: &str) -> Vec<usize> {
    let needle = normalize(query);
    if needle.is_empty() {
        return (0..entries.len()).collect();
    }

    let mut seen = HashSet::new();
    entries
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| {
            let key = normalize(&entry.key);
            (key.contains(&needle) && seen.insert(key)).then_some(idx)
        })
        .collect()
}
