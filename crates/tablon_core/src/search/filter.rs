//! In-memory announcement filter.
//!
//! # Responsibility
//! - Compute the visible subset for a `(query, category)` pair.
//! - Memoize the last result, since filtering re-runs on every keystroke.
//!
//! # Invariants
//! - Output is a stable subsequence of the input; record order is preserved.
//! - A record appears in the output iff it passes BOTH the category and the
//!   text predicate.
//! - Query normalization (trim + lowercase) happens here, at read time; the
//!   stored selection state keeps the raw text.

use crate::model::announcement::{Announcement, CategoryFilter};
use log::debug;

/// Normalizes user query text for matching: trim, then lowercase.
///
/// An empty normalized query disables the text predicate entirely.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Returns the ordered subsequence of `records` matching the query text and
/// category selector.
///
/// # Contract
/// - Pure: identical inputs yield identical output, with no side effects.
/// - Category predicate is an exact match (`All` admits everything).
/// - Text predicate is a case-insensitive substring match against `title` or
///   `summary` only; blank queries match every record.
pub fn filter_announcements<'a>(
    records: &'a [Announcement],
    query: &str,
    category: CategoryFilter,
) -> Vec<&'a Announcement> {
    matching_indices(records, query, category)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}

fn matching_indices(records: &[Announcement], query: &str, category: CategoryFilter) -> Vec<usize> {
    let needle = normalize_query(query);

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| category.admits(record.category))
        .filter(|(_, record)| matches_text(record, &needle))
        .map(|(index, _)| index)
        .collect()
}

fn matches_text(record: &Announcement, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.title.to_lowercase().contains(needle) || record.summary.to_lowercase().contains(needle)
}

/// Last-key/last-result cache for [`filter_announcements`].
///
/// Keyed by `(records, query, category)`. Records are identified by slice
/// address and length: the store is immutable after load, so an unchanged
/// identity means unchanged contents. Handing the memo a different slice
/// recomputes instead of replaying cached indices.
#[derive(Debug, Default)]
pub struct FilterMemo {
    key: Option<MemoKey>,
    hits: Vec<usize>,
}

#[derive(Debug, PartialEq, Eq)]
struct MemoKey {
    records_addr: usize,
    records_len: usize,
    query: String,
    category: CategoryFilter,
}

impl MemoKey {
    fn new(records: &[Announcement], query: &str, category: CategoryFilter) -> Self {
        Self {
            records_addr: records.as_ptr() as usize,
            records_len: records.len(),
            query: query.to_string(),
            category,
        }
    }
}

impl FilterMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the visible subset, recomputing only when the `(records,
    /// query, category)` key differs from the previous call.
    pub fn apply<'a>(
        &mut self,
        records: &'a [Announcement],
        query: &str,
        category: CategoryFilter,
    ) -> Vec<&'a Announcement> {
        let key = MemoKey::new(records, query, category);

        if self.key.as_ref() != Some(&key) {
            self.hits = matching_indices(records, query, category);
            self.key = Some(key);
            debug!(
                "event=filter_recomputed module=search status=ok hits={} category={:?}",
                self.hits.len(),
                category
            );
        }

        self.hits.iter().map(|&index| &records[index]).collect()
    }
}
