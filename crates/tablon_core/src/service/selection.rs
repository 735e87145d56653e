//! Selection state for the interactive announcements widget.
//!
//! # Responsibility
//! - Hold the current query text, category selector and selected record id.
//! - Apply the filter engine (memoized) when the render layer asks for the
//!   visible subset.
//!
//! # Invariants
//! - State changes happen only through the transition methods below; there is
//!   no undo, no history, no multi-selection.
//! - `set_query` stores the raw text verbatim; normalization happens inside
//!   the filter engine at read time.
//! - A selected id that does not resolve in the store reads as "no selection"
//!   (modal closed); the state layer never validates existence on write.

use crate::model::announcement::{Announcement, AnnouncementId, CategoryFilter};
use crate::search::filter::FilterMemo;
use crate::store::AnnouncementStore;
use log::debug;

/// Mutable widget state: query, category selector and modal selection.
///
/// Created with defaults at widget mount and discarded at unmount; never
/// persisted and never shared across widget instances.
#[derive(Debug, Default)]
pub struct SelectionState {
    query: String,
    category: CategoryFilter,
    selected: Option<AnnouncementId>,
    memo: FilterMemo,
}

impl SelectionState {
    /// Creates state with defaults: empty query, `All` category, no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the query text unconditionally.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Replaces the category selector unconditionally.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        debug!("event=category_changed module=service status=ok category={category:?}");
    }

    /// Marks one record id as selected, opening the detail modal.
    ///
    /// Ids absent from the store are accepted here; they resolve to `None`
    /// at read time.
    pub fn select(&mut self, id: impl Into<AnnouncementId>) {
        self.selected = Some(id.into());
    }

    /// Clears the selection, closing the detail modal.
    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    /// Current raw query text, as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current category selector.
    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    /// Currently selected record id, if any (unvalidated).
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Returns the visible subset for the current `(query, category)` pair.
    ///
    /// Memoized: repeated calls without a state change and against the same
    /// store reuse the previous result; a different store recomputes.
    pub fn visible<'a>(&mut self, store: &'a AnnouncementStore) -> Vec<&'a Announcement> {
        self.memo.apply(store.records(), &self.query, self.category)
    }

    /// Resolves the selected id against the store.
    ///
    /// `None` when nothing is selected or the id matches no record.
    pub fn selected_announcement<'a>(
        &self,
        store: &'a AnnouncementStore,
    ) -> Option<&'a Announcement> {
        self.selected.as_deref().and_then(|id| store.get(id))
    }

    /// Whether the detail modal should be open: a selection exists AND it
    /// resolves to a record.
    pub fn is_modal_open(&self, store: &AnnouncementStore) -> bool {
        self.selected_announcement(store).is_some()
    }
}
