//! Core logic for the Tablón announcements widget.
//! This crate is the single source of truth for filtering and selection
//! invariants; rendering is an external collaborator.

pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::announcement::{
    Achievement, Announcement, AnnouncementId, Category, CategoryFilter,
};
pub use search::filter::{filter_announcements, normalize_query, FilterMemo};
pub use service::presentation::{
    category_badge, filter_options, BadgeVariant, CategoryBadge, FilterOption,
};
pub use service::selection::SelectionState;
pub use store::{AnnouncementStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
