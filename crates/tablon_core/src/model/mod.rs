//! Domain model for the announcements board.
//!
//! # Responsibility
//! - Define canonical data structures shared by list, search and modal views.
//! - Keep the parse boundary for external JSON category values in one place.
//!
//! # Invariants
//! - Every announcement carries a stable, store-unique `AnnouncementId`.
//! - Records are immutable after the store is built; no model API mutates them.

pub mod announcement;
