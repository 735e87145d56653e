//! Announcement filtering entry points.
//!
//! # Responsibility
//! - Expose the pure query/category filter over the announcement store.
//! - Keep result shaping and memoization inside core.

pub mod filter;
