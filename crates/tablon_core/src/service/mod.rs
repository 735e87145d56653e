//! Core use-case services for the announcements widget.
//!
//! # Responsibility
//! - Own the mutable selection state and its transition rules.
//! - Provide the presentation lookups the render layer calls directly.
//! - Keep the render layer decoupled from the filter internals.

pub mod presentation;
pub mod selection;
