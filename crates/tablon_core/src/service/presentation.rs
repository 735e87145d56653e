//! Presentation lookups for the render layer.
//!
//! # Responsibility
//! - Map each category to its display label and badge variant.
//! - Publish the ordered filter-button options as one static table.
//!
//! # Invariants
//! - `category_badge` is total: every category value, including `Unknown`,
//!   resolves to a badge without panicking.
//! - Labels are the Spanish display strings the board has always shown.

use crate::model::announcement::{Category, CategoryFilter};

/// Visual variant of a badge, matching the render layer's design system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Blue, the neutral default.
    Info,
    /// Green.
    Success,
    /// Amber.
    Warning,
    /// Red; used by the modal close control, not by any category.
    Danger,
}

impl BadgeVariant {
    /// Returns the variant name consumed by the render layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// Display label and badge variant for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryBadge {
    pub label: &'static str,
    pub variant: BadgeVariant,
}

/// Resolves the badge shown on a card for the record's category.
///
/// `Unknown` (out-of-enum data reaching the render layer) falls back to the
/// neutral "Anuncio" badge instead of failing.
pub fn category_badge(category: Category) -> CategoryBadge {
    match category {
        Category::General => CategoryBadge {
            label: "General",
            variant: BadgeVariant::Info,
        },
        Category::Convocatorias => CategoryBadge {
            label: "Convocatoria",
            variant: BadgeVariant::Success,
        },
        Category::Comunicados => CategoryBadge {
            label: "Comunicado",
            variant: BadgeVariant::Warning,
        },
        Category::Unknown => CategoryBadge {
            label: "Anuncio",
            variant: BadgeVariant::Info,
        },
    }
}

/// One entry of the category filter button row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub label: &'static str,
    pub value: CategoryFilter,
}

/// Ordered options for the category filter controls, wildcard first.
pub fn filter_options() -> &'static [FilterOption] {
    static OPTIONS: [FilterOption; 4] = [
        FilterOption {
            label: "Todos",
            value: CategoryFilter::All,
        },
        FilterOption {
            label: "General",
            value: CategoryFilter::Only(Category::General),
        },
        FilterOption {
            label: "Convocatorias",
            value: CategoryFilter::Only(Category::Convocatorias),
        },
        FilterOption {
            label: "Comunicados",
            value: CategoryFilter::Only(Category::Comunicados),
        },
    ];
    &OPTIONS
}
