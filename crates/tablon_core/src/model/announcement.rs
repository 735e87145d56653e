//! Announcement domain model.
//!
//! # Responsibility
//! - Define the canonical announcement record and its category enumeration.
//! - Absorb out-of-enum category strings at the JSON parse boundary.
//!
//! # Invariants
//! - `id` is stable and unique within one store.
//! - A record's own `category` is always a concrete value; the wildcard lives
//!   only in [`CategoryFilter`], never on records.
//! - Unrecognized category strings deserialize to `Category::Unknown` instead
//!   of failing the whole data load.

use serde::{Deserialize, Serialize};

/// Stable identifier for an announcement record.
///
/// Kept as a type alias to make semantic intent explicit in signatures. Ids
/// are opaque strings assigned by the upstream data source.
pub type AnnouncementId = String;

/// Concrete category of an announcement record.
///
/// The wire format is the lowercase category name. Values outside the known
/// set map to [`Category::Unknown`], which downstream presentation resolves
/// to a neutral fallback badge rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Board-wide general notices.
    General,
    /// Calls for applications (scholarships, programs, positions).
    Convocatorias,
    /// Official communications from the institution.
    Comunicados,
    /// Catch-all for category strings the data source should not emit.
    #[serde(other)]
    Unknown,
}

impl Category {
    /// Returns the lowercase wire name for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Convocatorias => "convocatorias",
            Self::Comunicados => "comunicados",
            Self::Unknown => "unknown",
        }
    }
}

/// Category selector applied by the filter engine.
///
/// Distinct from [`Category`]: the wildcard `All` is a filter value only and
/// never appears on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every record passes the category predicate.
    #[default]
    All,
    /// Only records whose category equals the selected one pass.
    Only(Category),
}

impl CategoryFilter {
    /// Returns whether a record with the given category passes this filter.
    ///
    /// Exact match; category values are a closed enumeration, not user text.
    pub fn admits(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

/// Achievement entry shown in the announcement detail modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub name: String,
    pub difficulty: String,
    pub potential: String,
}

/// Canonical announcement record.
///
/// Loaded once from the static JSON data source and never mutated. `title`
/// and `summary` are the only searchable fields; `tags` and `date_label` are
/// display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    /// Stable opaque ID used for selection and modal resolution.
    pub id: AnnouncementId,
    /// Headline text; searched case-insensitively.
    pub title: String,
    /// Short description; searched case-insensitively.
    pub summary: String,
    /// Exactly one concrete category per record.
    pub category: Category,
    /// Display-only labels; never searched.
    pub tags: Vec<String>,
    /// Pre-formatted display string, serialized as `dateLabel`. Not a parsed
    /// date; no chronological ordering is derived from it.
    pub date_label: String,
    /// Detail-view entries; absent in the wire format means empty.
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}
