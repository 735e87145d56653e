//! Announcement store: the static JSON data boundary.
//!
//! # Responsibility
//! - Load the announcement dataset once, before the first filter call.
//! - Validate id uniqueness at construction time.
//! - Expose read-only, order-preserving access to the records.
//!
//! # Invariants
//! - The store is immutable after construction; no API mutates records.
//! - Record order is the data-source order and is never re-sorted.
//! - Duplicate ids are rejected at load, not discovered later at lookup.

use crate::model::announcement::{Announcement, AnnouncementId};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type StoreResult<T> = Result<T, StoreError>;

/// Load-time error for the announcement data boundary.
#[derive(Debug)]
pub enum StoreError {
    /// Data file could not be read.
    Io(std::io::Error),
    /// Data file is not a valid JSON announcement array.
    Parse(serde_json::Error),
    /// Two records share the same id.
    DuplicateId(AnnouncementId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read announcement data: {err}"),
            Self::Parse(err) => write!(f, "invalid announcement data: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate announcement id: `{id}`"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Immutable, ordered collection of announcement records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementStore {
    records: Vec<Announcement>,
}

impl AnnouncementStore {
    /// Builds a store from already-parsed records.
    ///
    /// # Errors
    /// - [`StoreError::DuplicateId`] when two records share an id.
    pub fn from_records(records: Vec<Announcement>) -> StoreResult<Self> {
        for (index, record) in records.iter().enumerate() {
            let clash = records[..index].iter().any(|seen| seen.id == record.id);
            if clash {
                return Err(StoreError::DuplicateId(record.id.clone()));
            }
        }

        info!(
            "event=store_loaded module=store status=ok records={}",
            records.len()
        );
        Ok(Self { records })
    }

    /// Parses a JSON array of announcements and builds a store.
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        let records: Vec<Announcement> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Reads and parses an announcement data file.
    pub fn from_json_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Returns all records in data-source order.
    pub fn records(&self) -> &[Announcement] {
        &self.records
    }

    /// Looks up one record by stable id.
    pub fn get(&self, id: &str) -> Option<&Announcement> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
