//! Error types for report model operations.

use thiserror::Error;

use crate::ids::RecordId;
use crate::section::SectionKey;

/// Errors raised while reading or reshaping report sections.
///
/// Every operation that returns one of these leaves its target untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// The section name is not part of the report.
    #[error("Unknown section: {name}")]
    UnknownSection {
        /// Name that was looked up.
        name: String,
    },

    /// A value, record or field path does not fit the section's schema.
    #[error("Section '{section}' expects {expected}, got {found}")]
    ShapeMismatch {
        /// Section being written.
        section: SectionKey,
        /// Schema the section holds.
        expected: &'static str,
        /// Schema that was supplied.
        found: &'static str,
    },

    /// A record operation was attempted on a scalar or struct section.
    #[error("Section '{section}' is not a collection")]
    NotACollection {
        /// Section being edited.
        section: SectionKey,
    },

    /// A record index does not exist in the collection.
    #[error("Index {index} is out of range for '{section}' ({len} records)")]
    IndexOutOfRange {
        /// Section being edited.
        section: SectionKey,
        /// Requested index.
        index: usize,
        /// Number of records in the collection.
        len: usize,
    },

    /// Two records of one collection share an id.
    #[error("Record id {id} appears more than once in '{section}'")]
    DuplicateRecordId {
        /// Section holding the records.
        section: SectionKey,
        /// Repeated id.
        id: RecordId,
    },

    /// A constrained field received a value outside its allowed set.
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidFieldValue {
        /// Field name.
        field: &'static str,
        /// Rejected input.
        value: String,
    },
}

/// Result type for report model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
