//! Error types for editing and session operations.

use report_export::ExportError;
use report_model::{ModelError, RecordId, SectionKey};
use thiserror::Error;

/// Errors raised by the section editor.
///
/// A failed operation leaves both the draft and the store as they were.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EditError {
    /// The draft or store rejected the change.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A draft operation was attempted with no section being edited.
    #[error("No section is being edited")]
    NoActiveDraft,

    /// Another section is already being edited and re-entry is rejected.
    #[error("Cannot edit '{requested}' while '{active}' has unsaved changes")]
    EditInProgress {
        /// Section with the open draft.
        active: SectionKey,
        /// Section the caller tried to open.
        requested: SectionKey,
    },

    /// Every record id up to `u64::MAX` has been handed out or observed.
    #[error("No record ids left after {last}")]
    IdsExhausted {
        /// Highest id observed or issued.
        last: RecordId,
    },

    /// Editing was attempted outside edit mode.
    #[error("Edit mode is off")]
    EditModeInactive,
}

/// Errors surfaced by [`ReportSession`](crate::ReportSession).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl From<ModelError> for SessionError {
    fn from(error: ModelError) -> Self {
        Self::Edit(EditError::Model(error))
    }
}

/// Result type for editor operations.
pub type Result<T> = std::result::Result<T, EditError>;
