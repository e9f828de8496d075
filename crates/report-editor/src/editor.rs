//! Section editing controller.
//!
//! # Edit Draft Pattern
//!
//! Beginning an edit copies one committed section into a draft. All field,
//! add and remove operations touch only the draft; [`SectionEditor::commit`]
//! writes it back to the [`ConfigStore`] in a single replacement and
//! [`SectionEditor::cancel`] throws it away. At most one draft exists at a
//! time.

use std::mem;

use serde::{Deserialize, Serialize};

use report_model::{DraftPath, FieldInput, NewRecord, RecordId, SectionKey, SectionValue};

use crate::error::{EditError, Result};
use crate::store::ConfigStore;

/// What happens when an edit begins while another draft is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReentryPolicy {
    /// Discard the open draft and start the new one.
    #[default]
    Replace,
    /// Refuse with [`EditError::EditInProgress`].
    Reject,
}

/// Editor state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditState {
    #[default]
    Idle,
    Editing {
        section: SectionKey,
        draft: SectionValue,
    },
}

/// Hands out record ids that are never reused.
///
/// Every id issued is greater than every id observed or issued before.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordIdAllocator {
    last: RecordId,
}

impl RecordIdAllocator {
    /// Raise the floor to at least `id`.
    pub fn observe(&mut self, id: RecordId) {
        self.last = self.last.max(id);
    }

    /// Id the next record will receive.
    ///
    /// Nothing is reserved; [`observe`](Self::observe) the id once the record
    /// is stored.
    pub fn next_id(&self) -> Result<RecordId> {
        self.last
            .checked_next()
            .ok_or(EditError::IdsExhausted { last: self.last })
    }

    /// Highest id observed or issued so far.
    pub fn last(&self) -> RecordId {
        self.last
    }
}

/// Owns the single active draft.
#[derive(Debug, Clone, Default)]
pub struct SectionEditor {
    state: EditState,
    policy: ReentryPolicy,
    ids: RecordIdAllocator,
}

impl SectionEditor {
    pub fn new(policy: ReentryPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> ReentryPolicy {
        self.policy
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    pub fn editing_section(&self) -> Option<SectionKey> {
        match &self.state {
            EditState::Idle => None,
            EditState::Editing { section, .. } => Some(*section),
        }
    }

    pub fn draft(&self) -> Option<&SectionValue> {
        match &self.state {
            EditState::Idle => None,
            EditState::Editing { draft, .. } => Some(draft),
        }
    }

    /// Mutable access to the draft for two-way binding.
    pub fn draft_mut(&mut self) -> Option<&mut SectionValue> {
        match &mut self.state {
            EditState::Idle => None,
            EditState::Editing { draft, .. } => Some(draft),
        }
    }

    /// Copy `key`'s committed value into a fresh draft.
    pub fn begin_edit(&mut self, store: &ConfigStore, key: SectionKey) -> Result<&mut SectionValue> {
        if let Some(active) = self.editing_section() {
            match self.policy {
                ReentryPolicy::Reject => {
                    tracing::warn!(%active, requested = %key, "Edit rejected, draft already open");
                    return Err(EditError::EditInProgress {
                        active,
                        requested: key,
                    });
                }
                ReentryPolicy::Replace => {
                    tracing::warn!(%active, requested = %key, "Discarding unsaved draft");
                }
            }
        }

        if let Some(max) = store.configuration().max_record_id() {
            self.ids.observe(max);
        }
        self.state = EditState::Editing {
            section: key,
            draft: store.section(key),
        };
        tracing::info!(section = %key, "Editing started");

        self.draft_mut().ok_or(EditError::NoActiveDraft)
    }

    /// Like [`begin_edit`](Self::begin_edit), addressing the section by wire name.
    pub fn begin_edit_named(&mut self, store: &ConfigStore, name: &str) -> Result<&mut SectionValue> {
        let key = name.parse::<SectionKey>()?;
        self.begin_edit(store, key)
    }

    pub fn update_draft_field(&mut self, path: &DraftPath, input: impl Into<FieldInput>) -> Result<()> {
        let (section, draft) = self.active_mut()?;
        draft.apply_field(section, path, input.into())?;
        tracing::debug!(%section, ?path, "Draft field updated");
        Ok(())
    }

    /// Append `record` to a collection draft under a fresh id.
    pub fn add_draft_record(&mut self, record: NewRecord) -> Result<RecordId> {
        let id = self.ids.next_id();
        let (section, draft) = self.active_mut()?;
        let id = id?;
        draft.push_record(section, record, id)?;
        self.ids.observe(id);
        tracing::debug!(%section, %id, "Draft record added");
        Ok(id)
    }

    /// Append an empty row to a collection draft.
    pub fn add_blank_record(&mut self) -> Result<RecordId> {
        let id = self.ids.next_id();
        let (section, draft) = self.active_mut()?;
        let id = id?;
        draft.push_blank(section, id)?;
        self.ids.observe(id);
        tracing::debug!(%section, %id, "Blank draft record added");
        Ok(id)
    }

    pub fn remove_draft_record(&mut self, index: usize) -> Result<RecordId> {
        let (section, draft) = self.active_mut()?;
        let id = draft.remove_record(section, index)?;
        tracing::debug!(%section, index, %id, "Draft record removed");
        Ok(id)
    }

    /// Write the draft into `store` and return to idle.
    ///
    /// If the store rejects the value, for instance because edits through
    /// [`draft_mut`](Self::draft_mut) left two records with one id, the store
    /// is untouched and the draft stays open.
    pub fn commit(&mut self, store: &mut ConfigStore) -> Result<SectionKey> {
        let EditState::Editing { section, draft } = mem::take(&mut self.state) else {
            return Err(EditError::NoActiveDraft);
        };
        if let Err(error) = store.replace_section(section, draft.clone()) {
            self.state = EditState::Editing { section, draft };
            return Err(error.into());
        }
        tracing::info!(%section, revision = store.revision(), "Draft committed");
        Ok(section)
    }

    /// Discard the draft, if any. Returns the section that was being edited.
    pub fn cancel(&mut self) -> Option<SectionKey> {
        let section = self.editing_section();
        self.state = EditState::Idle;
        if let Some(section) = section {
            tracing::info!(%section, "Draft discarded");
        }
        section
    }

    fn active_mut(&mut self) -> Result<(SectionKey, &mut SectionValue)> {
        match &mut self.state {
            EditState::Idle => Err(EditError::NoActiveDraft),
            EditState::Editing { section, draft } => Ok((*section, draft)),
        }
    }
}
