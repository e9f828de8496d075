//! Report session: the API the presentation layer drives.
//!
//! A session owns the committed configuration, the section editor and the
//! notification queue. Successful mutating actions post a success
//! notification; failed actions post an error notification carrying the
//! error text and return the error.

use std::sync::Arc;

use report_export::{ExportArtifact, ExportFormat, export};
use report_model::{
    DraftPath, FieldInput, NewRecord, RecordId, ReportConfiguration, SectionKey, SectionValue,
};

use crate::editor::{EditState, SectionEditor};
use crate::error::{EditError, SessionError};
use crate::notify::{
    Clock, ExpiryHandle, Notification, NotificationKind, NotificationQueue, SystemClock,
};
use crate::settings::EditorSettings;
use crate::store::ConfigStore;

pub const MSG_SAVED: &str = "Changes saved successfully!";
pub const MSG_RESET: &str = "Reset to default data";

/// One open report.
#[derive(Debug)]
pub struct ReportSession {
    store: ConfigStore,
    editor: SectionEditor,
    notifications: NotificationQueue,
    settings: EditorSettings,
    defaults: ReportConfiguration,
    edit_mode: bool,
}

impl ReportSession {
    /// Session over the default report, on the system clock.
    pub fn new(settings: EditorSettings) -> Self {
        Self::with_clock(settings, Arc::new(SystemClock::new()))
    }

    pub fn with_clock(settings: EditorSettings, clock: Arc<dyn Clock>) -> Self {
        Self::from_snapshot(ReportConfiguration::default_snapshot(), settings, clock)
    }

    /// Session starting from `snapshot`, which is also what
    /// [`reset_to_defaults`](Self::reset_to_defaults) restores.
    pub fn from_snapshot(
        snapshot: ReportConfiguration,
        settings: EditorSettings,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store: ConfigStore::new(snapshot.clone()),
            editor: SectionEditor::new(settings.editing.reentry_policy),
            notifications: NotificationQueue::new(clock, settings.notification_timeout()),
            edit_mode: settings.editing.start_in_edit_mode,
            settings,
            defaults: snapshot,
        }
    }

    // -------------------------------------------------------------------------
    // Read
    // -------------------------------------------------------------------------

    pub fn configuration(&self) -> &ReportConfiguration {
        self.store.configuration()
    }

    pub fn section(&self, key: SectionKey) -> SectionValue {
        self.store.section(key)
    }

    /// Store revision; changes whenever committed data changes.
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    // -------------------------------------------------------------------------
    // Edit mode
    // -------------------------------------------------------------------------

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Turn edit mode on or off. Turning it off discards any open draft.
    pub fn set_edit_mode(&mut self, enabled: bool) {
        if !enabled {
            self.editor.cancel();
        }
        if self.edit_mode != enabled {
            tracing::info!(enabled, "Edit mode changed");
        }
        self.edit_mode = enabled;
    }

    pub fn toggle_edit_mode(&mut self) -> bool {
        self.set_edit_mode(!self.edit_mode);
        self.edit_mode
    }

    // -------------------------------------------------------------------------
    // Draft lifecycle
    // -------------------------------------------------------------------------

    pub fn edit_state(&self) -> &EditState {
        self.editor.state()
    }

    pub fn editing_section(&self) -> Option<SectionKey> {
        self.editor.editing_section()
    }

    pub fn draft(&self) -> Option<&SectionValue> {
        self.editor.draft()
    }

    pub fn draft_mut(&mut self) -> Option<&mut SectionValue> {
        self.editor.draft_mut()
    }

    pub fn begin_edit(&mut self, key: SectionKey) -> Result<&mut SectionValue, SessionError> {
        let started = self
            .require_edit_mode()
            .and_then(|()| self.editor.begin_edit(&self.store, key).map(|_| ()));
        self.surface(started)?;
        self.editor
            .draft_mut()
            .ok_or(SessionError::Edit(EditError::NoActiveDraft))
    }

    /// Begin editing the section with wire name `name`.
    pub fn begin_edit_named(&mut self, name: &str) -> Result<&mut SectionValue, SessionError> {
        let key = name.parse::<SectionKey>().map_err(EditError::from);
        let key = self.surface(key)?;
        self.begin_edit(key)
    }

    pub fn update_draft_field(
        &mut self,
        path: &DraftPath,
        input: impl Into<FieldInput>,
    ) -> Result<(), SessionError> {
        let result = self
            .require_edit_mode()
            .and_then(|()| self.editor.update_draft_field(path, input));
        self.surface(result)
    }

    pub fn add_draft_record(&mut self, record: NewRecord) -> Result<RecordId, SessionError> {
        let result = self
            .require_edit_mode()
            .and_then(|()| self.editor.add_draft_record(record));
        self.surface(result)
    }

    pub fn add_blank_record(&mut self) -> Result<RecordId, SessionError> {
        let result = self
            .require_edit_mode()
            .and_then(|()| self.editor.add_blank_record());
        self.surface(result)
    }

    pub fn remove_draft_record(&mut self, index: usize) -> Result<RecordId, SessionError> {
        let result = self
            .require_edit_mode()
            .and_then(|()| self.editor.remove_draft_record(index));
        self.surface(result)
    }

    /// Commit the draft and announce it.
    pub fn commit(&mut self) -> Result<SectionKey, SessionError> {
        let result = self.editor.commit(&mut self.store);
        let section = self.surface(result)?;
        self.notifications.notify(MSG_SAVED, NotificationKind::Success);
        Ok(section)
    }

    /// Discard the draft. Always succeeds.
    pub fn cancel(&mut self) -> Option<SectionKey> {
        self.editor.cancel()
    }

    /// Restore the initial snapshot, ending any edit.
    pub fn reset_to_defaults(&mut self) {
        self.editor.cancel();
        self.store.reset_all(self.defaults.clone());
        tracing::info!(revision = self.store.revision(), "Report reset to defaults");
        self.notifications.notify(MSG_RESET, NotificationKind::Success);
    }

    // -------------------------------------------------------------------------
    // Export
    // -------------------------------------------------------------------------

    /// Export the committed configuration. Drafts are never exported.
    pub fn export(&mut self, format: ExportFormat) -> Result<ExportArtifact, SessionError> {
        let result = export(self.store.configuration(), format)
            .map(|artifact| artifact.with_filename(self.settings.export_filename(format)));
        let artifact = self.surface(result)?;
        tracing::info!(%format, filename = %artifact.filename, "Report exported");
        self.notifications
            .notify(format!("{} data downloaded!", format.label()), NotificationKind::Success);
        Ok(artifact)
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> ExpiryHandle {
        self.notifications.notify(message, kind)
    }

    pub fn expire_notification(&mut self, handle: ExpiryHandle) -> bool {
        self.notifications.expire(handle)
    }

    pub fn clear_notification(&mut self) {
        self.notifications.clear();
    }

    /// Clock time at which the host should call [`tick`](Self::tick) next.
    pub fn pending_deadline(&self) -> Option<std::time::Duration> {
        self.notifications.pending_deadline()
    }

    /// Drop an expired notification. Returns whether one was dropped.
    pub fn tick(&mut self) -> bool {
        self.notifications.poll()
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn require_edit_mode(&self) -> Result<(), EditError> {
        if self.edit_mode {
            Ok(())
        } else {
            Err(EditError::EditModeInactive)
        }
    }

    /// Post an error notification for a failed action.
    fn surface<T, E>(&mut self, result: Result<T, E>) -> Result<T, SessionError>
    where
        E: Into<SessionError>,
    {
        result.map_err(|error| {
            let error = error.into();
            tracing::warn!(%error, "Action failed");
            self.notifications
                .notify(error.to_string(), NotificationKind::Error);
            error
        })
    }
}

impl Default for ReportSession {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}
