//! Configuration store: the single committed report.

use report_model::{ReportConfiguration, Result, SectionKey, SectionValue};

/// Holds the committed configuration.
///
/// Readers get a shared borrow, so the committed value can only change
/// through [`replace_section`](Self::replace_section) and
/// [`reset_all`](Self::reset_all).
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    committed: ReportConfiguration,
    /// Bumped on every successful write.
    revision: u64,
}

impl ConfigStore {
    pub fn new(config: ReportConfiguration) -> Self {
        Self {
            committed: config,
            revision: 0,
        }
    }

    pub fn configuration(&self) -> &ReportConfiguration {
        &self.committed
    }

    /// Owned copy of one committed section.
    pub fn section(&self, key: SectionKey) -> SectionValue {
        self.committed.section(key)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace one section. The store is unchanged on error.
    pub fn replace_section(&mut self, key: SectionKey, value: SectionValue) -> Result<()> {
        self.committed.set_section(key, value)?;
        self.revision += 1;
        tracing::debug!(section = %key, revision = self.revision, "Section replaced");
        Ok(())
    }

    /// Replace the whole configuration.
    pub fn reset_all(&mut self, snapshot: ReportConfiguration) {
        self.committed = snapshot;
        self.revision += 1;
        tracing::debug!(revision = self.revision, "Configuration replaced");
    }
}
