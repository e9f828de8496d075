//! Export formats and the files they produce.

use std::fmt;

use report_model::ReportConfiguration;

use crate::error::Result;
use crate::json::to_json;
use crate::timeseries::to_csv;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Full configuration dump.
    Json,
    /// Time-series table.
    Csv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Json, ExportFormat::Csv];

    /// Filename existing consumers expect for this format.
    pub fn default_filename(self) -> &'static str {
        match self {
            Self::Json => "crypto-adoption-report-data.json",
            Self::Csv => "crypto-adoption-timeseries.csv",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Csv => "CSV",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Export text ready to hand to a file-save collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub filename: String,
    pub mime_type: &'static str,
    pub contents: String,
}

impl ExportArtifact {
    /// Replace the suggested filename.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }
}

/// Render `config` in the requested format.
pub fn export(config: &ReportConfiguration, format: ExportFormat) -> Result<ExportArtifact> {
    let contents = match format {
        ExportFormat::Json => to_json(config)?,
        ExportFormat::Csv => to_csv(config)?,
    };
    tracing::debug!(
        format = format.label(),
        bytes = contents.len(),
        "Rendered export"
    );
    Ok(ExportArtifact {
        format,
        filename: format.default_filename().to_string(),
        mime_type: format.mime_type(),
        contents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifacts_carry_filename_and_mime_type() {
        let config = ReportConfiguration::default();

        let json = export(&config, ExportFormat::Json).unwrap();
        assert_eq!(json.filename, "crypto-adoption-report-data.json");
        assert_eq!(json.mime_type, "application/json");

        let csv = export(&config, ExportFormat::Csv)
            .unwrap()
            .with_filename("series.csv");
        assert_eq!(csv.filename, "series.csv");
        assert_eq!(csv.mime_type, "text/csv");
        assert!(csv.contents.starts_with("Period,"));
    }
}
