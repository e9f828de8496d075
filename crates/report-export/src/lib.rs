//! Export projections of a committed report.
//!
//! Exports are pure, read-only functions of a [`ReportConfiguration`]. They
//! never see draft state, so what is exported is always what is committed.
//!
//! # Formats
//!
//! - **JSON**: the whole configuration, pretty-printed with two-space
//!   indentation. [`from_json`] reads it back into an equal value.
//! - **CSV**: the time-series section only, one row per period:
//!
//! ```text
//! Period,Inflation,Adoption,P2P Volume
//! Q1 2023,6.2,12.4,2.1
//! ...
//! ```
//!
//! # Example
//!
//! ```ignore
//! use report_export::{ExportFormat, export};
//! use report_model::ReportConfiguration;
//!
//! let artifact = export(&ReportConfiguration::default(), ExportFormat::Csv)?;
//! assert_eq!(artifact.filename, "crypto-adoption-timeseries.csv");
//! ```
//!
//! [`ReportConfiguration`]: report_model::ReportConfiguration

mod artifact;
mod error;
mod json;
mod timeseries;

pub use artifact::{ExportArtifact, ExportFormat, export};
pub use error::{ExportError, Result};
pub use json::{from_json, to_json};
pub use timeseries::{CSV_HEADER, to_csv};
