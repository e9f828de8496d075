//! Data model for the editable analytical report.
//!
//! A report is a single [`ReportConfiguration`]: a fixed set of named
//! sections, each of which is either a scalar text value, a fixed-shape
//! struct, or an ordered collection of records carrying a stable id.
//!
//! # Module Organization
//!
//! - [`section`]: Section keys, schemas and the [`SectionValue`] sum type
//! - [`records`]: Record types and their typed field selectors
//! - [`field`]: Field input, numeric coercion and draft paths
//! - [`config`]: The whole-report [`ReportConfiguration`]
//! - [`defaults`]: The default snapshot the report starts from
//! - [`ids`]: Record identifiers
//! - [`error`]: Model errors

pub mod config;
pub mod defaults;
pub mod error;
pub mod field;
pub mod ids;
pub mod records;
pub mod section;

pub use config::ReportConfiguration;
pub use error::{ModelError, Result};
pub use field::{DraftPath, FieldInput, coerce_number, format_number};
pub use ids::RecordId;
pub use records::{
    CorrelationField, CorrelationPoint, DataSource, DataSourceField, ForecastField, ForecastPoint,
    Insight, InsightField, KeyFinding, KeyFindingField, Methodology, MethodologyField, ModelMetric,
    ModelMetricField, NewRecord, Record, RecordField, RegionalComparison, RegionalField,
    TimeSeriesField, TimeSeriesPoint, Trend,
};
pub use section::{Schema, SectionKey, SectionShape, SectionValue};
