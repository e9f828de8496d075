//! Section keys and section values.
//!
//! Each section has exactly one [`Schema`]. The schema decides which
//! [`SectionValue`] variant the section accepts, which field paths apply to
//! it, and whether it supports per-record create/update/delete.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::field::{DraftPath, FieldInput};
use crate::ids::RecordId;
use crate::records::{
    CorrelationPoint, DataSource, ForecastPoint, Insight, KeyFinding, Methodology, ModelMetric,
    NewRecord, Record, RecordField, RegionalComparison, TimeSeriesPoint,
};

/// Named, independently editable slice of the report.
///
/// Wire names are camelCase and match the keys of the exported JSON.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    ProjectTitle,
    ProjectSubtitle,
    ReportDate,
    Author,
    Institution,
    ResearchQuestion,
    KeyFindings,
    MacroIndicators,
    CryptoMetrics,
    TimeSeriesData,
    CorrelationData,
    RegionalData,
    ForecastData,
    ModelMetrics,
    Insights,
    Methodology,
}

impl SectionKey {
    /// All sections in export order.
    pub const ALL: [SectionKey; 16] = [
        SectionKey::ProjectTitle,
        SectionKey::ProjectSubtitle,
        SectionKey::ReportDate,
        SectionKey::Author,
        SectionKey::Institution,
        SectionKey::ResearchQuestion,
        SectionKey::KeyFindings,
        SectionKey::MacroIndicators,
        SectionKey::CryptoMetrics,
        SectionKey::TimeSeriesData,
        SectionKey::CorrelationData,
        SectionKey::RegionalData,
        SectionKey::ForecastData,
        SectionKey::ModelMetrics,
        SectionKey::Insights,
        SectionKey::Methodology,
    ];

    /// Wire name of the section.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProjectTitle => "projectTitle",
            Self::ProjectSubtitle => "projectSubtitle",
            Self::ReportDate => "reportDate",
            Self::Author => "author",
            Self::Institution => "institution",
            Self::ResearchQuestion => "researchQuestion",
            Self::KeyFindings => "keyFindings",
            Self::MacroIndicators => "macroIndicators",
            Self::CryptoMetrics => "cryptoMetrics",
            Self::TimeSeriesData => "timeSeriesData",
            Self::CorrelationData => "correlationData",
            Self::RegionalData => "regionalData",
            Self::ForecastData => "forecastData",
            Self::ModelMetrics => "modelMetrics",
            Self::Insights => "insights",
            Self::Methodology => "methodology",
        }
    }

    /// Schema the section's value must follow.
    pub fn schema(self) -> Schema {
        match self {
            Self::ProjectTitle
            | Self::ProjectSubtitle
            | Self::ReportDate
            | Self::Author
            | Self::Institution
            | Self::ResearchQuestion => Schema::Text,
            Self::KeyFindings => Schema::KeyFinding,
            Self::MacroIndicators | Self::CryptoMetrics => Schema::DataSource,
            Self::TimeSeriesData => Schema::TimeSeries,
            Self::CorrelationData => Schema::Correlation,
            Self::RegionalData => Schema::Regional,
            Self::ForecastData => Schema::Forecast,
            Self::ModelMetrics => Schema::ModelMetric,
            Self::Insights => Schema::Insight,
            Self::Methodology => Schema::Methodology,
        }
    }

    pub fn shape(self) -> SectionShape {
        self.schema().shape()
    }

    pub fn is_collection(self) -> bool {
        self.shape() == SectionShape::Collection
    }
}

impl FromStr for SectionKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ModelError::UnknownSection {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse shape of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionShape {
    /// A single text value.
    Scalar,
    /// A fixed-shape record of named fields.
    Struct,
    /// An ordered sequence of records with ids.
    Collection,
}

/// Concrete value schema of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Schema {
    Text,
    Methodology,
    KeyFinding,
    DataSource,
    TimeSeries,
    Correlation,
    Regional,
    Forecast,
    ModelMetric,
    Insight,
}

impl Schema {
    /// Human-readable schema name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Methodology => "methodology",
            Self::KeyFinding => "key finding records",
            Self::DataSource => "data source records",
            Self::TimeSeries => "time-series records",
            Self::Correlation => "correlation records",
            Self::Regional => "regional records",
            Self::Forecast => "forecast records",
            Self::ModelMetric => "model metric records",
            Self::Insight => "insight records",
        }
    }

    pub fn shape(self) -> SectionShape {
        match self {
            Self::Text => SectionShape::Scalar,
            Self::Methodology => SectionShape::Struct,
            _ => SectionShape::Collection,
        }
    }
}

/// Value of one section, tagged by schema.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionValue {
    Text(String),
    Methodology(Methodology),
    KeyFindings(Vec<KeyFinding>),
    DataSources(Vec<DataSource>),
    TimeSeries(Vec<TimeSeriesPoint>),
    Correlation(Vec<CorrelationPoint>),
    Regional(Vec<RegionalComparison>),
    Forecast(Vec<ForecastPoint>),
    ModelMetrics(Vec<ModelMetric>),
    Insights(Vec<Insight>),
}

impl SectionValue {
    pub fn schema(&self) -> Schema {
        match self {
            Self::Text(_) => Schema::Text,
            Self::Methodology(_) => Schema::Methodology,
            Self::KeyFindings(_) => Schema::KeyFinding,
            Self::DataSources(_) => Schema::DataSource,
            Self::TimeSeries(_) => Schema::TimeSeries,
            Self::Correlation(_) => Schema::Correlation,
            Self::Regional(_) => Schema::Regional,
            Self::Forecast(_) => Schema::Forecast,
            Self::ModelMetrics(_) => Schema::ModelMetric,
            Self::Insights(_) => Schema::Insight,
        }
    }

    pub fn shape(&self) -> SectionShape {
        self.schema().shape()
    }

    /// Number of records, or `None` for scalar and struct values.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Text(_) | Self::Methodology(_) => None,
            Self::KeyFindings(r) => Some(r.len()),
            Self::DataSources(r) => Some(r.len()),
            Self::TimeSeries(r) => Some(r.len()),
            Self::Correlation(r) => Some(r.len()),
            Self::Regional(r) => Some(r.len()),
            Self::Forecast(r) => Some(r.len()),
            Self::ModelMetrics(r) => Some(r.len()),
            Self::Insights(r) => Some(r.len()),
        }
    }

    /// Ids of all records in stored order (empty for non-collections).
    pub fn record_ids(&self) -> Vec<RecordId> {
        match self {
            Self::Text(_) | Self::Methodology(_) => Vec::new(),
            Self::KeyFindings(r) => ids_of(r),
            Self::DataSources(r) => ids_of(r),
            Self::TimeSeries(r) => ids_of(r),
            Self::Correlation(r) => ids_of(r),
            Self::Regional(r) => ids_of(r),
            Self::Forecast(r) => ids_of(r),
            Self::ModelMetrics(r) => ids_of(r),
            Self::Insights(r) => ids_of(r),
        }
    }

    pub fn max_record_id(&self) -> Option<RecordId> {
        self.record_ids().into_iter().max()
    }

    /// Fail with [`ModelError::DuplicateRecordId`] on the first repeated id.
    pub fn check_unique_ids(&self, section: SectionKey) -> Result<()> {
        let mut seen = HashSet::new();
        match self.record_ids().into_iter().find(|id| !seen.insert(*id)) {
            Some(id) => Err(ModelError::DuplicateRecordId { section, id }),
            None => Ok(()),
        }
    }

    /// Apply a single field edit addressed by `path`.
    ///
    /// The value is left untouched when the path does not fit the schema,
    /// the index is missing, or the input is rejected.
    pub fn apply_field(
        &mut self,
        section: SectionKey,
        path: &DraftPath,
        input: FieldInput,
    ) -> Result<()> {
        let expected = self.schema();
        match (self, path) {
            (Self::Text(text), DraftPath::Value) => {
                *text = input.into_text();
                Ok(())
            }
            (Self::Methodology(methodology), DraftPath::Field(field)) => {
                methodology.set_field(*field, input)
            }
            (value, DraftPath::Element { index, field }) if field.schema() == expected => {
                value.update_record(section, *index, *field, input)
            }
            (_, path) => Err(ModelError::ShapeMismatch {
                section,
                expected: expected.name(),
                found: path.schema().name(),
            }),
        }
    }

    fn update_record(
        &mut self,
        section: SectionKey,
        index: usize,
        field: RecordField,
        input: FieldInput,
    ) -> Result<()> {
        let expected = self.schema();
        match (self, field) {
            (Self::KeyFindings(r), RecordField::KeyFinding(f)) => {
                update_at(r, section, index, f, input)
            }
            (Self::DataSources(r), RecordField::DataSource(f)) => {
                update_at(r, section, index, f, input)
            }
            (Self::TimeSeries(r), RecordField::TimeSeries(f)) => {
                update_at(r, section, index, f, input)
            }
            (Self::Correlation(r), RecordField::Correlation(f)) => {
                update_at(r, section, index, f, input)
            }
            (Self::Regional(r), RecordField::Regional(f)) => update_at(r, section, index, f, input),
            (Self::Forecast(r), RecordField::Forecast(f)) => update_at(r, section, index, f, input),
            (Self::ModelMetrics(r), RecordField::ModelMetric(f)) => {
                update_at(r, section, index, f, input)
            }
            (Self::Insights(r), RecordField::Insight(f)) => update_at(r, section, index, f, input),
            (_, field) => Err(ModelError::ShapeMismatch {
                section,
                expected: expected.name(),
                found: field.schema().name(),
            }),
        }
    }

    /// Append `record` under the given id.
    ///
    /// The id must not already be held by a record of this collection.
    pub fn push_record(&mut self, section: SectionKey, record: NewRecord, id: RecordId) -> Result<()> {
        let expected = self.schema();
        if expected.shape() != SectionShape::Collection {
            return Err(ModelError::NotACollection { section });
        }
        if self.record_ids().contains(&id) {
            return Err(ModelError::DuplicateRecordId { section, id });
        }
        match (self, record) {
            (Self::KeyFindings(r), NewRecord::KeyFinding(new)) => push_with_id(r, new, id),
            (Self::DataSources(r), NewRecord::DataSource(new)) => push_with_id(r, new, id),
            (Self::TimeSeries(r), NewRecord::TimeSeries(new)) => push_with_id(r, new, id),
            (Self::Correlation(r), NewRecord::Correlation(new)) => push_with_id(r, new, id),
            (Self::Regional(r), NewRecord::Regional(new)) => push_with_id(r, new, id),
            (Self::Forecast(r), NewRecord::Forecast(new)) => push_with_id(r, new, id),
            (Self::ModelMetrics(r), NewRecord::ModelMetric(new)) => push_with_id(r, new, id),
            (Self::Insights(r), NewRecord::Insight(new)) => push_with_id(r, new, id),
            (_, record) => {
                return Err(ModelError::ShapeMismatch {
                    section,
                    expected: expected.name(),
                    found: record.schema().name(),
                });
            }
        }
        Ok(())
    }

    /// Append a schema-default record under the given id.
    pub fn push_blank(&mut self, section: SectionKey, id: RecordId) -> Result<()> {
        let blank = NewRecord::blank(self.schema()).ok_or(ModelError::NotACollection { section })?;
        self.push_record(section, blank, id)
    }

    /// Remove the record at `index`, returning its id.
    pub fn remove_record(&mut self, section: SectionKey, index: usize) -> Result<RecordId> {
        match self {
            Self::Text(_) | Self::Methodology(_) => Err(ModelError::NotACollection { section }),
            Self::KeyFindings(r) => remove_at(r, section, index),
            Self::DataSources(r) => remove_at(r, section, index),
            Self::TimeSeries(r) => remove_at(r, section, index),
            Self::Correlation(r) => remove_at(r, section, index),
            Self::Regional(r) => remove_at(r, section, index),
            Self::Forecast(r) => remove_at(r, section, index),
            Self::ModelMetrics(r) => remove_at(r, section, index),
            Self::Insights(r) => remove_at(r, section, index),
        }
    }
}

fn ids_of<R: Record>(records: &[R]) -> Vec<RecordId> {
    records.iter().map(Record::id).collect()
}

fn update_at<R: Record>(
    records: &mut [R],
    section: SectionKey,
    index: usize,
    field: R::Field,
    input: FieldInput,
) -> Result<()> {
    let len = records.len();
    let record = records
        .get_mut(index)
        .ok_or(ModelError::IndexOutOfRange {
            section,
            index,
            len,
        })?;
    record.set_field(field, input)
}

fn push_with_id<R: Record>(records: &mut Vec<R>, mut record: R, id: RecordId) {
    record.set_id(id);
    records.push(record);
}

fn remove_at<R: Record>(records: &mut Vec<R>, section: SectionKey, index: usize) -> Result<RecordId> {
    if index >= records.len() {
        return Err(ModelError::IndexOutOfRange {
            section,
            index,
            len: records.len(),
        });
    }
    Ok(records.remove(index).id())
}
