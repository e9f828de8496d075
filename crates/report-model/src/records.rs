//! Record types for collection sections and the methodology struct.
//!
//! Each record type has a matching field selector enum so that field edits
//! are checked against the record's schema instead of free-form keys.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::field::FieldInput;
use crate::ids::RecordId;
use crate::section::Schema;

/// A collection record with a stable id and typed fields.
pub trait Record: Clone + Default {
    /// Field selector for this record type.
    type Field: Copy;

    /// Schema shared by every section holding this record type.
    const SCHEMA: Schema;

    fn id(&self) -> RecordId;

    fn set_id(&mut self, id: RecordId);

    /// Write one field. Rejected input leaves the record unchanged.
    fn set_field(&mut self, field: Self::Field, input: FieldInput) -> Result<()>;
}

// =============================================================================
// KEY FINDINGS
// =============================================================================

/// Direction indicator shown next to a key finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Trend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl FromStr for Trend {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            _ => Err(ModelError::InvalidFieldValue {
                field: "trend",
                value: s.to_string(),
            }),
        }
    }
}

/// Headline statistic card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyFinding {
    pub id: RecordId,
    pub metric: String,
    /// Display value; free text such as `"87.2%"` or `"2019-2025"`.
    pub value: String,
    pub subtitle: String,
    #[serde(default)]
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFindingField {
    Metric,
    Value,
    Subtitle,
    Trend,
}

impl Record for KeyFinding {
    type Field = KeyFindingField;
    const SCHEMA: Schema = Schema::KeyFinding;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn set_field(&mut self, field: KeyFindingField, input: FieldInput) -> Result<()> {
        match field {
            KeyFindingField::Metric => self.metric = input.into_text(),
            KeyFindingField::Value => self.value = input.into_text(),
            KeyFindingField::Subtitle => self.subtitle = input.into_text(),
            KeyFindingField::Trend => self.trend = input.into_text().parse()?,
        }
        Ok(())
    }
}

// =============================================================================
// DATA SOURCES (macro indicators, crypto metrics)
// =============================================================================

/// An indicator and where its data comes from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    pub id: RecordId,
    pub name: String,
    pub source: String,
    pub frequency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSourceField {
    Name,
    Source,
    Frequency,
}

impl Record for DataSource {
    type Field = DataSourceField;
    const SCHEMA: Schema = Schema::DataSource;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn set_field(&mut self, field: DataSourceField, input: FieldInput) -> Result<()> {
        match field {
            DataSourceField::Name => self.name = input.into_text(),
            DataSourceField::Source => self.source = input.into_text(),
            DataSourceField::Frequency => self.frequency = input.into_text(),
        }
        Ok(())
    }
}

// =============================================================================
// TIME SERIES
// =============================================================================

/// One period of the inflation / adoption / P2P volume series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    pub id: RecordId,
    pub period: String,
    /// Inflation rate, percent.
    pub inflation: f64,
    /// Adoption rate, percent.
    pub adoption: f64,
    /// Peer-to-peer trading volume, billions USD.
    pub p2p_volume: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSeriesField {
    Period,
    Inflation,
    Adoption,
    P2pVolume,
}

impl Record for TimeSeriesPoint {
    type Field = TimeSeriesField;
    const SCHEMA: Schema = Schema::TimeSeries;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn set_field(&mut self, field: TimeSeriesField, input: FieldInput) -> Result<()> {
        match field {
            TimeSeriesField::Period => self.period = input.into_text(),
            TimeSeriesField::Inflation => self.inflation = input.to_number(),
            TimeSeriesField::Adoption => self.adoption = input.to_number(),
            TimeSeriesField::P2pVolume => self.p2p_volume = input.to_number(),
        }
        Ok(())
    }
}

// =============================================================================
// CORRELATION
// =============================================================================

/// Per-country inflation vs. adoption observation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPoint {
    pub id: RecordId,
    pub inflation: f64,
    pub adoption: f64,
    pub country: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorrelationField {
    Inflation,
    Adoption,
    Country,
}

impl Record for CorrelationPoint {
    type Field = CorrelationField;
    const SCHEMA: Schema = Schema::Correlation;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn set_field(&mut self, field: CorrelationField, input: FieldInput) -> Result<()> {
        match field {
            CorrelationField::Inflation => self.inflation = input.to_number(),
            CorrelationField::Adoption => self.adoption = input.to_number(),
            CorrelationField::Country => self.country = input.into_text(),
        }
        Ok(())
    }
}

// =============================================================================
// REGIONAL
// =============================================================================

/// Adoption under high vs. low inflation for one region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalComparison {
    pub id: RecordId,
    pub region: String,
    pub high_inflation: f64,
    pub low_inflation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionalField {
    Region,
    HighInflation,
    LowInflation,
}

impl Record for RegionalComparison {
    type Field = RegionalField;
    const SCHEMA: Schema = Schema::Regional;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn set_field(&mut self, field: RegionalField, input: FieldInput) -> Result<()> {
        match field {
            RegionalField::Region => self.region = input.into_text(),
            RegionalField::HighInflation => self.high_inflation = input.to_number(),
            RegionalField::LowInflation => self.low_inflation = input.to_number(),
        }
        Ok(())
    }
}

// =============================================================================
// FORECAST
// =============================================================================

/// Predicted adoption with its confidence band.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub id: RecordId,
    pub period: String,
    pub predicted: f64,
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForecastField {
    Period,
    Predicted,
    Lower,
    Upper,
}

impl Record for ForecastPoint {
    type Field = ForecastField;
    const SCHEMA: Schema = Schema::Forecast;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn set_field(&mut self, field: ForecastField, input: FieldInput) -> Result<()> {
        match field {
            ForecastField::Period => self.period = input.into_text(),
            ForecastField::Predicted => self.predicted = input.to_number(),
            ForecastField::Lower => self.lower = input.to_number(),
            ForecastField::Upper => self.upper = input.to_number(),
        }
        Ok(())
    }
}

// =============================================================================
// MODEL METRICS
// =============================================================================

/// Accuracy of one forecasting model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelMetric {
    pub id: RecordId,
    pub model: String,
    pub rmse: f64,
    /// Mean absolute percentage error, kept as display text (`"4.2%"`).
    pub mape: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelMetricField {
    Model,
    Rmse,
    Mape,
}

impl Record for ModelMetric {
    type Field = ModelMetricField;
    const SCHEMA: Schema = Schema::ModelMetric;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn set_field(&mut self, field: ModelMetricField, input: FieldInput) -> Result<()> {
        match field {
            ModelMetricField::Model => self.model = input.into_text(),
            ModelMetricField::Rmse => self.rmse = input.to_number(),
            ModelMetricField::Mape => self.mape = input.into_text(),
        }
        Ok(())
    }
}

// =============================================================================
// INSIGHTS
// =============================================================================

/// Narrative insight card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: RecordId,
    pub category: String,
    pub title: String,
    pub description: String,
    pub implication: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsightField {
    Category,
    Title,
    Description,
    Implication,
}

impl Record for Insight {
    type Field = InsightField;
    const SCHEMA: Schema = Schema::Insight;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn set_field(&mut self, field: InsightField, input: FieldInput) -> Result<()> {
        match field {
            InsightField::Category => self.category = input.into_text(),
            InsightField::Title => self.title = input.into_text(),
            InsightField::Description => self.description = input.into_text(),
            InsightField::Implication => self.implication = input.into_text(),
        }
        Ok(())
    }
}

// =============================================================================
// METHODOLOGY (struct section)
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Methodology {
    pub data_collection: String,
    pub analysis: String,
    pub limitations: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodologyField {
    DataCollection,
    Analysis,
    Limitations,
}

impl Methodology {
    pub fn set_field(&mut self, field: MethodologyField, input: FieldInput) -> Result<()> {
        match field {
            MethodologyField::DataCollection => self.data_collection = input.into_text(),
            MethodologyField::Analysis => self.analysis = input.into_text(),
            MethodologyField::Limitations => self.limitations = input.into_text(),
        }
        Ok(())
    }
}

// =============================================================================
// SUM TYPES
// =============================================================================

/// Field selector for any record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    KeyFinding(KeyFindingField),
    DataSource(DataSourceField),
    TimeSeries(TimeSeriesField),
    Correlation(CorrelationField),
    Regional(RegionalField),
    Forecast(ForecastField),
    ModelMetric(ModelMetricField),
    Insight(InsightField),
}

impl RecordField {
    pub fn schema(self) -> Schema {
        match self {
            Self::KeyFinding(_) => KeyFinding::SCHEMA,
            Self::DataSource(_) => DataSource::SCHEMA,
            Self::TimeSeries(_) => TimeSeriesPoint::SCHEMA,
            Self::Correlation(_) => CorrelationPoint::SCHEMA,
            Self::Regional(_) => RegionalComparison::SCHEMA,
            Self::Forecast(_) => ForecastPoint::SCHEMA,
            Self::ModelMetric(_) => ModelMetric::SCHEMA,
            Self::Insight(_) => Insight::SCHEMA,
        }
    }
}

impl From<KeyFindingField> for RecordField {
    fn from(field: KeyFindingField) -> Self {
        Self::KeyFinding(field)
    }
}

impl From<DataSourceField> for RecordField {
    fn from(field: DataSourceField) -> Self {
        Self::DataSource(field)
    }
}

impl From<TimeSeriesField> for RecordField {
    fn from(field: TimeSeriesField) -> Self {
        Self::TimeSeries(field)
    }
}

impl From<CorrelationField> for RecordField {
    fn from(field: CorrelationField) -> Self {
        Self::Correlation(field)
    }
}

impl From<RegionalField> for RecordField {
    fn from(field: RegionalField) -> Self {
        Self::Regional(field)
    }
}

impl From<ForecastField> for RecordField {
    fn from(field: ForecastField) -> Self {
        Self::Forecast(field)
    }
}

impl From<ModelMetricField> for RecordField {
    fn from(field: ModelMetricField) -> Self {
        Self::ModelMetric(field)
    }
}

impl From<InsightField> for RecordField {
    fn from(field: InsightField) -> Self {
        Self::Insight(field)
    }
}

/// A record to append to a collection draft.
///
/// The id carried by the inner record is ignored; the editor assigns a
/// fresh one.
#[derive(Debug, Clone, PartialEq)]
pub enum NewRecord {
    KeyFinding(KeyFinding),
    DataSource(DataSource),
    TimeSeries(TimeSeriesPoint),
    Correlation(CorrelationPoint),
    Regional(RegionalComparison),
    Forecast(ForecastPoint),
    ModelMetric(ModelMetric),
    Insight(Insight),
}

impl NewRecord {
    pub fn schema(&self) -> Schema {
        match self {
            Self::KeyFinding(_) => KeyFinding::SCHEMA,
            Self::DataSource(_) => DataSource::SCHEMA,
            Self::TimeSeries(_) => TimeSeriesPoint::SCHEMA,
            Self::Correlation(_) => CorrelationPoint::SCHEMA,
            Self::Regional(_) => RegionalComparison::SCHEMA,
            Self::Forecast(_) => ForecastPoint::SCHEMA,
            Self::ModelMetric(_) => ModelMetric::SCHEMA,
            Self::Insight(_) => Insight::SCHEMA,
        }
    }

    /// Empty row for a collection schema, as added by an "Add Row" action.
    ///
    /// Text fields are empty, numbers are zero and `trend` is neutral.
    /// Returns `None` for scalar and struct schemas.
    pub fn blank(schema: Schema) -> Option<Self> {
        let record = match schema {
            Schema::Text | Schema::Methodology => return None,
            Schema::KeyFinding => Self::KeyFinding(KeyFinding::default()),
            Schema::DataSource => Self::DataSource(DataSource::default()),
            Schema::TimeSeries => Self::TimeSeries(TimeSeriesPoint::default()),
            Schema::Correlation => Self::Correlation(CorrelationPoint::default()),
            Schema::Regional => Self::Regional(RegionalComparison::default()),
            Schema::Forecast => Self::Forecast(ForecastPoint::default()),
            Schema::ModelMetric => Self::ModelMetric(ModelMetric::default()),
            Schema::Insight => Self::Insight(Insight::default()),
        };
        Some(record)
    }
}

impl From<KeyFinding> for NewRecord {
    fn from(record: KeyFinding) -> Self {
        Self::KeyFinding(record)
    }
}

impl From<DataSource> for NewRecord {
    fn from(record: DataSource) -> Self {
        Self::DataSource(record)
    }
}

impl From<TimeSeriesPoint> for NewRecord {
    fn from(record: TimeSeriesPoint) -> Self {
        Self::TimeSeries(record)
    }
}

impl From<CorrelationPoint> for NewRecord {
    fn from(record: CorrelationPoint) -> Self {
        Self::Correlation(record)
    }
}

impl From<RegionalComparison> for NewRecord {
    fn from(record: RegionalComparison) -> Self {
        Self::Regional(record)
    }
}

impl From<ForecastPoint> for NewRecord {
    fn from(record: ForecastPoint) -> Self {
        Self::Forecast(record)
    }
}

impl From<ModelMetric> for NewRecord {
    fn from(record: ModelMetric) -> Self {
        Self::ModelMetric(record)
    }
}

impl From<Insight> for NewRecord {
    fn from(record: Insight) -> Self {
        Self::Insight(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_parses_case_insensitively() {
        assert_eq!(" Positive ".parse::<Trend>().unwrap(), Trend::Positive);
        assert_eq!("NEUTRAL".parse::<Trend>().unwrap(), Trend::Neutral);
        assert!("sideways".parse::<Trend>().is_err());
    }

    #[test]
    fn rejected_trend_leaves_record_unchanged() {
        let mut finding = KeyFinding {
            trend: Trend::Positive,
            ..Default::default()
        };
        let err = finding
            .set_field(KeyFindingField::Trend, "up".into())
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidFieldValue {
                field: "trend",
                value: "up".to_string()
            }
        );
        assert_eq!(finding.trend, Trend::Positive);
    }

    #[test]
    fn numeric_fields_coerce_text() {
        let mut point = TimeSeriesPoint::default();
        point
            .set_field(TimeSeriesField::Inflation, "6.5%".into())
            .unwrap();
        point
            .set_field(TimeSeriesField::Adoption, "n/a".into())
            .unwrap();
        assert_eq!(point.inflation, 6.5);
        assert_eq!(point.adoption, 0.0);
    }

    #[test]
    fn blank_rows_only_exist_for_collections() {
        assert!(NewRecord::blank(Schema::Text).is_none());
        assert!(NewRecord::blank(Schema::Methodology).is_none());
        match NewRecord::blank(Schema::KeyFinding) {
            Some(NewRecord::KeyFinding(finding)) => assert_eq!(finding.trend, Trend::Neutral),
            other => panic!("unexpected blank record: {other:?}"),
        }
    }
}
