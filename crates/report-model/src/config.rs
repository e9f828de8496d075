//! The whole-report configuration.

use serde::{Deserialize, Serialize};

use crate::defaults::default_snapshot;
use crate::error::{ModelError, Result};
use crate::ids::RecordId;
use crate::records::{
    CorrelationPoint, DataSource, ForecastPoint, Insight, KeyFinding, Methodology, ModelMetric,
    RegionalComparison, TimeSeriesPoint,
};
use crate::section::{SectionKey, SectionValue};

/// Every section of the report.
///
/// Field order is the export order. Serialized keys are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfiguration {
    pub project_title: String,
    pub project_subtitle: String,
    pub report_date: String,
    pub author: String,
    pub institution: String,
    pub research_question: String,
    pub key_findings: Vec<KeyFinding>,
    pub macro_indicators: Vec<DataSource>,
    pub crypto_metrics: Vec<DataSource>,
    pub time_series_data: Vec<TimeSeriesPoint>,
    pub correlation_data: Vec<CorrelationPoint>,
    pub regional_data: Vec<RegionalComparison>,
    pub forecast_data: Vec<ForecastPoint>,
    pub model_metrics: Vec<ModelMetric>,
    pub insights: Vec<Insight>,
    pub methodology: Methodology,
}

impl Default for ReportConfiguration {
    fn default() -> Self {
        Self::default_snapshot()
    }
}

impl ReportConfiguration {
    /// The data a new report starts from.
    pub fn default_snapshot() -> Self {
        default_snapshot()
    }

    /// Owned copy of one section's value.
    pub fn section(&self, key: SectionKey) -> SectionValue {
        match key {
            SectionKey::ProjectTitle => SectionValue::Text(self.project_title.clone()),
            SectionKey::ProjectSubtitle => SectionValue::Text(self.project_subtitle.clone()),
            SectionKey::ReportDate => SectionValue::Text(self.report_date.clone()),
            SectionKey::Author => SectionValue::Text(self.author.clone()),
            SectionKey::Institution => SectionValue::Text(self.institution.clone()),
            SectionKey::ResearchQuestion => SectionValue::Text(self.research_question.clone()),
            SectionKey::KeyFindings => SectionValue::KeyFindings(self.key_findings.clone()),
            SectionKey::MacroIndicators => SectionValue::DataSources(self.macro_indicators.clone()),
            SectionKey::CryptoMetrics => SectionValue::DataSources(self.crypto_metrics.clone()),
            SectionKey::TimeSeriesData => SectionValue::TimeSeries(self.time_series_data.clone()),
            SectionKey::CorrelationData => {
                SectionValue::Correlation(self.correlation_data.clone())
            }
            SectionKey::RegionalData => SectionValue::Regional(self.regional_data.clone()),
            SectionKey::ForecastData => SectionValue::Forecast(self.forecast_data.clone()),
            SectionKey::ModelMetrics => SectionValue::ModelMetrics(self.model_metrics.clone()),
            SectionKey::Insights => SectionValue::Insights(self.insights.clone()),
            SectionKey::Methodology => SectionValue::Methodology(self.methodology.clone()),
        }
    }

    /// Replace one section wholesale.
    ///
    /// Fails with [`ModelError::ShapeMismatch`] when `value` does not follow
    /// the section's schema and with [`ModelError::DuplicateRecordId`] when
    /// two of its records share an id; the configuration is unchanged in
    /// either case.
    pub fn set_section(&mut self, key: SectionKey, value: SectionValue) -> Result<()> {
        value.check_unique_ids(key)?;
        match (key, value) {
            (SectionKey::ProjectTitle, SectionValue::Text(v)) => self.project_title = v,
            (SectionKey::ProjectSubtitle, SectionValue::Text(v)) => self.project_subtitle = v,
            (SectionKey::ReportDate, SectionValue::Text(v)) => self.report_date = v,
            (SectionKey::Author, SectionValue::Text(v)) => self.author = v,
            (SectionKey::Institution, SectionValue::Text(v)) => self.institution = v,
            (SectionKey::ResearchQuestion, SectionValue::Text(v)) => self.research_question = v,
            (SectionKey::KeyFindings, SectionValue::KeyFindings(v)) => self.key_findings = v,
            (SectionKey::MacroIndicators, SectionValue::DataSources(v)) => {
                self.macro_indicators = v;
            }
            (SectionKey::CryptoMetrics, SectionValue::DataSources(v)) => self.crypto_metrics = v,
            (SectionKey::TimeSeriesData, SectionValue::TimeSeries(v)) => self.time_series_data = v,
            (SectionKey::CorrelationData, SectionValue::Correlation(v)) => {
                self.correlation_data = v;
            }
            (SectionKey::RegionalData, SectionValue::Regional(v)) => self.regional_data = v,
            (SectionKey::ForecastData, SectionValue::Forecast(v)) => self.forecast_data = v,
            (SectionKey::ModelMetrics, SectionValue::ModelMetrics(v)) => self.model_metrics = v,
            (SectionKey::Insights, SectionValue::Insights(v)) => self.insights = v,
            (SectionKey::Methodology, SectionValue::Methodology(v)) => self.methodology = v,
            (key, value) => {
                return Err(ModelError::ShapeMismatch {
                    section: key,
                    expected: key.schema().name(),
                    found: value.schema().name(),
                });
            }
        }
        Ok(())
    }

    /// Highest record id in any collection section.
    pub fn max_record_id(&self) -> Option<RecordId> {
        SectionKey::ALL
            .into_iter()
            .filter(|key| key.is_collection())
            .filter_map(|key| self.section(key).max_record_id())
            .max()
    }

    /// Number of records in a collection section, `None` otherwise.
    pub fn record_count(&self, key: SectionKey) -> Option<usize> {
        match key {
            SectionKey::KeyFindings => Some(self.key_findings.len()),
            SectionKey::MacroIndicators => Some(self.macro_indicators.len()),
            SectionKey::CryptoMetrics => Some(self.crypto_metrics.len()),
            SectionKey::TimeSeriesData => Some(self.time_series_data.len()),
            SectionKey::CorrelationData => Some(self.correlation_data.len()),
            SectionKey::RegionalData => Some(self.regional_data.len()),
            SectionKey::ForecastData => Some(self.forecast_data.len()),
            SectionKey::ModelMetrics => Some(self.model_metrics.len()),
            SectionKey::Insights => Some(self.insights.len()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_round_trips_through_set_section() {
        let mut config = ReportConfiguration::default();
        for key in SectionKey::ALL {
            let value = config.section(key);
            config.set_section(key, value).unwrap();
        }
        assert_eq!(config, ReportConfiguration::default());
    }

    #[test]
    fn set_section_rejects_wrong_schema() {
        let mut config = ReportConfiguration::default();
        let err = config
            .set_section(SectionKey::Insights, SectionValue::Text("x".into()))
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::ShapeMismatch {
                section: SectionKey::Insights,
                ..
            }
        ));
        assert_eq!(config, ReportConfiguration::default());
    }

    #[test]
    fn set_section_rejects_repeated_ids() {
        let mut config = ReportConfiguration::default();
        let mut insights = config.insights.clone();
        insights.push(insights[0].clone());

        let err = config
            .set_section(SectionKey::Insights, SectionValue::Insights(insights))
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateRecordId {
                section: SectionKey::Insights,
                id: config.insights[0].id,
            }
        );
        assert_eq!(config, ReportConfiguration::default());
    }

    #[test]
    fn macro_and_crypto_share_a_schema_but_not_storage() {
        let mut config = ReportConfiguration::default();
        config
            .set_section(SectionKey::CryptoMetrics, SectionValue::DataSources(Vec::new()))
            .unwrap();
        assert_eq!(config.record_count(SectionKey::CryptoMetrics), Some(0));
        assert_eq!(config.record_count(SectionKey::MacroIndicators), Some(6));
    }
}
