//! Default report snapshot.
//!
//! The report starts from this data and returns to it on reset. Records in
//! each collection are numbered from 1.

use crate::config::ReportConfiguration;
use crate::ids::RecordId;
use crate::records::{
    CorrelationPoint, DataSource, ForecastPoint, Insight, KeyFinding, Methodology, ModelMetric,
    RegionalComparison, TimeSeriesPoint, Trend,
};

/// A fresh copy of the default report.
pub fn default_snapshot() -> ReportConfiguration {
    ReportConfiguration {
        project_title: "Crypto as a Hedge Against Macroeconomic Instability".into(),
        project_subtitle: "Investigating the relationship between economic stress indicators \
            and cryptocurrency adoption patterns across global markets"
            .into(),
        report_date: "2025".into(),
        author: "Research Team".into(),
        institution: "Your Institution".into(),
        research_question: "Does cryptocurrency adoption increase during periods of \
            macroeconomic instability, and can crypto serve as a hedge or alternative financial \
            system during economic stress?"
            .into(),
        key_findings: key_findings(),
        macro_indicators: macro_indicators(),
        crypto_metrics: crypto_metrics(),
        time_series_data: time_series_data(),
        correlation_data: correlation_data(),
        regional_data: regional_data(),
        forecast_data: forecast_data(),
        model_metrics: model_metrics(),
        insights: insights(),
        methodology: methodology(),
    }
}

fn numbered<T, R>(rows: impl IntoIterator<Item = T>, build: impl Fn(RecordId, T) -> R) -> Vec<R> {
    rows.into_iter()
        .zip(1..)
        .map(|(row, n)| build(RecordId::new(n), row))
        .collect()
}

fn key_findings() -> Vec<KeyFinding> {
    numbered(
        [
            ("Correlation Coefficient", "0.73", "Inflation vs Crypto Adoption", Trend::Positive),
            ("Forecast Accuracy", "87.2%", "ARIMA Model Performance", Trend::Positive),
            ("Countries Analyzed", "42", "Across 6 Regions", Trend::Neutral),
            ("Time Period", "2019-2025", "Monthly Data Points", Trend::Neutral),
        ],
        |id, (metric, value, subtitle, trend)| KeyFinding {
            id,
            metric: metric.into(),
            value: value.into(),
            subtitle: subtitle.into(),
            trend,
        },
    )
}

fn data_sources(rows: [(&str, &str, &str); 6]) -> Vec<DataSource> {
    numbered(rows, |id, (name, source, frequency)| DataSource {
        id,
        name: name.into(),
        source: source.into(),
        frequency: frequency.into(),
    })
}

fn macro_indicators() -> Vec<DataSource> {
    data_sources([
        ("Inflation Rate (CPI)", "World Bank, IMF", "Monthly"),
        ("Currency Devaluation", "Central Banks", "Daily"),
        ("GDP Growth Rate", "World Bank", "Quarterly"),
        ("Unemployment Rate", "ILO, National Stats", "Monthly"),
        ("Interest Rates", "Central Banks", "Monthly"),
        ("Political Stability Index", "World Bank WGI", "Annual"),
    ])
}

fn crypto_metrics() -> Vec<DataSource> {
    data_sources([
        ("Wallet Addresses (Active)", "Glassnode, Chainalysis", "Daily"),
        ("P2P Trading Volume", "LocalBitcoins, Paxful", "Weekly"),
        ("Exchange Inflows", "CryptoQuant", "Daily"),
        ("Stablecoin Market Cap", "DeFiLlama", "Daily"),
        ("Google Trends (Crypto)", "Google Trends API", "Weekly"),
        ("Adoption Index Score", "Chainalysis", "Annual"),
    ])
}

fn time_series_data() -> Vec<TimeSeriesPoint> {
    numbered(
        [
            ("Q1 2023", 6.2, 12.4, 2.1),
            ("Q2 2023", 5.8, 14.2, 2.4),
            ("Q3 2023", 5.1, 15.8, 2.8),
            ("Q4 2023", 4.8, 18.1, 3.2),
            ("Q1 2024", 5.4, 21.3, 3.9),
            ("Q2 2024", 6.1, 24.7, 4.5),
            ("Q3 2024", 7.2, 28.9, 5.8),
            ("Q4 2024", 6.8, 31.2, 6.2),
            ("Q1 2025", 5.9, 33.5, 6.8),
            ("Q2 2025", 5.2, 35.1, 7.1),
        ],
        |id, (period, inflation, adoption, p2p_volume)| TimeSeriesPoint {
            id,
            period: period.into(),
            inflation,
            adoption,
            p2p_volume,
        },
    )
}

fn correlation_data() -> Vec<CorrelationPoint> {
    numbered(
        [
            (2.1, 8.2, "Japan"),
            (3.4, 12.5, "Germany"),
            (4.2, 15.3, "USA"),
            (5.8, 22.1, "Brazil"),
            (7.2, 28.4, "India"),
            (8.9, 31.2, "Nigeria"),
            (12.4, 38.7, "Turkey"),
            (18.2, 42.1, "Argentina"),
            (25.6, 48.3, "Venezuela"),
            (6.1, 35.2, "Vietnam"),
            (4.8, 18.9, "UK"),
            (9.5, 33.8, "Philippines"),
        ],
        |id, (inflation, adoption, country)| CorrelationPoint {
            id,
            inflation,
            adoption,
            country: country.into(),
        },
    )
}

fn regional_data() -> Vec<RegionalComparison> {
    numbered(
        [
            ("Latin America", 42.3, 15.2),
            ("Sub-Saharan Africa", 38.7, 12.8),
            ("Southeast Asia", 31.5, 18.4),
            ("Eastern Europe", 28.9, 14.1),
            ("North America", 18.2, 16.8),
            ("Western Europe", 14.5, 12.9),
        ],
        |id, (region, high_inflation, low_inflation)| RegionalComparison {
            id,
            region: region.into(),
            high_inflation,
            low_inflation,
        },
    )
}

fn forecast_data() -> Vec<ForecastPoint> {
    numbered(
        [
            ("Q3 2025", 36.8, 34.2, 39.4),
            ("Q4 2025", 38.2, 35.1, 41.3),
            ("Q1 2026", 39.5, 35.8, 43.2),
            ("Q2 2026", 41.1, 36.5, 45.7),
        ],
        |id, (period, predicted, lower, upper)| ForecastPoint {
            id,
            period: period.into(),
            predicted,
            lower,
            upper,
        },
    )
}

fn model_metrics() -> Vec<ModelMetric> {
    numbered(
        [
            ("ARIMA(2,1,2)", 1.82, "4.2%"),
            ("VAR(3)", 2.14, "5.1%"),
            ("LSTM Neural Net", 1.67, "3.8%"),
            ("Prophet", 1.94, "4.5%"),
        ],
        |id, (model, rmse, mape)| ModelMetric {
            id,
            model: model.into(),
            rmse,
            mape: mape.into(),
        },
    )
}

fn insights() -> Vec<Insight> {
    numbered(
        [
            (
                "Hedge Behavior",
                "Crypto as Inflation Hedge Confirmed",
                "Countries experiencing >10% annual inflation showed 2.8x higher crypto \
                 adoption rates compared to stable economies.",
                "Crypto serves as a store of value in high-inflation environments.",
            ),
            (
                "Currency Crisis",
                "Currency Devaluation Drives P2P Volume",
                "P2P trading volume increases by 34% on average within 30 days of significant \
                 currency devaluation events.",
                "Crypto provides an escape valve during currency crises.",
            ),
            (
                "Regional Patterns",
                "Emerging Markets Lead Adoption",
                "Adoption in emerging markets is 2.3x more sensitive to macroeconomic shocks \
                 compared to developed economies.",
                "Financial inclusion gaps make crypto attractive as an alternative system.",
            ),
            (
                "Predictive Power",
                "Macro Indicators as Leading Signals",
                "Inflation rate changes predict crypto adoption shifts with a 2-3 month lag.",
                "Macro indicators can forecast adoption trends.",
            ),
        ],
        |id, (category, title, description, implication)| Insight {
            id,
            category: category.into(),
            title: title.into(),
            description: description.into(),
            implication: implication.into(),
        },
    )
}

fn methodology() -> Methodology {
    Methodology {
        data_collection: "Panel data from 42 countries (2019-2025), combining macroeconomic \
            indicators from IMF/World Bank with on-chain crypto metrics."
            .into(),
        analysis: "Granger causality tests, VAR modeling, and correlation analysis. ARIMA and \
            LSTM models for forecasting."
            .into(),
        limitations: "Data availability varies by country; some adoption metrics are \
            estimates; regulatory changes create structural breaks."
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionKey;

    #[test]
    fn default_collections_have_expected_sizes() {
        let config = default_snapshot();
        let sizes = [
            (SectionKey::KeyFindings, 4),
            (SectionKey::MacroIndicators, 6),
            (SectionKey::CryptoMetrics, 6),
            (SectionKey::TimeSeriesData, 10),
            (SectionKey::CorrelationData, 12),
            (SectionKey::RegionalData, 6),
            (SectionKey::ForecastData, 4),
            (SectionKey::ModelMetrics, 4),
            (SectionKey::Insights, 4),
        ];
        for (key, len) in sizes {
            assert_eq!(config.record_count(key), Some(len), "{key}");
        }
    }

    #[test]
    fn ids_are_numbered_from_one_within_each_collection() {
        let config = default_snapshot();
        for key in SectionKey::ALL.into_iter().filter(|k| k.is_collection()) {
            let ids: Vec<u64> = config
                .section(key)
                .record_ids()
                .into_iter()
                .map(RecordId::get)
                .collect();
            let expected: Vec<u64> = (1..=ids.len() as u64).collect();
            assert_eq!(ids, expected, "{key}");
        }
        assert_eq!(config.max_record_id(), Some(RecordId::new(12)));
    }
}
