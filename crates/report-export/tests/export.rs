//! Integration tests for JSON and CSV export.

use proptest::prelude::*;

use report_export::{ExportFormat, export, from_json, to_csv, to_json};
use report_model::{RecordId, ReportConfiguration, TimeSeriesPoint};

#[test]
fn default_csv_matches_snapshot() {
    let csv = to_csv(&ReportConfiguration::default()).unwrap();
    insta::assert_snapshot!(csv, @r"
    Period,Inflation,Adoption,P2P Volume
    Q1 2023,6.2,12.4,2.1
    Q2 2023,5.8,14.2,2.4
    Q3 2023,5.1,15.8,2.8
    Q4 2023,4.8,18.1,3.2
    Q1 2024,5.4,21.3,3.9
    Q2 2024,6.1,24.7,4.5
    Q3 2024,7.2,28.9,5.8
    Q4 2024,6.8,31.2,6.2
    Q1 2025,5.9,33.5,6.8
    Q2 2025,5.2,35.1,7.1
    ");
}

#[test]
fn csv_has_one_line_per_record_in_stored_order() {
    let mut config = ReportConfiguration::default();
    config.time_series_data.reverse();

    let csv = to_csv(&config).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 1 + config.time_series_data.len());
    assert_eq!(lines[0], "Period,Inflation,Adoption,P2P Volume");
    assert!(lines[1].starts_with("Q2 2025,"));
    assert!(lines[10].starts_with("Q1 2023,"));
}

#[test]
fn json_round_trips_the_default_report() {
    let config = ReportConfiguration::default();
    let text = to_json(&config).unwrap();
    assert_eq!(from_json(&text).unwrap(), config);
}

#[test]
fn export_does_not_touch_its_input() {
    let config = ReportConfiguration::default();
    let before = config.clone();
    for format in ExportFormat::ALL {
        export(&config, format).unwrap();
    }
    assert_eq!(config, before);
}

/// Two-decimal values, the precision report figures are entered with.
fn figure() -> impl Strategy<Value = f64> {
    (-10_000_000i64..10_000_000).prop_map(|cents| cents as f64 / 100.0)
}

fn point_strategy() -> impl Strategy<Value = TimeSeriesPoint> {
    (
        any::<u64>(),
        "[A-Za-z0-9 ,\"]{0,12}",
        figure(),
        figure(),
        figure(),
    )
        .prop_map(|(id, period, inflation, adoption, p2p_volume)| TimeSeriesPoint {
            id: RecordId::new(id),
            period,
            inflation,
            adoption,
            p2p_volume,
        })
}

proptest! {
    #[test]
    fn json_round_trip_preserves_any_series(
        points in prop::collection::vec(point_strategy(), 0..20),
        title in ".{0,40}",
    ) {
        let mut config = ReportConfiguration::default();
        config.project_title = title;
        config.time_series_data = points;

        let text = to_json(&config).unwrap();
        prop_assert_eq!(from_json(&text).unwrap(), config);
    }

    #[test]
    fn csv_rows_read_back_as_stored_values(
        points in prop::collection::vec(point_strategy(), 0..20),
    ) {
        let mut config = ReportConfiguration::default();
        config.time_series_data = points;

        let csv = to_csv(&config).unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>().unwrap();

        prop_assert_eq!(rows.len(), config.time_series_data.len());
        for (row, point) in rows.iter().zip(&config.time_series_data) {
            prop_assert_eq!(&row[0], point.period.as_str());
            prop_assert_eq!(row[1].parse::<f64>().unwrap(), point.inflation);
            prop_assert_eq!(row[2].parse::<f64>().unwrap(), point.adoption);
            prop_assert_eq!(row[3].parse::<f64>().unwrap(), point.p2p_volume);
        }
    }
}
