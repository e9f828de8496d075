//! Integration tests for the report model.

use proptest::prelude::*;

use report_model::{
    DraftPath, FieldInput, InsightField, KeyFindingField, MethodologyField, ModelError,
    NewRecord, RecordId, ReportConfiguration, SectionKey, SectionValue, TimeSeriesField, Trend,
    coerce_number,
};

#[test]
fn json_uses_camel_case_wire_names() {
    let json = serde_json::to_value(ReportConfiguration::default()).unwrap();

    assert_eq!(json["reportDate"], "2025");
    assert_eq!(json["timeSeriesData"][0]["p2pVolume"], 2.1);
    assert_eq!(json["regionalData"][0]["highInflation"], 42.3);
    assert_eq!(json["keyFindings"][0]["trend"], "positive");
    assert_eq!(json["keyFindings"][0]["id"], 1);
    assert!(json["methodology"]["dataCollection"].is_string());
}

#[test]
fn json_key_order_follows_section_order() {
    let json = serde_json::to_string(&ReportConfiguration::default()).unwrap();
    let positions: Vec<usize> = SectionKey::ALL
        .iter()
        .map(|key| json.find(&format!("\"{key}\":")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn section_names_parse_and_reject_unknown() {
    for key in SectionKey::ALL {
        assert_eq!(key.as_str().parse::<SectionKey>().unwrap(), key);
    }
    assert_eq!(
        "overview".parse::<SectionKey>().unwrap_err(),
        ModelError::UnknownSection {
            name: "overview".to_string()
        }
    );
}

#[test]
fn apply_field_edits_each_shape() {
    let config = ReportConfiguration::default();

    let mut title = config.section(SectionKey::ProjectTitle);
    title
        .apply_field(SectionKey::ProjectTitle, &DraftPath::Value, "New".into())
        .unwrap();
    assert_eq!(title, SectionValue::Text("New".into()));

    let mut methodology = config.section(SectionKey::Methodology);
    methodology
        .apply_field(
            SectionKey::Methodology,
            &DraftPath::Field(MethodologyField::Analysis),
            "OLS".into(),
        )
        .unwrap();
    let SectionValue::Methodology(m) = methodology else {
        panic!("expected methodology");
    };
    assert_eq!(m.analysis, "OLS");

    let mut series = config.section(SectionKey::TimeSeriesData);
    series
        .apply_field(
            SectionKey::TimeSeriesData,
            &DraftPath::element(3, TimeSeriesField::P2pVolume),
            "9.75bn".into(),
        )
        .unwrap();
    let SectionValue::TimeSeries(points) = series else {
        panic!("expected time series");
    };
    assert_eq!(points[3].p2p_volume, 9.75);
}

#[test]
fn apply_field_rejects_mismatched_paths() {
    let config = ReportConfiguration::default();
    let mut insights = config.section(SectionKey::Insights);

    let err = insights
        .apply_field(
            SectionKey::Insights,
            &DraftPath::element(0, KeyFindingField::Metric),
            "x".into(),
        )
        .unwrap_err();
    assert!(matches!(err, ModelError::ShapeMismatch { .. }));

    let err = insights
        .apply_field(SectionKey::Insights, &DraftPath::Value, "x".into())
        .unwrap_err();
    assert!(matches!(err, ModelError::ShapeMismatch { .. }));

    let err = insights
        .apply_field(
            SectionKey::Insights,
            &DraftPath::element(4, InsightField::Title),
            "x".into(),
        )
        .unwrap_err();
    assert_eq!(
        err,
        ModelError::IndexOutOfRange {
            section: SectionKey::Insights,
            index: 4,
            len: 4
        }
    );

    assert_eq!(insights, config.section(SectionKey::Insights));
}

#[test]
fn record_operations_on_scalar_sections_fail() {
    let mut author = ReportConfiguration::default().section(SectionKey::Author);
    assert_eq!(
        author.push_blank(SectionKey::Author, RecordId::new(99)),
        Err(ModelError::NotACollection {
            section: SectionKey::Author
        })
    );
    assert_eq!(
        author.remove_record(SectionKey::Author, 0),
        Err(ModelError::NotACollection {
            section: SectionKey::Author
        })
    );
}

#[test]
fn push_assigns_the_given_id_and_remove_returns_it() {
    let mut findings = ReportConfiguration::default().section(SectionKey::KeyFindings);
    let record = NewRecord::KeyFinding(report_model::KeyFinding {
        id: RecordId::new(1),
        metric: "X".into(),
        value: "1".into(),
        subtitle: "Y".into(),
        trend: Trend::Negative,
    });
    findings
        .push_record(SectionKey::KeyFindings, record, RecordId::new(50))
        .unwrap();
    assert_eq!(findings.len(), Some(5));
    assert_eq!(findings.max_record_id(), Some(RecordId::new(50)));

    assert_eq!(
        findings.remove_record(SectionKey::KeyFindings, 4),
        Ok(RecordId::new(50))
    );
    assert_eq!(findings.len(), Some(4));
}

#[test]
fn push_rejects_records_of_another_schema() {
    let mut series = ReportConfiguration::default().section(SectionKey::TimeSeriesData);
    let blank_insight = NewRecord::blank(report_model::Schema::Insight).unwrap();
    let err = series
        .push_record(SectionKey::TimeSeriesData, blank_insight, RecordId::new(99))
        .unwrap_err();
    assert!(matches!(err, ModelError::ShapeMismatch { .. }));
    assert_eq!(series.len(), Some(10));
}

#[test]
fn push_rejects_an_id_already_in_the_collection() {
    let mut findings = ReportConfiguration::default().section(SectionKey::KeyFindings);
    let blank = NewRecord::blank(report_model::Schema::KeyFinding).unwrap();
    let err = findings
        .push_record(SectionKey::KeyFindings, blank, RecordId::new(1))
        .unwrap_err();
    assert_eq!(
        err,
        ModelError::DuplicateRecordId {
            section: SectionKey::KeyFindings,
            id: RecordId::new(1),
        }
    );
    assert_eq!(findings.len(), Some(4));
    assert_eq!(findings.check_unique_ids(SectionKey::KeyFindings), Ok(()));
}

#[test]
fn record_ids_stop_at_the_top_of_the_range() {
    assert_eq!(RecordId::new(7).checked_next(), Some(RecordId::new(8)));
    assert_eq!(RecordId::new(u64::MAX).checked_next(), None);
}

#[test]
fn number_input_on_text_field_is_stored_as_text() {
    let mut findings = ReportConfiguration::default().section(SectionKey::KeyFindings);
    findings
        .apply_field(
            SectionKey::KeyFindings,
            &DraftPath::element(2, KeyFindingField::Value),
            FieldInput::Number(43.0),
        )
        .unwrap();
    let SectionValue::KeyFindings(records) = findings else {
        panic!("expected key findings");
    };
    assert_eq!(records[2].value, "43");
}

proptest! {
    #[test]
    fn coerce_number_is_always_finite(input in ".*") {
        prop_assert!(coerce_number(&input).is_finite());
    }

    #[test]
    fn coerce_number_reads_formatted_floats(value in -1.0e9f64..1.0e9) {
        let text = format!("{value}%");
        prop_assert_eq!(coerce_number(&text), value);
    }
}
