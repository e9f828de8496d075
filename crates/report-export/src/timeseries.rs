//! CSV projection of the time-series section.

use report_model::{ReportConfiguration, format_number};

use crate::error::Result;

/// Header row of the time-series CSV.
pub const CSV_HEADER: [&str; 4] = ["Period", "Inflation", "Adoption", "P2P Volume"];

/// Render the time-series section as CSV, one line per record in stored
/// order. Every line, including the last, ends with `\n`.
pub fn to_csv(config: &ReportConfiguration) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for point in &config.time_series_data {
        writer.write_record([
            point.period.clone(),
            format_number(point.inflation),
            format_number(point.adoption),
            format_number(point.p2p_volume),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(csv::IntoInnerError::into_error)?;
    Ok(String::from_utf8(bytes)?)
}
