use report_model::ReportConfiguration;

use crate::error::Result;

/// Serialize the whole configuration as indented JSON.
pub fn to_json(config: &ReportConfiguration) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Parse text produced by [`to_json`].
pub fn from_json(text: &str) -> Result<ReportConfiguration> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_two_space_indentation() {
        let json = to_json(&ReportConfiguration::default()).unwrap();
        assert!(json.starts_with("{\n  \"projectTitle\": "));
    }

    #[test]
    fn malformed_text_is_an_error() {
        assert!(from_json("{\"projectTitle\": 3").is_err());
        assert!(from_json("{}").is_err());
    }
}
