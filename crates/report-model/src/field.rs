//! Field input and draft addressing.

use crate::records::{MethodologyField, RecordField};
use crate::section::Schema;

/// Raw value typed into a field.
///
/// Text fields take the input verbatim. Numeric fields coerce it with
/// [`coerce_number`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Text(String),
    Number(f64),
}

impl FieldInput {
    /// Text form of the input. Numbers use [`format_number`].
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(n) => format_number(n),
        }
    }

    /// Numeric form of the input, never NaN, infinite or negative zero.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Text(text) => coerce_number(text),
            Self::Number(n) if n.is_finite() => unsigned_zero(*n),
            Self::Number(_) => 0.0,
        }
    }
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Parse the longest leading decimal number in `input`, defaulting to 0.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"6.5%"`
/// reads as 6.5 and `"abc"` as 0. `"Infinity"` and out-of-range values read
/// as 0 as well, and `"-0"` reads as plain 0.
pub fn coerce_number(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    match s[..end].parse::<f64>() {
        Ok(n) if n.is_finite() => unsigned_zero(n),
        _ => 0.0,
    }
}

fn unsigned_zero(n: f64) -> f64 {
    if n == 0.0 { 0.0 } else { n }
}

/// Shortest text that reads back as the same number (`2.1`, `42`, `-0.5`).
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Location of a single editable value inside a section draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftPath {
    /// The whole value of a scalar text section.
    Value,
    /// A named field of the methodology struct.
    Field(MethodologyField),
    /// A field of the record at `index` in a collection.
    Element { index: usize, field: RecordField },
}

impl DraftPath {
    /// Schema this path can address.
    pub fn schema(&self) -> Schema {
        match self {
            Self::Value => Schema::Text,
            Self::Field(_) => Schema::Methodology,
            Self::Element { field, .. } => field.schema(),
        }
    }

    pub fn element(index: usize, field: impl Into<RecordField>) -> Self {
        Self::Element {
            index,
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_leading_numeric_prefix() {
        assert_eq!(coerce_number("6.5%"), 6.5);
        assert_eq!(coerce_number("  42 countries"), 42.0);
        assert_eq!(coerce_number("-3"), -3.0);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("5."), 5.0);
        assert_eq!(coerce_number("1e3x"), 1000.0);
        assert_eq!(coerce_number("2e"), 2.0);
    }

    #[test]
    fn unparseable_input_becomes_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("-"), 0.0);
        assert_eq!(coerce_number("."), 0.0);
        assert_eq!(coerce_number("Infinity"), 0.0);
        assert_eq!(coerce_number("1e999"), 0.0);
    }

    #[test]
    fn non_finite_numbers_become_zero() {
        assert_eq!(FieldInput::Number(f64::NAN).to_number(), 0.0);
        assert_eq!(FieldInput::Number(f64::INFINITY).to_number(), 0.0);
        assert_eq!(FieldInput::Number(1.25).to_number(), 1.25);
    }

    #[test]
    fn negative_zero_reads_as_zero() {
        for input in [FieldInput::from("-0"), FieldInput::from("-0.0e5"), FieldInput::Number(-0.0)] {
            let n = input.to_number();
            assert!(n.is_sign_positive(), "{input:?} gave {n}");
            assert_eq!(format_number(n), "0");
        }
    }

    #[test]
    fn numbers_format_without_trailing_zeros() {
        assert_eq!(format_number(2.1), "2.1");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(FieldInput::Number(0.5).into_text(), "0.5");
    }
}
