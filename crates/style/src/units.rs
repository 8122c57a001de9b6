//! Tolerant parsing of numeric CSS lengths into `(value, unit)` pairs.

use serde::{Deserialize, Serialize};

/// A numeric CSS value decomposed into magnitude and unit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub value: f64,
    pub unit: String,
}

impl Length {
    pub fn new(value: f64, unit: &str) -> Self {
        Self {
            value,
            unit: unit.to_owned(),
        }
    }
}

/// Parse a computed length like `"16px"`, `"1.5em"` or `"120%"`.
///
/// Best-effort by policy, never fails: a bare number defaults the unit to
/// pixels, and anything unparseable degrades to `{value: 0, unit: ""}` so
/// extraction can never take the host page down.
pub fn parse_length(raw: &str) -> Length {
    let trimmed = raw.trim();
    let number_end = trimmed
        .find(|character: char| !(character.is_ascii_digit() || character == '.'))
        .unwrap_or(trimmed.len());
    let (number_part, unit_part) = trimmed.split_at(number_end);

    let unit_is_valid = unit_part
        .chars()
        .all(|character| character.is_ascii_lowercase() || character == '%');
    if number_part.is_empty() || !unit_is_valid {
        return Length::default();
    }

    match number_part.parse::<f64>() {
        Ok(value) => {
            let unit = if unit_part.is_empty() {
                "px"
            } else {
                unit_part
            };
            Length::new(value, unit)
        }
        Err(_) => Length::default(),
    }
}
