use serde::Deserialize;

use crate::core::InsightsError;

/// A JSON value that providers send either as a number or as a numeric string.
///
/// Twelve Data encodes every price as a string (`"close": "189.98"`); mocks and
/// some endpoints send plain numbers.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub(crate) enum NumOrString {
    Num(f64),
    Text(String),
}

impl NumOrString {
    /// Textual form as the provider sent it, used for display strings like the day range.
    pub(crate) fn as_text(&self) -> String {
        match self {
            Self::Num(n) => n.to_string(),
            Self::Text(s) => s.trim().to_string(),
        }
    }

    pub(crate) fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        }
        .filter(|v| v.is_finite())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn to_u64(&self) -> Option<u64> {
        match self {
            // fractional or negative values are rejected
            Self::Num(n) if n.fract() == 0.0 && *n >= 0.0 => Some(*n as u64),
            Self::Num(_) => None,
            Self::Text(s) => s.trim().parse::<u64>().ok(),
        }
    }
}

/// Required numeric field: missing or unparseable values are a data error naming the field.
pub(crate) fn required_f64(
    value: Option<&NumOrString>,
    field: &str,
) -> Result<f64, InsightsError> {
    let raw = value.ok_or_else(|| InsightsError::Data(format!("missing field `{field}`")))?;
    raw.to_f64().ok_or_else(|| {
        InsightsError::Data(format!(
            "field `{field}` is not a number: {:?}",
            raw.as_text()
        ))
    })
}

/// Optional numeric field: absent and unparseable both collapse to `None`.
pub(crate) fn optional_f64(value: Option<&NumOrString>) -> Option<f64> {
    value.and_then(NumOrString::to_f64)
}
