use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier, used as key by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How to format the value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
    Text,
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// Value of a KPI card. `NotAvailable` is rendered as "N/A".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum IndicatorValue {
    Number(f64),
    Text(String),
    NotAvailable,
}

/// A single KPI card returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub id: IndicatorId,
    pub label: String,
    pub format: ValueFormat,
    pub value: IndicatorValue,
}

impl Indicator {
    pub fn number(id: &str, label: &str, format: ValueFormat, value: f64) -> Self {
        Self {
            id: IndicatorId::new(id),
            label: label.to_string(),
            format,
            value: IndicatorValue::Number(value),
        }
    }

    pub fn count(id: &str, label: &str, value: usize) -> Self {
        Self::number(id, label, ValueFormat::Integer, value as f64)
    }

    pub fn text(id: &str, label: &str, value: impl Into<String>) -> Self {
        Self {
            id: IndicatorId::new(id),
            label: label.to_string(),
            format: ValueFormat::Text,
            value: IndicatorValue::Text(value.into()),
        }
    }

    /// Percentage card; `None` becomes "N/A".
    pub fn percent(id: &str, label: &str, value: Option<f64>) -> Self {
        Self {
            id: IndicatorId::new(id),
            label: label.to_string(),
            format: ValueFormat::Percent { decimals: 1 },
            value: value.map_or(IndicatorValue::NotAvailable, IndicatorValue::Number),
        }
    }
}
