use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::band::Band;

/// The primary computed output: a point total, a continuous value, or a
/// categorical label such as `"xray_indicated"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ScoreValue {
    Integer(i64),
    Decimal(f64),
    Label(String),
}

impl ScoreValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScoreValue::Integer(i) => Some(*i as f64),
            ScoreValue::Decimal(d) => Some(*d),
            ScoreValue::Label(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ScoreValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            ScoreValue::Label(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for ScoreValue {
    fn from(value: i64) -> Self {
        ScoreValue::Integer(value)
    }
}

impl From<i32> for ScoreValue {
    fn from(value: i32) -> Self {
        ScoreValue::Integer(value.into())
    }
}

impl From<u32> for ScoreValue {
    fn from(value: u32) -> Self {
        ScoreValue::Integer(value.into())
    }
}

impl From<f64> for ScoreValue {
    fn from(value: f64) -> Self {
        ScoreValue::Decimal(value)
    }
}

impl From<&str> for ScoreValue {
    fn from(value: &str) -> Self {
        ScoreValue::Label(value.to_string())
    }
}

impl From<String> for ScoreValue {
    fn from(value: String) -> Self {
        ScoreValue::Label(value)
    }
}

impl fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreValue::Integer(i) => write!(f, "{i}"),
            ScoreValue::Decimal(d) => write!(f, "{d}"),
            ScoreValue::Label(s) => f.write_str(s),
        }
    }
}

/// What every calculator returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub result: ScoreValue,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
    /// Calculator-specific sub-fields (component breakdown, mortality
    /// lookup, risk ranges).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, Value>,
}

impl Assessment {
    pub fn new(
        result: impl Into<ScoreValue>,
        unit: impl Into<String>,
        stage: impl Into<String>,
        stage_description: impl Into<String>,
        interpretation: impl Into<String>,
    ) -> Self {
        Self {
            result: result.into(),
            unit: unit.into(),
            interpretation: interpretation.into(),
            stage: stage.into(),
            stage_description: stage_description.into(),
            details: BTreeMap::new(),
        }
    }

    /// Stage, description and canned interpretation all come from `band`.
    pub fn from_band(result: impl Into<ScoreValue>, unit: impl Into<String>, band: &Band) -> Self {
        Self::new(
            result,
            unit,
            band.stage,
            band.description,
            band.interpretation,
        )
    }

    pub fn with_interpretation(mut self, interpretation: impl Into<String>) -> Self {
        self.interpretation = interpretation.into();
        self
    }

    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }

    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.get(key)
    }
}
