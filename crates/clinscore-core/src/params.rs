use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{InvalidParameter, Result};

/// The flat field → value mapping a calculator is invoked with.
///
/// Values are JSON scalars already parsed by the caller: numbers for numeric
/// fields, strings for enumerated tokens. Typed accessors turn a wrong type,
/// a missing field or an unknown token into an [`InvalidParameter`] naming the
/// field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy when assembling inputs in code.
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: &str, value: impl Into<Value>) {
        self.0.insert(field.to_string(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|v| !v.is_null())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn required(&self, field: &str) -> Result<&Value> {
        self.get(field).ok_or_else(|| InvalidParameter::missing(field))
    }

    pub fn number(&self, field: &str) -> Result<f64> {
        let value = self.required(field)?;
        value
            .as_f64()
            .ok_or_else(|| InvalidParameter::new(field, format!("expected a number, got {value}")))
    }

    pub fn integer(&self, field: &str) -> Result<i64> {
        let value = self.required(field)?;
        if let Some(i) = value.as_i64() {
            return Ok(i);
        }
        match value.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
            _ => Err(InvalidParameter::new(
                field,
                format!("expected an integer, got {value}"),
            )),
        }
    }

    /// Deserialize an enumerated token. Serde's error already lists the
    /// accepted variants, which becomes the reason text.
    pub fn token<T: DeserializeOwned>(&self, field: &str) -> Result<T> {
        let value = self.required(field)?;
        serde_json::from_value(value.clone())
            .map_err(|e| InvalidParameter::new(field, e.to_string()))
    }

    pub fn yes_no(&self, field: &str) -> Result<bool> {
        self.token::<YesNo>(field).map(bool::from)
    }

    pub fn optional_number(&self, field: &str) -> Result<Option<f64>> {
        if self.contains(field) {
            self.number(field).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn optional_integer(&self, field: &str) -> Result<Option<i64>> {
        if self.contains(field) {
            self.integer(field).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn optional_token<T: DeserializeOwned>(&self, field: &str) -> Result<Option<T>> {
        if self.contains(field) {
            self.token(field).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Reject any field not in `declared`.
    pub fn deny_unknown(&self, declared: &[&str]) -> Result<()> {
        match self.fields().find(|f| !declared.contains(f)) {
            Some(field) => Err(InvalidParameter::unknown(field)),
            None => Ok(()),
        }
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Params {
    type Error = InvalidParameter;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(InvalidParameter::new(
                "params",
                format!("expected an object of named fields, got {other}"),
            )),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// The ubiquitous `"yes"` / `"no"` criterion token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl From<YesNo> for bool {
    fn from(value: YesNo) -> Self {
        matches!(value, YesNo::Yes)
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Yes } else { YesNo::No }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn is_female(self) -> bool {
        self == Sex::Female
    }
}
