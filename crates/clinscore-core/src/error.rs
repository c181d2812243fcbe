use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// An input outside its declared domain. The only failure a calculator reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("invalid parameter '{field}': {reason}")]
pub struct InvalidParameter {
    pub field: String,
    pub reason: String,
}

impl InvalidParameter {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "required parameter is missing")
    }

    pub fn unknown(field: impl Into<String>) -> Self {
        Self::new(field, "unknown parameter")
    }
}

pub type Result<T, E = InvalidParameter> = std::result::Result<T, E>;
