use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{InvalidParameter, Result};

/// Defines the valid range for a numeric parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
    /// When set, `min` itself is rejected (e.g. "must be positive").
    #[serde(default)]
    pub exclusive_min: bool,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: None,
            exclusive_min: false,
        }
    }

    /// Whole numbers only.
    pub const fn integer(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: Some(1.0),
            exclusive_min: false,
        }
    }

    /// `(min, max]`.
    pub const fn above(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: None,
            exclusive_min: true,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min || value > self.max {
            return false;
        }
        if self.exclusive_min && value == self.min {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }

    /// Return `value` unchanged if it lies in range, otherwise an
    /// [`InvalidParameter`] naming `field` and the allowed domain.
    pub fn check(&self, field: &str, value: f64) -> Result<f64> {
        if self.contains(value) {
            Ok(value)
        } else if self.step.is_some() && value >= self.min && value <= self.max {
            Err(InvalidParameter::new(
                field,
                format!("must be a whole number in {self}, got {value}"),
            ))
        } else {
            Err(InvalidParameter::new(
                field,
                format!("must be in {self}, got {value}"),
            ))
        }
    }

    /// Integer-valued variant of [`check`](Self::check).
    pub fn check_int(&self, field: &str, value: i64) -> Result<i64> {
        self.check(field, value as f64).map(|_| value)
    }
}

impl fmt::Display for ParamRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.exclusive_min { '(' } else { '[' };
        write!(f, "{open}{}, {}]", self.min, self.max)
    }
}
