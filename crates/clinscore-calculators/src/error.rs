use clinscore_core::InvalidParameter;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("unknown calculator: {0}")]
    UnknownCalculator(String),

    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),
}
