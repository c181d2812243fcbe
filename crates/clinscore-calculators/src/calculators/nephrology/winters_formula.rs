use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{Assessment, ParamRange, Params, Result, Specialty};

use crate::Calculator;

/// Winter's formula: expected pCO₂ for a metabolic acidosis,
/// `1.5 × HCO₃⁻ + 8 ± 2`. A measured pCO₂, when given, is compared against
/// the expected range.
pub struct WintersFormula;

const BICARBONATE: ParamRange = ParamRange::new(5.0, 35.0);
const PCO2: ParamRange = ParamRange::new(10.0, 80.0);
const TOLERANCE: f64 = 2.0;

pub fn expected_pco2(bicarbonate: f64) -> f64 {
    1.5 * bicarbonate + 8.0
}

fn acidosis_severity(bicarbonate: f64) -> &'static str {
    if bicarbonate >= 18.0 {
        "mild"
    } else if bicarbonate >= 12.0 {
        "moderate"
    } else if bicarbonate >= 10.0 {
        "severe"
    } else {
        "life_threatening"
    }
}

impl Calculator for WintersFormula {
    fn id(&self) -> &'static str {
        "winters_formula"
    }

    fn name(&self) -> &'static str {
        "Winter's Formula for Metabolic Acidosis Compensation"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Nephrology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["bicarbonate", "measured_pco2"]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let bicarbonate = BICARBONATE.check("bicarbonate", params.number("bicarbonate")?)?;
        let measured = params
            .optional_number("measured_pco2")?
            .map(|v| PCO2.check("measured_pco2", v))
            .transpose()?;

        let expected = round_to(expected_pco2(bicarbonate), 1);
        let lower = round_to(expected - TOLERANCE, 1);
        let upper = round_to(expected + TOLERANCE, 1);
        let range = format!("{}-{} mmHg", fixed(lower, 1), fixed(upper, 1));

        let assessment = match measured {
            None => Assessment::new(
                expected,
                "mmHg",
                "Expected Compensation",
                "Calculated expected respiratory compensation",
                format!(
                    "Expected pCO₂ {range} for bicarbonate {bicarbonate} mEq/L. Compare with an arterial blood gas to assess compensation."
                ),
            ),
            Some(pco2) => {
                let difference = pco2 - expected_pco2(bicarbonate);
                let (stage, description, advice) = if difference < -TOLERANCE {
                    (
                        "Overcompensation",
                        "Respiratory overcompensation",
                        "suggests a concurrent primary respiratory alkalosis",
                    )
                } else if difference > TOLERANCE {
                    (
                        "Undercompensation",
                        "Inadequate respiratory compensation",
                        "suggests a concurrent primary respiratory acidosis; assess for respiratory fatigue",
                    )
                } else {
                    (
                        "Appropriate Compensation",
                        "Expected respiratory compensation",
                        "indicates a simple metabolic acidosis with appropriate compensation",
                    )
                };
                Assessment::new(
                    expected,
                    "mmHg",
                    stage,
                    description,
                    format!("Measured pCO₂ {pco2} mmHg against expected {range} {advice}."),
                )
                .with_detail("difference", round_to(difference, 1))
            }
        };
        Ok(assessment
            .with_detail("expected_range_lower", lower)
            .with_detail("expected_range_upper", upper)
            .with_detail("acidosis_severity", acidosis_severity(bicarbonate)))
    }
}
