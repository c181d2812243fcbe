use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Sex, Specialty, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Expected peak expiratory flow (L/min), optionally with the asthma action
/// plan zone for a measured value.
pub struct ExpectedPeakFlow;

const AGE: ParamRange = ParamRange::integer(5.0, 80.0);
const HEIGHT: ParamRange = ParamRange::new(100.0, 220.0);
const MEASURED: ParamRange = ParamRange::new(50.0, 800.0);

/// Floor applied to regression predictions.
const MIN_PREDICTED: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ethnicity {
    Caucasian,
    AfricanAmerican,
    MexicanAmerican,
    Other,
}

/// Hankinson-style coefficients: `(height_m × height + intercept − age × age_coef) × 60`.
struct Coefficients {
    height: f64,
    intercept: f64,
    age: f64,
}

fn coefficients(ethnicity: Ethnicity, sex: Sex) -> Coefficients {
    let (height, intercept, age) = match (ethnicity, sex) {
        (Ethnicity::Caucasian | Ethnicity::Other, Sex::Male) => (5.48, 1.58, 0.041),
        (Ethnicity::Caucasian | Ethnicity::Other, Sex::Female) => (3.72, 2.24, 0.03),
        (Ethnicity::AfricanAmerican, Sex::Male) => (4.82, 1.76, 0.041),
        (Ethnicity::AfricanAmerican, Sex::Female) => (3.27, 2.38, 0.03),
        (Ethnicity::MexicanAmerican, Sex::Male) => (5.22, 1.64, 0.041),
        (Ethnicity::MexicanAmerican, Sex::Female) => (3.54, 2.29, 0.03),
    };
    Coefficients { height, intercept, age }
}

/// Linear paediatric estimate used below age 8, and for children of
/// unlisted ethnicity.
fn pediatric(height_cm: f64) -> f64 {
    (height_cm - 100.0) * 5.0 + 100.0
}

pub fn expected_pef(age: i64, height_cm: f64, sex: Sex, ethnicity: Ethnicity) -> f64 {
    if age < 8 || (age < 18 && ethnicity == Ethnicity::Other) {
        return pediatric(height_cm);
    }
    let c = coefficients(ethnicity, sex);
    let predicted = (height_cm / 100.0 * c.height + c.intercept - age as f64 * c.age) * 60.0;
    predicted.max(MIN_PREDICTED)
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        50.0,
        "Emergency",
        "Severe obstruction",
        "Red zone: peak flow below 50% of expected. Use rescue medication and seek emergency care.",
    ),
    Band::new(
        50.0,
        80.0,
        "Caution",
        "Reduced lung function",
        "Yellow zone: peak flow 50-79% of expected. Use rescue medication and follow the action plan; contact the clinician if not improving.",
    ),
    Band::new(
        80.0,
        f64::INFINITY,
        "Normal",
        "Good control",
        "Green zone: peak flow 80% of expected or more. Continue the usual controller regimen.",
    ),
];

fn zone(stage: &str) -> &'static str {
    match stage {
        "Emergency" => "Red Zone",
        "Caution" => "Yellow Zone",
        _ => "Green Zone",
    }
}

impl Calculator for ExpectedPeakFlow {
    fn id(&self) -> &'static str {
        "expected_peak_flow"
    }

    fn name(&self) -> &'static str {
        "Expected Peak Expiratory Flow"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Pulmonology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["age_years", "height_cm", "sex", "race_ethnicity", "measured_pef"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check_int("age_years", params.integer("age_years")?)?;
        let height = HEIGHT.check("height_cm", params.number("height_cm")?)?;
        let sex = params.token::<Sex>("sex")?;
        let ethnicity = params.token::<Ethnicity>("race_ethnicity")?;
        let measured = params
            .optional_number("measured_pef")?
            .map(|v| MEASURED.check("measured_pef", v))
            .transpose()?;

        let raw = expected_pef(age, height, sex, ethnicity);
        let expected = round_to(raw, 1);
        let base = format!("Expected peak expiratory flow {} L/min.", fixed(expected, 1));

        let Some(measured) = measured else {
            return Ok(Assessment::new(
                expected,
                "L/min",
                "Expected Value",
                "Baseline reference",
                format!("{base} Compare with measured values to place the patient in an action plan zone; a personal best is preferred once established."),
            ));
        };

        let percent = measured / raw * 100.0;
        let band = classify(BANDS, percent);
        Ok(Assessment::from_band(expected, "L/min", band)
            .with_interpretation(format!(
                "{base} Measured {} L/min is {}% of expected. {}",
                fixed(measured, 1),
                fixed(percent, 1),
                band.interpretation
            ))
            .with_detail("measured_pef", measured)
            .with_detail("percentage_of_expected", round_to(percent, 1))
            .with_detail("zone", zone(band.stage)))
    }
}
