use clinscore_core::numeric::round_to;
use clinscore_core::{
    Assessment, Band, ParamRange, Params, Result, Specialty, band_index, classify,
};

use crate::Calculator;

/// Get With The Guidelines - Heart Failure in-hospital mortality.
pub struct GwtgHeartFailure;

const AGE: ParamRange = ParamRange::integer(18.0, 120.0);
const SYSTOLIC: ParamRange = ParamRange::integer(50.0, 300.0);
const BUN: ParamRange = ParamRange::integer(5.0, 200.0);
const HEART_RATE: ParamRange = ParamRange::integer(30.0, 200.0);
const SODIUM: ParamRange = ParamRange::integer(110.0, 160.0);

/// Bands over the point score; fractional scores fall into the band whose
/// lower bound they have passed.
pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        34.0,
        "Very Low Risk",
        "Minimal mortality risk",
        "Standard heart failure management and discharge planning.",
    ),
    Band::new(
        34.0,
        51.0,
        "Low Risk",
        "Low mortality risk",
        "Standard guideline-directed therapy with routine monitoring.",
    ),
    Band::new(
        51.0,
        58.0,
        "Moderate Risk",
        "Moderate mortality risk",
        "Closer monitoring and optimisation of guideline-directed therapy.",
    ),
    Band::new(
        58.0,
        62.0,
        "High Risk",
        "High mortality risk",
        "Intensive monitoring; consider cardiology consultation.",
    ),
    Band::new(
        62.0,
        66.0,
        "High Risk",
        "High mortality risk",
        "Intensive monitoring; consider cardiology consultation.",
    ),
    Band::new(
        66.0,
        71.0,
        "Very High Risk",
        "Very high mortality risk",
        "Consider ICU-level care, advanced therapies, and goals-of-care discussion.",
    ),
    Band::new(
        71.0,
        75.0,
        "Very High Risk",
        "Very high mortality risk",
        "Consider ICU-level care, advanced therapies, and goals-of-care discussion.",
    ),
    Band::new(
        75.0,
        79.0,
        "Very High Risk",
        "Very high mortality risk",
        "Consider ICU-level care, advanced therapies, and goals-of-care discussion.",
    ),
    Band::new(
        79.0,
        f64::INFINITY,
        "Very High Risk",
        "Very high mortality risk",
        "Consider ICU-level care, advanced therapies, and goals-of-care discussion.",
    ),
];

const MORTALITY: [f64; 9] = [1.0, 3.0, 7.5, 12.5, 17.5, 25.0, 35.0, 45.0, 55.0];

impl Calculator for GwtgHeartFailure {
    fn id(&self) -> &'static str {
        "gwtg_heart_failure"
    }

    fn name(&self) -> &'static str {
        "GWTG-Heart Failure Risk Score"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Cardiology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["age", "systolic_bp", "bun", "heart_rate", "sodium", "copd", "black_race"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check("age", params.number("age")?)?;
        let sbp = SYSTOLIC.check("systolic_bp", params.number("systolic_bp")?)?;
        let bun = BUN.check("bun", params.number("bun")?)?;
        let hr = HEART_RATE.check("heart_rate", params.number("heart_rate")?)?;
        let sodium = SODIUM.check("sodium", params.number("sodium")?)?;
        let copd = params.yes_no("copd")?;
        let black = params.yes_no("black_race")?;

        let score = 25.0
            + (age - 65.0).max(0.0) * 0.7
            + (140.0 - sbp).max(0.0) * 0.08
            + (bun - 20.0).max(0.0) * 0.3
            + (hr - 70.0).max(0.0) * 0.08
            + (140.0 - sodium).max(0.0) * 0.5
            + if copd { 2.0 } else { 0.0 }
            + if black { 1.0 } else { 4.0 };
        let score = score.clamp(0.0, 100.0);

        let band = classify(BANDS, score);
        let mortality = MORTALITY[band_index(BANDS, score)];
        let interpretation = format!(
            "GWTG-HF score {:.1} points predicts {mortality:.1}% in-hospital mortality. {}",
            score, band.interpretation
        );

        Ok(Assessment::from_band(mortality, "percentage", band)
            .with_interpretation(interpretation)
            .with_detail("score", round_to(score, 1)))
    }
}
