use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{
    Assessment, Band, InvalidParameter, ParamRange, Params, Result, Specialty, classify,
};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Mean Arterial Pressure: `(2 × DBP + SBP) / 3`.
pub struct MeanArterialPressure;

const SYSTOLIC: ParamRange = ParamRange::new(40.0, 300.0);
const DIASTOLIC: ParamRange = ParamRange::new(20.0, 200.0);

pub static BANDS: &[Band] = &[
    Band::new(
        f64::NEG_INFINITY,
        60.0,
        "Critical Low",
        "Inadequate organ perfusion",
        "MAP below 60 mmHg risks end-organ hypoperfusion. Urgent evaluation and hemodynamic support are indicated.",
    ),
    Band::new(
        60.0,
        70.0,
        "Low",
        "Below target perfusion pressure",
        "MAP below the usual 65-70 mmHg target. Assess volume status and consider vasopressor support in critically ill patients.",
    ),
    Band::new(
        70.0,
        100.0,
        "Normal",
        "Adequate organ perfusion",
        "MAP within the normal range, consistent with adequate perfusion of vital organs.",
    ),
    Band::new(
        100.0,
        110.0,
        "Elevated",
        "Above normal perfusion pressure",
        "Elevated MAP. Reassess blood pressure and evaluate for hypertension.",
    ),
    Band::new(
        110.0,
        f64::INFINITY,
        "High",
        "Hypertensive range",
        "Markedly elevated MAP. Evaluate for hypertensive urgency or emergency and end-organ damage.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapInput {
    pub systolic_bp: f64,
    pub diastolic_bp: f64,
}

impl MapInput {
    pub fn from_params(params: &Params) -> Result<Self> {
        Ok(Self {
            systolic_bp: params.number("systolic_bp")?,
            diastolic_bp: params.number("diastolic_bp")?,
        })
    }
}

pub fn calculate(input: &MapInput) -> Result<Assessment> {
    SYSTOLIC.check("systolic_bp", input.systolic_bp)?;
    DIASTOLIC.check("diastolic_bp", input.diastolic_bp)?;
    if input.diastolic_bp >= input.systolic_bp {
        return Err(InvalidParameter::new(
            "diastolic_bp",
            "must be lower than systolic_bp",
        ));
    }

    let map = (2.0 * input.diastolic_bp + input.systolic_bp) / 3.0;
    let band = classify(BANDS, map);
    let interpretation = format!("MAP {} mmHg. {}", fixed(map, 1), band.interpretation);

    Ok(Assessment::from_band(round_to(map, 1), "mmHg", band).with_interpretation(interpretation))
}

impl Calculator for MeanArterialPressure {
    fn id(&self) -> &'static str {
        "mean_arterial_pressure"
    }

    fn name(&self) -> &'static str {
        "Mean Arterial Pressure (MAP)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Cardiology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["systolic_bp", "diastolic_bp"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        calculate(&MapInput::from_params(params)?)
    }
}
