use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Sex, Specialty, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Kinetic eGFR: estimates GFR while creatinine is not at steady state,
/// anchored to an MDRD eGFR at the baseline creatinine.
pub struct KineticEgfr;

const AGE: ParamRange = ParamRange::integer(18.0, 120.0);
const BASELINE_CREATININE: ParamRange = ParamRange::new(0.1, 15.0);
const CREATININE: ParamRange = ParamRange::new(0.1, 25.0);
const HOURS: ParamRange = ParamRange::new(1.0, 168.0);
const MAX_DAILY_RISE: ParamRange = ParamRange::above(0.0, 5.0);

/// mg/dL per day when production continues with no filtration.
const DEFAULT_MAX_DAILY_RISE: f64 = 1.5;

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        15.0,
        "Very High AKI Risk",
        "Kidney failure",
        "Kinetic GFR in the kidney failure range. Urgent nephrology input and assessment for renal replacement therapy.",
    ),
    Band::new(
        15.0,
        30.0,
        "High AKI Risk",
        "Severe kidney dysfunction",
        "Severely reduced kinetic GFR. Adjust renally cleared drugs and monitor closely for complications.",
    ),
    Band::new(
        30.0,
        60.0,
        "Intermediate AKI Risk",
        "Moderate kidney dysfunction",
        "Moderately reduced kinetic GFR. Review nephrotoxins and drug dosing; repeat creatinine measurements.",
    ),
    Band::new(
        60.0,
        f64::INFINITY,
        "Low AKI Risk",
        "Normal/near-normal kidney function",
        "Kinetic GFR near normal. Continue monitoring creatinine trend.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    Black,
    NonBlack,
}

/// 4-variable IDMS-traceable MDRD.
pub fn mdrd_egfr(age: i64, sex: Sex, race: Race, creatinine: f64) -> f64 {
    let mut egfr = 175.0 * creatinine.powf(-1.154) * (age as f64).powf(-0.203);
    if sex.is_female() {
        egfr *= 0.742;
    }
    if race == Race::Black {
        egfr *= 1.212;
    }
    egfr
}

/// `KeGFR = SSCr × eGFR / meanCr × (1 - 24 × ΔCr / (Δt × maxΔCr/day))`,
/// floored at zero.
pub fn kinetic_egfr(
    baseline_creatinine: f64,
    baseline_egfr: f64,
    first: f64,
    second: f64,
    hours: f64,
    max_daily_rise: f64,
) -> f64 {
    let mean = (first + second) / 2.0;
    let rise_fraction = 24.0 * (second - first) / (hours * max_daily_rise);
    (baseline_creatinine * baseline_egfr / mean * (1.0 - rise_fraction)).max(0.0)
}

impl Calculator for KineticEgfr {
    fn id(&self) -> &'static str {
        "kinetic_egfr"
    }

    fn name(&self) -> &'static str {
        "Kinetic Estimated GFR"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Nephrology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age",
            "sex",
            "race",
            "baseline_creatinine",
            "creatinine_1",
            "creatinine_2",
            "time_hours",
            "max_daily_creatinine_rise",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check_int("age", params.integer("age")?)?;
        let sex: Sex = params.token("sex")?;
        let race: Race = params.token("race")?;
        let baseline = BASELINE_CREATININE.check(
            "baseline_creatinine",
            params.number("baseline_creatinine")?,
        )?;
        let first = CREATININE.check("creatinine_1", params.number("creatinine_1")?)?;
        let second = CREATININE.check("creatinine_2", params.number("creatinine_2")?)?;
        let hours = HOURS.check("time_hours", params.number("time_hours")?)?;
        let max_rise = params
            .optional_number("max_daily_creatinine_rise")?
            .map(|v| MAX_DAILY_RISE.check("max_daily_creatinine_rise", v))
            .transpose()?
            .unwrap_or(DEFAULT_MAX_DAILY_RISE);

        let baseline_egfr = mdrd_egfr(age, sex, race, baseline);
        let kegfr = kinetic_egfr(baseline, baseline_egfr, first, second, hours, max_rise);
        let band = classify(BANDS, kegfr);
        Ok(Assessment::from_band(round_to(kegfr, 1), "mL/min/1.73 m²", band)
            .with_interpretation(format!(
                "Kinetic eGFR {} mL/min/1.73 m² (baseline {}). {}",
                fixed(kegfr, 1),
                fixed(baseline_egfr, 1),
                band.interpretation
            ))
            .with_detail("baseline_egfr", round_to(baseline_egfr, 1))
            .with_detail("change_in_gfr", round_to(kegfr - baseline_egfr, 1)))
    }
}
