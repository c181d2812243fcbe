use clinscore_core::numeric::round_to;
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty};

use crate::Calculator;

/// Emergency Heart failure Mortality Risk Grade (7-day mortality).
pub struct Ehmrg;

const AGE: ParamRange = ParamRange::integer(18.0, 120.0);
const SYSTOLIC: ParamRange = ParamRange::integer(40.0, 300.0);
const HEART_RATE: ParamRange = ParamRange::integer(30.0, 200.0);
const SPO2: ParamRange = ParamRange::integer(50.0, 100.0);
const CREATININE: ParamRange = ParamRange::new(0.1, 20.0);
const POTASSIUM: ParamRange = ParamRange::new(2.0, 8.0);

/// Upper bounds are inclusive: a score of exactly -49.1 is group 1.
pub static BANDS: &[Band] = &[
    Band::new(
        f64::NEG_INFINITY,
        -49.1,
        "Risk Group 1",
        "Very Low Risk",
        "Very low 7-day mortality. Discharge may be considered with close follow-up.",
    ),
    Band::new(
        -49.1,
        -15.9,
        "Risk Group 2",
        "Low Risk",
        "Low 7-day mortality. Discharge may be considered with close follow-up.",
    ),
    Band::new(
        -15.9,
        17.9,
        "Risk Group 3",
        "Intermediate Risk",
        "Intermediate 7-day mortality. Consider admission or short-stay observation.",
    ),
    Band::new(
        17.9,
        56.5,
        "Risk Group 4",
        "High Risk",
        "High 7-day mortality. Hospital admission is recommended.",
    ),
    Band::new(
        56.5,
        89.3,
        "Risk Group 5a",
        "Very High Risk",
        "Very high 7-day mortality. Admit with close monitoring.",
    ),
    Band::new(
        89.3,
        f64::INFINITY,
        "Risk Group 5b",
        "Highest Risk",
        "Highest 7-day mortality. Admit to a monitored or intensive care setting.",
    ),
];

const SEVEN_DAY_MORTALITY: [f64; 6] = [0.5, 0.3, 0.7, 2.1, 3.3, 8.0];

fn risk_group(score: f64) -> usize {
    BANDS
        .iter()
        .position(|b| score <= b.max)
        .unwrap_or(BANDS.len() - 1)
}

fn potassium_points(k: f64) -> f64 {
    if k <= 3.9 {
        5.0
    } else if k >= 4.6 {
        30.0
    } else {
        0.0
    }
}

impl Calculator for Ehmrg {
    fn id(&self) -> &'static str {
        "ehmrg"
    }

    fn name(&self) -> &'static str {
        "Emergency Heart Failure Mortality Risk Grade (EHMRG)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Cardiology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age",
            "ems_transport",
            "systolic_bp",
            "heart_rate",
            "oxygen_saturation",
            "creatinine",
            "potassium",
            "troponin_elevated",
            "active_cancer",
            "metolazone_use",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check("age", params.number("age")?)?;
        let sbp = SYSTOLIC.check("systolic_bp", params.number("systolic_bp")?)?;
        let hr = HEART_RATE.check("heart_rate", params.number("heart_rate")?)?;
        let spo2 = SPO2.check("oxygen_saturation", params.number("oxygen_saturation")?)?;
        let cr = CREATININE.check("creatinine", params.number("creatinine")?)?;
        let k = POTASSIUM.check("potassium", params.number("potassium")?)?;
        let points = |field: &str, weight: f64| -> Result<f64> {
            Ok(if params.yes_no(field)? { weight } else { 0.0 })
        };

        let score = 2.0 * age + points("ems_transport", 60.0)? - sbp.min(160.0)
            + hr.clamp(80.0, 120.0)
            - 2.0 * spo2.min(92.0)
            + 20.0 * cr
            + potassium_points(k)
            + points("troponin_elevated", 60.0)?
            + points("active_cancer", 45.0)?
            + points("metolazone_use", 60.0)?
            + 12.0;

        let group = risk_group(score);
        let band = &BANDS[group];
        let mortality = SEVEN_DAY_MORTALITY[group];
        let score = round_to(score, 1);
        let interpretation = format!(
            "EHMRG score {score}: {} ({}, {mortality}% 7-day mortality). {}",
            band.stage, band.description, band.interpretation
        );

        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(interpretation)
            .with_detail("seven_day_mortality_percent", mortality))
    }
}
