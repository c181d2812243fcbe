use clinscore_core::lookup::at_least;
use clinscore_core::{
    Assessment, Band, InvalidParameter, ParamRange, Params, Result, Specialty, Tally, classify,
};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// APACHE II: ICU severity of illness from the worst values in the first
/// 24 hours.
pub struct ApacheIi;

const AGE: ParamRange = ParamRange::integer(0.0, 120.0);
const TEMPERATURE: ParamRange = ParamRange::new(25.0, 46.0);
const MAP: ParamRange = ParamRange::new(30.0, 250.0);
const PH: ParamRange = ParamRange::new(6.5, 8.0);
const HEART_RATE: ParamRange = ParamRange::new(20.0, 250.0);
const RESPIRATORY_RATE: ParamRange = ParamRange::new(5.0, 80.0);
const SODIUM: ParamRange = ParamRange::new(100.0, 200.0);
const POTASSIUM: ParamRange = ParamRange::new(1.0, 10.0);
const CREATININE: ParamRange = ParamRange::new(0.1, 20.0);
const HEMATOCRIT: ParamRange = ParamRange::new(10.0, 70.0);
const WBC: ParamRange = ParamRange::new(0.1, 100.0);
const GCS: ParamRange = ParamRange::integer(3.0, 15.0);
const FIO2: ParamRange = ParamRange::new(0.21, 1.0);
const PAO2: ParamRange = ParamRange::new(30.0, 700.0);
const AADO2: ParamRange = ParamRange::new(0.0, 800.0);

// Descending thresholds; the first row the value reaches gives the points.
const TEMPERATURE_POINTS: &[(f64, i64)] = &[
    (41.0, 4),
    (39.0, 3),
    (38.5, 1),
    (36.0, 0),
    (34.0, 1),
    (32.0, 2),
    (30.0, 3),
];
const MAP_POINTS: &[(f64, i64)] = &[(160.0, 4), (130.0, 3), (110.0, 2), (70.0, 0), (50.0, 2)];
const HEART_RATE_POINTS: &[(f64, i64)] = &[
    (180.0, 4),
    (140.0, 3),
    (110.0, 2),
    (70.0, 0),
    (55.0, 2),
    (40.0, 3),
];
const RESPIRATORY_RATE_POINTS: &[(f64, i64)] = &[
    (50.0, 4),
    (35.0, 3),
    (25.0, 1),
    (12.0, 0),
    (10.0, 1),
    (6.0, 2),
];
const PH_POINTS: &[(f64, i64)] = &[
    (7.7, 4),
    (7.6, 3),
    (7.5, 1),
    (7.33, 0),
    (7.25, 2),
    (7.15, 3),
];
const SODIUM_POINTS: &[(f64, i64)] = &[
    (180.0, 4),
    (160.0, 3),
    (155.0, 2),
    (150.0, 1),
    (130.0, 0),
    (120.0, 2),
    (111.0, 3),
];
const POTASSIUM_POINTS: &[(f64, i64)] = &[
    (7.0, 4),
    (6.0, 3),
    (5.5, 1),
    (3.5, 0),
    (3.0, 1),
    (2.5, 2),
];
const HEMATOCRIT_POINTS: &[(f64, i64)] = &[(60.0, 4), (50.0, 2), (46.0, 1), (30.0, 0), (20.0, 2)];
const WBC_POINTS: &[(f64, i64)] = &[(40.0, 4), (20.0, 2), (15.0, 1), (3.0, 0), (1.0, 2)];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        10.0,
        "Low Risk",
        "Low mortality risk",
        "Low severity of illness; predicted mortality typically below 10%.",
    ),
    Band::new(
        10.0,
        20.0,
        "Moderate Risk",
        "Moderate mortality risk",
        "Moderate severity of illness; predicted mortality typically 10-25%. Standard ICU care and close monitoring.",
    ),
    Band::new(
        20.0,
        30.0,
        "High Risk",
        "High mortality risk",
        "High severity of illness; predicted mortality typically 25-50%. Aggressive intensive care is warranted.",
    ),
    Band::new(
        30.0,
        40.0,
        "Very High Risk",
        "Very high mortality risk",
        "Very high severity of illness; predicted mortality typically 50-75%. Consider goals-of-care discussion.",
    ),
    Band::new(
        40.0,
        f64::INFINITY,
        "Extremely High Risk",
        "Extremely high mortality risk",
        "Extremely high severity of illness; predicted mortality above 75%.",
    ),
];

/// Oxygenation is scored on PaO₂ below FiO₂ 0.5 and on the A-a gradient
/// at or above it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Oxygenation {
    PaO2(f64),
    AaDo2(f64),
}

impl Oxygenation {
    pub fn from_params(params: &Params) -> Result<Self> {
        let fio2 = FIO2.check("fio2", params.number("fio2")?)?;
        if fio2 < 0.5 {
            let pao2 = params
                .optional_number("pao2")?
                .ok_or_else(|| InvalidParameter::new("pao2", "required when fio2 < 0.5"))?;
            Ok(Oxygenation::PaO2(PAO2.check("pao2", pao2)?))
        } else {
            let aado2 = params
                .optional_number("aado2")?
                .ok_or_else(|| InvalidParameter::new("aado2", "required when fio2 >= 0.5"))?;
            Ok(Oxygenation::AaDo2(AADO2.check("aado2", aado2)?))
        }
    }

    pub fn points(self) -> i64 {
        match self {
            Oxygenation::PaO2(v) => at_least(&[(70.0, 0), (61.0, 1), (55.0, 3)], v, 4),
            Oxygenation::AaDo2(v) => at_least(&[(500.0, 4), (350.0, 3), (200.0, 2)], v, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChronicHealth {
    None,
    Present,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionType {
    ElectivePostoperative,
    Nonoperative,
    EmergencyPostoperative,
}

fn age_points(age: i64) -> i64 {
    match age {
        ..=44 => 0,
        45..=54 => 2,
        55..=64 => 3,
        65..=74 => 5,
        _ => 6,
    }
}

impl Calculator for ApacheIi {
    fn id(&self) -> &'static str {
        "apache_ii"
    }

    fn name(&self) -> &'static str {
        "APACHE II Score"
    }

    fn specialty(&self) -> Specialty {
        Specialty::CriticalCare
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age",
            "temperature",
            "mean_arterial_pressure",
            "ph",
            "heart_rate",
            "respiratory_rate",
            "sodium",
            "potassium",
            "creatinine",
            "acute_renal_failure",
            "hematocrit",
            "white_blood_cell_count",
            "glasgow_coma_scale",
            "fio2",
            "pao2",
            "aado2",
            "chronic_health_status",
            "admission_type",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check_int("age", params.integer("age")?)?;
        let temp = TEMPERATURE.check("temperature", params.number("temperature")?)?;
        let map = MAP.check("mean_arterial_pressure", params.number("mean_arterial_pressure")?)?;
        let ph = PH.check("ph", params.number("ph")?)?;
        let hr = HEART_RATE.check("heart_rate", params.number("heart_rate")?)?;
        let rr = RESPIRATORY_RATE.check("respiratory_rate", params.number("respiratory_rate")?)?;
        let na = SODIUM.check("sodium", params.number("sodium")?)?;
        let k = POTASSIUM.check("potassium", params.number("potassium")?)?;
        let cr = CREATININE.check("creatinine", params.number("creatinine")?)?;
        let arf = params.yes_no("acute_renal_failure")?;
        let hct = HEMATOCRIT.check("hematocrit", params.number("hematocrit")?)?;
        let wbc = WBC.check("white_blood_cell_count", params.number("white_blood_cell_count")?)?;
        let gcs = GCS.check_int("glasgow_coma_scale", params.integer("glasgow_coma_scale")?)?;
        let oxygenation = Oxygenation::from_params(params)?;
        let chronic = params
            .optional_token::<ChronicHealth>("chronic_health_status")?
            .unwrap_or(ChronicHealth::None);
        let admission = params
            .optional_token::<AdmissionType>("admission_type")?
            .unwrap_or(AdmissionType::Nonoperative);

        // Creatinine points double in acute renal failure.
        let creatinine = at_least(&[(3.5, 4), (2.0, 3), (1.5, 2), (0.6, 0)], cr, 2);
        let chronic_points = match (chronic, admission) {
            (ChronicHealth::None, _) => 0,
            (ChronicHealth::Present, AdmissionType::ElectivePostoperative) => 2,
            (ChronicHealth::Present, _) => 5,
        };

        let mut tally = Tally::new();
        tally
            .add("temperature", at_least(TEMPERATURE_POINTS, temp, 4))
            .add("mean_arterial_pressure", at_least(MAP_POINTS, map, 4))
            .add("heart_rate", at_least(HEART_RATE_POINTS, hr, 4))
            .add("respiratory_rate", at_least(RESPIRATORY_RATE_POINTS, rr, 4))
            .add("oxygenation", oxygenation.points())
            .add("ph", at_least(PH_POINTS, ph, 4))
            .add("sodium", at_least(SODIUM_POINTS, na, 4))
            .add("potassium", at_least(POTASSIUM_POINTS, k, 4))
            .add("creatinine", if arf { creatinine * 2 } else { creatinine })
            .add("hematocrit", at_least(HEMATOCRIT_POINTS, hct, 4))
            .add("white_blood_cell_count", at_least(WBC_POINTS, wbc, 4))
            .add("glasgow_coma_scale", 15 - gcs)
            .add("age", age_points(age))
            .add("chronic_health", chronic_points);

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        let interpretation = format!("APACHE II score {score} points. {}", band.interpretation);

        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(interpretation)
            .with_detail("breakdown", tally.breakdown()))
    }
}
