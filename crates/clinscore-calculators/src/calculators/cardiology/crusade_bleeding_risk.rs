use clinscore_core::lookup::up_to;
use clinscore_core::numeric::fixed;
use clinscore_core::{
    Assessment, Band, ParamRange, Params, Result, Sex, Specialty, Tally, band_index, classify,
};

use crate::Calculator;

/// CRUSADE in-hospital major bleeding risk for NSTEMI.
pub struct CrusadeBleedingRisk;

const HEMATOCRIT: ParamRange = ParamRange::new(15.0, 55.0);
const CREATININE_CLEARANCE: ParamRange = ParamRange::new(5.0, 200.0);
const HEART_RATE: ParamRange = ParamRange::integer(30.0, 200.0);
const SYSTOLIC: ParamRange = ParamRange::integer(60.0, 250.0);

const HEMATOCRIT_POINTS: &[(f64, i64)] = &[(31.0, 9), (34.0, 7), (37.0, 3), (40.0, 2)];
const CREATININE_CLEARANCE_POINTS: &[(f64, i64)] = &[
    (15.0, 39),
    (30.0, 35),
    (60.0, 28),
    (90.0, 17),
    (120.0, 7),
];
const HEART_RATE_POINTS: &[(f64, i64)] = &[
    (70.0, 0),
    (80.0, 1),
    (90.0, 3),
    (100.0, 6),
    (110.0, 8),
    (120.0, 10),
];
const SYSTOLIC_POINTS: &[(f64, i64)] = &[
    (90.0, 10),
    (100.0, 8),
    (120.0, 5),
    (180.0, 1),
    (200.0, 3),
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        21.0,
        "Very Low Risk",
        "3.1% major bleeding risk",
        "Very low in-hospital major bleeding risk.",
    ),
    Band::new(
        21.0,
        31.0,
        "Low Risk",
        "5.5% major bleeding risk",
        "Low in-hospital major bleeding risk.",
    ),
    Band::new(
        31.0,
        41.0,
        "Moderate Risk",
        "8.6% major bleeding risk",
        "Moderate in-hospital major bleeding risk. Weigh antithrombotic intensity carefully.",
    ),
    Band::new(
        41.0,
        51.0,
        "High Risk",
        "11.9% major bleeding risk",
        "High in-hospital major bleeding risk. Favour radial access and bleeding-avoidance strategies.",
    ),
    Band::new(
        51.0,
        f64::INFINITY,
        "Very High Risk",
        "19.5% major bleeding risk",
        "Very high in-hospital major bleeding risk. Minimise antithrombotic exposure where possible.",
    ),
];

const BLEEDING_RATE: [f64; 5] = [3.1, 5.5, 8.6, 11.9, 19.5];

impl Calculator for CrusadeBleedingRisk {
    fn id(&self) -> &'static str {
        "crusade_bleeding_risk"
    }

    fn name(&self) -> &'static str {
        "CRUSADE Score for Post-MI Bleeding Risk"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Cardiology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "baseline_hematocrit",
            "creatinine_clearance",
            "heart_rate",
            "patient_sex",
            "signs_chf",
            "diabetes_mellitus",
            "prior_vascular_disease",
            "systolic_blood_pressure",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let hct = HEMATOCRIT.check("baseline_hematocrit", params.number("baseline_hematocrit")?)?;
        let crcl = CREATININE_CLEARANCE.check(
            "creatinine_clearance",
            params.number("creatinine_clearance")?,
        )?;
        let hr = HEART_RATE.check("heart_rate", params.number("heart_rate")?)?;
        let sbp =
            SYSTOLIC.check("systolic_blood_pressure", params.number("systolic_blood_pressure")?)?;
        let sex: Sex = params.token("patient_sex")?;

        let mut tally = Tally::new();
        tally
            .add("baseline_hematocrit", up_to(HEMATOCRIT_POINTS, hct, 0))
            .add(
                "creatinine_clearance",
                up_to(CREATININE_CLEARANCE_POINTS, crcl, 0),
            )
            .add("heart_rate", up_to(HEART_RATE_POINTS, hr, 11))
            .flag("patient_sex", sex.is_female(), 8)
            .flag("signs_chf", params.yes_no("signs_chf")?, 7)
            .flag("diabetes_mellitus", params.yes_no("diabetes_mellitus")?, 6)
            .flag(
                "prior_vascular_disease",
                params.yes_no("prior_vascular_disease")?,
                6,
            )
            .add("systolic_blood_pressure", up_to(SYSTOLIC_POINTS, sbp, 5));

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        let rate = BLEEDING_RATE[band_index(BANDS, score as f64)];
        let interpretation = format!(
            "CRUSADE score {score}: {} ({}% in-hospital major bleeding). {}",
            band.stage.to_lowercase(),
            fixed(rate, 1),
            band.interpretation
        );

        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(interpretation)
            .with_detail("bleeding_risk_percent", rate)
            .with_detail("breakdown", tally.breakdown()))
    }
}
