use clinscore_core::lookup::at_least;
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Sex, Specialty, Tally, classify};

use crate::Calculator;

/// Glasgow-Blatchford Bleeding Score for upper GI bleeding: identifies
/// patients who can be managed without intervention.
pub struct GlasgowBlatchford;

const BUN: ParamRange = ParamRange::new(5.0, 200.0);
const HEMOGLOBIN: ParamRange = ParamRange::new(3.0, 20.0);
const SYSTOLIC_BP: ParamRange = ParamRange::integer(50.0, 250.0);
const HEART_RATE: ParamRange = ParamRange::integer(30.0, 200.0);

const CLINICAL_FACTORS: &[(&str, i64)] = &[
    ("melena", 1),
    ("syncope", 2),
    ("liver_disease", 2),
    ("heart_failure", 2),
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        1.0,
        "Low Risk",
        "Very low risk - Safe for outpatient management",
        "Score of 0 identifies patients at very low risk of needing transfusion, endoscopic therapy or surgery. Outpatient management with early endoscopy is appropriate.",
    ),
    Band::new(
        1.0,
        6.0,
        "Low-Moderate Risk",
        "Low to moderate risk requiring clinical assessment",
        "Low to moderate risk. Admission for observation and endoscopy within 24 hours is usually warranted.",
    ),
    Band::new(
        6.0,
        12.0,
        "Moderate Risk",
        "Moderate risk requiring hospital admission",
        "Moderate risk of requiring intervention. Admit, resuscitate and arrange early endoscopy.",
    ),
    Band::new(
        12.0,
        f64::INFINITY,
        "High Risk",
        "High risk requiring urgent intervention",
        "High risk of requiring transfusion or intervention. Urgent resuscitation and endoscopy; consider ICU care.",
    ),
];

/// BUN in mg/dL.
pub fn bun_points(bun: f64) -> i64 {
    if bun < 18.2 {
        0
    } else if bun <= 22.3 {
        2
    } else if bun <= 28.0 {
        3
    } else if bun <= 70.0 {
        4
    } else {
        6
    }
}

pub fn hemoglobin_points(hemoglobin: f64, sex: Sex) -> i64 {
    if hemoglobin > if sex.is_female() { 12.0 } else { 13.0 } {
        return 0;
    }
    match sex {
        Sex::Male => at_least(&[(12.0, 1), (10.0, 3)], hemoglobin, 6),
        Sex::Female => at_least(&[(10.0, 1)], hemoglobin, 6),
    }
}

impl Calculator for GlasgowBlatchford {
    fn id(&self) -> &'static str {
        "glasgow_blatchford"
    }

    fn name(&self) -> &'static str {
        "Glasgow-Blatchford Bleeding Score"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Gastroenterology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "bun",
            "hemoglobin",
            "gender",
            "systolic_bp",
            "heart_rate",
            "melena",
            "syncope",
            "liver_disease",
            "heart_failure",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let bun = BUN.check("bun", params.number("bun")?)?;
        let hemoglobin = HEMOGLOBIN.check("hemoglobin", params.number("hemoglobin")?)?;
        let sex: Sex = params.token("gender")?;
        let systolic = SYSTOLIC_BP.check_int("systolic_bp", params.integer("systolic_bp")?)?;
        let heart_rate = HEART_RATE.check_int("heart_rate", params.integer("heart_rate")?)?;

        let mut tally = Tally::new();
        tally
            .add("bun", bun_points(bun))
            .add("hemoglobin", hemoglobin_points(hemoglobin, sex))
            .add(
                "systolic_bp",
                at_least(&[(110.0, 0), (100.0, 1), (90.0, 2)], systolic as f64, 3),
            )
            .flag("heart_rate", heart_rate >= 100, 1);
        for (field, weight) in CLINICAL_FACTORS {
            tally.flag(field, params.yes_no(field)?, *weight);
        }

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!(
                "Glasgow-Blatchford score {score}. {}",
                band.interpretation
            ))
            .with_detail("breakdown", tally.breakdown()))
    }
}
