use clinscore_core::lookup::{below, up_to};
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Sex, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// MAGGIC heart failure mortality risk score.
pub struct Maggic;

const AGE: ParamRange = ParamRange::integer(18.0, 120.0);
const EJECTION_FRACTION: ParamRange = ParamRange::integer(10.0, 80.0);
const CREATININE: ParamRange = ParamRange::new(0.3, 15.0);
const SYSTOLIC: ParamRange = ParamRange::integer(60.0, 250.0);
const BMI: ParamRange = ParamRange::new(10.0, 60.0);

// Age weighs more when the ejection fraction is preserved (above 40%).
const AGE_POINTS_REDUCED_EF: &[(f64, i64)] = &[
    (55.0, 0),
    (60.0, 1),
    (65.0, 2),
    (70.0, 3),
    (75.0, 5),
    (80.0, 6),
];
const AGE_POINTS_PRESERVED_EF: &[(f64, i64)] = &[
    (55.0, 0),
    (60.0, 2),
    (65.0, 4),
    (70.0, 6),
    (75.0, 8),
    (80.0, 10),
];
const EJECTION_FRACTION_POINTS: &[(f64, i64)] = &[
    (20.0, 6),
    (25.0, 5),
    (30.0, 3),
    (35.0, 2),
    (40.0, 1),
];
const CREATININE_POINTS: &[(f64, i64)] = &[(1.2, 0), (1.4, 1), (1.8, 2), (2.3, 3), (2.8, 4)];
const SYSTOLIC_POINTS: &[(f64, i64)] = &[(100.0, 5), (110.0, 3), (120.0, 2), (140.0, 1)];
const BMI_POINTS: &[(f64, i64)] = &[(18.0, 5), (22.0, 3), (25.0, 2), (30.0, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NyhaClass {
    #[serde(rename = "I")]
    I = 0,
    #[serde(rename = "II")]
    Ii = 2,
    #[serde(rename = "III")]
    Iii = 6,
    #[serde(rename = "IV")]
    Iv = 8,
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        16.0,
        "Low Risk",
        "Low mortality risk",
        "1-year mortality below 5% and 3-year below 15%. Continue guideline-directed medical therapy with regular review.",
    ),
    Band::new(
        16.0,
        26.0,
        "Intermediate Risk",
        "Intermediate mortality risk",
        "1-year mortality 5-15% and 3-year 15-40%. Optimize medical therapy, consider device evaluation and keep regular cardiology follow-up.",
    ),
    Band::new(
        26.0,
        36.0,
        "High Risk",
        "High mortality risk",
        "1-year mortality 15-40% and 3-year 40-70%. Refer to an advanced heart failure specialist; evaluate for ICD/CRT and advanced therapies.",
    ),
    Band::new(
        36.0,
        f64::INFINITY,
        "Very High Risk",
        "Very high mortality risk",
        "1-year mortality above 40% and 3-year above 70%. Urgent advanced heart failure referral; discuss mechanical support, transplant or palliative care.",
    ),
];

impl Calculator for Maggic {
    fn id(&self) -> &'static str {
        "maggic_risk_calculator"
    }

    fn name(&self) -> &'static str {
        "MAGGIC Risk Calculator for Heart Failure"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Cardiology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age",
            "gender",
            "ejection_fraction",
            "nyha_class",
            "creatinine",
            "systolic_bp",
            "bmi",
            "diabetes",
            "copd",
            "current_smoker",
            "hf_duration_over_18_months",
            "beta_blocker",
            "ace_arb",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check_int("age", params.integer("age")?)? as f64;
        let sex: Sex = params.token("gender")?;
        let ef =
            EJECTION_FRACTION.check_int("ejection_fraction", params.integer("ejection_fraction")?)?;
        let nyha: NyhaClass = params.token("nyha_class")?;
        let creatinine = CREATININE.check("creatinine", params.number("creatinine")?)?;
        let sbp = SYSTOLIC.check_int("systolic_bp", params.integer("systolic_bp")?)?;
        let bmi = BMI.check("bmi", params.number("bmi")?)?;

        let age_points = if ef <= 40 {
            up_to(AGE_POINTS_REDUCED_EF, age, 8)
        } else {
            up_to(AGE_POINTS_PRESERVED_EF, age, 13)
        };

        let mut tally = Tally::new();
        tally
            .add("age", age_points)
            .flag("male", !sex.is_female(), 1)
            .add("ejection_fraction", below(EJECTION_FRACTION_POINTS, ef as f64, 0))
            .add("nyha_class", nyha as i64)
            .add("creatinine", up_to(CREATININE_POINTS, creatinine, 5))
            .add("systolic_bp", below(SYSTOLIC_POINTS, sbp as f64, 0))
            .add("bmi", below(BMI_POINTS, bmi, 0))
            .flag("diabetes", params.yes_no("diabetes")?, 3)
            .flag("copd", params.yes_no("copd")?, 2)
            .flag("current_smoker", params.yes_no("current_smoker")?, 1)
            .flag(
                "hf_duration_over_18_months",
                params.yes_no("hf_duration_over_18_months")?,
                2,
            )
            .flag("no_beta_blocker", !params.yes_no("beta_blocker")?, 3)
            .flag("no_ace_arb", !params.yes_no("ace_arb")?, 1);

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("MAGGIC score {score}. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
