use clinscore_core::lookup::at_least;
use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Charlson Comorbidity Index (age-adjusted) with the Charlson estimate of
/// ten-year survival, `0.983^(e^(0.9 × CCI))`.
pub struct CharlsonComorbidityIndex;

const AGE: ParamRange = ParamRange::integer(0.0, 120.0);

const AGE_POINTS: &[(f64, i64)] = &[(80.0, 4), (70.0, 3), (60.0, 2), (50.0, 1)];

/// (condition, points when present)
const CONDITIONS: &[(&str, i64)] = &[
    ("myocardial_infarction", 1),
    ("congestive_heart_failure", 1),
    ("peripheral_vascular_disease", 1),
    ("cerebrovascular_disease", 1),
    ("dementia", 1),
    ("chronic_pulmonary_disease", 1),
    ("connective_tissue_disease", 1),
    ("peptic_ulcer_disease", 1),
    ("hemiplegia", 2),
    ("moderate_severe_ckd", 2),
    ("localized_solid_tumor", 2),
    ("leukemia", 2),
    ("lymphoma", 2),
    ("metastatic_solid_tumor", 6),
    ("aids", 6),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiverDisease {
    None,
    Mild,
    ModerateSevere,
}

impl LiverDisease {
    fn points(self) -> i64 {
        match self {
            LiverDisease::None => 0,
            LiverDisease::Mild => 1,
            LiverDisease::ModerateSevere => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diabetes {
    None,
    Uncomplicated,
    WithEndOrganDamage,
}

impl Diabetes {
    fn points(self) -> i64 {
        match self {
            Diabetes::None => 0,
            Diabetes::Uncomplicated => 1,
            Diabetes::WithEndOrganDamage => 2,
        }
    }
}

/// Estimated ten-year survival, percent.
pub fn ten_year_survival(cci: i64) -> f64 {
    0.983_f64.powf((0.9 * cci as f64).exp()) * 100.0
}

// Score cut-offs equal to survival of 90%, 70% and 30%.
pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        3.0,
        "Minimal Comorbidity",
        "Minimal comorbidity burden with excellent prognosis",
        "Estimated ten-year survival of 90% or more. Comorbidities have minimal impact on prognosis.",
    ),
    Band::new(
        3.0,
        4.0,
        "Moderate Comorbidity",
        "Moderate comorbidity burden with good prognosis",
        "Estimated ten-year survival of 70-89%. Factor comorbidities into treatment intensity decisions.",
    ),
    Band::new(
        4.0,
        5.0,
        "Significant Comorbidity",
        "Significant comorbidity burden with reduced survival",
        "Estimated ten-year survival of 30-69%. Weigh the benefit of intensive or preventive treatment against limited life expectancy.",
    ),
    Band::new(
        5.0,
        f64::INFINITY,
        "Severe Comorbidity",
        "Severe comorbidity burden with poor prognosis",
        "Estimated ten-year survival below 30%. Prioritise quality of life and discuss goals of care.",
    ),
];

impl Calculator for CharlsonComorbidityIndex {
    fn id(&self) -> &'static str {
        "charlson_comorbidity_index"
    }

    fn name(&self) -> &'static str {
        "Charlson Comorbidity Index (CCI)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Geriatrics
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age",
            "myocardial_infarction",
            "congestive_heart_failure",
            "peripheral_vascular_disease",
            "cerebrovascular_disease",
            "dementia",
            "chronic_pulmonary_disease",
            "connective_tissue_disease",
            "peptic_ulcer_disease",
            "liver_disease",
            "diabetes",
            "hemiplegia",
            "moderate_severe_ckd",
            "localized_solid_tumor",
            "leukemia",
            "lymphoma",
            "metastatic_solid_tumor",
            "aids",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check_int("age", params.integer("age")?)?;

        let mut tally = Tally::new();
        tally.add("age", at_least(AGE_POINTS, age as f64, 0));
        for (field, points) in CONDITIONS {
            tally.flag(field, params.yes_no(field)?, *points);
        }
        tally
            .add(
                "liver_disease",
                params.token::<LiverDisease>("liver_disease")?.points(),
            )
            .add("diabetes", params.token::<Diabetes>("diabetes")?.points());

        let score = tally.total();
        let survival = round_to(ten_year_survival(score), 1);
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!(
                "CCI {score}, estimated ten-year survival {}%. {}",
                fixed(survival, 1),
                band.interpretation
            ))
            .with_detail("ten_year_survival_percent", survival)
            .with_detail("age_points", tally.points("age").unwrap_or(0))
            .with_detail("breakdown", tally.breakdown()))
    }
}
