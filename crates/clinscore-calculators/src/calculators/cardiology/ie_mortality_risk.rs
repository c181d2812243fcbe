use clinscore_core::numeric::{fixed, logistic, round_to};
use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Infective endocarditis 6-month mortality (ICE-PCS derived score).
pub struct IeMortalityRisk;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeCategory {
    #[serde(rename = "45_or_under")]
    UpTo45 = 0,
    #[serde(rename = "46_to_60")]
    From46To60 = 2,
    #[serde(rename = "61_to_70")]
    From61To70 = 3,
    #[serde(rename = "over_70")]
    Over70 = 4,
}

/// Negative weights mark findings with a better prognosis.
const FINDINGS: &[(&str, i64)] = &[
    ("history_of_dialysis", 3),
    ("nosocomial_ie", 2),
    ("prosthetic_ie", 1),
    ("symptoms_over_1_month", -1),
    ("staphylococcus_aureus", 1),
    ("viridans_group_streptococci", -2),
    ("aortic_vegetation", 1),
    ("mitral_vegetation", 1),
    ("nyha_class_3_or_4_hf", 3),
    ("stroke", 2),
    ("paravalvular_complication", 2),
    ("persistent_bacteremia", 2),
    ("surgical_treatment", -2),
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        10.0,
        "Low Risk",
        "Mortality probability 10% or less",
        "Low risk of 6-month mortality. Standard medical management with close monitoring.",
    ),
    Band::new(
        10.0,
        25.0,
        "Moderate Risk",
        "Mortality probability 10-25%",
        "Moderate risk of 6-month mortality. Intensive medical management; evaluate for surgery if indicated.",
    ),
    Band::new(
        25.0,
        50.0,
        "High Risk",
        "Mortality probability 25-50%",
        "High risk of 6-month mortality. Aggressive treatment including surgical evaluation; discuss prognosis with the patient and family.",
    ),
    Band::new(
        50.0,
        f64::INFINITY,
        "Very High Risk",
        "Mortality probability above 50%",
        "Very high risk of 6-month mortality. Palliative care consultation and goals of care discussion; surgery only in highly selected cases.",
    ),
];

impl Calculator for IeMortalityRisk {
    fn id(&self) -> &'static str {
        "ie_mortality_risk_score"
    }

    fn name(&self) -> &'static str {
        "Infective Endocarditis (IE) Mortality Risk Score"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Cardiology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age_category",
            "history_of_dialysis",
            "nosocomial_ie",
            "prosthetic_ie",
            "symptoms_over_1_month",
            "staphylococcus_aureus",
            "viridans_group_streptococci",
            "aortic_vegetation",
            "mitral_vegetation",
            "nyha_class_3_or_4_hf",
            "stroke",
            "paravalvular_complication",
            "persistent_bacteremia",
            "surgical_treatment",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age: AgeCategory = params.token("age_category")?;
        let mut tally = Tally::new();
        tally.add("age_category", age as i64);
        for &(field, points) in FINDINGS {
            tally.flag(field, params.yes_no(field)?, points);
        }

        let score = tally.total() as f64;
        let mortality = logistic(2.416 * score + 0.109 * score * score - 4.849) * 100.0;
        let band = classify(BANDS, mortality);
        Ok(Assessment::from_band(round_to(mortality, 1), "%", band)
            .with_interpretation(format!(
                "Score {score}, 6-month mortality {}%. {}",
                fixed(mortality, 1),
                band.interpretation
            ))
            .with_detail("ie_score", tally.total())
            .with_detail("breakdown", tally.breakdown()))
    }
}
