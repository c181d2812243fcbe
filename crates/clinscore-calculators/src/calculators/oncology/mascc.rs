use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// MASCC risk index for febrile neutropenia. Higher scores mean lower risk;
/// 21 or more identifies patients suitable for outpatient management.
pub struct Mascc;

const AGE: ParamRange = ParamRange::integer(18.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BurdenOfIllness {
    NoneMild,
    Moderate,
    Severe,
}

impl BurdenOfIllness {
    pub fn points(self) -> i64 {
        match self {
            BurdenOfIllness::NoneMild => 5,
            BurdenOfIllness::Moderate => 3,
            BurdenOfIllness::Severe => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancerType {
    SolidTumorOrHematologicNoPriorFungal,
    HematologicWithPriorFungal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeverOnset {
    Outpatient,
    Inpatient,
}

pub static BANDS: &[Band] = &[
    Band::new(
        f64::NEG_INFINITY,
        21.0,
        "High Risk",
        "High risk for serious complications",
        "High risk of serious complications from febrile neutropenia. Admit for intravenous empirical antibiotics and close monitoring.",
    ),
    Band::new(
        21.0,
        f64::INFINITY,
        "Low Risk",
        "Low risk for serious complications",
        "Low risk of serious complications. Selected patients may be managed with oral antibiotics, possibly as outpatients with close follow-up.",
    ),
];

impl Calculator for Mascc {
    fn id(&self) -> &'static str {
        "mascc"
    }

    fn name(&self) -> &'static str {
        "MASCC Risk Index for Febrile Neutropenia"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Oncology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "burden_of_illness",
            "hypotension",
            "active_copd",
            "cancer_type",
            "dehydration_requiring_iv",
            "fever_onset_status",
            "patient_age",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let burden: BurdenOfIllness = params.token("burden_of_illness")?;
        let cancer: CancerType = params.token("cancer_type")?;
        let onset: FeverOnset = params.token("fever_onset_status")?;
        let age = AGE.check_int("patient_age", params.integer("patient_age")?)?;

        let mut tally = Tally::new();
        tally
            .add("burden_of_illness", burden.points())
            .flag("no_hypotension", !params.yes_no("hypotension")?, 5)
            .flag("no_active_copd", !params.yes_no("active_copd")?, 4)
            .flag(
                "cancer_type",
                cancer == CancerType::SolidTumorOrHematologicNoPriorFungal,
                4,
            )
            .flag(
                "no_dehydration",
                !params.yes_no("dehydration_requiring_iv")?,
                3,
            )
            .flag("outpatient_onset", onset == FeverOnset::Outpatient, 3)
            .flag("age_under_60", age < 60, 2);

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("MASCC index {score}/26. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
