use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, band_index, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// GO-FAR: Good Outcome Following Attempted Resuscitation. Predicts
/// survival to discharge with good neurological function after in-hospital
/// cardiac arrest.
pub struct GoFar;

pub static BANDS: &[Band] = &[
    Band::new(
        f64::NEG_INFINITY,
        -5.0,
        "Above Average Survival",
        "Good prognosis",
        "Above-average likelihood of neurologically intact survival. Full resuscitation is appropriate.",
    ),
    Band::new(
        -5.0,
        14.0,
        "Average Survival",
        "Intermediate prognosis",
        "Average likelihood of neurologically intact survival. Discuss code status with patient and family.",
    ),
    Band::new(
        14.0,
        24.0,
        "Low Survival",
        "Poor prognosis",
        "Low likelihood of neurologically intact survival. Goals-of-care discussion is recommended.",
    ),
    Band::new(
        24.0,
        f64::INFINITY,
        "Very Low Survival",
        "Very poor prognosis",
        "Very low likelihood of neurologically intact survival. Strongly consider a DNR discussion.",
    ),
];

const SURVIVAL: [&str; 4] = [">15%", "3-15%", "1-3%", "<1%"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeCategory {
    #[serde(rename = "under_70")]
    Under70,
    #[serde(rename = "70_to_74")]
    From70To74,
    #[serde(rename = "75_to_79")]
    From75To79,
    #[serde(rename = "80_to_84")]
    From80To84,
    #[serde(rename = "85_or_over")]
    From85,
}

impl AgeCategory {
    pub fn points(self) -> i64 {
        match self {
            Self::Under70 => 0,
            Self::From70To74 => 2,
            Self::From75To79 => 5,
            Self::From80To84 => 6,
            Self::From85 => 11,
        }
    }
}

const CRITERIA: &[(&str, i64)] = &[
    ("neurologically_intact", -15),
    ("major_trauma", 10),
    ("acute_stroke", 8),
    ("metastatic_hematologic_cancer", 7),
    ("septicemia", 7),
    ("medical_noncardiac_diagnosis", 7),
    ("hepatic_insufficiency", 6),
    ("skilled_nursing_facility", 6),
    ("hypotension_hypoperfusion", 5),
    ("renal_insufficiency", 4),
    ("respiratory_insufficiency", 4),
    ("pneumonia", 1),
];

impl Calculator for GoFar {
    fn id(&self) -> &'static str {
        "go_far"
    }

    fn name(&self) -> &'static str {
        "GO-FAR Score"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Emergency
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age_category",
            "neurologically_intact",
            "major_trauma",
            "acute_stroke",
            "metastatic_hematologic_cancer",
            "septicemia",
            "medical_noncardiac_diagnosis",
            "hepatic_insufficiency",
            "skilled_nursing_facility",
            "hypotension_hypoperfusion",
            "renal_insufficiency",
            "respiratory_insufficiency",
            "pneumonia",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        tally.add("age_category", params.token::<AgeCategory>("age_category")?.points());
        for &(field, points) in CRITERIA {
            tally.flag(field, params.yes_no(field)?, points);
        }

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        let survival = SURVIVAL[band_index(BANDS, score as f64)];
        let interpretation = format!(
            "GO-FAR score {score}: {} survival to discharge with good neurological function. {}",
            survival, band.interpretation
        );

        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(interpretation)
            .with_detail("survival_probability", survival)
            .with_detail("breakdown", tally.breakdown()))
    }
}
