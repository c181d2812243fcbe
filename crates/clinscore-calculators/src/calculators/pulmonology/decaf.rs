use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// DECAF: in-hospital mortality in acute exacerbation of COPD. Dyspnoea
/// (eMRCD), Eosinopenia, Consolidation, Acidaemia, atrial Fibrillation.
pub struct Decaf;

const AGE: ParamRange = ParamRange::integer(35.0, 120.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dyspnea {
    NotTooDyspneic = 0,
    TooDyspneicIndependent = 1,
    TooDyspneicDependent = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokingHistory {
    Yes,
    No,
    Unknown,
}

impl SmokingHistory {
    fn as_str(self) -> &'static str {
        match self {
            SmokingHistory::Yes => "yes",
            SmokingHistory::No => "no",
            SmokingHistory::Unknown => "unknown",
        }
    }
}

/// Observed in-hospital mortality by score, 0 to 6.
const MORTALITY: [&str; 7] = ["0%", "1.5%", "5.4%", "15.3%", "31%", "40%", "50%"];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        2.0,
        "Low Risk",
        "Low mortality risk",
        "Low mortality risk. Consider early supported discharge or hospital-at-home where available.",
    ),
    Band::new(
        2.0,
        3.0,
        "Intermediate Risk",
        "Intermediate mortality risk",
        "Intermediate mortality risk. Use clinical judgement about disposition and monitor closely.",
    ),
    Band::new(
        3.0,
        f64::INFINITY,
        "High Risk",
        "High mortality risk",
        "High mortality risk. Consider escalation to HDU/ICU or, where appropriate, early palliative care discussion.",
    ),
];

impl Calculator for Decaf {
    fn id(&self) -> &'static str {
        "decaf"
    }

    fn name(&self) -> &'static str {
        "DECAF Score for AECOPD"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Pulmonology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "emrcd_dyspnea",
            "eosinopenia",
            "consolidation",
            "acidemia",
            "atrial_fibrillation",
            "patient_age",
            "smoking_history",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = params
            .optional_integer("patient_age")?
            .map(|v| AGE.check_int("patient_age", v))
            .transpose()?;
        let smoking = params.optional_token::<SmokingHistory>("smoking_history")?;

        let mut tally = Tally::new();
        tally
            .add("dyspnea", params.token::<Dyspnea>("emrcd_dyspnea")? as i64)
            .flag("eosinopenia", params.yes_no("eosinopenia")?, 1)
            .flag("consolidation", params.yes_no("consolidation")?, 1)
            .flag("acidemia", params.yes_no("acidemia")?, 1)
            .flag(
                "atrial_fibrillation",
                params.yes_no("atrial_fibrillation")?,
                1,
            );

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        let mortality = MORTALITY[score.clamp(0, 6) as usize];

        let mut assessment = Assessment::from_band(score, "points", band)
            .with_interpretation(format!(
                "DECAF {score}/6, in-hospital mortality about {mortality}. {}",
                band.interpretation
            ))
            .with_detail("mortality_risk", mortality)
            .with_detail("breakdown", tally.breakdown());
        if let Some(age) = age {
            assessment = assessment.with_detail("patient_age", age);
        }
        if let Some(smoking) = smoking {
            assessment = assessment.with_detail("smoking_history", smoking.as_str());
        }
        Ok(assessment)
    }
}
