use clinscore_core::{Assessment, Params, Result, Specialty};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// 2017 McDonald criteria for multiple sclerosis.
///
/// CSF-specific oligoclonal bands may stand in for dissemination in time
/// once dissemination in space is shown.
pub struct McdonaldMs2017;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Count {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2_or_more")]
    TwoOrMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dissemination {
    NotDemonstrated,
    Demonstrated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OligoclonalBands {
    Absent,
    Present,
    NotTested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlternativeDiagnosis {
    Excluded,
    Possible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Diagnosed,
    Insufficient,
    NotDiagnosed,
}

impl Outcome {
    fn describe(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Outcome::Diagnosed => (
                "MS Diagnosed",
                "Criteria fulfilled",
                "The 2017 McDonald criteria are fulfilled. Start disease-modifying therapy, provide education and arrange multidisciplinary MS care.",
            ),
            Outcome::Insufficient => (
                "Possible MS",
                "Insufficient criteria",
                "Findings suggest MS but do not fulfil the 2017 McDonald criteria; this may be a clinically isolated syndrome. Repeat MRI in 3-6 months and consider CSF analysis if not done.",
            ),
            Outcome::NotDiagnosed => (
                "MS Not Diagnosed",
                "Criteria not met",
                "The 2017 McDonald criteria are not fulfilled. Investigate alternative diagnoses before attributing symptoms to MS.",
            ),
        }
    }
}

impl Calculator for McdonaldMs2017 {
    fn id(&self) -> &'static str {
        "mcdonald_criteria_multiple_sclerosis_2017_revision"
    }

    fn name(&self) -> &'static str {
        "McDonald Criteria for Multiple Sclerosis (2017 Revision)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Neurology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "clinical_attacks",
            "objective_clinical_evidence",
            "dissemination_in_space",
            "dissemination_in_time",
            "csf_oligoclonal_bands",
            "alternative_diagnosis",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let attacks: Count = params.token("clinical_attacks")?;
        let evidence: Count = params.token("objective_clinical_evidence")?;
        let dis = params.token::<Dissemination>("dissemination_in_space")?
            == Dissemination::Demonstrated;
        let dit = params.token::<Dissemination>("dissemination_in_time")?
            == Dissemination::Demonstrated;
        let bands: OligoclonalBands = params.token("csf_oligoclonal_bands")?;
        let alternative: AlternativeDiagnosis = params.token("alternative_diagnosis")?;

        let substituted = !dit && dis && bands == OligoclonalBands::Present;
        let effective_dit = dit || substituted;

        let mut missing = Vec::new();
        let (outcome, reason) = if alternative == AlternativeDiagnosis::Possible {
            (Outcome::NotDiagnosed, "Alternative diagnosis not adequately excluded")
        } else {
            match (attacks, evidence) {
                (Count::TwoOrMore, Count::TwoOrMore) => (
                    Outcome::Diagnosed,
                    "Two or more attacks with objective evidence of two or more lesions",
                ),
                (Count::TwoOrMore, Count::One) if dis => (
                    Outcome::Diagnosed,
                    "Two or more attacks, one lesion, dissemination in space shown",
                ),
                (Count::TwoOrMore, Count::One) => {
                    missing.push("DIS");
                    (Outcome::Insufficient, "Dissemination in space not demonstrated")
                }
                (Count::One, Count::TwoOrMore) if effective_dit => (
                    Outcome::Diagnosed,
                    "One attack, two or more lesions, dissemination in time shown",
                ),
                (Count::One, Count::TwoOrMore) => {
                    missing.push("DIT");
                    (
                        Outcome::Insufficient,
                        "Dissemination in time not shown and no oligoclonal bands",
                    )
                }
                (Count::One, Count::One) => {
                    if !dis {
                        missing.push("DIS");
                    }
                    if !effective_dit {
                        missing.push("DIT");
                    }
                    if missing.is_empty() {
                        (
                            Outcome::Diagnosed,
                            "One attack, one lesion, dissemination in space and time shown",
                        )
                    } else {
                        (Outcome::Insufficient, "Dissemination criteria incomplete")
                    }
                }
                _ => (
                    Outcome::Insufficient,
                    "At least one clinical attack with objective evidence is required",
                ),
            }
        };

        let (stage, description, interpretation) = outcome.describe();
        let interpretation = if missing.is_empty() {
            format!("{reason}. {interpretation}")
        } else {
            format!("{reason} (missing {}). {interpretation}", missing.join(", "))
        };
        Ok(Assessment::new(stage, "diagnosis", stage, description, interpretation)
            .with_detail("reason", reason)
            .with_detail("missing_criteria", missing)
            .with_detail("dit_substituted_by_csf", substituted))
    }
}
