use clinscore_core::{Assessment, ParamRange, Params, Result, Specialty};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// D'Amico risk classification for localized prostate cancer.
pub struct DamicoRisk;

const PSA: ParamRange = ParamRange::new(0.1, 500.0);
const GLEASON: ParamRange = ParamRange::integer(2.0, 10.0);
const AGE: ParamRange = ParamRange::integer(40.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClinicalStage {
    T1a,
    T1b,
    T1c,
    T2a,
    T2b,
    T2c,
    T3a,
    T3b,
    T4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Treatment {
    RadicalProstatectomy,
    ExternalBeamRadiation,
    Brachytherapy,
    ActiveSurveillance,
    NotSpecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskGroup {
    Low,
    Intermediate,
    High,
}

impl RiskGroup {
    /// Any single high-risk feature makes the group high; any intermediate
    /// feature makes it at least intermediate.
    pub fn classify(psa: f64, gleason: i64, stage: ClinicalStage) -> Self {
        if psa > 20.0 || gleason >= 8 || stage >= ClinicalStage::T2c {
            RiskGroup::High
        } else if psa > 10.0 || gleason == 7 || stage == ClinicalStage::T2b {
            RiskGroup::Intermediate
        } else {
            RiskGroup::Low
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            RiskGroup::Low => "low",
            RiskGroup::Intermediate => "intermediate",
            RiskGroup::High => "high",
        }
    }
}

impl Calculator for DamicoRisk {
    fn id(&self) -> &'static str {
        "damico_risk"
    }

    fn name(&self) -> &'static str {
        "D'Amico Risk Classification for Prostate Cancer"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Oncology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "psa_level",
            "gleason_score",
            "clinical_stage",
            "patient_age",
            "treatment_planned",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let psa = PSA.check("psa_level", params.number("psa_level")?)?;
        let gleason = GLEASON.check_int("gleason_score", params.integer("gleason_score")?)?;
        let stage: ClinicalStage = params.token("clinical_stage")?;
        let age = params
            .optional_integer("patient_age")?
            .map(|v| AGE.check_int("patient_age", v))
            .transpose()?;
        let treatment = params.optional_token::<Treatment>("treatment_planned")?;

        let group = RiskGroup::classify(psa, gleason, stage);
        let (label, description, recurrence, advice) = match group {
            RiskGroup::Low => (
                "Low Risk",
                "Low risk of treatment failure",
                "5-15%",
                "Active surveillance, radical prostatectomy or radiotherapy are all reasonable options.",
            ),
            RiskGroup::Intermediate => (
                "Intermediate Risk",
                "Intermediate risk of treatment failure",
                "15-45%",
                "Radical prostatectomy or radiotherapy with short-term androgen deprivation is generally recommended.",
            ),
            RiskGroup::High => (
                "High Risk",
                "High risk of treatment failure",
                "45-65%",
                "Multimodal therapy such as radiotherapy with long-term androgen deprivation or prostatectomy with adjuvant therapy is recommended.",
            ),
        };
        let mut interpretation = format!(
            "PSA {psa} ng/mL, Gleason {gleason}, stage {stage:?}: {label} prostate cancer with {recurrence} 5-year biochemical recurrence. {advice}"
        );
        if let Some(age) = age
            && age >= 75
            && group == RiskGroup::Low
        {
            interpretation.push_str(" Given age, watchful waiting may be preferred.");
        }

        let mut assessment =
            Assessment::new(group.as_str(), "risk group", label, description, interpretation)
                .with_detail("five_year_recurrence_rate", recurrence);
        if treatment.is_some()
            && let Some(raw) = params.get("treatment_planned")
        {
            assessment = assessment.with_detail("treatment_planned", raw.clone());
        }
        Ok(assessment)
    }
}
