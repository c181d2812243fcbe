use clinscore_core::{Assessment, ParamRange, Params, Result, Specialty};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// ACC/AHA heart failure stages A-D. Stages are progressive; a patient does
/// not move back to an earlier stage.
pub struct AccAhaHfStaging;

const EJECTION_FRACTION: ParamRange = ParamRange::new(0.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hospitalization {
    Frequent,
    Rare,
    #[serde(rename = "none")]
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    A,
    B,
    C,
    D,
}

impl Stage {
    fn letter(self) -> &'static str {
        match self {
            Stage::A => "A",
            Stage::B => "B",
            Stage::C => "C",
            Stage::D => "D",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Stage::A => "At risk for heart failure",
            Stage::B => "Pre-heart failure",
            Stage::C => "Symptomatic heart failure",
            Stage::D => "Advanced heart failure",
        }
    }

    fn management(self) -> &'static str {
        match self {
            Stage::A => "Control risk factors such as hypertension, diabetes, and obesity. No structural disease or symptoms are present.",
            Stage::B => "Structural heart disease without symptoms. Start ACE inhibitor or ARB and beta-blocker where indicated to prevent progression.",
            Stage::C => "Current or prior heart failure symptoms. Guideline-directed medical therapy, diuretics for congestion, and device therapy as indicated.",
            Stage::D => "Refractory symptoms despite optimal therapy. Refer for advanced therapies such as transplant, mechanical support, or palliative care.",
        }
    }
}

fn ejection_fraction_note(ef: f64) -> &'static str {
    if ef <= 35.0 {
        "Reduced LVEF - higher risk"
    } else if ef <= 40.0 {
        "Slightly reduced LVEF"
    } else {
        "Preserved LVEF"
    }
}

pub fn stage(
    structural_disease: bool,
    current_symptoms: bool,
    advanced_symptoms: bool,
    hospitalization: Hospitalization,
) -> Stage {
    if advanced_symptoms || hospitalization == Hospitalization::Frequent {
        Stage::D
    } else if current_symptoms {
        Stage::C
    } else if structural_disease {
        Stage::B
    } else {
        Stage::A
    }
}

impl Calculator for AccAhaHfStaging {
    fn id(&self) -> &'static str {
        "acc_aha_hf_staging"
    }

    fn name(&self) -> &'static str {
        "ACC/AHA Heart Failure Staging"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Cardiology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "risk_factors",
            "structural_disease",
            "current_symptoms",
            "advanced_symptoms",
            "hospitalization_frequency",
            "ejection_fraction",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let risk_factors = params.yes_no("risk_factors")?;
        let stage = stage(
            params.yes_no("structural_disease")?,
            params.yes_no("current_symptoms")?,
            params.yes_no("advanced_symptoms")?,
            params.token("hospitalization_frequency")?,
        );
        let ef = params
            .optional_number("ejection_fraction")?
            .map(|ef| EJECTION_FRACTION.check("ejection_fraction", ef))
            .transpose()?;

        let mut interpretation = format!("Stage {}: {}", stage.letter(), stage.management());
        if stage == Stage::A && !risk_factors {
            interpretation.push_str(" No risk factors reported; continue routine prevention.");
        }
        if stage != Stage::A
            && let Some(ef) = ef
        {
            interpretation.push_str(&format!(" LVEF {ef}%: {}.", ejection_fraction_note(ef)));
        }

        let mut assessment = Assessment::new(
            stage.letter(),
            "stage",
            format!("Stage {}", stage.letter()),
            stage.description(),
            interpretation,
        )
        .with_detail("can_regress", false);
        if let Some(ef) = ef {
            assessment = assessment.with_detail("ejection_fraction", ef);
        }
        Ok(assessment)
    }
}
