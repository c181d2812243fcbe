use clinscore_core::{Assessment, Params, Result, Specialty};

use crate::Calculator;

/// CHADS-65: Canadian Cardiovascular Society algorithm for antithrombotic
/// therapy in atrial fibrillation.
pub struct Chads65;

enum Therapy {
    OralAnticoagulation,
    Antiplatelet,
    None,
}

impl Therapy {
    fn label(&self) -> &'static str {
        match self {
            Therapy::OralAnticoagulation => "Oral Anticoagulation",
            Therapy::Antiplatelet => "Antiplatelet Therapy",
            Therapy::None => "No Antithrombotic Therapy",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Therapy::OralAnticoagulation => "OAC recommended",
            Therapy::Antiplatelet => "Antiplatelet recommended",
            Therapy::None => "No therapy indicated",
        }
    }
}

impl Calculator for Chads65 {
    fn id(&self) -> &'static str {
        "chads_65"
    }

    fn name(&self) -> &'static str {
        "CHADS-65"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Cardiology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age_65_or_older",
            "congestive_heart_failure",
            "hypertension",
            "diabetes_mellitus",
            "stroke_tia_history",
            "coronary_artery_disease",
            "peripheral_artery_disease",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = params.yes_no("age_65_or_older")?;
        let chads = [
            params.yes_no("congestive_heart_failure")?,
            params.yes_no("hypertension")?,
            params.yes_no("diabetes_mellitus")?,
            params.yes_no("stroke_tia_history")?,
        ];
        let cad = params.yes_no("coronary_artery_disease")?;
        let pad = params.yes_no("peripheral_artery_disease")?;

        let (therapy, reason) = if age {
            (Therapy::OralAnticoagulation, "age 65 years or older")
        } else if chads.iter().any(|&f| f) {
            (Therapy::OralAnticoagulation, "one or more CHADS₂ risk factors")
        } else if cad || pad {
            (
                Therapy::Antiplatelet,
                "coronary or peripheral arterial disease without CHADS₂ risk factors",
            )
        } else {
            (Therapy::None, "age under 65 with no CHADS₂ risk factors or arterial disease")
        };

        let interpretation = format!("{} recommended based on {reason}.", therapy.label());

        Ok(Assessment::new(
            therapy.label(),
            "algorithm",
            therapy.label(),
            therapy.description(),
            interpretation,
        ))
    }
}
