use clinscore_core::{Assessment, Params, Result, Specialty};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Modified Brain Injury Guideline: triage of traumatic intracranial
/// hemorrhage into mBIG 1-3.
pub struct ModifiedBrainInjuryGuideline;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubduralSize {
    #[serde(rename = "none")]
    Absent,
    #[serde(rename = "4mm_or_less")]
    UpTo4mm,
    #[serde(rename = "4_to_8mm")]
    From4To8mm,
    #[serde(rename = "8mm_or_more")]
    From8mm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntraparenchymalSize {
    #[serde(rename = "none")]
    Absent,
    #[serde(rename = "4mm_or_less_single")]
    UpTo4mmSingle,
    #[serde(rename = "4_to_8mm_single")]
    From4To8mmSingle,
    #[serde(rename = "8mm_or_more_or_multiple")]
    From8mmOrMultiple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubarachnoidExtent {
    #[serde(rename = "none")]
    Absent,
    #[serde(rename = "limited_1_3mm")]
    Limited,
    #[serde(rename = "1_hemisphere_over_3_sulci_1_3mm")]
    SingleHemisphere,
    #[serde(rename = "bihemispheric_or_over_3mm")]
    Bihemispheric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodAlcohol {
    UnknownOrUnder80,
    #[serde(rename = "over_80_mg_dl")]
    Over80,
}

impl Calculator for ModifiedBrainInjuryGuideline {
    fn id(&self) -> &'static str {
        "modified_brain_injury_guideline"
    }

    fn name(&self) -> &'static str {
        "Modified Brain Injury Guideline (mBIG)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Emergency
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "anticoagulation_antiplatelet",
            "epidural_hematoma",
            "intraventricular_hemorrhage",
            "displaced_skull_fracture",
            "subdural_hematoma_size",
            "intraparenchymal_hemorrhage_size",
            "subarachnoid_hemorrhage_extent",
            "blood_alcohol_level",
            "nondisplaced_skull_fracture",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let antithrombotic = params.yes_no("anticoagulation_antiplatelet")?;
        let epidural = params.yes_no("epidural_hematoma")?;
        let intraventricular = params.yes_no("intraventricular_hemorrhage")?;
        let displaced = params.yes_no("displaced_skull_fracture")?;
        let sdh: SubduralSize = params.token("subdural_hematoma_size")?;
        let iph: IntraparenchymalSize = params.token("intraparenchymal_hemorrhage_size")?;
        let sah: SubarachnoidExtent = params.token("subarachnoid_hemorrhage_extent")?;
        let alcohol: BloodAlcohol = params.token("blood_alcohol_level")?;
        let nondisplaced = params.yes_no("nondisplaced_skull_fracture")?;

        let mbig_3 = antithrombotic
            || epidural
            || intraventricular
            || displaced
            || sdh == SubduralSize::From8mm
            || iph == IntraparenchymalSize::From8mmOrMultiple
            || sah == SubarachnoidExtent::Bihemispheric;
        let mbig_2 = alcohol == BloodAlcohol::Over80
            || nondisplaced
            || sdh == SubduralSize::From4To8mm
            || iph == IntraparenchymalSize::From4To8mmSingle
            || sah == SubarachnoidExtent::SingleHemisphere;

        let (category, description, interpretation) = if mbig_3 {
            (
                3,
                "Highest severity - Standard of care",
                "mBIG 3: admit with repeat head CT and neurosurgical consultation.",
            )
        } else if mbig_2 {
            (
                2,
                "Intermediate severity - Hospital admission",
                "mBIG 2: hospital admission for observation; no repeat head CT or neurosurgical consultation required.",
            )
        } else {
            (
                1,
                "Lowest severity - No admission required",
                "mBIG 1: 6-hour ED observation; no repeat head CT or neurosurgical consultation required.",
            )
        };

        Ok(Assessment::new(
            category,
            "",
            format!("mBIG {category}"),
            description,
            interpretation,
        ))
    }
}
