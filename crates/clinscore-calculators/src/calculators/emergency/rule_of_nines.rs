use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Wallace Rule of Nines: total body surface area burned from the burned
/// fraction of each region.
pub struct RuleOfNines;

const REGION_PERCENT: ParamRange = ParamRange::new(0.0, 100.0);
const WEIGHT: ParamRange = ParamRange::above(0.0, 300.0);

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        10.0,
        "Minor Burn",
        "Outpatient management usually appropriate",
        "Minor burn. Outpatient wound care is usually appropriate unless special areas are involved.",
    ),
    Band::new(
        10.0,
        20.0,
        "Moderate Burn",
        "Consider hospital admission and burn center consultation",
        "Moderate burn. Consider admission and burn center consultation.",
    ),
    Band::new(
        20.0,
        30.0,
        "Major Burn",
        "Hospital admission and burn center transfer required",
        "Major burn. Admit and transfer to a burn center; begin fluid resuscitation.",
    ),
    Band::new(
        30.0,
        f64::INFINITY,
        "Severe Burn",
        "Life-threatening injury requiring immediate intensive care",
        "Severe burn. Immediate intensive care, airway assessment, and burn center transfer.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Adult,
    Child,
    Infant,
}

impl AgeGroup {
    /// Surface share of each region, in the order of [`REGIONS`].
    fn weights(self) -> [f64; 8] {
        match self {
            AgeGroup::Adult => [9.0, 18.0, 18.0, 9.0, 9.0, 18.0, 18.0, 1.0],
            AgeGroup::Child | AgeGroup::Infant => [18.0, 18.0, 18.0, 9.0, 9.0, 13.5, 13.5, 1.0],
        }
    }

    /// TBSA at which IV fluid resuscitation is indicated.
    fn fluid_threshold(self) -> f64 {
        match self {
            AgeGroup::Adult => 10.0,
            AgeGroup::Child | AgeGroup::Infant => 5.0,
        }
    }
}

const REGIONS: [&str; 8] = [
    "head_neck_percentage",
    "anterior_torso_percentage",
    "posterior_torso_percentage",
    "right_arm_percentage",
    "left_arm_percentage",
    "right_leg_percentage",
    "left_leg_percentage",
    "genitalia_percentage",
];

impl Calculator for RuleOfNines {
    fn id(&self) -> &'static str {
        "rule_of_nines"
    }

    fn name(&self) -> &'static str {
        "Rule of Nines (Burn TBSA)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Emergency
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "patient_age_group",
            "head_neck_percentage",
            "anterior_torso_percentage",
            "posterior_torso_percentage",
            "right_arm_percentage",
            "left_arm_percentage",
            "right_leg_percentage",
            "left_leg_percentage",
            "genitalia_percentage",
            "weight_kg",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let group: AgeGroup = params.token("patient_age_group")?;
        let mut tbsa = 0.0;
        for (field, weight) in REGIONS.iter().zip(group.weights()) {
            let burned = REGION_PERCENT.check(field, params.number(field)?)?;
            tbsa += burned / 100.0 * weight;
        }
        let weight = params
            .optional_number("weight_kg")?
            .map(|w| WEIGHT.check("weight_kg", w))
            .transpose()?;

        let band = classify(BANDS, tbsa);
        let needs_fluids = tbsa >= group.fluid_threshold();
        let mut interpretation =
            format!("Burned TBSA {}%. {}", fixed(tbsa, 1), band.interpretation);
        if needs_fluids {
            interpretation.push_str(&format!(
                " TBSA is at or above the {}% threshold for IV fluid resuscitation.",
                group.fluid_threshold()
            ));
        }

        let mut assessment = Assessment::from_band(round_to(tbsa, 1), "%", band)
            .with_interpretation(interpretation)
            .with_detail("fluid_resuscitation_indicated", needs_fluids);
        if let Some(kg) = weight {
            // Parkland: 4 mL/kg/%TBSA over 24 h, half in the first 8 h.
            let total = round_to(4.0 * kg * tbsa, 0);
            assessment = assessment
                .with_detail("parkland_24h_ml", total)
                .with_detail("parkland_first_8h_ml", round_to(total / 2.0, 0));
        }
        Ok(assessment)
    }
}
