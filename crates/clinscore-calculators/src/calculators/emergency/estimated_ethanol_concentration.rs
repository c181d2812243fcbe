use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{Assessment, ParamRange, Params, Result, Specialty};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Estimated peak serum alcohol concentration after ingestion, assuming
/// complete absorption into a 0.6 L/kg volume of distribution.
pub struct EstimatedEthanolConcentration;

const AMOUNT: ParamRange = ParamRange::new(0.0, 1000.0);
const WEIGHT: ParamRange = ParamRange::above(0.0, 300.0);
const PERCENTAGE: ParamRange = ParamRange::new(0.0, 100.0);

const VOLUME_OF_DISTRIBUTION: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alcohol {
    Ethanol,
    Methanol,
    EthyleneGlycol,
    Isopropanol,
}

impl Alcohol {
    /// g/mL.
    fn density(self) -> f64 {
        match self {
            Alcohol::Ethanol => 0.789,
            Alcohol::Methanol => 0.792,
            Alcohol::EthyleneGlycol => 1.113,
            Alcohol::Isopropanol => 0.785,
        }
    }

    /// mg/dL per mmol/L.
    fn conversion(self) -> f64 {
        match self {
            Alcohol::Ethanol => 4.6,
            Alcohol::Methanol => 3.2,
            Alcohol::EthyleneGlycol => 6.2,
            Alcohol::Isopropanol => 6.0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Alcohol::Ethanol => "ethanol",
            Alcohol::Methanol => "methanol",
            Alcohol::EthyleneGlycol => "ethylene glycol",
            Alcohol::Isopropanol => "isopropanol",
        }
    }
}

fn grade(alcohol: Alcohol, mg_dl: f64) -> (&'static str, &'static str, &'static str) {
    match alcohol {
        Alcohol::Ethanol if mg_dl < 50.0 => (
            "Mild Intoxication",
            "Mild effects",
            "Mild impairment of coordination and judgment is expected.",
        ),
        Alcohol::Ethanol if mg_dl < 100.0 => (
            "Moderate Intoxication",
            "Moderate effects",
            "Impaired motor function and slurred speech are expected.",
        ),
        Alcohol::Ethanol if mg_dl < 300.0 => (
            "Severe Intoxication",
            "Severe effects",
            "Risk of vomiting, stupor, and aspiration. Monitor airway and mental status.",
        ),
        Alcohol::Ethanol => (
            "Life-threatening",
            "Critical level",
            "Risk of coma and respiratory depression. Airway protection and intensive monitoring are required.",
        ),
        Alcohol::Methanol | Alcohol::EthyleneGlycol if mg_dl >= 20.0 => (
            "Treatment Required",
            "Above treatment threshold",
            "Estimated level is at or above 20 mg/dL. Start fomepizole and consult toxicology regarding hemodialysis.",
        ),
        Alcohol::Methanol | Alcohol::EthyleneGlycol => (
            "Below Treatment Threshold",
            "Monitor closely",
            "Estimated level is below 20 mg/dL. Confirm with measured levels and monitor for acidosis.",
        ),
        Alcohol::Isopropanol => (
            "Isopropanol Exposure",
            "Monitor for CNS effects",
            "Isopropanol causes CNS depression and ketosis without acidosis. Supportive care is usually sufficient.",
        ),
    }
}

impl Calculator for EstimatedEthanolConcentration {
    fn id(&self) -> &'static str {
        "estimated_ethanol_concentration"
    }

    fn name(&self) -> &'static str {
        "Estimated Ethanol (and Toxic Alcohol) Serum Concentration"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Emergency
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["alcohol_type", "amount_ingested_ml", "weight_kg", "alcohol_percentage"]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let alcohol: Alcohol = params.token("alcohol_type")?;
        let amount = AMOUNT.check("amount_ingested_ml", params.number("amount_ingested_ml")?)?;
        let weight = WEIGHT.check("weight_kg", params.number("weight_kg")?)?;
        let percentage = params
            .optional_number("alcohol_percentage")?
            .map(|p| PERCENTAGE.check("alcohol_percentage", p))
            .transpose()?;

        let pure_ml = percentage.map_or(amount, |p| amount * p / 100.0);
        let mg = pure_ml * alcohol.density() * 1000.0;
        let mg_dl = mg / (VOLUME_OF_DISTRIBUTION * weight) / 10.0;
        let mmol_l = mg_dl / alcohol.conversion();

        let (stage, description, advice) = grade(alcohol, mg_dl);
        let mg_dl = round_to(mg_dl, 1);
        let interpretation = format!(
            "Estimated peak {} concentration {} mg/dL ({} mmol/L). {advice}",
            alcohol.label(),
            fixed(mg_dl, 1),
            fixed(mmol_l, 1)
        );

        Ok(Assessment::new(mg_dl, "mg/dL", stage, description, interpretation)
            .with_detail("concentration_mmol_l", round_to(mmol_l, 1))
            .with_detail("amount_pure_alcohol_ml", round_to(pure_ml, 1)))
    }
}
