use clinscore_core::numeric::round_to;
use clinscore_core::{
    Assessment, Band, InvalidParameter, ParamRange, Params, Result, Sex, Specialty, classify,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Calculator;

/// Crohn's Disease Activity Index over the preceding seven days.
pub struct CdaiCrohns;

const LIQUID_STOOLS: ParamRange = ParamRange::integer(0.0, 200.0);
const HEMATOCRIT: ParamRange = ParamRange::new(10.0, 60.0);
const WEIGHT: ParamRange = ParamRange::new(30.0, 300.0);
const WEIGHT_DEFICIT: ParamRange = ParamRange::new(-100.0, 100.0);

const EXTRAINTESTINAL: &[&str] = &[
    "arthritis_arthralgias",
    "iritis_uveitis",
    "erythema_nodosum",
    "anal_fissure_fistula",
    "other_fistulas",
    "fever",
];

pub static BANDS: &[Band] = &[
    Band::new(
        f64::NEG_INFINITY,
        150.0,
        "Remission",
        "Clinical remission",
        "Clinical remission. Continue maintenance therapy and routine monitoring.",
    ),
    Band::new(
        150.0,
        220.0,
        "Mild Disease",
        "Mild disease activity",
        "Mild to moderate activity. Ambulatory patient tolerating oral intake; consider step-up of therapy.",
    ),
    Band::new(
        220.0,
        300.0,
        "Moderate Disease",
        "Moderate disease activity",
        "Moderate activity. Escalate therapy and evaluate for complications.",
    ),
    Band::new(
        300.0,
        451.0,
        "Severe Disease",
        "Severe disease activity",
        "Severe activity. Consider hospitalization, systemic corticosteroids or biologics.",
    ),
    Band::new(
        451.0,
        f64::INFINITY,
        "Very Severe Disease",
        "Very severe disease activity",
        "Very severe activity. Hospitalize and evaluate urgently for obstruction, abscess or surgical indication.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbdominalPain {
    None = 0,
    Mild = 1,
    Moderate = 2,
    Severe = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wellbeing {
    GenerallyWell = 0,
    SlightlyUnderPar = 1,
    Poor = 2,
    VeryPoor = 3,
    Terrible = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbdominalMass {
    None,
    Questionable,
    Definite,
}

impl AbdominalMass {
    fn points(self) -> f64 {
        match self {
            AbdominalMass::None => 0.0,
            AbdominalMass::Questionable => 2.0,
            AbdominalMass::Definite => 5.0,
        }
    }
}

/// Body weight is given either as measured and ideal weight or as an
/// already computed percent below standard weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightInput {
    Measured { current_kg: f64, ideal_kg: f64 },
    Deficit { percent: f64 },
}

impl WeightInput {
    pub fn from_params(params: &Params) -> Result<Self> {
        let current = params.optional_number("current_weight")?;
        let ideal = params.optional_number("ideal_weight")?;
        let deficit = params.optional_number("weight_deficit_percent")?;
        match (current, ideal, deficit) {
            (Some(current), Some(ideal), None) => Ok(WeightInput::Measured {
                current_kg: WEIGHT.check("current_weight", current)?,
                ideal_kg: WEIGHT.check("ideal_weight", ideal)?,
            }),
            (None, None, Some(percent)) => Ok(WeightInput::Deficit {
                percent: WEIGHT_DEFICIT.check("weight_deficit_percent", percent)?,
            }),
            (_, _, Some(_)) => Err(InvalidParameter::new(
                "weight_deficit_percent",
                "give either weight_deficit_percent or current_weight and ideal_weight, not both",
            )),
            (None, _, None) => Err(InvalidParameter::missing("current_weight")),
            (Some(_), None, None) => Err(InvalidParameter::missing("ideal_weight")),
        }
    }

    /// Percent below ideal weight; being over weight scores nothing.
    pub fn deficit_percent(self) -> f64 {
        let percent = match self {
            WeightInput::Measured { current_kg, ideal_kg } => {
                (ideal_kg - current_kg) / ideal_kg * 100.0
            }
            WeightInput::Deficit { percent } => percent,
        };
        percent.max(0.0)
    }
}

impl Calculator for CdaiCrohns {
    fn id(&self) -> &'static str {
        "cdai_crohns"
    }

    fn name(&self) -> &'static str {
        "Crohn's Disease Activity Index (CDAI)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Gastroenterology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "liquid_stools_week",
            "abdominal_pain_score",
            "general_wellbeing_score",
            "arthritis_arthralgias",
            "iritis_uveitis",
            "erythema_nodosum",
            "anal_fissure_fistula",
            "other_fistulas",
            "fever",
            "antidiarrheal_use",
            "abdominal_mass",
            "patient_sex",
            "observed_hematocrit",
            "current_weight",
            "ideal_weight",
            "weight_deficit_percent",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let stools =
            LIQUID_STOOLS.check_int("liquid_stools_week", params.integer("liquid_stools_week")?)?;
        let pain: AbdominalPain = params.token("abdominal_pain_score")?;
        let wellbeing: Wellbeing = params.token("general_wellbeing_score")?;
        let mut complications = 0;
        for field in EXTRAINTESTINAL {
            if params.yes_no(field)? {
                complications += 1;
            }
        }
        let antidiarrheal = params.yes_no("antidiarrheal_use")?;
        let mass: AbdominalMass = params.token("abdominal_mass")?;
        let sex: Sex = params.token("patient_sex")?;
        let hematocrit =
            HEMATOCRIT.check("observed_hematocrit", params.number("observed_hematocrit")?)?;
        let weight = WeightInput::from_params(params)?;

        let expected_hematocrit = if sex.is_female() { 42.0 } else { 47.0 };
        let components: [(&str, f64); 8] = [
            ("liquid_stools", stools as f64 * 2.0),
            ("abdominal_pain", pain as i64 as f64 * 5.0),
            ("general_wellbeing", wellbeing as i64 as f64 * 7.0),
            ("extraintestinal", complications as f64 * 20.0),
            ("antidiarrheal", if antidiarrheal { 30.0 } else { 0.0 }),
            ("abdominal_mass", mass.points() * 10.0),
            ("hematocrit", (expected_hematocrit - hematocrit).max(0.0) * 6.0),
            ("weight", weight.deficit_percent()),
        ];

        let score = components.iter().map(|(_, v)| v).sum::<f64>().round() as i64;
        let breakdown: Map<String, Value> = components
            .iter()
            .map(|(k, v)| (k.to_string(), Value::from(round_to(*v, 1))))
            .collect();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("CDAI {score}. {}", band.interpretation))
            .with_detail("breakdown", Value::Object(breakdown)))
    }
}
