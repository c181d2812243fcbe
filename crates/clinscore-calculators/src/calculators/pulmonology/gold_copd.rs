use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, classify};
use serde::Serialize;

use crate::Calculator;

/// GOLD COPD assessment: spirometric grade from FEV1 % predicted plus the
/// A/B/E group from symptom burden and exacerbation history. A post-
/// bronchodilator FEV1/FVC of 0.70 or more rules COPD out.
pub struct GoldCopd;

const FEV1: ParamRange = ParamRange::new(10.0, 120.0);
const RATIO: ParamRange = ParamRange::new(0.30, 1.00);
const MMRC: ParamRange = ParamRange::integer(0.0, 4.0);
const EVENTS: ParamRange = ParamRange::integer(0.0, 50.0);
const CAT: ParamRange = ParamRange::integer(0.0, 40.0);

const OBSTRUCTION_RATIO: f64 = 0.70;

pub static BANDS: &[Band] = &[
    Band::new(
        f64::NEG_INFINITY,
        30.0,
        "GOLD 4",
        "Very Severe",
        "FEV1 below 30% predicted.",
    ),
    Band::new(30.0, 50.0, "GOLD 3", "Severe", "FEV1 30-49% predicted."),
    Band::new(50.0, 80.0, "GOLD 2", "Moderate", "FEV1 50-79% predicted."),
    Band::new(
        80.0,
        f64::INFINITY,
        "GOLD 1",
        "Mild",
        "FEV1 80% predicted or more.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Group {
    A,
    B,
    E,
}

impl Group {
    pub fn assign(high_symptoms: bool, high_exacerbation_risk: bool) -> Self {
        if high_exacerbation_risk {
            Group::E
        } else if high_symptoms {
            Group::B
        } else {
            Group::A
        }
    }

    fn letter(self) -> &'static str {
        match self {
            Group::A => "A",
            Group::B => "B",
            Group::E => "E",
        }
    }

    fn explanation(self) -> &'static str {
        match self {
            Group::A => "Low symptom burden, low exacerbation risk. Bronchodilator as needed (short- or long-acting).",
            Group::B => "High symptom burden, low exacerbation risk. Regular LABA + LAMA with pulmonary rehabilitation.",
            Group::E => "High exacerbation risk regardless of symptoms. LABA + LAMA; consider ICS if blood eosinophils are 300/µL or more.",
        }
    }
}

impl Calculator for GoldCopd {
    fn id(&self) -> &'static str {
        "gold_copd"
    }

    fn name(&self) -> &'static str {
        "GOLD COPD Criteria"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Pulmonology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "fev1_percent_predicted",
            "fev1_fvc_ratio",
            "dyspnea_mmrc",
            "exacerbations_last_year",
            "hospitalizations_last_year",
            "cat_score",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let fev1 = FEV1.check("fev1_percent_predicted", params.number("fev1_percent_predicted")?)?;
        let ratio = RATIO.check("fev1_fvc_ratio", params.number("fev1_fvc_ratio")?)?;
        let mmrc = MMRC.check_int("dyspnea_mmrc", params.integer("dyspnea_mmrc")?)?;
        let exacerbations = EVENTS.check_int(
            "exacerbations_last_year",
            params.integer("exacerbations_last_year")?,
        )?;
        let hospitalizations = EVENTS.check_int(
            "hospitalizations_last_year",
            params.integer("hospitalizations_last_year")?,
        )?;
        let cat = params
            .optional_integer("cat_score")?
            .map(|v| CAT.check_int("cat_score", v))
            .transpose()?;

        if ratio >= OBSTRUCTION_RATIO {
            return Ok(Assessment::new(
                "No COPD - Normal spirometry",
                "classification",
                "No COPD",
                "Normal lung function",
                format!(
                    "FEV1/FVC {ratio:.2} is not below 0.70, so airflow obstruction is absent and COPD is not confirmed. Consider other causes of respiratory symptoms."
                ),
            ));
        }

        let grade = classify(BANDS, fev1);
        let high_symptoms = mmrc >= 2 || cat.is_some_and(|c| c >= 10);
        let high_risk = exacerbations >= 2 || hospitalizations >= 1;
        let group = Group::assign(high_symptoms, high_risk);

        let label = format!(
            "{} - {} COPD, Group {}",
            grade.stage,
            grade.description,
            group.letter()
        );
        let interpretation = format!(
            "{label}. FEV1/FVC {ratio:.2}, FEV1 {fev1:.1}% predicted. {} Smoking cessation, vaccination and pulmonary rehabilitation for symptomatic patients.",
            group.explanation()
        );

        Ok(Assessment::new(
            label,
            "classification",
            grade.stage,
            format!("{} airflow limitation, Group {}", grade.description, group.letter()),
            interpretation,
        )
        .with_detail("group", group.letter())
        .with_detail("high_symptoms", high_symptoms)
        .with_detail("high_exacerbation_risk", high_risk))
    }
}
