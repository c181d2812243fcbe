use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Clinical Frailty Scale (Rockwood, version 2.0). The result is the
/// clinician-assigned level; classification attaches its label and outlook.
pub struct ClinicalFrailtyScale;

const LEVEL: ParamRange = ParamRange::integer(1.0, 9.0);
const AGE: ParamRange = ParamRange::integer(65.0, 120.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dementia {
    Yes,
    No,
    Unknown,
}

pub static BANDS: &[Band] = &[
    Band::new(
        1.0,
        2.0,
        "Very Fit",
        "Robust, active, energetic and motivated; exercises regularly",
        "Very fit. Very low risk of adverse outcomes; suitable for all standard interventions.",
    ),
    Band::new(
        2.0,
        3.0,
        "Fit",
        "No active disease symptoms but less fit than level 1",
        "Fit. Very low risk; standard care and health promotion.",
    ),
    Band::new(
        3.0,
        4.0,
        "Managing Well",
        "Medical problems well controlled; not regularly active beyond walking",
        "Managing well. Low risk; encourage physical activity and review medications.",
    ),
    Band::new(
        4.0,
        5.0,
        "Living with Very Mild Frailty",
        "Not dependent, but symptoms limit activities",
        "Very mild frailty. Consider comprehensive geriatric assessment and early intervention to prevent decline.",
    ),
    Band::new(
        5.0,
        6.0,
        "Living with Mild Frailty",
        "Needs help with higher-order instrumental activities of daily living",
        "Mild frailty. Comprehensive geriatric assessment, falls prevention and careful weighing of invasive interventions.",
    ),
    Band::new(
        6.0,
        7.0,
        "Living with Moderate Frailty",
        "Needs help with all outside activities and housekeeping",
        "Moderate frailty. High risk of adverse outcomes; involve the patient in goals-of-care discussions before major interventions.",
    ),
    Band::new(
        7.0,
        8.0,
        "Living with Severe Frailty",
        "Completely dependent for personal care but stable",
        "Severe frailty. Focus on comfort and function; intensive interventions are rarely beneficial.",
    ),
    Band::new(
        8.0,
        9.0,
        "Living with Very Severe Frailty",
        "Completely dependent, approaching the end of life",
        "Very severe frailty. Typically could not recover from a minor illness; palliative approach recommended.",
    ),
    Band::new(
        9.0,
        f64::INFINITY,
        "Terminally Ill",
        "Life expectancy under 6 months, not otherwise evidently frail",
        "Terminally ill. Prioritise symptom management and end-of-life planning.",
    ),
];

impl Calculator for ClinicalFrailtyScale {
    fn id(&self) -> &'static str {
        "clinical_frailty_scale"
    }

    fn name(&self) -> &'static str {
        "Clinical Frailty Scale (CFS)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Geriatrics
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["frailty_level", "age", "dementia_present"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let level = LEVEL.check_int("frailty_level", params.integer("frailty_level")?)?;
        AGE.check_int("age", params.integer("age")?)?;
        let dementia = params.optional_token::<Dementia>("dementia_present")?;

        let band = classify(BANDS, level as f64);
        let mut interpretation = format!("CFS {level}: {}. {}", band.stage, band.interpretation);
        if dementia == Some(Dementia::Yes) {
            interpretation.push_str(
                " With dementia, the level reflects the degree of dependence rather than cognitive severity alone.",
            );
        }

        Ok(Assessment::from_band(level, "CFS level", band)
            .with_interpretation(interpretation)
            .with_detail("frail", level >= 5))
    }
}
