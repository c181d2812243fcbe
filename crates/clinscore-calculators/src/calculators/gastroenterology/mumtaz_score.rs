use clinscore_core::numeric::{fixed, logistic, round_to};
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, classify};

use crate::Calculator;

/// Mumtaz score: 30-day readmission risk after a cirrhosis admission.
pub struct MumtazScore;

const AGE: ParamRange = ParamRange::integer(18.0, 120.0);
const SODIUM: ParamRange = ParamRange::new(100.0, 160.0);
const ALBUMIN: ParamRange = ParamRange::new(1.0, 6.0);
const LENGTH_OF_STAY: ParamRange = ParamRange::integer(1.0, 365.0);
const PREVIOUS_ADMISSIONS: ParamRange = ParamRange::integer(0.0, 20.0);
const MELD: ParamRange = ParamRange::integer(6.0, 40.0);

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        15.0,
        "Low Risk",
        "Low 30-day readmission risk",
        "Low probability of 30-day readmission. Standard discharge planning and routine follow-up.",
    ),
    Band::new(
        15.0,
        30.0,
        "Moderate Risk",
        "Moderate 30-day readmission risk",
        "Intermediate probability of 30-day readmission. Arrange early follow-up and medication reconciliation.",
    ),
    Band::new(
        30.0,
        50.0,
        "High Risk",
        "High 30-day readmission risk",
        "High probability of 30-day readmission. Intensive transition-of-care support and follow-up within 7 days.",
    ),
    Band::new(
        50.0,
        f64::INFINITY,
        "Very High Risk",
        "Very high 30-day readmission risk",
        "Very high probability of 30-day readmission. Consider delayed discharge, care coordination and palliative care input.",
    ),
];

impl Calculator for MumtazScore {
    fn id(&self) -> &'static str {
        "mumtaz_score"
    }

    fn name(&self) -> &'static str {
        "Mumtaz Score for Cirrhosis Readmission"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Gastroenterology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age",
            "serum_sodium",
            "albumin",
            "length_of_stay",
            "previous_admissions_6_months",
            "meld_score",
            "hepatic_encephalopathy",
            "ascites",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check_int("age", params.integer("age")?)?;
        let sodium = SODIUM.check("serum_sodium", params.number("serum_sodium")?)?;
        let albumin = ALBUMIN.check("albumin", params.number("albumin")?)?;
        let stay = LENGTH_OF_STAY.check_int("length_of_stay", params.integer("length_of_stay")?)?;
        let admissions = PREVIOUS_ADMISSIONS.check_int(
            "previous_admissions_6_months",
            params.integer("previous_admissions_6_months")?,
        )?;
        let meld = MELD.check_int("meld_score", params.integer("meld_score")?)?;
        let encephalopathy = params.yes_no("hepatic_encephalopathy")?;
        let ascites = params.yes_no("ascites")?;

        let x = -2.5 + 0.015 * age as f64 - 0.04 * sodium - 0.8 * albumin
            + 0.02 * stay as f64
            + 0.3 * admissions as f64
            + 0.05 * meld as f64
            + if encephalopathy { 0.6 } else { 0.0 }
            + if ascites { 0.4 } else { 0.0 };
        let risk = logistic(x) * 100.0;
        let band = classify(BANDS, risk);
        Ok(Assessment::from_band(round_to(risk, 1), "%", band).with_interpretation(format!(
            "30-day readmission risk {}%. {}",
            fixed(risk, 1),
            band.interpretation
        )))
    }
}
