use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};

use crate::Calculator;

/// Glasgow-Imrie (PANCREAS) criteria for severity of acute pancreatitis,
/// assessed within the first 48 hours.
pub struct GlasgowImrie;

const PAO2: ParamRange = ParamRange::new(30.0, 150.0);
const AGE: ParamRange = ParamRange::integer(18.0, 120.0);
const WBC: ParamRange = ParamRange::new(1.0, 50.0);
const CALCIUM: ParamRange = ParamRange::new(4.0, 15.0);
const UREA: ParamRange = ParamRange::new(5.0, 200.0);
const LDH: ParamRange = ParamRange::integer(100.0, 5000.0);
const ALBUMIN: ParamRange = ParamRange::new(1.0, 6.0);
const GLUCOSE: ParamRange = ParamRange::new(50.0, 800.0);

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        3.0,
        "Mild Pancreatitis",
        "Low risk for severe pancreatitis",
        "Fewer than 3 criteria met. Mild pancreatitis expected; supportive ward care with fluids and analgesia.",
    ),
    Band::new(
        3.0,
        5.0,
        "Moderate Pancreatitis",
        "Moderate risk for severe pancreatitis",
        "3-4 criteria met. Severe pancreatitis is likely; consider HDU care and close monitoring for organ failure.",
    ),
    Band::new(
        5.0,
        f64::INFINITY,
        "Severe Pancreatitis",
        "High risk for severe pancreatitis",
        "5 or more criteria met. High risk of severe disease and mortality; ICU assessment is indicated.",
    ),
];

impl Calculator for GlasgowImrie {
    fn id(&self) -> &'static str {
        "glasgow_imrie"
    }

    fn name(&self) -> &'static str {
        "Glasgow-Imrie Criteria for Acute Pancreatitis"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Gastroenterology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["pao2", "age", "wbc", "calcium", "urea", "ldh", "albumin", "glucose"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let pao2 = PAO2.check("pao2", params.number("pao2")?)?;
        let age = AGE.check_int("age", params.integer("age")?)?;
        let wbc = WBC.check("wbc", params.number("wbc")?)?;
        let calcium = CALCIUM.check("calcium", params.number("calcium")?)?;
        let urea = UREA.check("urea", params.number("urea")?)?;
        let ldh = LDH.check_int("ldh", params.integer("ldh")?)?;
        let albumin = ALBUMIN.check("albumin", params.number("albumin")?)?;
        let glucose = GLUCOSE.check("glucose", params.number("glucose")?)?;

        let mut tally = Tally::new();
        tally
            .flag("pao2", pao2 < 59.3, 1)
            .flag("age", age > 55, 1)
            .flag("wbc", wbc > 15.0, 1)
            .flag("calcium", calcium < 8.0, 1)
            .flag("urea", urea > 44.8, 1)
            .flag("ldh", ldh > 600, 1)
            .flag("albumin", albumin < 3.2, 1)
            .flag("glucose", glucose > 180.0, 1);

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!(
                "{score}/8 Glasgow-Imrie criteria met. {}",
                band.interpretation
            ))
            .with_detail("breakdown", tally.breakdown()))
    }
}
