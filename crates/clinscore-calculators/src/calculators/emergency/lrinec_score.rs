use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};

use crate::Calculator;

/// Laboratory Risk Indicator for Necrotizing Fasciitis.
pub struct LrinecScore;

const CRP: ParamRange = ParamRange::new(0.0, 1000.0);
const WBC: ParamRange = ParamRange::new(0.0, 200_000.0);
const HEMOGLOBIN: ParamRange = ParamRange::new(0.0, 25.0);
const SODIUM: ParamRange = ParamRange::new(100.0, 180.0);
const CREATININE: ParamRange = ParamRange::new(0.0, 30.0);
const GLUCOSE: ParamRange = ParamRange::new(0.0, 2000.0);

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        6.0,
        "Low Risk",
        "Necrotizing fasciitis unlikely",
        "Probability below 50%. Continue standard soft tissue infection care with serial reassessment; a low score does not exclude the diagnosis when suspicion remains.",
    ),
    Band::new(
        6.0,
        8.0,
        "Moderate Risk",
        "Intermediate probability",
        "Probability 50-75%. Urgent evaluation for necrotizing fasciitis and early surgical consultation.",
    ),
    Band::new(
        8.0,
        f64::INFINITY,
        "High Risk",
        "Necrotizing fasciitis likely",
        "Probability above 75%. Urgent surgical consultation; immediate operative exploration is strongly recommended.",
    ),
];

impl Calculator for LrinecScore {
    fn id(&self) -> &'static str {
        "lrinec_score"
    }

    fn name(&self) -> &'static str {
        "LRINEC Score for Necrotizing Soft Tissue Infection"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Emergency
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["crp", "wbc", "hemoglobin", "sodium", "creatinine", "glucose"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let crp = CRP.check("crp", params.number("crp")?)?;
        let wbc = WBC.check("wbc", params.number("wbc")?)?;
        let hemoglobin = HEMOGLOBIN.check("hemoglobin", params.number("hemoglobin")?)?;
        let sodium = SODIUM.check("sodium", params.number("sodium")?)?;
        let creatinine = CREATININE.check("creatinine", params.number("creatinine")?)?;
        let glucose = GLUCOSE.check("glucose", params.number("glucose")?)?;

        let wbc_points = if wbc > 25_000.0 {
            2
        } else if wbc >= 15_000.0 {
            1
        } else {
            0
        };
        let hemoglobin_points = if hemoglobin < 11.0 {
            2
        } else if hemoglobin <= 13.5 {
            1
        } else {
            0
        };

        let mut tally = Tally::new();
        tally
            .flag("crp", crp >= 150.0, 4)
            .add("wbc", wbc_points)
            .add("hemoglobin", hemoglobin_points)
            .flag("sodium", sodium < 135.0, 2)
            .flag("creatinine", creatinine > 1.6, 2)
            .flag("glucose", glucose > 180.0, 1);

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("LRINEC {score}/13. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
