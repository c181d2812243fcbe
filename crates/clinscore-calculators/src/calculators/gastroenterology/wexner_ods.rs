use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};

use crate::Calculator;

/// Wexner (Cleveland Clinic) incontinence score. Each item is a frequency
/// from 0 (never) to 4 (at least once a day).
pub struct WexnerOds;

const FREQUENCY: ParamRange = ParamRange::integer(0.0, 4.0);

const ITEMS: &[&str] = &[
    "incontinence_solid_stool",
    "incontinence_liquid_stool",
    "incontinence_gas",
    "wears_pad",
    "lifestyle_alteration",
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        1.0,
        "Perfect Continence",
        "Perfect continence with no symptoms",
        "No fecal incontinence symptoms.",
    ),
    Band::new(
        1.0,
        10.0,
        "Mild Incontinence",
        "Mild fecal incontinence",
        "Mild fecal incontinence with limited impact on daily life. Conservative measures such as diet, fiber and pelvic floor exercises.",
    ),
    Band::new(
        10.0,
        f64::INFINITY,
        "Clinical Incontinence",
        "Clinically significant fecal incontinence",
        "Clinically significant fecal incontinence affecting quality of life. Refer for anorectal physiology testing and specialist management.",
    ),
];

impl Calculator for WexnerOds {
    fn id(&self) -> &'static str {
        "wexner_ods"
    }

    fn name(&self) -> &'static str {
        "Wexner Score"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Gastroenterology
    }

    fn parameters(&self) -> &'static [&'static str] {
        ITEMS
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        for field in ITEMS {
            tally.add(field, FREQUENCY.check_int(field, params.integer(field)?)?);
        }

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("Wexner score {score}/20. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
