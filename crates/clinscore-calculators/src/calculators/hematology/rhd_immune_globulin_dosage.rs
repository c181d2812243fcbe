use clinscore_core::numeric::round_to;
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, classify};

use crate::Calculator;

/// RhD immune globulin vials after fetomaternal hemorrhage, from the
/// Kleihauer-Betke fetal cell percentage.
pub struct RhdImmuneGlobulinDosage;

const MATERNAL_BLOOD_VOLUME: ParamRange = ParamRange::new(2000.0, 6000.0);
const FETAL_CELLS: ParamRange = ParamRange::new(0.0, 10.0);

/// mL of fetal whole blood covered by one 300 µg vial.
const ML_PER_VIAL: f64 = 30.0;
const MCG_PER_VIAL: i64 = 300;

pub static BANDS: &[Band] = &[
    Band::new(
        1.0,
        2.0,
        "Standard Dose",
        "Minimal maternal-fetal hemorrhage",
        "A single 300 µg vial is sufficient. Give within 72 hours of the sensitizing event.",
    ),
    Band::new(
        2.0,
        4.0,
        "Moderate Hemorrhage",
        "Moderate maternal-fetal hemorrhage",
        "Multiple vials required. Give within 72 hours; doses may be split over 24 hours.",
    ),
    Band::new(
        4.0,
        11.0,
        "Large Hemorrhage",
        "Large maternal-fetal hemorrhage",
        "Large dose required. Consider intravenous preparations and repeat fetal cell quantification.",
    ),
    Band::new(
        11.0,
        f64::INFINITY,
        "Massive Hemorrhage",
        "Massive maternal-fetal hemorrhage",
        "Massive hemorrhage. Involve transfusion medicine and maternal-fetal medicine; evaluate fetal well-being.",
    ),
];

/// Vials for `fetal_blood_ml`: whole vials round up by one extra when the
/// remainder reaches half a vial, and an exact multiple gets one extra.
pub fn vials(fetal_blood_ml: f64) -> i64 {
    let raw = fetal_blood_ml / ML_PER_VIAL;
    let fraction = raw - raw.floor();
    let vials = if fraction == 0.0 {
        raw as i64 + 1
    } else if fraction < 0.5 {
        raw.ceil() as i64
    } else {
        raw.ceil() as i64 + 1
    };
    vials.max(1)
}

impl Calculator for RhdImmuneGlobulinDosage {
    fn id(&self) -> &'static str {
        "rhd_immune_globulin_dosage"
    }

    fn name(&self) -> &'static str {
        "Maternal-Fetal Hemorrhage RhD Immune Globulin Dosage"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Hematology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["maternal_blood_volume", "fetal_cell_percentage"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let volume = MATERNAL_BLOOD_VOLUME.check(
            "maternal_blood_volume",
            params.number("maternal_blood_volume")?,
        )?;
        let fetal_pct =
            FETAL_CELLS.check("fetal_cell_percentage", params.number("fetal_cell_percentage")?)?;

        let fetal_blood = volume * fetal_pct / 100.0;
        let count = vials(fetal_blood);
        let band = classify(BANDS, count as f64);

        Ok(Assessment::from_band(count, "vials", band)
            .with_interpretation(format!(
                "{count} vial(s) of RhIG ({} µg). {}",
                count * MCG_PER_VIAL,
                band.interpretation
            ))
            .with_detail("fetal_blood_volume_ml", round_to(fetal_blood, 2))
            .with_detail("total_dose_mcg", count * MCG_PER_VIAL))
    }
}
