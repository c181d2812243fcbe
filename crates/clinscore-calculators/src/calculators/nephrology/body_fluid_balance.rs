use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, classify};

use crate::Calculator;

/// Net fluid balance split into isotonic saline and free water components,
/// from the sodium content of each loss and intake.
pub struct BodyFluidBalance;

const VOLUME: ParamRange = ParamRange::new(0.0, 10_000.0);
const ISOTONIC_SODIUM: f64 = 154.0;

/// (field, sodium mEq/L)
const LOSSES: &[(&str, f64)] = &[
    ("gastric_losses", 60.0),
    ("biliary_losses", 130.0),
    ("small_bowel_losses", 110.0),
    ("diarrhea_losses", 60.0),
    ("urine_output", 40.0),
    ("insensible_losses", 0.0),
    ("other_losses", 140.0),
];

const GAINS: &[(&str, f64)] = &[
    ("normal_saline_iv", 154.0),
    ("half_normal_saline_iv", 77.0),
    ("lactated_ringers_iv", 130.0),
    ("d5w_iv", 0.0),
    ("oral_intake", 0.0),
];

// Whole mL: -500 and -200 fall in the negative bands, +200 is neutral and
// +500 is moderate.
pub static BANDS: &[Band] = &[
    Band::new(
        f64::NEG_INFINITY,
        -499.0,
        "Significant Negative Balance",
        "Net fluid loss >500 mL",
        "Significant fluid deficit. Assess for volume depletion and replace promptly.",
    ),
    Band::new(
        -499.0,
        -199.0,
        "Moderate Negative Balance",
        "Net fluid loss 200-500 mL",
        "Moderate fluid deficit. Monitor vital signs and urine output; replacement may be needed.",
    ),
    Band::new(
        -199.0,
        201.0,
        "Neutral Balance",
        "Net fluid balance -200 to +200 mL",
        "Fluid balance maintained. Continue the current fluid strategy with routine monitoring.",
    ),
    Band::new(
        201.0,
        501.0,
        "Moderate Positive Balance",
        "Net fluid gain 200-500 mL",
        "Moderate fluid accumulation. Monitor for edema, crackles and weight gain.",
    ),
    Band::new(
        501.0,
        f64::INFINITY,
        "Significant Positive Balance",
        "Net fluid gain >500 mL",
        "Significant fluid overload risk. Assess for congestion and consider restricting intake or diuresis.",
    ),
];

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Components {
    volume: f64,
    saline: f64,
    water: f64,
}

fn components(params: &Params, fluids: &[(&str, f64)]) -> Result<Components> {
    let mut total = Components::default();
    for (field, sodium) in fluids {
        let volume = params
            .optional_number(field)?
            .map(|v| VOLUME.check(field, v))
            .transpose()?
            .unwrap_or(0.0);
        let saline_fraction = sodium / ISOTONIC_SODIUM;
        total.volume += volume;
        total.saline += volume * saline_fraction;
        total.water += volume * (1.0 - saline_fraction);
    }
    Ok(total)
}

impl Calculator for BodyFluidBalance {
    fn id(&self) -> &'static str {
        "body_fluid_balance"
    }

    fn name(&self) -> &'static str {
        "Body Fluid Balance"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Nephrology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "gastric_losses",
            "biliary_losses",
            "small_bowel_losses",
            "diarrhea_losses",
            "urine_output",
            "insensible_losses",
            "other_losses",
            "normal_saline_iv",
            "half_normal_saline_iv",
            "lactated_ringers_iv",
            "d5w_iv",
            "oral_intake",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let lost = components(params, LOSSES)?;
        let gained = components(params, GAINS)?;

        let net_saline = (gained.saline - lost.saline).round() as i64;
        let net_water = (gained.water - lost.water).round() as i64;
        let total = (gained.volume - lost.volume).round() as i64;
        let band = classify(BANDS, total as f64);
        Ok(Assessment::from_band(total, "mL", band)
            .with_interpretation(format!(
                "Net balance {total} mL (saline {net_saline} mL, free water {net_water} mL). {}",
                band.interpretation
            ))
            .with_detail("net_saline_balance", net_saline)
            .with_detail("net_water_balance", net_water)
            .with_detail("total_losses", lost.volume.round() as i64)
            .with_detail("total_gains", gained.volume.round() as i64))
    }
}
