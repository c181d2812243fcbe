use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// 2015 ACR/EULAR gout classification criteria.
///
/// Step 1 is the entry criterion, step 2 the sufficient criterion (MSU
/// crystals), step 3 the weighted clinical, laboratory and imaging domains.
pub struct AcrEularGout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MsuCrystals {
    Yes,
    No,
    NotTested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointPattern {
    OtherJoint = 0,
    AnkleMidfoot = 1,
    FirstMtp = 2,
}

/// Count of episode characteristics: erythema, can't bear touch or pressure,
/// great difficulty walking or using the joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeCharacteristics {
    None = 0,
    One = 1,
    Two = 2,
    Three = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypicalEpisodes {
    None = 0,
    One = 1,
    Recurrent = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Evidence {
    Absent,
    Present,
}

/// Serum urate in mg/dL, measured off urate-lowering therapy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SerumUrate {
    #[serde(rename = "under_4")]
    Under4,
    #[serde(rename = "4_to_6")]
    From4To6,
    #[serde(rename = "6_to_8")]
    From6To8,
    #[serde(rename = "8_to_10")]
    From8To10,
    #[serde(rename = "over_10")]
    Over10,
}

impl SerumUrate {
    fn points(self) -> i64 {
        match self {
            SerumUrate::Under4 => -4,
            SerumUrate::From4To6 => 0,
            SerumUrate::From6To8 => 2,
            SerumUrate::From8To10 => 3,
            SerumUrate::Over10 => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynovialFluid {
    NegativeMsu,
    NotDone,
}

/// Classification threshold for the weighted domains.
pub const GOUT_THRESHOLD: i64 = 8;

pub static BANDS: &[Band] = &[
    Band::new(
        f64::NEG_INFINITY,
        8.0,
        "Does not meet criteria",
        "Does not meet gout classification criteria",
        "Does not meet the 2015 ACR/EULAR classification criteria for gout (8 or more points required). Consider joint aspiration for crystal analysis or alternative diagnoses.",
    ),
    Band::new(
        8.0,
        f64::INFINITY,
        "Meets criteria for gout",
        "Meets gout classification criteria",
        "Meets the 2015 ACR/EULAR classification criteria for gout. Consider urate-lowering therapy and flare management according to guidelines.",
    ),
];

fn present(params: &Params, field: &str) -> Result<bool> {
    Ok(params.token::<Evidence>(field)? == Evidence::Present)
}

impl Calculator for AcrEularGout {
    fn id(&self) -> &'static str {
        "acr_eular_gout"
    }

    fn name(&self) -> &'static str {
        "ACR/EULAR Gout Classification Criteria"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Rheumatology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "entry_criterion",
            "msu_crystals_present",
            "joint_pattern",
            "episode_characteristics",
            "typical_episodes",
            "tophus_evidence",
            "serum_urate",
            "synovial_fluid_analysis",
            "imaging_urate_deposition",
            "imaging_joint_damage",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let entry = params.yes_no("entry_criterion")?;
        let crystals = params.token::<MsuCrystals>("msu_crystals_present")?;
        let synovial_fluid = params.token::<SynovialFluid>("synovial_fluid_analysis")?;

        let mut tally = Tally::new();
        tally
            .add(
                "joint_pattern",
                params.token::<JointPattern>("joint_pattern")? as i64,
            )
            .add(
                "episode_characteristics",
                params.token::<EpisodeCharacteristics>("episode_characteristics")? as i64,
            )
            .add(
                "typical_episodes",
                params.token::<TypicalEpisodes>("typical_episodes")? as i64,
            )
            .flag("tophus_evidence", present(params, "tophus_evidence")?, 4)
            .add(
                "serum_urate",
                params.token::<SerumUrate>("serum_urate")?.points(),
            )
            .flag(
                "synovial_fluid_analysis",
                synovial_fluid == SynovialFluid::NegativeMsu,
                -2,
            )
            .flag(
                "imaging_urate_deposition",
                present(params, "imaging_urate_deposition")?,
                4,
            )
            .flag(
                "imaging_joint_damage",
                present(params, "imaging_joint_damage")?,
                4,
            );

        if !entry {
            return Ok(Assessment::new(
                "entry_criterion_not_met",
                "classification",
                "Entry criterion not met",
                "Prerequisites not satisfied",
                "The criteria apply only after at least one episode of swelling, pain or tenderness in a peripheral joint or bursa.",
            ));
        }
        if crystals == MsuCrystals::Yes {
            return Ok(Assessment::new(
                "definite_gout",
                "classification",
                "Definite gout",
                "MSU crystals present",
                "Monosodium urate crystals in a symptomatic joint, bursa or tophus are sufficient to classify as gout without scoring.",
            ));
        }

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("Score {score}/23. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
