use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Burch-Wartofsky Point Scale for thyroid storm.
pub struct BurchWartofsky;

/// Temperature band in °F. Each step above 99 °F adds 5 points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Temperature {
    #[serde(rename = "under_99")]
    Under99 = 0,
    #[serde(rename = "99_100")]
    From99To100 = 1,
    #[serde(rename = "100_101")]
    From100To101 = 2,
    #[serde(rename = "101_102")]
    From101To102 = 3,
    #[serde(rename = "102_103")]
    From102To103 = 4,
    #[serde(rename = "103_104")]
    From103To104 = 5,
    #[serde(rename = "over_104")]
    Over104 = 6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CnsEffects {
    Absent,
    MildAgitation,
    ModerateDeliriumPsychosisExtremeLethargy,
    SevereComaSeizure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GiHepatic {
    Absent = 0,
    ModerateDiarrheaNauseaVomitingAbdominalPain = 1,
    SevereUnexplainedJaundice = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardiovascular {
    Absent,
    ModerateChfPedalEdemaPulmonaryEdema,
    SeverePulmonaryEdema,
}

/// Heart rate band in beats/min. Each step from 90 adds 5 points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tachycardia {
    #[serde(rename = "under_90")]
    Under90 = 0,
    #[serde(rename = "90_109")]
    From90To109 = 1,
    #[serde(rename = "110_119")]
    From110To119 = 2,
    #[serde(rename = "120_129")]
    From120To129 = 3,
    #[serde(rename = "130_139")]
    From130To139 = 4,
    #[serde(rename = "over_140")]
    Over140 = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Absent,
    Present,
}

impl Presence {
    fn is_present(self) -> bool {
        self == Presence::Present
    }
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        25.0,
        "Unlikely",
        "Thyroid storm unlikely",
        "Score below 25 makes thyroid storm unlikely. Treat the underlying thyrotoxicosis and reassess if the clinical picture changes.",
    ),
    Band::new(
        25.0,
        45.0,
        "Impending",
        "Impending thyroid storm",
        "Score 25-44 suggests impending thyroid storm. Clinical judgement should guide early treatment with beta-blockade, thionamides and corticosteroids.",
    ),
    Band::new(
        45.0,
        f64::INFINITY,
        "Highly Suggestive",
        "Thyroid storm highly suggestive",
        "Score of 45 or more is highly suggestive of thyroid storm, a life-threatening emergency. Start aggressive treatment and ICU-level care.",
    ),
];

impl Calculator for BurchWartofsky {
    fn id(&self) -> &'static str {
        "burch_wartofsky"
    }

    fn name(&self) -> &'static str {
        "Burch-Wartofsky Point Scale (BWPS)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Endocrinology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "temperature",
            "cns_effects",
            "gi_hepatic_dysfunction",
            "cardiovascular_dysfunction",
            "tachycardia",
            "atrial_fibrillation",
            "precipitant_history",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let cns = match params.token::<CnsEffects>("cns_effects")? {
            CnsEffects::Absent => 0,
            CnsEffects::MildAgitation => 10,
            CnsEffects::ModerateDeliriumPsychosisExtremeLethargy => 20,
            CnsEffects::SevereComaSeizure => 30,
        };
        let gi = params.token::<GiHepatic>("gi_hepatic_dysfunction")? as i64 * 10;
        let cardiovascular = match params.token::<Cardiovascular>("cardiovascular_dysfunction")? {
            Cardiovascular::Absent => 0,
            Cardiovascular::ModerateChfPedalEdemaPulmonaryEdema => 5,
            Cardiovascular::SeverePulmonaryEdema => 15,
        };

        let mut tally = Tally::new();
        tally
            .add(
                "temperature",
                params.token::<Temperature>("temperature")? as i64 * 5,
            )
            .add("cns_effects", cns)
            .add("gi_hepatic_dysfunction", gi)
            .add("cardiovascular_dysfunction", cardiovascular)
            .add(
                "tachycardia",
                params.token::<Tachycardia>("tachycardia")? as i64 * 5,
            )
            .flag(
                "atrial_fibrillation",
                params.token::<Presence>("atrial_fibrillation")?.is_present(),
                10,
            )
            .flag(
                "precipitant_history",
                params.token::<Presence>("precipitant_history")?.is_present(),
                10,
            );

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("BWPS {score} points. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
