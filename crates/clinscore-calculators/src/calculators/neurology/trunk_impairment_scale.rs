use clinscore_core::{Assessment, Band, Params, Result, Specialty, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Trunk Impairment Scale (Verheyden) after stroke: static and dynamic
/// sitting balance and trunk coordination, 0-23 points.
pub struct TrunkImpairmentScale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoldsPosition {
    FallsOrCannotMaintain = 0,
    MaintainsPosition = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegCrossing {
    Falls = 0,
    CannotCrossWithoutArmSupport = 1,
    CrossesWithDisplacementOrAssistance = 2,
    CrossesWithoutDisplacement = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Touch {
    FallsNeedsSupportOrNoTouch = 0,
    MovesActivelyAndTouches = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shortening {
    NoOrOppositeShortening = 0,
    AppropriateShortening = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compensation {
    CompensationPresent = 0,
    MovesWithoutCompensation = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    #[serde(rename = "hemiplegic_not_moved_3x")]
    HemiplegicNotMoved3x = 0,
    AsymmetricalRotation = 1,
    SymmetricalRotation = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationSymmetry {
    AsymmetricalRotation = 0,
    SymmetricalRotation = 1,
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        1.0,
        "Severe Impairment",
        "Unable to maintain starting position",
        "Cannot maintain unsupported sitting for 10 seconds. Intensive trunk rehabilitation and seating support are required.",
    ),
    Band::new(
        1.0,
        8.0,
        "Severe Impairment",
        "Severe trunk motor impairment",
        "Severe trunk impairment with limited static and dynamic sitting balance. Intensive rehabilitation and fall precautions.",
    ),
    Band::new(
        8.0,
        16.0,
        "Moderate Impairment",
        "Moderate trunk motor impairment",
        "Moderate trunk impairment. Targeted balance and selective trunk movement training.",
    ),
    Band::new(
        16.0,
        20.0,
        "Mild Impairment",
        "Mild trunk motor impairment",
        "Mild trunk impairment, mainly in coordination. Progress to higher-level balance activities.",
    ),
    Band::new(
        20.0,
        f64::INFINITY,
        "Normal/Near Normal",
        "Normal or near-normal trunk function",
        "Normal or near-normal trunk control.",
    ),
];

/// A later item in a chain is only scored when every earlier item scored.
fn chained(points: &[i64]) -> i64 {
    let mut total = 0;
    for &p in points {
        total += p;
        if p == 0 {
            break;
        }
    }
    total
}

impl Calculator for TrunkImpairmentScale {
    fn id(&self) -> &'static str {
        "trunk_impairment_scale"
    }

    fn name(&self) -> &'static str {
        "Trunk Impairment Scale (TIS)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Neurology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "static_item_1",
            "static_item_2",
            "static_item_3",
            "dynamic_item_1",
            "dynamic_item_2",
            "dynamic_item_3",
            "dynamic_item_4",
            "dynamic_item_5",
            "dynamic_item_6",
            "dynamic_item_7",
            "dynamic_item_8",
            "dynamic_item_9",
            "dynamic_item_10",
            "coordination_item_1",
            "coordination_item_2",
            "coordination_item_3",
            "coordination_item_4",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let sits_unsupported = params.yes_no("static_item_1")?;
        let holds = params.token::<HoldsPosition>("static_item_2")? as i64 * 2;
        let crossing = params.token::<LegCrossing>("static_item_3")? as i64;

        let touch = |f: &str| params.token::<Touch>(f).map(|v| v as i64);
        let shortening = |f: &str| params.token::<Shortening>(f).map(|v| v as i64);
        let compensation = |f: &str| params.token::<Compensation>(f).map(|v| v as i64);
        let dynamic = [
            touch("dynamic_item_1")?,
            shortening("dynamic_item_2")?,
            compensation("dynamic_item_3")?,
            touch("dynamic_item_4")?,
            shortening("dynamic_item_5")?,
            compensation("dynamic_item_6")?,
            shortening("dynamic_item_7")?,
            compensation("dynamic_item_8")?,
            shortening("dynamic_item_9")?,
            compensation("dynamic_item_10")?,
        ];
        let coordination = [
            params.token::<Rotation>("coordination_item_1")? as i64,
            params.token::<RotationSymmetry>("coordination_item_2")? as i64,
            params.token::<Rotation>("coordination_item_3")? as i64,
            params.token::<RotationSymmetry>("coordination_item_4")? as i64,
        ];

        // The whole test stops when the starting position cannot be held.
        let (static_score, dynamic_score, coordination_score) = if sits_unsupported {
            (
                2 + holds + crossing,
                chained(&dynamic[0..3])
                    + chained(&dynamic[3..6])
                    + chained(&dynamic[6..8])
                    + chained(&dynamic[8..10]),
                chained(&coordination[0..2]) + chained(&coordination[2..4]),
            )
        } else {
            (0, 0, 0)
        };

        let score = static_score + dynamic_score + coordination_score;
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("TIS {score}/23. {}", band.interpretation))
            .with_detail("static_sitting_balance", static_score)
            .with_detail("dynamic_sitting_balance", dynamic_score)
            .with_detail("coordination", coordination_score))
    }
}
