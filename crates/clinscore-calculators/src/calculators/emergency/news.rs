//! National Early Warning Score (RCP 2012) and the vital-sign bands it
//! shares with NEWS2.

use clinscore_core::{Assessment, Params, Result, Specialty, Tally};
use serde::{Deserialize, Serialize};

use crate::Calculator;

pub struct News;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RespiratoryRate {
    #[serde(rename = "8_or_less")]
    EightOrLess,
    #[serde(rename = "9_to_11")]
    NineToEleven,
    #[serde(rename = "12_to_20")]
    TwelveToTwenty,
    #[serde(rename = "21_to_24")]
    TwentyOneToTwentyFour,
    #[serde(rename = "25_or_more")]
    TwentyFiveOrMore,
}

impl RespiratoryRate {
    pub fn points(self) -> i64 {
        match self {
            Self::EightOrLess => 3,
            Self::NineToEleven => 1,
            Self::TwelveToTwenty => 0,
            Self::TwentyOneToTwentyFour => 2,
            Self::TwentyFiveOrMore => 3,
        }
    }
}

/// SpO₂ scale 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OxygenSaturation {
    #[serde(rename = "91_or_less")]
    NinetyOneOrLess,
    #[serde(rename = "92_to_93")]
    NinetyTwoToNinetyThree,
    #[serde(rename = "94_to_95")]
    NinetyFourToNinetyFive,
    #[serde(rename = "96_or_more")]
    NinetySixOrMore,
}

impl OxygenSaturation {
    pub fn points(self) -> i64 {
        match self {
            Self::NinetyOneOrLess => 3,
            Self::NinetyTwoToNinetyThree => 2,
            Self::NinetyFourToNinetyFive => 1,
            Self::NinetySixOrMore => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Temperature {
    #[serde(rename = "35_or_less")]
    ThirtyFiveOrLess,
    #[serde(rename = "35_1_to_36")]
    ThirtyFiveToThirtySix,
    #[serde(rename = "36_1_to_38")]
    ThirtySixToThirtyEight,
    #[serde(rename = "38_1_to_39")]
    ThirtyEightToThirtyNine,
    #[serde(rename = "39_1_or_more")]
    AboveThirtyNine,
}

impl Temperature {
    pub fn points(self) -> i64 {
        match self {
            Self::ThirtyFiveOrLess => 3,
            Self::ThirtyFiveToThirtySix => 1,
            Self::ThirtySixToThirtyEight => 0,
            Self::ThirtyEightToThirtyNine => 1,
            Self::AboveThirtyNine => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystolicBp {
    #[serde(rename = "90_or_less")]
    NinetyOrLess,
    #[serde(rename = "91_to_100")]
    NinetyOneToHundred,
    #[serde(rename = "101_to_110")]
    HundredOneToHundredTen,
    #[serde(rename = "111_to_219")]
    HundredElevenToTwoNineteen,
    #[serde(rename = "220_or_more")]
    TwoTwentyOrMore,
}

impl SystolicBp {
    pub fn points(self) -> i64 {
        match self {
            Self::NinetyOrLess => 3,
            Self::NinetyOneToHundred => 2,
            Self::HundredOneToHundredTen => 1,
            Self::HundredElevenToTwoNineteen => 0,
            Self::TwoTwentyOrMore => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeartRate {
    #[serde(rename = "40_or_less")]
    FortyOrLess,
    #[serde(rename = "41_to_50")]
    FortyOneToFifty,
    #[serde(rename = "51_to_90")]
    FiftyOneToNinety,
    #[serde(rename = "91_to_110")]
    NinetyOneToHundredTen,
    #[serde(rename = "111_to_130")]
    HundredElevenToHundredThirty,
    #[serde(rename = "131_or_more")]
    HundredThirtyOneOrMore,
}

impl HeartRate {
    pub fn points(self) -> i64 {
        match self {
            Self::FortyOrLess => 3,
            Self::FortyOneToFifty => 1,
            Self::FiftyOneToNinety => 0,
            Self::NinetyOneToHundredTen => 1,
            Self::HundredElevenToHundredThirty => 2,
            Self::HundredThirtyOneOrMore => 3,
        }
    }
}

/// AVPU. Anything other than alert scores 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Avpu {
    Alert,
    Voice,
    Pain,
    Unresponsive,
}

impl Avpu {
    pub fn points(self) -> i64 {
        if self == Avpu::Alert { 0 } else { 3 }
    }
}

/// Aggregate response shared by NEWS and NEWS2. A single parameter scoring
/// 3 escalates an otherwise low aggregate.
pub(crate) fn grade(total: i64, red: bool) -> (&'static str, &'static str, &'static str) {
    if red && total < 5 {
        return (
            "Low-Medium Risk",
            "RED score - Individual parameter scoring 3",
            "Urgent review by ward-based doctor required. Minimum monitoring frequency every hour.",
        );
    }
    match total {
        0 => (
            "Low Risk",
            "Very low early warning score",
            "Continue routine monitoring. Minimum monitoring frequency every 12 hours.",
        ),
        1..=4 => (
            "Low Risk",
            "Low early warning score",
            "Assessment by competent registered nurse. Minimum monitoring frequency every 4-6 hours.",
        ),
        5..=6 => (
            "Medium Risk",
            "Medium early warning score",
            "Urgent review by ward-based doctor or acute team nurse to decide if critical care team assessment is needed. Minimum monitoring frequency every hour.",
        ),
        _ => (
            "High Risk",
            "High early warning score",
            "Emergent assessment by clinical team or critical care team. Continuous monitoring of vital signs.",
        ),
    }
}

impl Calculator for News {
    fn id(&self) -> &'static str {
        "news"
    }

    fn name(&self) -> &'static str {
        "National Early Warning Score (NEWS)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Emergency
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "respiratory_rate",
            "oxygen_saturation",
            "supplemental_oxygen",
            "temperature",
            "systolic_bp",
            "heart_rate",
            "consciousness",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        tally
            .add(
                "respiratory_rate",
                params.token::<RespiratoryRate>("respiratory_rate")?.points(),
            )
            .add(
                "oxygen_saturation",
                params.token::<OxygenSaturation>("oxygen_saturation")?.points(),
            )
            .flag(
                "supplemental_oxygen",
                params.yes_no("supplemental_oxygen")?,
                2,
            )
            .add(
                "temperature",
                params.token::<Temperature>("temperature")?.points(),
            )
            .add(
                "systolic_bp",
                params.token::<SystolicBp>("systolic_bp")?.points(),
            )
            .add(
                "heart_rate",
                params.token::<HeartRate>("heart_rate")?.points(),
            )
            .add(
                "consciousness",
                params.token::<Avpu>("consciousness")?.points(),
            );

        let total = tally.total();
        // Supplemental oxygen tops out at 2, so any 3 is a physiological parameter.
        let red = tally.max_item() == Some(3);
        let (stage, description, interpretation) = grade(total, red);

        Ok(
            Assessment::new(total, "points", stage, description, interpretation)
                .with_detail("red_score", red)
                .with_detail("breakdown", tally.breakdown()),
        )
    }
}
