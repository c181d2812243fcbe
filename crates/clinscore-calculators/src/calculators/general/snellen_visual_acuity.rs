use clinscore_core::numeric::round_to;
use clinscore_core::{Assessment, Band, Params, Result, Specialty, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Snellen visual acuity, classified by its decimal equivalent.
pub struct SnellenVisualAcuity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Eye {
    RightEye,
    LeftEye,
    BothEyes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LowestLine {
    #[serde(rename = "line_1_20_200")]
    Line1,
    #[serde(rename = "line_2_20_160")]
    Line2,
    #[serde(rename = "line_3_20_125")]
    Line3,
    #[serde(rename = "line_4_20_100")]
    Line4,
    #[serde(rename = "line_5_20_80")]
    Line5,
    #[serde(rename = "line_6_20_63")]
    Line6,
    #[serde(rename = "line_7_20_50")]
    Line7,
    #[serde(rename = "line_8_20_40")]
    Line8,
    #[serde(rename = "line_9_20_32")]
    Line9,
    #[serde(rename = "line_10_20_25")]
    Line10,
    #[serde(rename = "line_11_20_20")]
    Line11,
    CountingFingers,
    HandMotion,
    LightPerception,
    NoLightPerception,
}

/// Chart denominators for lines 1-11 at 20 feet.
const DENOMINATORS: [u32; 11] = [200, 160, 125, 100, 80, 63, 50, 40, 32, 25, 20];

impl LowestLine {
    pub fn notation(self) -> String {
        match self {
            LowestLine::CountingFingers => "CF".to_string(),
            LowestLine::HandMotion => "HM".to_string(),
            LowestLine::LightPerception => "LP".to_string(),
            LowestLine::NoLightPerception => "NLP".to_string(),
            line => format!("20/{}", DENOMINATORS[line as usize]),
        }
    }

    /// Decimal acuity. Off-chart levels use the conventional equivalents.
    pub fn decimal(self) -> f64 {
        match self {
            LowestLine::CountingFingers => 0.05,
            LowestLine::HandMotion => 0.025,
            LowestLine::LightPerception => 0.0125,
            LowestLine::NoLightPerception => 0.0,
            line => 20.0 / f64::from(DENOMINATORS[line as usize]),
        }
    }

    fn on_chart(self) -> bool {
        (self as usize) < DENOMINATORS.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestingDistance {
    #[serde(rename = "20_feet")]
    TwentyFeet,
    #[serde(rename = "6_meters")]
    SixMeters,
    #[serde(rename = "4_feet_mobile")]
    FourFeetMobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectiveLenses {
    Yes,
    No,
    Unknown,
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        0.1,
        "Profound Impairment",
        "Profound visual impairment",
        "Vision below 20/200. Immediate ophthalmologic evaluation to determine whether the loss is reversible.",
    ),
    Band::new(
        0.1,
        0.2,
        "Severe Impairment",
        "Severe visual impairment approaching legal blindness",
        "Urgent ophthalmologic evaluation. Consider low-vision rehabilitation; 20/200 in the better eye meets the US definition of legal blindness.",
    ),
    Band::new(
        0.2,
        0.5,
        "Moderate Impairment",
        "Moderate visual impairment",
        "Ophthalmologic evaluation to determine the cause and treatment. This level may restrict driving.",
    ),
    Band::new(
        0.5,
        1.0,
        "Mild Impairment",
        "Mild visual impairment",
        "Ophthalmologic or optometric evaluation for refractive error or early eye disease.",
    ),
    Band::new(
        1.0,
        f64::INFINITY,
        "Normal",
        "Normal visual acuity",
        "Normal visual acuity. Continue routine eye care.",
    ),
];

impl Calculator for SnellenVisualAcuity {
    fn id(&self) -> &'static str {
        "snellen_visual_acuity"
    }

    fn name(&self) -> &'static str {
        "Visual Acuity Testing (Snellen Chart)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::General
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["eye_tested", "lowest_line_read", "testing_distance", "corrective_lenses"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let eye = params.token::<Eye>("eye_tested")?;
        let line = params.token::<LowestLine>("lowest_line_read")?;
        let distance = params.token::<TestingDistance>("testing_distance")?;
        let lenses = params.token::<CorrectiveLenses>("corrective_lenses")?;

        let decimal = line.decimal();
        let band = classify(BANDS, decimal);
        let mobile = distance == TestingDistance::FourFeetMobile && line.on_chart();
        let notation = if mobile {
            format!("{} (mobile)", line.notation())
        } else {
            line.notation()
        };

        let eye = match eye {
            Eye::RightEye => "right eye",
            Eye::LeftEye => "left eye",
            Eye::BothEyes => "both eyes",
        };
        let correction = match lenses {
            CorrectiveLenses::Yes => "with correction",
            CorrectiveLenses::No => "without correction",
            CorrectiveLenses::Unknown => "correction status unknown",
        };
        let mut interpretation = format!(
            "Visual acuity {} in the {eye}, {correction}. {}",
            line.notation(),
            band.interpretation
        );
        if mobile {
            interpretation.push_str(
                " Measured on a mobile chart at 4 feet; confirm with a standard chart.",
            );
        }

        let mut assessment = Assessment::from_band(notation, "fraction", band)
            .with_interpretation(interpretation)
            .with_detail("decimal_acuity", round_to(decimal, 3));
        if line.on_chart() {
            assessment = assessment.with_detail("logmar", round_to((1.0 / decimal).log10(), 2));
        }
        Ok(assessment)
    }
}
