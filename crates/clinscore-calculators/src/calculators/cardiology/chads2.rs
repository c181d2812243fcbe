use clinscore_core::{Assessment, Params, Result, Specialty, Tally};

use crate::Calculator;

/// CHADS₂ stroke risk in non-valvular atrial fibrillation.
pub struct Chads2;

/// (category, adjusted annual stroke rate %, 95% CI) per score.
const RISK: [(&str, f64, &str); 7] = [
    ("Low", 1.9, "1.2-3.0"),
    ("Low-Intermediate", 2.8, "2.0-3.8"),
    ("Intermediate", 4.0, "3.1-5.1"),
    ("High", 5.9, "4.6-7.3"),
    ("High", 8.5, "6.3-11.1"),
    ("Very High", 12.5, "8.2-17.5"),
    ("Very High", 18.2, "10.5-27.4"),
];

fn recommendation(score: i64) -> &'static str {
    match score {
        0 => "Anticoagulation generally not required; consider aspirin or no therapy.",
        1 => "Consider oral anticoagulation or aspirin based on bleeding risk and preference.",
        _ => "Oral anticoagulation is recommended unless contraindicated.",
    }
}

impl Calculator for Chads2 {
    fn id(&self) -> &'static str {
        "chads2"
    }

    fn name(&self) -> &'static str {
        "CHADS₂ Score"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Cardiology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "congestive_heart_failure",
            "hypertension",
            "age_75_or_older",
            "diabetes_mellitus",
            "stroke_tia_thromboembolism",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        tally
            .flag(
                "congestive_heart_failure",
                params.yes_no("congestive_heart_failure")?,
                1,
            )
            .flag("hypertension", params.yes_no("hypertension")?, 1)
            .flag("age_75_or_older", params.yes_no("age_75_or_older")?, 1)
            .flag("diabetes_mellitus", params.yes_no("diabetes_mellitus")?, 1)
            .flag(
                "stroke_tia_thromboembolism",
                params.yes_no("stroke_tia_thromboembolism")?,
                2,
            );

        let score = tally.total();
        let (category, rate, ci) = RISK[score.clamp(0, 6) as usize];
        let interpretation = format!(
            "CHADS₂ score of {score} corresponds to an adjusted annual stroke rate of {rate}% (95% CI {ci}). {}",
            recommendation(score)
        );

        Ok(Assessment::new(
            score,
            "points",
            format!("{category} Risk"),
            format!("{category} annual stroke risk"),
            interpretation,
        )
        .with_detail("annual_stroke_rate", rate)
        .with_detail("confidence_interval", ci)
        .with_detail("breakdown", tally.breakdown()))
    }
}
