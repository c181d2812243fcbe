use clinscore_core::{Assessment, ParamRange, Params, Result, Specialty, Tally};

use crate::Calculator;

/// Manning criteria for irritable bowel syndrome, read together with
/// alarm features that call for investigation first.
pub struct ManningIbs;

const AGE: ParamRange = ParamRange::integer(10.0, 100.0);
const DIAGNOSTIC_THRESHOLD: i64 = 3;

const CRITERIA: &[&str] = &[
    "pain_onset_frequent_bowel_movements",
    "looser_stools_with_pain_onset",
    "pain_relief_with_defecation",
    "noticeable_abdominal_bloating",
    "incomplete_evacuation_sensation",
    "diarrhea_with_mucus",
];

const ALARM_FEATURES: &[&str] = &["weight_loss", "blood_in_stools", "anemia", "fever"];

impl Calculator for ManningIbs {
    fn id(&self) -> &'static str {
        "manning_ibs"
    }

    fn name(&self) -> &'static str {
        "Manning Criteria for Irritable Bowel Syndrome"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Gastroenterology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "pain_onset_frequent_bowel_movements",
            "looser_stools_with_pain_onset",
            "pain_relief_with_defecation",
            "noticeable_abdominal_bloating",
            "incomplete_evacuation_sensation",
            "diarrhea_with_mucus",
            "patient_age",
            "weight_loss",
            "blood_in_stools",
            "anemia",
            "fever",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        for field in CRITERIA {
            tally.flag(field, params.yes_no(field)?, 1);
        }
        let age = AGE.check_int("patient_age", params.integer("patient_age")?)?;

        let mut red_flags = Vec::new();
        if age > 50 {
            red_flags.push("age_over_50");
        }
        for field in ALARM_FEATURES {
            if params.yes_no(field)? {
                red_flags.push(*field);
            }
        }

        let met = tally.total();
        let assessment = if met < DIAGNOSTIC_THRESHOLD {
            Assessment::new(
                met,
                "criteria",
                "IBS Unlikely",
                "Insufficient criteria for IBS diagnosis",
                format!("{met}/6 Manning criteria met; at least 3 are needed. Consider alternative diagnoses."),
            )
        } else if !red_flags.is_empty() {
            Assessment::new(
                met,
                "criteria",
                "Further Evaluation Required",
                "Sufficient criteria but red flags present",
                format!(
                    "{met}/6 Manning criteria met, but alarm features are present ({}). Investigate for organic disease before diagnosing IBS.",
                    red_flags.join(", ")
                ),
            )
        } else {
            Assessment::new(
                met,
                "criteria",
                "IBS Likely",
                "Sufficient criteria for IBS diagnosis with no red flags",
                format!("{met}/6 Manning criteria met with no alarm features. IBS diagnosis is supported."),
            )
        };
        Ok(assessment
            .with_detail("breakdown", tally.breakdown())
            .with_detail("red_flags", red_flags))
    }
}
