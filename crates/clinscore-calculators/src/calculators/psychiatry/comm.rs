use clinscore_core::numeric::round_to;
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};
use serde_json::{Map, Value, json};

use crate::Calculator;

/// Current Opioid Misuse Measure: seventeen items answered 0 (never) to
/// 4 (very often).
pub struct Comm;

const ITEM: ParamRange = ParamRange::integer(0.0, 4.0);

const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "behavioral",
        &[
            "taking_differently",
            "taking_more_than_prescribed",
            "relief_other_sources",
            "need_medications_from_others",
            "borrowing_pain_medication",
        ],
    ),
    (
        "psychological",
        &[
            "thinking_clearly",
            "thinking_hurting_self",
            "time_thinking_medications",
            "being_in_arguments",
            "trouble_controlling_anger",
            "getting_angry_with_people",
        ],
    ),
    ("functional", &["not_completing_tasks"]),
    ("healthcare_seeking", &["emergency_clinic_visits", "visiting_emergency_room"]),
    (
        "substance_concerns",
        &[
            "worried_handling_medications",
            "others_worried_handling",
            "using_for_non_pain_symptoms",
        ],
    ),
];

/// (item, threshold, flag)
const RED_FLAGS: &[(&str, i64, &str)] = &[
    ("thinking_hurting_self", 2, "Significant self-harm ideation"),
    ("taking_more_than_prescribed", 3, "Frequent dose escalation beyond prescription"),
    ("borrowing_pain_medication", 2, "Obtaining medication from others"),
    ("using_for_non_pain_symptoms", 3, "Frequent use for non-pain symptoms"),
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        9.0,
        "Low Risk",
        "Not misusing or abusing medications",
        "Low risk for current opioid misuse. Continue standard monitoring of opioid therapy.",
    ),
    Band::new(
        9.0,
        f64::INFINITY,
        "High Risk",
        "Possible misuse or abuse of medications",
        "Score at or above 9 suggests possible current opioid misuse. Review the treatment agreement, consider urine drug testing and prescription monitoring, and increase visit frequency.",
    ),
];

impl Calculator for Comm {
    fn id(&self) -> &'static str {
        "comm"
    }

    fn name(&self) -> &'static str {
        "Current Opioid Misuse Measure (COMM)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Psychiatry
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "thinking_clearly",
            "not_completing_tasks",
            "relief_other_sources",
            "taking_differently",
            "thinking_hurting_self",
            "time_thinking_medications",
            "being_in_arguments",
            "trouble_controlling_anger",
            "need_medications_from_others",
            "worried_handling_medications",
            "others_worried_handling",
            "emergency_clinic_visits",
            "getting_angry_with_people",
            "taking_more_than_prescribed",
            "borrowing_pain_medication",
            "using_for_non_pain_symptoms",
            "visiting_emergency_room",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        let mut categories = Map::new();
        let mut concerning = 0;
        for (category, items) in CATEGORIES {
            let mut subtotal = 0;
            for field in *items {
                let answer = ITEM.check_int(field, params.integer(field)?)?;
                tally.add(field, answer);
                if answer >= 3 {
                    concerning += 1;
                }
                subtotal += answer;
            }
            let max_possible = items.len() as i64 * 4;
            categories.insert(
                category.to_string(),
                json!({
                    "score": subtotal,
                    "max_possible": max_possible,
                    "percentage": round_to(subtotal as f64 / max_possible as f64 * 100.0, 1),
                }),
            );
        }

        let red_flags: Vec<&str> = RED_FLAGS
            .iter()
            .filter(|(item, threshold, _)| tally.points(item).unwrap_or(0) >= *threshold)
            .map(|(_, _, flag)| *flag)
            .collect();

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        let mut interpretation = format!("COMM {score}/68. {}", band.interpretation);
        if !red_flags.is_empty() {
            interpretation.push_str(&format!(" Red flags: {}.", red_flags.join("; ")));
        }

        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(interpretation)
            .with_detail("category_scores", Value::Object(categories))
            .with_detail("concerning_responses", concerning)
            .with_detail("red_flags", red_flags))
    }
}
