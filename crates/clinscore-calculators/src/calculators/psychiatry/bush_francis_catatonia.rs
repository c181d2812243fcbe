use clinscore_core::{Assessment, InvalidParameter, ParamRange, Params, Result, Specialty, Tally};

use crate::Calculator;

/// Bush-Francis Catatonia Rating Scale.
///
/// The first fourteen items form the screening instrument and must all be
/// rated. The remaining nine only feed the severity total and default to 0.
pub struct BushFrancisCatatonia;

const ITEM: ParamRange = ParamRange::integer(0.0, 3.0);

const SCREENING: &[&str] = &[
    "excitement",
    "immobility_stupor",
    "mutism",
    "staring",
    "posturing_catalepsy",
    "grimacing",
    "echopraxia_echolalia",
    "stereotypy",
    "mannerisms",
    "verbigeration",
    "rigidity",
    "negativism",
    "waxy_flexibility",
    "withdrawal",
];

const ADDITIONAL: &[&str] = &[
    "impulsivity",
    "automatic_obedience",
    "passive_obedience",
    "muscle_resistance",
    "motorically_stuck",
    "grasp_reflex",
    "perseveration",
    "combativeness",
    "autonomic_abnormality",
];

/// Items rated only as absent (0) or present (3).
const ABSENT_OR_PRESENT: &[&str] = &[
    "withdrawal",
    "passive_obedience",
    "muscle_resistance",
    "motorically_stuck",
    "grasp_reflex",
    "perseveration",
];

/// Screening items rated 1 or more needed for a positive screen.
const POSITIVE_SCREEN: usize = 2;

fn rating(field: &'static str, value: i64) -> Result<i64> {
    let value = ITEM.check_int(field, value)?;
    if ABSENT_OR_PRESENT.contains(&field) && value != 0 && value != 3 {
        return Err(InvalidParameter::new(
            field,
            "must be 0 (absent) or 3 (present)",
        ));
    }
    Ok(value)
}

fn severity(total: i64) -> &'static str {
    match total {
        ..=9 => "Mild severity",
        10..=19 => "Moderate severity",
        20..=29 => "Severe catatonia",
        _ => "Very severe catatonia",
    }
}

impl Calculator for BushFrancisCatatonia {
    fn id(&self) -> &'static str {
        "bush_francis_catatonia"
    }

    fn name(&self) -> &'static str {
        "Bush-Francis Catatonia Rating Scale (BFCRS)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Psychiatry
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "excitement",
            "immobility_stupor",
            "mutism",
            "staring",
            "posturing_catalepsy",
            "grimacing",
            "echopraxia_echolalia",
            "stereotypy",
            "mannerisms",
            "verbigeration",
            "rigidity",
            "negativism",
            "waxy_flexibility",
            "withdrawal",
            "impulsivity",
            "automatic_obedience",
            "passive_obedience",
            "muscle_resistance",
            "motorically_stuck",
            "grasp_reflex",
            "perseveration",
            "combativeness",
            "autonomic_abnormality",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut screening = Tally::new();
        for field in SCREENING {
            screening.add(field, rating(field, params.integer(field)?)?);
        }
        let mut additional = Tally::new();
        for field in ADDITIONAL {
            let value = params.optional_integer(field)?.unwrap_or(0);
            additional.add(field, rating(field, value)?);
        }

        let screening_score = screening.total();
        let positive_items = screening.nonzero_count();
        let total = screening_score + additional.total();
        let autonomic = additional.points("autonomic_abnormality").unwrap_or(0) > 0;

        let assessment = if positive_items >= POSITIVE_SCREEN {
            let severity = severity(total);
            let mut interpretation = format!(
                "Positive screen with {positive_items} of 14 screening items present; total severity {total}/69 ({}). Catatonia is likely. Consider a lorazepam challenge and evaluate for underlying medical and psychiatric causes.",
                severity.to_lowercase()
            );
            if autonomic {
                interpretation.push_str(
                    " Autonomic abnormality raises concern for malignant catatonia or neuroleptic malignant syndrome; this is a medical emergency.",
                );
            }
            Assessment::new(
                total,
                "points",
                "Positive Screen",
                format!("Catatonia likely present - {severity}"),
                interpretation,
            )
            .with_detail("severity", severity)
        } else {
            Assessment::new(
                total,
                "points",
                "Negative Screen",
                "Catatonia unlikely",
                format!(
                    "Negative screen: {positive_items} of 14 screening items present (2 or more required). Catatonia is unlikely; continue to monitor if clinical suspicion persists."
                ),
            )
        };

        Ok(assessment
            .with_detail("screening_score", screening_score)
            .with_detail("positive_screening_items", positive_items)
            .with_detail("screening_positive", positive_items >= POSITIVE_SCREEN))
    }
}
