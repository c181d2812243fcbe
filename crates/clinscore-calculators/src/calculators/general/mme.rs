use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{Assessment, Band, InvalidParameter, Params, Result, Specialty, classify};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::Calculator;

/// Morphine Milligram Equivalents: total daily opioid load across a regimen.
pub struct Mme;

const FIELD: &str = "opioid_medications";

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        50.0,
        "Low Risk",
        "Standard monitoring recommended",
        "Low-risk opioid dosing. Counsel on safe storage, disposal and overdose signs, avoid concurrent benzodiazepines or alcohol, and consider non-opioid therapies.",
    ),
    Band::new(
        50.0,
        90.0,
        "Moderate Risk",
        "Increased monitoring recommended",
        "Overdose risk is increased at or above 50 MME/day. Reassess benefit and harm, offer naloxone, check the prescription drug monitoring program and avoid further escalation without justification.",
    ),
    Band::new(
        90.0,
        f64::INFINITY,
        "High Risk",
        "High-risk dosing requiring careful evaluation",
        "Doses at or above 90 MME/day carry substantially higher overdose risk. Justify continued use, co-prescribe naloxone, consider tapering and involve pain management specialists.",
    ),
];

/// Oral morphine conversion factors per mg (per mcg/h for patches).
static FACTORS: &[(&str, f64)] = &[
    ("morphine_oral", 1.0),
    ("morphine_iv", 3.0),
    ("oxycodone", 1.5),
    ("hydrocodone", 1.0),
    ("codeine", 0.15),
    ("fentanyl_patch", 2.4),
    ("fentanyl_oral", 0.13),
    ("hydromorphone_oral", 4.0),
    ("hydromorphone_iv", 20.0),
    ("oxymorphone_oral", 3.0),
    ("oxymorphone_iv", 10.0),
    ("tramadol", 0.1),
    ("tapentadol", 0.4),
    ("buprenorphine_patch", 12.6),
    ("buprenorphine_sublingual", 30.0),
    ("meperidine", 0.1),
    ("pentazocine", 0.37),
];

/// Brand and shorthand names.
static ALIASES: &[(&str, &str)] = &[
    ("morphine", "morphine_oral"),
    ("ms_contin", "morphine_oral"),
    ("oxycontin", "oxycodone"),
    ("percocet", "oxycodone"),
    ("vicodin", "hydrocodone"),
    ("norco", "hydrocodone"),
    ("tylenol_3", "codeine"),
    ("duragesic", "fentanyl_patch"),
    ("dilaudid", "hydromorphone_oral"),
    ("opana", "oxymorphone_oral"),
    ("ultram", "tramadol"),
    ("nucynta", "tapentadol"),
    ("suboxone", "buprenorphine_sublingual"),
    ("butrans", "buprenorphine_patch"),
    ("demerol", "meperidine"),
    ("talwin", "pentazocine"),
];

/// Methadone's factor climbs with the daily dose.
static METHADONE_TIERS: &[(f64, f64)] = &[(20.0, 4.0), (40.0, 8.0), (60.0, 10.0)];
const METHADONE_TOP: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Medication {
    pub medication: String,
    pub dose: f64,
    pub frequency_per_day: f64,
    #[serde(default)]
    pub route: Option<String>,
}

fn factor(name: &str) -> Option<f64> {
    FACTORS.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

/// Lowercase, `_`-separated canonical name with brand aliases resolved.
pub fn normalize(name: &str) -> String {
    let normalized = name.trim().to_lowercase().replace([' ', '-'], "_");
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map_or(normalized, |(_, canonical)| canonical.to_string())
}

fn is_intravenous(route: Option<&str>) -> bool {
    route.is_some_and(|r| matches!(r.to_lowercase().as_str(), "iv" | "intravenous"))
}

/// Daily MME for one entry. Patches are dosed in mcg/h and ignore frequency.
pub fn single_mme(field: &str, med: &Medication) -> Result<f64> {
    let name = normalize(&med.medication);
    let daily_dose = med.dose * med.frequency_per_day;

    if name.starts_with("methadone") {
        let f = METHADONE_TIERS
            .iter()
            .find(|(limit, _)| daily_dose <= *limit)
            .map_or(METHADONE_TOP, |(_, f)| *f);
        return Ok(daily_dose * f);
    }
    let unknown =
        || InvalidParameter::new(field, format!("unknown medication '{}'", med.medication));
    if name.ends_with("_patch") {
        let f = factor(&name).ok_or_else(unknown)?;
        return Ok(med.dose * f);
    }

    let base = factor(&name).ok_or_else(unknown)?;
    let f = if is_intravenous(med.route.as_deref()) {
        let stem = name.split('_').next().unwrap_or(&name);
        factor(&format!("{stem}_iv")).unwrap_or(base)
    } else {
        base
    };
    Ok(daily_dose * f)
}

/// Accepts either a JSON array or a string holding one.
fn medications(params: &Params) -> Result<Vec<Medication>> {
    let raw = params
        .get(FIELD)
        .ok_or_else(|| InvalidParameter::missing(FIELD))?;
    let value = match raw {
        Value::String(s) => serde_json::from_str::<Value>(s)
            .map_err(|_| InvalidParameter::new(FIELD, "invalid JSON"))?,
        other => other.clone(),
    };
    if !value.is_array() {
        return Err(InvalidParameter::new(FIELD, "must be a JSON array"));
    }
    let meds: Vec<Medication> =
        serde_json::from_value(value).map_err(|e| InvalidParameter::new(FIELD, e.to_string()))?;
    if meds.is_empty() {
        return Err(InvalidParameter::new(FIELD, "at least one medication is required"));
    }
    for (i, med) in meds.iter().enumerate() {
        if !(med.dose > 0.0) {
            return Err(InvalidParameter::new(
                FIELD,
                format!("medication {} dose must be positive", i + 1),
            ));
        }
        if !(med.frequency_per_day > 0.0) {
            return Err(InvalidParameter::new(
                FIELD,
                format!("medication {} frequency_per_day must be positive", i + 1),
            ));
        }
    }
    Ok(meds)
}

impl Calculator for Mme {
    fn id(&self) -> &'static str {
        "mme"
    }

    fn name(&self) -> &'static str {
        "Morphine Milligram Equivalents (MME)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::General
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[FIELD]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let meds = medications(params)?;

        let mut total = 0.0;
        let mut contributions = Vec::with_capacity(meds.len());
        for med in &meds {
            let mme = single_mme(FIELD, med)?;
            total += mme;
            contributions.push(json!({
                "medication": normalize(&med.medication),
                "daily_dose": med.dose * med.frequency_per_day,
                "mme_contribution": round_to(mme, 1),
            }));
        }

        let band = classify(BANDS, total);
        let summary = contributions
            .iter()
            .map(|c| {
                format!(
                    "{} (MME {})",
                    c["medication"].as_str().unwrap_or_default(),
                    c["mme_contribution"]
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        Ok(Assessment::from_band(round_to(total, 1), "mg/day morphine equivalents", band)
            .with_interpretation(format!(
                "Total MME: {} mg/day. Medications: {summary}. {}",
                fixed(total, 1),
                band.interpretation
            ))
            .with_detail("medications", contributions))
    }
}
