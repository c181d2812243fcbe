use clinscore_core::numeric::fixed;
use clinscore_core::{Assessment, ParamRange, Params, Result, Specialty};
use serde_json::json;

use super::winters_formula::expected_pco2;
use crate::Calculator;

/// Arterial blood gas interpretation: primary disorder, expected
/// compensation and, when PaO₂ is given, oxygenation.
pub struct AbgAnalyzer;

const PH: ParamRange = ParamRange::new(6.8, 7.8);
const PCO2: ParamRange = ParamRange::new(10.0, 100.0);
const HCO3: ParamRange = ParamRange::new(5.0, 50.0);
const PO2: ParamRange = ParamRange::new(30.0, 600.0);
const FIO2: ParamRange = ParamRange::new(0.21, 1.0);

const PH_LOW: f64 = 7.35;
const PH_HIGH: f64 = 7.45;
const PCO2_LOW: f64 = 35.0;
const PCO2_HIGH: f64 = 45.0;
const HCO3_LOW: f64 = 22.0;
const HCO3_HIGH: f64 = 26.0;

fn range_note(label: &str, measured: f64, expected: f64) -> String {
    format!("{label} {}, expected ~{}", fixed(measured, 1), fixed(expected, 1))
}

fn metabolic_acidosis_compensation(pco2: f64, hco3: f64) -> String {
    let expected = expected_pco2(hco3);
    let note = range_note("PCO2", pco2, expected);
    if pco2 < expected - 2.0 {
        format!("Overcompensation or mixed disorder ({note}±2)")
    } else if pco2 > expected + 2.0 {
        format!("Inadequate respiratory compensation ({note}±2)")
    } else {
        format!("Appropriate respiratory compensation ({note}±2)")
    }
}

fn metabolic_alkalosis_compensation(pco2: f64, hco3: f64) -> String {
    let expected = 40.0 + 0.7 * (hco3 - 24.0);
    let note = range_note("PCO2", pco2, expected);
    if pco2 < expected - 5.0 {
        format!("Inadequate respiratory compensation ({note})")
    } else if pco2 > expected + 5.0 {
        format!("Overcompensation or mixed disorder ({note})")
    } else {
        format!("Appropriate respiratory compensation ({note})")
    }
}

fn respiratory_acidosis_compensation(hco3: f64, pco2: f64) -> String {
    let acute = 24.0 + (pco2 - 40.0) / 10.0;
    let chronic = 24.0 + (pco2 - 40.0) / 10.0 * 3.5;
    if hco3 <= acute + 2.0 {
        format!("Acute respiratory acidosis ({})", range_note("HCO3", hco3, acute))
    } else if hco3 >= chronic - 2.0 {
        format!(
            "Chronic respiratory acidosis with compensation ({})",
            range_note("HCO3", hco3, chronic),
        )
    } else {
        format!("Partial metabolic compensation (HCO3 {})", fixed(hco3, 1))
    }
}

fn respiratory_alkalosis_compensation(hco3: f64, pco2: f64) -> String {
    let acute = 24.0 - (40.0 - pco2) / 10.0 * 2.0;
    let chronic = 24.0 - (40.0 - pco2) / 10.0 * 5.0;
    if hco3 >= acute - 2.0 {
        format!("Acute respiratory alkalosis ({})", range_note("HCO3", hco3, acute))
    } else if hco3 <= chronic + 2.0 {
        format!(
            "Chronic respiratory alkalosis with compensation ({})",
            range_note("HCO3", hco3, chronic),
        )
    } else {
        format!("Partial metabolic compensation (HCO3 {})", fixed(hco3, 1))
    }
}

fn normal_ph_pattern(pco2: f64, hco3: f64) -> &'static str {
    match (hco3 < HCO3_LOW, hco3 > HCO3_HIGH, pco2 < PCO2_LOW, pco2 > PCO2_HIGH) {
        (true, _, true, _) => "Fully compensated metabolic acidosis",
        (_, true, _, true) => "Fully compensated metabolic alkalosis",
        (true, _, _, true) => "Fully compensated respiratory acidosis",
        (_, true, true, _) => "Fully compensated respiratory alkalosis",
        _ => "No compensation needed",
    }
}

struct Disorder {
    primary: &'static str,
    category: &'static str,
    description: &'static str,
    compensation: String,
}

impl Disorder {
    fn mixed() -> Self {
        Disorder {
            primary: "Mixed Acid-Base Disorder",
            category: "Mixed Disorder",
            description: "Complex acid-base disturbance",
            compensation: "Mixed disorder present".to_string(),
        }
    }
}

fn classify_disorder(ph: f64, pco2: f64, hco3: f64) -> Disorder {
    if ph < PH_LOW {
        if hco3 < HCO3_LOW {
            Disorder {
                primary: "Metabolic Acidosis",
                category: "Metabolic Acidosis",
                description: "Primary metabolic acidosis",
                compensation: metabolic_acidosis_compensation(pco2, hco3),
            }
        } else if pco2 > PCO2_HIGH {
            Disorder {
                primary: "Respiratory Acidosis",
                category: "Respiratory Acidosis",
                description: "Primary respiratory acidosis",
                compensation: respiratory_acidosis_compensation(hco3, pco2),
            }
        } else {
            Disorder::mixed()
        }
    } else if ph > PH_HIGH {
        if hco3 > HCO3_HIGH {
            Disorder {
                primary: "Metabolic Alkalosis",
                category: "Metabolic Alkalosis",
                description: "Primary metabolic alkalosis",
                compensation: metabolic_alkalosis_compensation(pco2, hco3),
            }
        } else if pco2 < PCO2_LOW {
            Disorder {
                primary: "Respiratory Alkalosis",
                category: "Respiratory Alkalosis",
                description: "Primary respiratory alkalosis",
                compensation: respiratory_alkalosis_compensation(hco3, pco2),
            }
        } else {
            Disorder::mixed()
        }
    } else {
        Disorder {
            primary: "Normal pH",
            category: "Normal pH",
            description: "pH within normal range",
            compensation: normal_ph_pattern(pco2, hco3).to_string(),
        }
    }
}

fn ph_status(ph: f64) -> &'static str {
    if ph < PH_LOW {
        "acidemia"
    } else if ph > PH_HIGH {
        "alkalemia"
    } else {
        "normal"
    }
}

fn oxygenation_severity(po2: f64) -> &'static str {
    if po2 < 60.0 {
        "Severe hypoxemia"
    } else if po2 < 80.0 {
        "Mild to moderate hypoxemia"
    } else {
        "Normal oxygenation"
    }
}

impl Calculator for AbgAnalyzer {
    fn id(&self) -> &'static str {
        "abg_analyzer"
    }

    fn name(&self) -> &'static str {
        "Arterial Blood Gas Analyzer"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Nephrology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["ph", "pco2", "hco3", "po2", "fio2"]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let ph = PH.check("ph", params.number("ph")?)?;
        let pco2 = PCO2.check("pco2", params.number("pco2")?)?;
        let hco3 = HCO3.check("hco3", params.number("hco3")?)?;
        let po2 = params
            .optional_number("po2")?
            .map(|v| PO2.check("po2", v))
            .transpose()?;
        let fio2 = params
            .optional_number("fio2")?
            .map(|v| FIO2.check("fio2", v))
            .transpose()?;

        let disorder = classify_disorder(ph, pco2, hco3);
        let mut parts = vec![
            format!("Primary disorder: {}", disorder.primary),
            format!("pH {} indicates {}", fixed(ph, 2), ph_status(ph)),
            format!("Compensation: {}", disorder.compensation),
            format!(
                "Values: pH {}, PCO2 {} mmHg, HCO3 {} mEq/L",
                fixed(ph, 2),
                fixed(pco2, 1),
                fixed(hco3, 1),
            ),
        ];
        if let Some(po2) = po2 {
            parts.push(format!(
                "Oxygenation: PO2 {} mmHg - {}",
                fixed(po2, 1),
                oxygenation_severity(po2),
            ));
        }
        if disorder.primary == "Metabolic Acidosis" {
            parts.push("Consider calculating anion gap and assessing for underlying causes".into());
        } else if disorder.primary.starts_with("Respiratory") {
            parts.push(
                "Assess respiratory function and underlying pulmonary/neuromuscular causes".into(),
            );
        }

        let mut assessment = Assessment::new(
            disorder.primary,
            "",
            disorder.category,
            disorder.description,
            format!("{}.", parts.join(". ")),
        )
        .with_detail("ph_status", ph_status(ph))
        .with_detail("compensation", disorder.compensation);
        if let Some(po2) = po2 {
            let mut oxygenation = json!({
                "po2": po2,
                "status": if po2 >= 80.0 { "Normal" } else { "Hypoxemia" },
                "severity": oxygenation_severity(po2),
            });
            if let Some(fio2) = fio2 {
                oxygenation["fio2"] = json!(fio2);
            }
            assessment = assessment.with_detail("oxygenation", oxygenation);
        }
        Ok(assessment)
    }
}
