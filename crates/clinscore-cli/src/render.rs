use std::io::Write;

use clinscore_calculators::{Calculator, CalculatorSummary};
use clinscore_core::{Assessment, Band};
use serde_json::{Value, json};

use crate::cli::OutputFormat;

pub fn calculator_list(
    out: &mut impl Write,
    calculators: &[&dyn Calculator],
    format: OutputFormat,
) -> eyre::Result<()> {
    match format {
        OutputFormat::Json => {
            let summaries: Vec<CalculatorSummary> =
                calculators.iter().map(|c| c.summary()).collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&summaries)?)?;
        }
        OutputFormat::Text => {
            let width = calculators.iter().map(|c| c.id().len()).max().unwrap_or(0);
            for c in calculators {
                writeln!(out, "{:<width$}  {:<16}  {}", c.id(), c.specialty().as_str(), c.name())?;
            }
        }
    }
    Ok(())
}

fn bound(value: f64) -> Value {
    if value.is_finite() { json!(value) } else { Value::Null }
}

fn band_json(band: &Band) -> Value {
    json!({
        "min": bound(band.min),
        "max": bound(band.max),
        "stage": band.stage,
        "description": band.description,
    })
}

fn band_range(band: &Band) -> String {
    match (band.min.is_finite(), band.max.is_finite()) {
        (true, true) => format!("[{}, {})", band.min, band.max),
        (false, true) => format!("< {}", band.max),
        (true, false) => format!(">= {}", band.min),
        (false, false) => "any".to_string(),
    }
}

pub fn calculator_detail(
    out: &mut impl Write,
    calculator: &dyn Calculator,
    format: OutputFormat,
) -> eyre::Result<()> {
    match format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(calculator.summary())?;
            if let Some(obj) = value.as_object_mut() {
                let bands: Vec<Value> = calculator.bands().iter().map(band_json).collect();
                obj.insert("bands".to_string(), Value::Array(bands));
            }
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{} ({})", calculator.name(), calculator.id())?;
            writeln!(out, "Specialty: {}", calculator.specialty())?;
            writeln!(out, "Parameters:")?;
            for p in calculator.parameters() {
                writeln!(out, "  {p}")?;
            }
            let bands = calculator.bands();
            if !bands.is_empty() {
                writeln!(out, "Bands:")?;
                for band in bands {
                    writeln!(out, "  {:<14}  {}", band_range(band), band.stage)?;
                }
            }
        }
    }
    Ok(())
}

pub fn assessment(
    out: &mut impl Write,
    calculator: &dyn Calculator,
    assessment: &Assessment,
    format: OutputFormat,
) -> eyre::Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(assessment)?)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{}", calculator.name())?;
            if assessment.unit.is_empty() {
                writeln!(out, "Result: {}", assessment.result)?;
            } else {
                writeln!(out, "Result: {} {}", assessment.result, assessment.unit)?;
            }
            writeln!(out, "Stage:  {}", assessment.stage)?;
            if !assessment.stage_description.is_empty() {
                writeln!(out, "        {}", assessment.stage_description)?;
            }
            writeln!(out)?;
            writeln!(out, "{}", assessment.interpretation)?;
            if !assessment.details.is_empty() {
                writeln!(out)?;
                writeln!(out, "Details:")?;
                for (key, value) in &assessment.details {
                    writeln!(out, "  {key}: {value}")?;
                }
            }
        }
    }
    Ok(())
}
