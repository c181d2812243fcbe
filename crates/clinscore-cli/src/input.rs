use std::path::Path;

use clinscore_core::Params;
use eyre::WrapErr;
use serde_json::Value;

/// Parse one `field=value` argument. The value is read as JSON when it parses
/// (numbers, arrays, quoted strings), otherwise it is taken as a bare token.
pub fn parse_assignment(arg: &str) -> eyre::Result<(String, Value)> {
    let (field, raw) = arg
        .split_once('=')
        .ok_or_else(|| eyre::eyre!("expected FIELD=VALUE, got '{arg}'"))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(eyre::eyre!("missing field name in '{arg}'"));
    }
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(eyre::eyre!("missing value for '{field}'"));
    }
    let value: Value =
        serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((field.to_string(), value))
}

pub fn read_params_file(path: &Path) -> eyre::Result<Params> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read parameters from {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("{} is not valid JSON", path.display()))?;
    Ok(Params::try_from(value)?)
}

/// Parameters from the optional file, overridden by command-line assignments.
pub fn collect_params(file: Option<&Path>, assignments: &[String]) -> eyre::Result<Params> {
    let mut params = match file {
        Some(path) => read_params_file(path)?,
        None => Params::new(),
    };
    for arg in assignments {
        let (field, value) = parse_assignment(arg)?;
        params.insert(&field, value);
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_and_tokens() {
        assert_eq!(
            parse_assignment("systolic_bp=120").unwrap(),
            ("systolic_bp".to_string(), json!(120))
        );
        assert_eq!(parse_assignment("temperature=36.5").unwrap().1, json!(36.5));
        assert_eq!(parse_assignment("sex=female").unwrap().1, json!("female"));
    }

    #[test]
    fn json_arrays_pass_through() {
        let (_, value) =
            parse_assignment(r#"opioid_medications=[{"medication":"tramadol","dose":50,"frequency_per_day":2}]"#)
                .unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn token_that_looks_numeric_stays_a_string_when_quoted() {
        assert_eq!(
            parse_assignment(r#"temperature="99_100""#).unwrap().1,
            json!("99_100")
        );
        assert_eq!(
            parse_assignment("temperature=99_100").unwrap().1,
            json!("99_100")
        );
    }

    #[test]
    fn malformed_assignments() {
        assert!(parse_assignment("systolic_bp").is_err());
        assert!(parse_assignment("=120").is_err());
        assert!(parse_assignment("systolic_bp=").is_err());
    }
}
