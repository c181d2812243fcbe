use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinscoreConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Default format for `list`, `show` and `calc`. Added in v1.
    pub output_format: OutputFormat,
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    pub created_at: jiff::Timestamp,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for ClinscoreConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            output_format: OutputFormat::Text,
            log_filter: default_log_filter(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("clinscore").join("config.json"))
}

/// Load the config at `path`, or defaults when no file exists yet.
pub fn load_or_default(path: &Path) -> eyre::Result<ClinscoreConfig> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(ClinscoreConfig::default())
    }
}

pub fn load_config(path: &Path) -> eyre::Result<ClinscoreConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ClinscoreConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update clinscore."
        ));
    }

    // v0 → v1: add output_format
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("output_format")
            .or_insert(serde_json::Value::String("text".to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added output_format)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &ClinscoreConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn migrates_pre_versioned_config() {
        let v0 = json!({"log_filter": "debug", "created_at": "2024-01-01T00:00:00Z"});
        let migrated = migrate(v0, 0).unwrap();
        assert_eq!(migrated["output_format"], json!("text"));
        assert_eq!(migrated["config_version"], json!(1));

        let config: ClinscoreConfig = serde_json::from_value(migrated).unwrap();
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn migration_keeps_existing_output_format() {
        let v0 = json!({"output_format": "json", "created_at": "2024-01-01T00:00:00Z"});
        let migrated = migrate(v0, 0).unwrap();
        assert_eq!(migrated["output_format"], json!("json"));
    }

    #[test]
    fn rejects_newer_config_version() {
        let err = migrate(json!({}), CURRENT_VERSION + 1).unwrap_err();
        assert!(err.to_string().contains("newer than this build supports"));
    }

    #[test]
    fn missing_log_filter_defaults_to_warn() {
        let config: ClinscoreConfig = serde_json::from_value(json!({
            "config_version": 1,
            "output_format": "json",
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.output_format, OutputFormat::Json);
    }
}
