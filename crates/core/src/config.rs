//! Configuration loading
//!
//! Settings come from `KEY=VALUE` lines in a fixed per-user file
//! (`<config dir>/s3cli/config`), overlaid by identically named process
//! environment variables. Three values are required before any command may
//! run: `ENDPOINT_URL`, `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`.
//! Settings are loaded once at startup and immutable afterwards.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Required: endpoint of the S3-compatible service
pub const KEY_ENDPOINT_URL: &str = "ENDPOINT_URL";
/// Required: access key id
pub const KEY_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
/// Required: secret access key
pub const KEY_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
/// Optional: raise the default log filter to debug
pub const KEY_DEBUG: &str = "DEBUG";
/// Optional: credential profile label, informational only
pub const KEY_PROFILE: &str = "PROFILE";
/// Optional: dash-normalize injected header names (default true)
pub const KEY_REPLACE_UNDERSCORES: &str = "REPLACE_UNDERSCORES_WITH_DASHES";

/// Environment variable that overrides the config file path
pub const CONFIG_PATH_ENV: &str = "S3CLI_CONFIG";

/// Immutable process-wide settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Endpoint URL of the storage service
    pub endpoint_url: String,

    /// Access key id for request signing
    pub access_key_id: String,

    /// Secret access key for request signing
    pub secret_access_key: String,

    /// Emit debug logging by default
    pub debug: bool,

    /// Credential profile label
    pub profile: Option<String>,

    /// Replace underscores with dashes in injected header names
    pub replace_underscores_with_dashes: bool,
}

impl Settings {
    /// Load settings from the per-user config file and process environment.
    ///
    /// Environment variables override file values. Fails with a descriptive
    /// error when any required value is absent, before any request is sent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let mut values = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            parse_config(&content)
        } else {
            HashMap::new()
        };

        for key in [
            KEY_ENDPOINT_URL,
            KEY_ACCESS_KEY_ID,
            KEY_SECRET_ACCESS_KEY,
            KEY_DEBUG,
            KEY_PROFILE,
            KEY_REPLACE_UNDERSCORES,
        ] {
            if let Ok(value) = std::env::var(key) {
                values.insert(key.to_string(), value);
            }
        }

        Self::from_values(&values)
    }

    /// Resolve the config file path.
    ///
    /// `S3CLI_CONFIG` overrides the default `<config dir>/s3cli/config`.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".into()))?;
        Ok(config_dir.join("s3cli").join("config"))
    }

    /// Build settings from a resolved key/value map, validating required keys.
    pub fn from_values(values: &HashMap<String, String>) -> Result<Self> {
        let endpoint_url = require(values, KEY_ENDPOINT_URL)?;
        let access_key_id = require(values, KEY_ACCESS_KEY_ID)?;
        let secret_access_key = require(values, KEY_SECRET_ACCESS_KEY)?;

        url::Url::parse(&endpoint_url)?;

        Ok(Self {
            endpoint_url,
            access_key_id,
            secret_access_key,
            debug: values.get(KEY_DEBUG).map(|v| parse_bool(v)).unwrap_or(false),
            profile: values.get(KEY_PROFILE).cloned(),
            replace_underscores_with_dashes: values
                .get(KEY_REPLACE_UNDERSCORES)
                .map(|v| parse_bool(v))
                .unwrap_or(true),
        })
    }
}

fn require(values: &HashMap<String, String>, key: &str) -> Result<String> {
    values
        .get(key)
        .filter(|v| !v.is_empty())
        .cloned()
        .ok_or_else(|| {
            Error::Config(format!(
                "{key} is not set; add it to the config file or environment"
            ))
        })
}

/// Coerce a config value to a boolean. Anything else is false.
fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Parse `KEY=VALUE` lines. Blank lines and `#` comments are skipped,
/// whitespace around keys and values is trimmed, unknown keys are kept
/// (and ignored downstream). Later lines win over earlier ones.
fn parse_config(content: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            values.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_values() -> HashMap<String, String> {
        let mut values = HashMap::new();
        values.insert(KEY_ENDPOINT_URL.into(), "http://localhost:9000".into());
        values.insert(KEY_ACCESS_KEY_ID.into(), "minioadmin".into());
        values.insert(KEY_SECRET_ACCESS_KEY.into(), "minioadmin".into());
        values
    }

    #[test]
    fn test_from_values_complete() {
        let settings = Settings::from_values(&full_values()).unwrap();
        assert_eq!(settings.endpoint_url, "http://localhost:9000");
        assert_eq!(settings.access_key_id, "minioadmin");
        assert!(!settings.debug);
        assert!(settings.profile.is_none());
        // Dash transform is on by default
        assert!(settings.replace_underscores_with_dashes);
    }

    #[test]
    fn test_each_required_key_missing_fails() {
        for key in [KEY_ENDPOINT_URL, KEY_ACCESS_KEY_ID, KEY_SECRET_ACCESS_KEY] {
            let mut values = full_values();
            values.remove(key);
            let err = Settings::from_values(&values).unwrap_err();
            assert_eq!(err.exit_code(), 2);
            assert!(err.to_string().contains(key), "missing {key} not reported");
        }
    }

    #[test]
    fn test_empty_required_value_fails() {
        let mut values = full_values();
        values.insert(KEY_ENDPOINT_URL.into(), "".into());
        assert!(Settings::from_values(&values).is_err());
    }

    #[test]
    fn test_invalid_endpoint_url_fails() {
        let mut values = full_values();
        values.insert(KEY_ENDPOINT_URL.into(), "not a url".into());
        assert!(Settings::from_values(&values).is_err());
    }

    #[test]
    fn test_optional_flags() {
        let mut values = full_values();
        values.insert(KEY_DEBUG.into(), "true".into());
        values.insert(KEY_PROFILE.into(), "staging".into());
        values.insert(KEY_REPLACE_UNDERSCORES.into(), "0".into());

        let settings = Settings::from_values(&values).unwrap();
        assert!(settings.debug);
        assert_eq!(settings.profile.as_deref(), Some("staging"));
        assert!(!settings.replace_underscores_with_dashes);
    }

    #[test]
    fn test_parse_bool_coercion() {
        for truthy in ["1", "true", "TRUE", "Yes", "on"] {
            assert!(parse_bool(truthy), "{truthy} should coerce to true");
        }
        for falsy in ["0", "false", "no", "off", "", "2", "enabled"] {
            assert!(!parse_bool(falsy), "{falsy} should coerce to false");
        }
    }

    #[test]
    fn test_parse_config_lines() {
        let content = "\
# credentials for the local stack
ENDPOINT_URL = http://localhost:9000

AWS_ACCESS_KEY_ID=minioadmin
AWS_SECRET_ACCESS_KEY=minioadmin
DEBUG=1
UNKNOWN_KEY=ignored
";
        let values = parse_config(content);
        assert_eq!(
            values.get(KEY_ENDPOINT_URL).map(String::as_str),
            Some("http://localhost:9000")
        );
        assert_eq!(values.get(KEY_DEBUG).map(String::as_str), Some("1"));
        assert_eq!(values.get("UNKNOWN_KEY").map(String::as_str), Some("ignored"));

        let settings = Settings::from_values(&values).unwrap();
        assert!(settings.debug);
    }

    #[test]
    fn test_parse_config_last_line_wins() {
        let values = parse_config("DEBUG=0\nDEBUG=1\n");
        assert_eq!(values.get(KEY_DEBUG).map(String::as_str), Some("1"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        std::fs::write(
            &path,
            "ENDPOINT_URL=http://localhost:9000\n\
             AWS_ACCESS_KEY_ID=ak\n\
             AWS_SECRET_ACCESS_KEY=sk\n",
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let settings = Settings::from_values(&parse_config(&content)).unwrap();
        assert_eq!(settings.access_key_id, "ak");
        assert_eq!(settings.secret_access_key, "sk");
    }
}
