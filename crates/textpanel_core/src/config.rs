//! Configuration loading from environment variables.

use crate::error::PanelError;
use crate::models::VariableDescriptor;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::editor::DEFAULT_FORMAT_DELAY;

/// Environment variable holding the options file path.
pub const OPTIONS_PATH_VAR: &str = "TEXTPANEL_OPTIONS_PATH";
/// Environment variable holding the format-on-mount delay in milliseconds.
pub const FORMAT_DELAY_VAR: &str = "TEXTPANEL_FORMAT_DELAY_MS";
/// Environment variable toggling options persistence.
pub const PERSIST_VAR: &str = "TEXTPANEL_PERSIST";
/// Environment variable listing host variables as `name[=label]` pairs.
pub const VARIABLES_VAR: &str = "TEXTPANEL_VARIABLES";

/// Runtime configuration for the panel editor host.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub options_path: PathBuf,
    pub format_delay: Duration,
    pub persist_options: bool,
    pub variables: Vec<VariableDescriptor>,
}

fn resolve_home_dir() -> Option<PathBuf> {
    for key in ["HOME", "USERPROFILE"] {
        if let Ok(home) = env::var(key) {
            if !home.trim().is_empty() {
                return Some(PathBuf::from(home));
            }
        }
    }
    env::current_dir().ok()
}

/// Expand a leading `~/` to the user's home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = resolve_home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn default_options_path() -> PathBuf {
    resolve_home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cache")
        .join("textpanel")
        .join("options.json")
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a comma separated `name[=label]` list into variable descriptors.
///
/// Blank entries are skipped; a missing label reuses the name.
pub fn parse_variables(value: &str) -> Vec<VariableDescriptor> {
    value
        .split(',')
        .filter_map(|entry| {
            let (name, label) = match entry.split_once('=') {
                Some((name, label)) => (name.trim(), label.trim()),
                None => (entry.trim(), ""),
            };
            if name.is_empty() {
                return None;
            }
            let label = if label.is_empty() { name } else { label };
            Some(VariableDescriptor::new(name, label))
        })
        .collect()
}

/// Variables offered when the host does not configure any.
pub fn default_variables() -> Vec<VariableDescriptor> {
    vec![
        VariableDescriptor::new("host", "Host").with_description("Selected host"),
        VariableDescriptor::new("env", "Environment"),
        VariableDescriptor::new("__interval", "Interval")
            .with_description("Query interval chosen by the host"),
    ]
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns [`PanelError::InvalidConfig`] for unparsable values.
    pub fn from_env() -> Result<Self, PanelError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// # Arguments
    /// - `lookup`: Returns the raw value for a variable name, if set.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults for unset keys.
    ///
    /// # Errors
    /// Returns [`PanelError::InvalidConfig`] when a set value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PanelError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let options_path = lookup(OPTIONS_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(|value| expand_tilde(value.trim()))
            .unwrap_or_else(default_options_path);

        let format_delay = match lookup(FORMAT_DELAY_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| {
                    PanelError::InvalidConfig(format!("{FORMAT_DELAY_VAR}={raw} is not a number"))
                })?,
            None => DEFAULT_FORMAT_DELAY,
        };

        let persist_options = match lookup(PERSIST_VAR) {
            Some(raw) => parse_env_flag(&raw).ok_or_else(|| {
                PanelError::InvalidConfig(format!("{PERSIST_VAR}={raw} is not a flag"))
            })?,
            None => true,
        };

        let variables = lookup(VARIABLES_VAR)
            .map(|raw| parse_variables(&raw))
            .unwrap_or_else(default_variables);

        Ok(Self {
            options_path,
            format_delay,
            persist_options,
            variables,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn parse_env_flag_accepts_truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert_eq!(parse_env_flag(value), Some(true), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_accepts_falsy_values() {
        for value in ["", "0", "false", "FALSE", " no ", "off"] {
            assert_eq!(parse_env_flag(value), Some(false), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_rejects_unknown_values() {
        assert_eq!(parse_env_flag("maybe"), None);
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).expect("config");
        assert_eq!(config.format_delay, DEFAULT_FORMAT_DELAY);
        assert!(config.persist_options);
        assert!(config.options_path.ends_with("textpanel/options.json"));
        assert_eq!(config.variables, default_variables());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            (OPTIONS_PATH_VAR, "/tmp/panel.json"),
            (FORMAT_DELAY_VAR, "250"),
            (PERSIST_VAR, "off"),
            (VARIABLES_VAR, "region=Region, , cluster"),
        ]))
        .expect("config");

        assert_eq!(config.options_path, PathBuf::from("/tmp/panel.json"));
        assert_eq!(config.format_delay, Duration::from_millis(250));
        assert!(!config.persist_options);
        assert_eq!(
            config.variables,
            vec![
                VariableDescriptor::new("region", "Region"),
                VariableDescriptor::new("cluster", "cluster"),
            ]
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = Config::from_lookup(lookup_from(&[(FORMAT_DELAY_VAR, "soon")]))
            .expect_err("bad delay");
        assert!(matches!(err, PanelError::InvalidConfig(_)));

        let err = Config::from_lookup(lookup_from(&[(PERSIST_VAR, "perhaps")]))
            .expect_err("bad flag");
        assert!(matches!(err, PanelError::InvalidConfig(_)));
    }
}
