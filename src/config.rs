//! Runtime settings read from `HELIXLAB_*` environment variables.

use log::LevelFilter;

use crate::app::DEFAULT_LAB_DNA;

pub const LOG_LEVEL_VAR: &str = "HELIXLAB_LOG_LEVEL";
pub const LAB_DNA_VAR: &str = "HELIXLAB_DNA";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub log_level: LevelFilter,
    pub lab_dna: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_level: LevelFilter::Info,
            lab_dna: DEFAULT_LAB_DNA.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup, so tests need not touch the process environment
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(level) => parse_level(&level).unwrap_or_else(|| {
                eprintln!("Invalid log level '{level}', defaulting to 'info'");
                defaults.log_level
            }),
            None => defaults.log_level,
        };

        let lab_dna = lookup(LAB_DNA_VAR).unwrap_or(defaults.lab_dna);

        Settings { log_level, lab_dna }
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        "off" => Some(LevelFilter::Off),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_with(vars: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_with(&[]);
        assert_eq!(settings.log_level, LevelFilter::Info);
        assert_eq!(settings.lab_dna, "TACGCG");
    }

    #[test]
    fn test_overrides() {
        let settings = settings_with(&[("HELIXLAB_LOG_LEVEL", "DEBUG"), ("HELIXLAB_DNA", "GATTACA")]);
        assert_eq!(settings.log_level, LevelFilter::Debug);
        assert_eq!(settings.lab_dna, "GATTACA");
    }

    #[test]
    fn test_invalid_level_falls_back() {
        let settings = settings_with(&[("HELIXLAB_LOG_LEVEL", "loud")]);
        assert_eq!(settings.log_level, LevelFilter::Info);
    }
}
