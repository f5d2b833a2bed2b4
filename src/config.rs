// Runtime settings for the emitter binary
use serde::{de, Deserialize, Deserializer};
use std::path::Path;
use std::time::Duration;
use crate::error::{EmitterError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "config/emitter.toml";
pub const DEFAULT_INTERVAL_MS: u64 = 2_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Pause after each emission. Must be non-zero.
    #[serde(deserialize_with = "nonzero_interval")]
    pub interval_ms: u64,
    /// Fixed RNG seed; unseeded when absent.
    pub seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            seed: None,
        }
    }
}

impl RuntimeConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Loads the config file. A missing file yields the defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<RuntimeConfig> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(s) => parse_config(&s).map_err(|source| EmitterError::Config {
            path: path.to_path_buf(),
            source,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(RuntimeConfig::default()),
        Err(e) => Err(e.into()),
    }
}

pub fn parse_config(s: &str) -> std::result::Result<RuntimeConfig, toml::de::Error> {
    toml::from_str(s)
}

// A zero pause would turn the emitter into a busy loop.
fn nonzero_interval<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let ms = u64::deserialize(deserializer)?;
    if ms == 0 {
        return Err(de::Error::custom("interval_ms must be greater than 0"));
    }
    Ok(ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_behaviour() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.interval(), Duration::from_secs(2));
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(parse_config("").unwrap(), RuntimeConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = parse_config("seed = 42\n").unwrap();
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.interval_ms, DEFAULT_INTERVAL_MS);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_config("vehicle_id = \"BUS_02\"\n").is_err());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = parse_config("interval_ms = 0\n").unwrap_err();
        assert!(err.to_string().contains("interval_ms must be greater than 0"));
        assert_eq!(parse_config("interval_ms = 1\n").unwrap().interval_ms, 1);
    }

    #[test]
    fn zero_interval_file_is_config_error() {
        let path = std::env::temp_dir().join(format!("emitter-zero-{}.toml", std::process::id()));
        std::fs::write(&path, "interval_ms = 0\n").unwrap();

        let result = load_config(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(EmitterError::Config { .. })));
    }

    #[test]
    fn missing_file_is_default() {
        let cfg = load_config("config/does-not-exist.toml").unwrap();
        assert_eq!(cfg, RuntimeConfig::default());
    }

    #[test]
    fn malformed_file_reports_path() {
        let path = std::env::temp_dir().join(format!("emitter-cfg-{}.toml", std::process::id()));
        std::fs::write(&path, "interval_ms = \"soon\"\n").unwrap();

        let err = load_config(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        match err {
            EmitterError::Config { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
