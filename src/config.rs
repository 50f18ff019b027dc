use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EdsmapError, Result};

/// Pipeline tunables. Defaults match the documented cascade and token
/// promotion thresholds; a TOML config file can override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    /// Recursion depth cap for the untrusted input tree.
    pub max_depth: usize,
    /// Minimum occurrences before an ad hoc color/typography value becomes a token.
    pub min_token_frequency: usize,
    /// Minimum occurrences for custom shadows (rarer than colors).
    pub min_shadow_frequency: usize,
    /// Maximum vertical gap in px between consecutive form controls in one pattern.
    pub pattern_max_gap: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 64,
            min_token_frequency: 3,
            min_shadow_frequency: 2,
            pattern_max_gap: 100.0,
        }
    }
}

impl Config {
    /// Load from a TOML file, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&raw)
            .map_err(|e| EdsmapError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(EdsmapError::Config(
                "max_depth must be greater than zero".to_string(),
            ));
        }
        if self.min_token_frequency == 0 || self.min_shadow_frequency == 0 {
            return Err(EdsmapError::Config(
                "token frequency thresholds must be at least 1".to_string(),
            ));
        }
        if !self.pattern_max_gap.is_finite() || self.pattern_max_gap < 0.0 {
            return Err(EdsmapError::Config(
                "pattern_max_gap must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use std::io::Write;

    #[test]
    fn default_values_match_expected() {
        let cfg = Config::default();
        assert_eq!(cfg.max_depth, 64);
        assert_eq!(cfg.min_token_frequency, 3);
        assert_eq!(cfg.min_shadow_frequency, 2);
        assert!((cfg.pattern_max_gap - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn load_without_path_returns_defaults() {
        let cfg = Config::load(None).expect("defaults");
        assert_eq!(cfg.max_depth, 64);
    }

    #[test]
    fn load_overrides_from_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "max_depth = 16\nmin_token_frequency = 5").expect("write");
        let cfg = Config::load(Some(file.path())).expect("load");
        assert_eq!(cfg.max_depth, 16);
        assert_eq!(cfg.min_token_frequency, 5);
        // Unset keys keep their defaults.
        assert_eq!(cfg.min_shadow_frequency, 2);
    }

    #[test]
    fn zero_depth_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "max_depth = 0").expect("write");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("max_depth"));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "max_depth = [not a number").expect("write");
        assert!(Config::load(Some(file.path())).is_err());
    }
}
