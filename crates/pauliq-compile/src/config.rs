//! Translation configuration.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with `PAULIQ_` prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Explicit `with_*` overrides (the CLI flags)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values
//!
//! ```yaml
//! qasm_version: 3
//! angle_multiplier: 0.5
//! execution: parallel
//! threads: 8
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use pauliq_qasm::QasmVersion;

/// How terms are dispatched.
///
/// Both modes run the same per-term code and produce identical output;
/// sequential mode exists for benchmarking and debugging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Fork-join over a rayon worker pool.
    #[default]
    Parallel,
    /// One term after another on the calling thread.
    Sequential,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Parallel => write!(f, "parallel"),
            ExecutionMode::Sequential => write!(f, "sequential"),
        }
    }
}

impl FromStr for ExecutionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "parallel" | "par" => Ok(ExecutionMode::Parallel),
            "sequential" | "seq" => Ok(ExecutionMode::Sequential),
            other => Err(ConfigError::ValidationError(format!(
                "Unknown execution mode: {other}"
            ))),
        }
    }
}

/// Settings for one translation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// OpenQASM dialect of the program header (2 or 3)
    #[serde(default)]
    pub qasm_version: QasmVersion,

    /// Scalar folded into every term angle
    #[serde(default = "default_angle_multiplier")]
    pub angle_multiplier: f64,

    /// Parallel or sequential dispatch
    #[serde(default)]
    pub execution: ExecutionMode,

    /// Worker threads for parallel dispatch (default: available parallelism)
    #[serde(default)]
    pub threads: Option<usize>,
}

fn default_angle_multiplier() -> f64 {
    0.5
}

impl Default for TranslationConfig {
    fn default() -> Self {
        TranslationConfig {
            qasm_version: QasmVersion::default(),
            angle_multiplier: default_angle_multiplier(),
            execution: ExecutionMode::default(),
            threads: None,
        }
    }
}

impl TranslationConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.display())))?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: TranslationConfig = serde_yaml_ng::from_str(contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Load from file if provided
    /// 2. Apply environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => TranslationConfig::default(),
        };

        let config = config.merge_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Merge environment variables into this configuration.
    ///
    /// Only variables present in `lookup` override the current values. A
    /// present but malformed variable is an error.
    pub fn merge_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("PAULIQ_QASM_VERSION") {
            self.qasm_version = v.parse().map_err(|e: String| {
                ConfigError::ValidationError(format!("PAULIQ_QASM_VERSION: {e}"))
            })?;
        }
        if let Some(v) = lookup("PAULIQ_ANGLE_MULTIPLIER") {
            self.angle_multiplier = v.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "PAULIQ_ANGLE_MULTIPLIER: invalid number '{v}'"
                ))
            })?;
        }
        if let Some(v) = lookup("PAULIQ_EXECUTION") {
            self.execution = v.parse()?;
        }
        if let Some(v) = lookup("PAULIQ_THREADS") {
            let threads = v.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!("PAULIQ_THREADS: invalid count '{v}'"))
            })?;
            self.threads = Some(threads);
        }

        Ok(self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.angle_multiplier.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "angle_multiplier must be finite, got {}",
                self.angle_multiplier
            )));
        }
        if self.angle_multiplier == 0.0 {
            return Err(ConfigError::ValidationError(
                "angle_multiplier must be non-zero".to_string(),
            ));
        }
        if self.threads == Some(0) {
            return Err(ConfigError::ValidationError(
                "threads must be greater than 0; omit it to use all cores".to_string(),
            ));
        }
        Ok(())
    }

    /// Set the OpenQASM dialect.
    #[must_use]
    pub fn with_qasm_version(mut self, version: QasmVersion) -> Self {
        self.qasm_version = version;
        self
    }

    /// Set the angle multiplier.
    #[must_use]
    pub fn with_angle_multiplier(mut self, multiplier: f64) -> Self {
        self.angle_multiplier = multiplier;
        self
    }

    /// Set the execution mode.
    #[must_use]
    pub fn with_execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    /// Set the worker count for parallel dispatch.
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TranslationConfig::default();
        assert_eq!(config.qasm_version, QasmVersion::V2);
        assert_eq!(config.angle_multiplier, 0.5);
        assert_eq!(config.execution, ExecutionMode::Parallel);
        assert_eq!(config.threads, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml() {
        let config = TranslationConfig::from_yaml(
            "qasm_version: 3\nangle_multiplier: 1.0\nexecution: sequential\nthreads: 4\n",
        )
        .unwrap();
        assert_eq!(config.qasm_version, QasmVersion::V3);
        assert_eq!(config.angle_multiplier, 1.0);
        assert_eq!(config.execution, ExecutionMode::Sequential);
        assert_eq!(config.threads, Some(4));
    }

    #[test]
    fn test_from_yaml_partial_uses_defaults() {
        let config = TranslationConfig::from_yaml("qasm_version: 3\n").unwrap();
        assert_eq!(config.angle_multiplier, 0.5);
        assert_eq!(config.execution, ExecutionMode::Parallel);
    }

    #[test]
    fn test_from_yaml_rejects_bad_version() {
        let err = TranslationConfig::from_yaml("qasm_version: 4\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pauliq.yaml");
        std::fs::write(&path, "angle_multiplier: 0.25\n").unwrap();

        let config = TranslationConfig::from_file(&path).unwrap();
        assert_eq!(config.angle_multiplier, 0.25);

        let missing = TranslationConfig::from_file(dir.path().join("none.yaml")).unwrap_err();
        assert!(matches!(missing, ConfigError::IoError(_)));
    }

    #[test]
    fn test_env_overrides() {
        let config = TranslationConfig::default()
            .merge_env(env(&[
                ("PAULIQ_QASM_VERSION", "3"),
                ("PAULIQ_ANGLE_MULTIPLIER", "2.5"),
                ("PAULIQ_EXECUTION", "sequential"),
                ("PAULIQ_THREADS", "3"),
            ]))
            .unwrap();
        assert_eq!(config.qasm_version, QasmVersion::V3);
        assert_eq!(config.angle_multiplier, 2.5);
        assert_eq!(config.execution, ExecutionMode::Sequential);
        assert_eq!(config.threads, Some(3));
    }

    #[test]
    fn test_env_absent_keeps_values() {
        let base = TranslationConfig::default().with_angle_multiplier(0.75);
        let merged = base.clone().merge_env(env(&[])).unwrap();
        assert_eq!(merged, base);
    }

    #[test]
    fn test_env_malformed() {
        assert!(
            TranslationConfig::default()
                .merge_env(env(&[("PAULIQ_THREADS", "many")]))
                .is_err()
        );
        assert!(
            TranslationConfig::default()
                .merge_env(env(&[("PAULIQ_EXECUTION", "gpu")]))
                .is_err()
        );
    }

    #[test]
    fn test_validate() {
        assert!(
            TranslationConfig::default()
                .with_angle_multiplier(0.0)
                .validate()
                .is_err()
        );
        assert!(
            TranslationConfig::default()
                .with_angle_multiplier(f64::NAN)
                .validate()
                .is_err()
        );
        assert!(TranslationConfig::default().with_threads(0).validate().is_err());
        assert!(TranslationConfig::default().with_threads(2).validate().is_ok());
    }
}
