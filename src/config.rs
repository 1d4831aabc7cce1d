//! Bootstrap configuration
//!
//! Everything here is optional. Without `--config` the defaults apply and no
//! file or environment variable is consulted. The settings only tune how steps
//! are invoked; the steps themselves and their order are fixed.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{BootstrapError, Result};

/// Privilege escalation command used when none is configured
pub const DEFAULT_ESCALATION: &str = "sudo";

fn default_escalation() -> Option<String> {
    Some(DEFAULT_ESCALATION.to_string())
}

fn default_assume_yes() -> bool {
    true
}

/// Settings read from an optional YAML file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Command prefixed to every package-manager invocation (`null` disables it)
    #[serde(default = "default_escalation")]
    pub escalation: Option<String>,

    /// Pass `-y` so the package manager never prompts
    #[serde(default = "default_assume_yes")]
    pub assume_yes: bool,

    /// Wall-clock limit per step, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_timeout_secs: Option<u64>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            escalation: default_escalation(),
            assume_yes: default_assume_yes(),
            step_timeout_secs: None,
        }
    }
}

/// Command-line values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub no_escalation: bool,
    pub step_timeout_secs: Option<u64>,
}

impl BootstrapConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str, origin: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| BootstrapError::ConfigParseFailed {
                path: origin.to_string(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(BootstrapError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| BootstrapError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Self::from_yaml(&content, &path.display().to_string())
    }

    /// Load from `path` when given, defaults otherwise, then apply CLI overrides
    pub fn resolve(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if overrides.no_escalation {
            self.escalation = None;
        }
        if overrides.step_timeout_secs.is_some() {
            self.step_timeout_secs = overrides.step_timeout_secs;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.step_timeout_secs == Some(0) {
            return Err(BootstrapError::ConfigInvalid {
                message: "step_timeout_secs must be greater than zero".to_string(),
            });
        }
        if let Some(ref escalation) = self.escalation {
            if escalation.chars().any(char::is_whitespace) {
                return Err(BootstrapError::ConfigInvalid {
                    message: format!("escalation must be a single program name, got '{escalation}'"),
                });
            }
        }
        Ok(())
    }

    /// Escalation program, treating an empty string as disabled
    pub fn escalation_program(&self) -> Option<&str> {
        self.escalation.as_deref().filter(|s| !s.is_empty())
    }

    pub fn step_timeout(&self) -> Option<Duration> {
        self.step_timeout_secs.map(Duration::from_secs)
    }
}
