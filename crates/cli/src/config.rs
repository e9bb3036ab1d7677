//! CLI configuration
//!
//! Values are resolved in the following order (highest priority wins):
//!
//! 1. **Command-line flags**
//! 2. **Environment variables** (`MODELDDL_*`)
//! 3. **Config file** (`--config FILE`, or `modelddl.toml` in the working directory)
//! 4. **Defaults**
//!
//! ```toml
//! driver = "mysql"
//!
//! [translator]
//! comments = true
//! one_line = false
//! auto_indexes = true
//! ```

use anyhow::{Context, Result, bail};
use modelddl_codegen::TranslatorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "modelddl.toml";

pub const ENV_DRIVER: &str = "MODELDDL_DRIVER";
pub const ENV_COMMENTS: &str = "MODELDDL_COMMENTS";
pub const ENV_ONE_LINE: &str = "MODELDDL_ONE_LINE";
pub const ENV_AUTO_INDEXES: &str = "MODELDDL_AUTO_INDEXES";

/// Resolved CLI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Driver identity passed to the converter registry
    pub driver: String,

    /// Translator switches
    pub translator: TranslatorConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            driver: modelddl_codegen::mysql::DRIVER.to_string(),
            translator: TranslatorConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load defaults, then the config file, then the environment.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        config.apply_env_vars();
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?;

        if config.driver.trim().is_empty() {
            bail!("Config file {} sets an empty driver", path.display());
        }

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Apply `MODELDDL_*` environment variables
    pub fn apply_env_vars(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(driver) = lookup(ENV_DRIVER).filter(|d| !d.trim().is_empty()) {
            self.driver = driver;
        }

        let switches: [(&str, &mut bool); 3] = [
            (ENV_COMMENTS, &mut self.translator.comments),
            (ENV_ONE_LINE, &mut self.translator.one_line),
            (ENV_AUTO_INDEXES, &mut self.translator.auto_indexes),
        ];
        for (key, slot) in switches {
            if let Some(raw) = lookup(key) {
                match parse_bool(&raw) {
                    Some(value) => *slot = value,
                    None => tracing::warn!(var = key, value = %raw, "ignoring non-boolean value"),
                }
            }
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
