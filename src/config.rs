use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::analyzer::DEFAULT_LATENCY;
use crate::error::{Result, ReviewError};
use crate::models::{DetailLevel, Locale, Profile};

fn default_latency_ms() -> u64 {
    DEFAULT_LATENCY.as_millis() as u64
}

/// Panel settings, read from an optional TOML file and then overridden by
/// command line flags
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReviewConfig {
    #[serde(default)]
    pub locale: Locale,
    /// Falls back to the locale's usual detail level when omitted
    #[serde(default)]
    pub detail: Option<DetailLevel>,
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            detail: None,
            latency_ms: default_latency_ms(),
        }
    }
}

/// Values given on the command line; `None` keeps the file or default value
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides {
    pub locale: Option<Locale>,
    pub detail: Option<DetailLevel>,
    pub latency_ms: Option<u64>,
}

impl ReviewConfig {
    pub fn from_toml_str(source: &str, path: &Path) -> Result<Self> {
        toml::from_str(source).map_err(|e| ReviewError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| ReviewError::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&source, path)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(locale) = overrides.locale {
            self.locale = locale;
        }
        if let Some(detail) = overrides.detail {
            self.detail = Some(detail);
        }
        if let Some(latency_ms) = overrides.latency_ms {
            self.latency_ms = latency_ms;
        }
        self
    }

    pub fn profile(&self) -> Profile {
        Profile::new(
            self.locale,
            self.detail.unwrap_or_else(|| self.locale.default_detail()),
        )
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}
