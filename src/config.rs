//! Fixture configuration for mock sessions.
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file (JSON)
//! 3. Default values

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::session::SessionId;
use crate::Result;

/// Default inactivity interval, `30 * 60 * 1000`.
///
/// The value is thirty minutes counted in milliseconds, although session
/// containers usually count this setting in seconds. It is kept as is.
pub const DEFAULT_MAX_INACTIVE_INTERVAL: i32 = 30 * 60 * 1000;

/// Settings used to build a [`MockSession`](crate::MockSession).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Explicit session id. `None` means the placeholder id.
    pub id: Option<String>,
    /// Stored inactivity interval. Never enforced.
    pub max_inactive_interval: i32,
    /// Attributes to seed, stored as `serde_json::Value`.
    pub attributes: HashMap<String, serde_json::Value>,
    /// Logging configuration.
    pub logging: LoggingSection,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            id: None,
            max_inactive_interval: DEFAULT_MAX_INACTIVE_INTERVAL,
            attributes: HashMap::new(),
            logging: LoggingSection::default(),
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level (error, warn, info, debug, trace).
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl SessionConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply environment variable overrides.
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    fn apply_vars<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(id) = var("MOCK_SESSION_ID") {
            if !id.is_empty() {
                self.id = Some(id);
            }
        }

        if let Some(interval) = var("MOCK_SESSION_MAX_INACTIVE_INTERVAL") {
            if let Ok(interval) = interval.trim().parse() {
                self.max_inactive_interval = interval;
            }
        }

        if let Some(level) = var("MOCK_SESSION_LOG_LEVEL") {
            self.logging.level = level;
        } else if let Some(level) = var("RUST_LOG") {
            self.logging.level = level;
        }
    }

    /// Load configuration with full priority chain.
    ///
    /// Priority: env vars > config file > defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => SessionConfig::from_file(path)?,
            None => SessionConfig::default(),
        };

        config.apply_env();
        config.validate()?;

        Ok(config)
    }

    /// Check the explicit id, normalizing surrounding whitespace.
    ///
    /// A blank id is rejected rather than silently becoming the placeholder.
    pub fn validate(&mut self) -> Result<()> {
        if let Some(id) = self.id.take() {
            let parsed: SessionId = id.parse()?;
            self.id = Some(parsed.as_str().to_string());
        }
        Ok(())
    }

    /// Set the explicit session id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a seeded attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Get the log level filter string.
    pub fn log_filter(&self) -> &str {
        &self.logging.level
    }
}
