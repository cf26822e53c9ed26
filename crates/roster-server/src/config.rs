//! RON configuration for the users server

use crate::error::ConfigError;
use roster_core::{MemoryStore, User};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable overriding the listen address
pub const LISTEN_ENV: &str = "ROSTER_LISTEN";

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address (e.g., "0.0.0.0:8000")
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Users to serve instead of the built-in sample
    #[serde(default)]
    pub users: Option<Vec<User>>,
}

fn default_listen() -> String {
    "0.0.0.0:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            users: None,
        }
    }
}

impl Config {
    /// Load configuration from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from RON text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(content)?)
    }

    /// Replace the listen address with `ROSTER_LISTEN` when it is set
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides read through `lookup`; empty values are ignored
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(listen) = lookup(LISTEN_ENV).filter(|l| !l.is_empty()) {
            self.listen = listen;
        }
        self
    }

    /// Build the user store this configuration describes
    pub fn store(&self) -> MemoryStore {
        match &self.users {
            Some(users) => MemoryStore::new(users.clone()),
            None => MemoryStore::sample(),
        }
    }
}
