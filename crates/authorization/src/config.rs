//! Chain configuration loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Chain, Decision, Error, Fixed, Result};

/// Top-level authorization configuration.
///
/// ```toml
/// [[authorizers]]
/// kind = "fixed"
/// decision = "no opinion"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Authorizers in the order they are consulted.
    #[serde(default)]
    pub authorizers: Vec<AuthorizerConfig>,
}

/// One member of a configured chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuthorizerConfig {
    /// Always answers with `decision`.
    Fixed { decision: Decision },
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading authorization config");
        Self::parse(&content)
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self> {
        toml::from_str(toml).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Assemble the configured authorizers into a chain.
    pub fn build(&self) -> Chain {
        if self.authorizers.is_empty() {
            warn!("no authorizers configured; every request will have no opinion");
        }
        self.authorizers
            .iter()
            .map(|member| match member {
                AuthorizerConfig::Fixed { decision } => Fixed(*decision),
            })
            .collect()
    }
}
