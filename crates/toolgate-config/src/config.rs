//! Toolset configuration schema.
//!
//! A `ToolsetsConfig` carries the three inputs the gating core needs from the
//! outside world: global read-only mode, the toolsets to enable, and the
//! tools to disable.
//!
//! Example:
//! ```toml
//! read_only = false
//! toolsets = ["repos", "issues"]
//! disabled_tools = ["delete_file"]
//! ```
//!
//! Every field is optional. An empty document enables every toolset.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use toolgate_contracts::error::{ToolgateError, ToolgateResult};
use toolgate_core::ALL_TOOLSETS;

fn default_toolsets() -> Vec<String> {
    vec![ALL_TOOLSETS.to_string()]
}

/// The top-level structure deserialized from a toolsets TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsetsConfig {
    /// Suppress every write tool in every toolset.
    #[serde(default)]
    pub read_only: bool,

    /// Toolset names to enable, in order. `"all"` enables every toolset.
    #[serde(default = "default_toolsets")]
    pub toolsets: Vec<String>,

    /// Tool names that are never exposed, whatever toolset declares them.
    #[serde(default)]
    pub disabled_tools: Vec<String>,
}

impl Default for ToolsetsConfig {
    fn default() -> Self {
        Self {
            read_only: false,
            toolsets: default_toolsets(),
            disabled_tools: Vec::new(),
        }
    }
}

impl ToolsetsConfig {
    /// Parse `s` as TOML.
    ///
    /// Returns `ToolgateError::ConfigError` if the TOML is malformed or does
    /// not match the `ToolsetsConfig` schema.
    pub fn from_toml_str(s: &str) -> ToolgateResult<Self> {
        let config: ToolsetsConfig = toml::from_str(s).map_err(|e| ToolgateError::ConfigError {
            reason: format!("failed to parse toolsets TOML: {}", e),
        })?;
        debug!(
            read_only = config.read_only,
            toolsets = ?config.toolsets,
            disabled_tools = config.disabled_tools.len(),
            "loaded toolsets config"
        );
        Ok(config)
    }

    /// Read the file at `path` and parse it as TOML.
    ///
    /// Returns `ToolgateError::ConfigError` if the file cannot be read or its
    /// contents are not a valid `ToolsetsConfig`.
    pub fn from_file(path: &Path) -> ToolgateResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ToolgateError::ConfigError {
            reason: format!("failed to read toolsets file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }
}
