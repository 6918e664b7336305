//! Registration record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use toolgate_contracts::tool::Tool;

/// One call to `ToolRegistrar::add_tool`, as observed by the registrar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    /// Zero-based position in the registrar's log.
    pub sequence: u64,

    /// The tool metadata that was registered.
    pub tool: Tool,

    pub registered_at: DateTime<Utc>,
}
