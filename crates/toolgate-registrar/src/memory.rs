//! In-memory implementation of `ToolRegistrar`.
//!
//! `InMemoryRegistrar` keeps every registration in a `Vec` and the current
//! handler for each tool name in a map, both behind a `Mutex`, so it can be
//! handed to `register_tools` by shared reference.
//!
//! The log is append-only and never deduplicated: registering the same tool
//! twice produces two records. The handler table is last-write-wins.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::info;

use toolgate_contracts::tool::{Tool, ToolHandler};
use toolgate_core::traits::ToolRegistrar;

use crate::record::RegistrationRecord;

// ── Internal mutable state ────────────────────────────────────────────────────

#[derive(Default)]
pub(crate) struct InMemoryState {
    /// Every registration so far, in call order.
    pub(crate) records: Vec<RegistrationRecord>,

    /// The next sequence number to assign (starts at 0).
    pub(crate) sequence: u64,

    /// Most recent handler registered under each tool name.
    pub(crate) handlers: HashMap<String, ToolHandler>,
}

// ── Public registrar ──────────────────────────────────────────────────────────

/// An in-memory, append-only tool registrar.
///
/// # Thread safety
///
/// Every method takes the internal `Mutex`. A poisoned lock is recovered
/// rather than propagated, since `add_tool` has no way to report failure.
#[derive(Default, Clone)]
pub struct InMemoryRegistrar {
    pub(crate) state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, InMemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// A copy of every registration record, in call order.
    pub fn records(&self) -> Vec<RegistrationRecord> {
        self.lock().records.clone()
    }

    /// Registered tool names in call order, including repeats.
    pub fn tool_names(&self) -> Vec<String> {
        self.lock()
            .records
            .iter()
            .map(|record| record.tool.name.clone())
            .collect()
    }

    /// The handler most recently registered under `name`.
    pub fn handler(&self, name: &str) -> Option<ToolHandler> {
        self.lock().handlers.get(name).cloned()
    }

    /// Number of registrations recorded.
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }
}

// ── ToolRegistrar impl ────────────────────────────────────────────────────────

impl ToolRegistrar for InMemoryRegistrar {
    fn add_tool(&self, tool: Tool, handler: ToolHandler) {
        let mut state = self.lock();

        let sequence = state.sequence;
        info!(sequence, tool = %tool.name, "tool registered");

        state.handlers.insert(tool.name.clone(), handler);
        state.records.push(RegistrationRecord {
            sequence,
            tool,
            registered_at: Utc::now(),
        });
        state.sequence += 1;
    }
}
