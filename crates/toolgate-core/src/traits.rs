//! The registrar seam between the gating core and whatever serves tools.

use toolgate_contracts::tool::{Tool, ToolHandler};

/// Accepts tools and makes them servable.
///
/// `Toolset::register_tools` and `ToolsetGroup::register_tools` call
/// `add_tool` once per active tool per invocation. They never retry and never
/// deduplicate across invocations; idempotence is the registrar's business.
///
/// Implementations are expected not to fail. A registrar that can fail must
/// deal with it itself (record it, or abort the process).
pub trait ToolRegistrar: Send + Sync {
    fn add_tool(&self, tool: Tool, handler: ToolHandler);
}
