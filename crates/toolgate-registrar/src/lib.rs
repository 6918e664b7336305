//! # toolgate-registrar
//!
//! In-memory reference implementation of the
//! [`ToolRegistrar`](toolgate_core::ToolRegistrar) seam.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use toolgate_registrar::InMemoryRegistrar;
//!
//! let registrar = InMemoryRegistrar::new();
//! group.register_tools(&registrar);
//!
//! for record in registrar.records() {
//!     println!("{} {}", record.sequence, record.tool.name);
//! }
//! ```

pub mod memory;
pub mod record;

pub use memory::InMemoryRegistrar;
pub use record::RegistrationRecord;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use toolgate_contracts::{
        error::ToolgateResult,
        tool::{ServerTool, Tool, ToolHandler},
    };
    use toolgate_core::{ToolRegistrar, Toolset, ToolsetGroup};

    use crate::InMemoryRegistrar;

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Handler that answers with a fixed tag so tests can tell handlers apart.
    fn tagged(tag: &'static str) -> ToolHandler {
        Arc::new(move |_: &serde_json::Value| -> ToolgateResult<serde_json::Value> {
            Ok(json!({ "tag": tag }))
        })
    }

    fn server_tool(name: &str, tag: &'static str) -> ServerTool {
        ServerTool::new(Tool::new(name, format!("{name} tool")), tagged(tag))
    }

    // ── 1. direct add_tool ────────────────────────────────────────────────────

    #[test]
    fn new_registrar_is_empty() {
        let registrar = InMemoryRegistrar::new();
        assert!(registrar.is_empty());
        assert_eq!(registrar.len(), 0);
        assert!(registrar.handler("anything").is_none());
    }

    #[test]
    fn add_tool_assigns_sequential_records() {
        let registrar = InMemoryRegistrar::new();
        registrar.add_tool(Tool::new("get_me", ""), tagged("a"));
        registrar.add_tool(Tool::new("get_issue", ""), tagged("b"));

        let records = registrar.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sequence, 0);
        assert_eq!(records[0].tool.name, "get_me");
        assert_eq!(records[1].sequence, 1);
        assert_eq!(records[1].tool.name, "get_issue");
        assert!(records[0].registered_at <= records[1].registered_at);
    }

    #[test]
    fn repeated_registration_is_recorded_and_last_handler_wins() {
        let registrar = InMemoryRegistrar::new();
        registrar.add_tool(Tool::new("get_me", ""), tagged("first"));
        registrar.add_tool(Tool::new("get_me", ""), tagged("second"));

        assert_eq!(registrar.tool_names(), vec!["get_me", "get_me"]);

        let handler = registrar.handler("get_me").expect("handler registered");
        assert_eq!(handler(&json!({})).unwrap()["tag"], "second");
    }

    #[test]
    fn clones_share_state() {
        let registrar = InMemoryRegistrar::new();
        let clone = registrar.clone();
        clone.add_tool(Tool::new("get_me", ""), tagged("a"));

        assert_eq!(registrar.len(), 1);
    }

    #[test]
    fn record_serializes_tool_metadata() {
        let registrar = InMemoryRegistrar::new();
        registrar.add_tool(Tool::new("get_me", "Who am I"), tagged("a"));

        let json = serde_json::to_value(&registrar.records()[0]).unwrap();
        assert_eq!(json["sequence"], 0);
        assert_eq!(json["tool"]["name"], "get_me");
        assert_eq!(json["tool"]["description"], "Who am I");
        assert!(json["registered_at"].is_string());
    }

    // ── 2. through the gating core ────────────────────────────────────────────

    #[test]
    fn registers_only_active_tools_and_forwards_handlers() {
        let mut repos = Toolset::new("repos", "");
        repos
            .add_read_tools([server_tool("get_file", "get_file")])
            .add_write_tools([
                server_tool("push_files", "push_files"),
                server_tool("delete_file", "delete_file"),
            ]);
        let mut users = Toolset::new("users", "");
        users.add_read_tools([server_tool("get_me", "get_me")]);

        let mut group = ToolsetGroup::new(false, ["delete_file"]);
        group.add_toolset(repos);
        group.add_toolset(users);
        group.enable_toolset("repos").unwrap();

        let registrar = InMemoryRegistrar::new();
        group.register_tools(&registrar);

        assert_eq!(registrar.tool_names(), vec!["get_file", "push_files"]);
        assert!(registrar.handler("delete_file").is_none());
        assert!(registrar.handler("get_me").is_none());

        let handler = registrar.handler("push_files").unwrap();
        assert_eq!(handler(&json!({})).unwrap()["tag"], "push_files");
    }

    #[test]
    fn registering_twice_doubles_the_log() {
        let mut users = Toolset::new("users", "");
        users.add_read_tools([server_tool("get_me", "get_me")]);

        let mut group = ToolsetGroup::new(true, Vec::<String>::new());
        group.add_toolset(users);
        group.enable_toolsets(["all"]).unwrap();

        let registrar = InMemoryRegistrar::new();
        group.register_tools(&registrar);
        group.register_tools(&registrar);

        assert_eq!(registrar.len(), 2);
        assert_eq!(registrar.records()[1].sequence, 1);
    }
}
