//! # toolgate-contracts
//!
//! Shared types, errors, and tool metadata for the toolgate runtime.
//!
//! All crates in the workspace import from here. No gating logic lives in
//! this crate, only data definitions and error types.

pub mod disabled;
pub mod error;
pub mod manifest;
pub mod tool;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use disabled::DisabledTools;
    use error::{ToolgateError, ToolgateResult};
    use manifest::ToolsetInfo;
    use tool::{ServerTool, Tool, ToolAnnotations, ToolHandler};

    fn echo_handler() -> ToolHandler {
        Arc::new(|args: &serde_json::Value| -> ToolgateResult<serde_json::Value> {
            Ok(args.clone())
        })
    }

    // ── DisabledTools ────────────────────────────────────────────────────────

    #[test]
    fn disabled_tools_collapses_duplicates() {
        let disabled = DisabledTools::from_names(["delete_file", "delete_file", "push"]);

        assert_eq!(disabled.len(), 2);
        assert!(disabled.contains("delete_file"));
        assert!(disabled.contains("push"));
        assert!(!disabled.contains("get_file"));
    }

    #[test]
    fn disabled_tools_default_is_empty() {
        let disabled = DisabledTools::default();
        assert!(disabled.is_empty());
        assert!(!disabled.contains(""));
    }

    #[test]
    fn disabled_tools_clones_share_one_set() {
        let original: DisabledTools = vec!["a".to_string(), "b".to_string()].into_iter().collect();
        let clone = original.clone();
        let unrelated = DisabledTools::from_names(["a", "b"]);

        assert!(clone.is_shared_with(&original));
        // Equal contents are not enough; the allocation must be the same.
        assert!(!unrelated.is_shared_with(&original));
    }

    // ── Tool / ServerTool ────────────────────────────────────────────────────

    #[test]
    fn tool_new_defaults_to_empty_object_schema() {
        let tool = Tool::new("get_me", "Get the authenticated user");
        assert_eq!(tool.input_schema["type"], "object");
        assert_eq!(tool.annotations, ToolAnnotations::default());
    }

    #[test]
    fn server_tool_exposes_tool_name() {
        let st = ServerTool::new(Tool::new("list_issues", "List issues"), echo_handler());
        assert_eq!(st.name(), "list_issues");

        let out = (st.handler)(&serde_json::json!({ "owner": "octo" })).unwrap();
        assert_eq!(out["owner"], "octo");
    }

    #[test]
    fn server_tool_debug_hides_handler() {
        let st = ServerTool::new(Tool::new("get_file", "Read a file"), echo_handler());
        let dbg = format!("{:?}", st);
        assert!(dbg.contains("get_file"));
        assert!(dbg.contains("<handler>"));
    }

    #[test]
    fn tool_annotations_skip_absent_fields() {
        let tool = Tool::new("create_issue", "Open an issue").with_annotations(ToolAnnotations {
            title: None,
            read_only_hint: Some(false),
        });
        let json = serde_json::to_value(&tool).unwrap();

        assert_eq!(json["annotations"]["read_only_hint"], false);
        assert!(json["annotations"].get("title").is_none());
    }

    #[test]
    fn toolset_info_serializes_tool_lists() {
        let info = ToolsetInfo {
            name: "repos".to_string(),
            description: "Repository tools".to_string(),
            enabled: true,
            read_only: false,
            available_tools: vec!["get_file".to_string(), "push".to_string()],
            active_tools: vec!["get_file".to_string()],
        };
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["active_tools"], serde_json::json!(["get_file"]));
        assert_eq!(json["available_tools"].as_array().unwrap().len(), 2);
    }

    // ── ToolgateError display messages ───────────────────────────────────────

    #[test]
    fn error_toolset_not_found_display() {
        let err = ToolgateError::ToolsetNotFound {
            name: "missing".to_string(),
        };
        assert_eq!(err.to_string(), "toolset 'missing' does not exist");
    }

    #[test]
    fn error_config_error_display() {
        let err = ToolgateError::ConfigError {
            reason: "bad toolsets list".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("bad toolsets list"));
    }
}
