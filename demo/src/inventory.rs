//! Sample tool inventory for the demo.
//!
//! Four toolsets modelled on a code-hosting API. Every handler echoes the
//! tool name and its arguments back.

use std::sync::Arc;

use serde_json::json;

use toolgate_contracts::{
    error::ToolgateResult,
    tool::{ServerTool, Tool, ToolAnnotations, ToolHandler},
};
use toolgate_core::Toolset;

fn echo(name: &'static str) -> ToolHandler {
    Arc::new(move |args: &serde_json::Value| -> ToolgateResult<serde_json::Value> {
        Ok(json!({ "tool": name, "arguments": args }))
    })
}

fn read_tool(name: &'static str, description: &str) -> ServerTool {
    let tool = Tool::new(name, description).with_annotations(ToolAnnotations {
        title: None,
        read_only_hint: Some(true),
    });
    ServerTool::new(tool, echo(name))
}

fn write_tool(name: &'static str, description: &str) -> ServerTool {
    let tool = Tool::new(name, description).with_annotations(ToolAnnotations {
        title: None,
        read_only_hint: Some(false),
    });
    ServerTool::new(tool, echo(name))
}

/// Build every toolset the demo knows about.
pub fn toolsets() -> Vec<Toolset> {
    let mut repos = Toolset::new("repos", "Repository contents, branches, and commits");
    repos
        .add_read_tools([
            read_tool("get_file_contents", "Read a file or directory"),
            read_tool("list_branches", "List branches of a repository"),
            read_tool("list_commits", "List commits on a branch"),
        ])
        .add_write_tools([
            write_tool("create_or_update_file", "Create or update a single file"),
            write_tool("push_files", "Push several files in one commit"),
            write_tool("delete_file", "Delete a file"),
            write_tool("create_branch", "Create a branch"),
        ]);

    let mut issues = Toolset::new("issues", "Issues and issue comments");
    issues
        .add_read_tools([
            read_tool("get_issue", "Get one issue"),
            read_tool("list_issues", "List issues in a repository"),
            read_tool("search_issues", "Search issues across repositories"),
        ])
        .add_write_tools([
            write_tool("create_issue", "Open a new issue"),
            write_tool("add_issue_comment", "Comment on an issue"),
            write_tool("update_issue", "Edit an issue"),
        ]);

    let mut pull_requests = Toolset::new("pull_requests", "Pull requests and reviews");
    pull_requests
        .add_read_tools([
            read_tool("get_pull_request", "Get one pull request"),
            read_tool("list_pull_requests", "List pull requests"),
            read_tool("get_pull_request_files", "List files changed in a pull request"),
        ])
        .add_write_tools([
            write_tool("create_pull_request", "Open a pull request"),
            write_tool("merge_pull_request", "Merge a pull request"),
        ]);

    let mut users = Toolset::new("users", "User lookups");
    users.add_read_tools([
        read_tool("get_me", "Get the authenticated user"),
        read_tool("search_users", "Search users"),
    ]);

    vec![repos, issues, pull_requests, users]
}
