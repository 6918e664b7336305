//! A named, independently enablable collection of tools.
//!
//! Tools are classified as read (non-mutating) or write (mutating) at the
//! point they are added, and that classification never changes. Once a
//! toolset is read-only it can never expose a write tool. That is enforced
//! in three places: `add_write_tools` drops new write tools, `active_tools`
//! omits the write list, and `register_tools` skips it.

use std::sync::Arc;

use tracing::debug;

use toolgate_contracts::{disabled::DisabledTools, tool::ServerTool};

use crate::{latch::Latch, traits::ToolRegistrar};

#[derive(Debug, Clone)]
pub struct Toolset {
    name: String,
    description: String,
    enabled: Latch,
    read_only: Latch,
    write_tools: Vec<ServerTool>,
    read_tools: Vec<ServerTool>,
    disabled: DisabledTools,
}

impl Toolset {
    /// Create an empty, disabled, writable toolset.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            enabled: Latch::Off,
            read_only: Latch::Off,
            write_tools: Vec::new(),
            read_tools: Vec::new(),
            disabled: DisabledTools::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.is_on()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only.is_on()
    }

    /// Append tools that only read state.
    pub fn add_read_tools<I>(&mut self, tools: I) -> &mut Self
    where
        I: IntoIterator<Item = ServerTool>,
    {
        self.read_tools.extend(tools);
        self
    }

    /// Append tools that mutate state.
    ///
    /// On a read-only toolset this silently does nothing. The caller gets no
    /// error and cannot tell the difference from a successful append.
    pub fn add_write_tools<I>(&mut self, tools: I) -> &mut Self
    where
        I: IntoIterator<Item = ServerTool>,
    {
        if self.read_only.is_on() {
            debug!(toolset = %self.name, "toolset is read-only; ignoring write tools");
            return self;
        }
        self.write_tools.extend(tools);
        self
    }

    /// Make the toolset read-only. Irreversible.
    pub fn set_read_only(&mut self) {
        self.read_only.set();
    }

    /// Enable the toolset. Irreversible.
    pub fn enable(&mut self) {
        self.enabled.set();
    }

    /// Tools that would be registered right now, in declaration order:
    /// non-disabled read tools, then (unless read-only) non-disabled write
    /// tools. Empty when the toolset is not enabled.
    pub fn active_tools(&self) -> Vec<&ServerTool> {
        if !self.enabled.is_on() {
            return Vec::new();
        }

        let not_disabled = |tool: &&ServerTool| !self.disabled.contains(tool.name());

        let mut active: Vec<&ServerTool> = self.read_tools.iter().filter(not_disabled).collect();
        if !self.read_only.is_on() {
            active.extend(self.write_tools.iter().filter(not_disabled));
        }
        active
    }

    /// Every declared tool, ignoring enablement and disablement. Read-only
    /// toolsets list only their read tools.
    pub fn available_tools(&self) -> Vec<&ServerTool> {
        let mut available: Vec<&ServerTool> = self.read_tools.iter().collect();
        if !self.read_only.is_on() {
            available.extend(self.write_tools.iter());
        }
        available
    }

    /// Register every active tool with `registrar`.
    pub fn register_tools(&self, registrar: &dyn ToolRegistrar) {
        if !self.enabled.is_on() {
            return;
        }

        let register_unless_disabled = |tools: &[ServerTool]| {
            for server_tool in tools {
                if self.disabled.contains(server_tool.name()) {
                    continue;
                }
                debug!(toolset = %self.name, tool = %server_tool.name(), "registering tool");
                registrar.add_tool(server_tool.tool.clone(), Arc::clone(&server_tool.handler));
            }
        };

        register_unless_disabled(&self.read_tools);
        if !self.read_only.is_on() {
            register_unless_disabled(&self.write_tools);
        }
    }

    /// Point this toolset at its owning group's disabled set.
    pub(crate) fn share_disabled(&mut self, disabled: DisabledTools) {
        self.disabled = disabled;
    }

    /// The disabled set this toolset filters against.
    pub fn disabled_tools(&self) -> &DisabledTools {
        &self.disabled
    }
}
