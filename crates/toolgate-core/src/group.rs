//! The top-level owner of every toolset and of the global gating switches.
//!
//! A `ToolsetGroup` combines four independent controls into the set of tools
//! that actually get registered:
//!
//! 1. per-toolset enablement (`enable_toolset`),
//! 2. the global "everything on" switch (the `"all"` sentinel),
//! 3. global read-only mode, stamped onto each toolset as it is added,
//! 4. the global disabled-tool set, shared by every toolset.
//!
//! Read-only mode and the disabled set are fixed at construction. Enablement
//! only ever moves from off to on. Nothing here removes a toolset or a tool.

use std::collections::HashMap;

use tracing::{debug, info};

use toolgate_contracts::{
    disabled::DisabledTools,
    error::{ToolgateError, ToolgateResult},
    manifest::ToolsetInfo,
    tool::ServerTool,
};

use crate::{latch::Latch, toolset::Toolset, traits::ToolRegistrar};

/// Reserved toolset name that enables every toolset.
///
/// A toolset literally named `"all"` cannot be enabled on its own through
/// `enable_toolsets`; the sentinel always wins.
pub const ALL_TOOLSETS: &str = "all";

#[derive(Debug)]
pub struct ToolsetGroup {
    toolsets: HashMap<String, Toolset>,
    everything_on: Latch,
    read_only: bool,
    disabled: DisabledTools,
}

impl ToolsetGroup {
    /// Create an empty group with a fixed read-only mode and disabled set.
    pub fn new<I, S>(read_only: bool, disabled_tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            toolsets: HashMap::new(),
            everything_on: Latch::Off,
            read_only,
            disabled: DisabledTools::from_names(disabled_tools),
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn is_everything_on(&self) -> bool {
        self.everything_on.is_on()
    }

    pub fn disabled_tools(&self) -> &DisabledTools {
        &self.disabled
    }

    /// Take ownership of `toolset`.
    ///
    /// In read-only mode the toolset is made read-only first. The toolset's
    /// disabled set is replaced by a handle to this group's set. An existing
    /// toolset with the same name is replaced.
    pub fn add_toolset(&mut self, mut toolset: Toolset) {
        if self.read_only {
            toolset.set_read_only();
        }
        toolset.share_disabled(self.disabled.clone());

        let name = toolset.name().to_string();
        debug!(toolset = %name, read_only = toolset.is_read_only(), "adding toolset");
        if self.toolsets.insert(name.clone(), toolset).is_some() {
            debug!(toolset = %name, "replaced existing toolset of the same name");
        }
    }

    pub fn toolset(&self, name: &str) -> Option<&Toolset> {
        self.toolsets.get(name)
    }

    /// Mutable access to an owned toolset, e.g. to add more tools after the
    /// toolset joined the group. Read-only toolsets still drop write tools.
    pub fn toolset_mut(&mut self, name: &str) -> Option<&mut Toolset> {
        self.toolsets.get_mut(name)
    }

    /// Iterate owned toolsets in no particular order.
    pub fn toolsets(&self) -> impl Iterator<Item = &Toolset> {
        self.toolsets.values()
    }

    /// True if everything is on, otherwise whether the named toolset exists
    /// and is enabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        if self.everything_on.is_on() {
            return true;
        }
        self.toolsets
            .get(name)
            .is_some_and(|toolset| toolset.is_enabled())
    }

    /// Enable one toolset by name.
    ///
    /// # Errors
    ///
    /// `ToolgateError::ToolsetNotFound` if no toolset has that name. The group
    /// is left untouched in that case.
    pub fn enable_toolset(&mut self, name: &str) -> ToolgateResult<()> {
        let toolset = self
            .toolsets
            .get_mut(name)
            .ok_or_else(|| ToolgateError::ToolsetNotFound {
                name: name.to_string(),
            })?;
        toolset.enable();
        debug!(toolset = %name, "toolset enabled");
        Ok(())
    }

    /// Enable each named toolset in order.
    ///
    /// Seeing `ALL_TOOLSETS` switches everything on and stops the per-name
    /// scan; names after it are not looked at. Whenever everything is on
    /// (from this call or an earlier one) every owned toolset is enabled
    /// before returning.
    ///
    /// # Errors
    ///
    /// The first `ToolsetNotFound` aborts the call. Toolsets enabled before
    /// the failing name stay enabled.
    pub fn enable_toolsets<I>(&mut self, names: I) -> ToolgateResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if name == ALL_TOOLSETS {
                info!("'{}' requested; enabling every toolset", ALL_TOOLSETS);
                self.everything_on.set();
                break;
            }
            self.enable_toolset(name)?;
        }

        if self.everything_on.is_on() {
            for toolset in self.toolsets.values_mut() {
                toolset.enable();
            }
        }
        Ok(())
    }

    /// Register the active tools of every toolset with `registrar`.
    ///
    /// Toolsets are visited in no particular order.
    pub fn register_tools(&self, registrar: &dyn ToolRegistrar) {
        for toolset in self.toolsets.values() {
            toolset.register_tools(registrar);
        }
    }

    /// Describe every toolset, sorted by name.
    pub fn manifest(&self) -> Vec<ToolsetInfo> {
        let tool_names = |tools: Vec<&ServerTool>| {
            tools
                .into_iter()
                .map(|tool| tool.name().to_string())
                .collect::<Vec<_>>()
        };

        let mut infos: Vec<ToolsetInfo> = self
            .toolsets
            .values()
            .map(|toolset| ToolsetInfo {
                name: toolset.name().to_string(),
                description: toolset.description().to_string(),
                enabled: toolset.is_enabled(),
                read_only: toolset.is_read_only(),
                available_tools: tool_names(toolset.available_tools()),
                active_tools: tool_names(toolset.active_tools()),
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }
}
