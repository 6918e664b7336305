//! Build a ready-to-register `ToolsetGroup` from configuration.

use tracing::info;

use toolgate_contracts::error::ToolgateResult;
use toolgate_core::{Toolset, ToolsetGroup};

use crate::config::ToolsetsConfig;

/// Construct a group from `config`, add `toolsets` in order, then enable
/// the configured toolsets.
///
/// Later toolsets replace earlier ones with the same name.
///
/// # Errors
///
/// Propagates `ToolsetNotFound` from enablement unchanged. Toolsets enabled
/// before the unknown name stay enabled, but the group is not returned.
pub fn assemble<I>(config: &ToolsetsConfig, toolsets: I) -> ToolgateResult<ToolsetGroup>
where
    I: IntoIterator<Item = Toolset>,
{
    let mut group = ToolsetGroup::new(config.read_only, config.disabled_tools.iter().cloned());
    for toolset in toolsets {
        group.add_toolset(toolset);
    }

    group.enable_toolsets(&config.toolsets)?;

    info!(
        read_only = group.is_read_only(),
        everything_on = group.is_everything_on(),
        toolsets = group.toolsets().count(),
        "toolset group assembled"
    );
    Ok(group)
}
