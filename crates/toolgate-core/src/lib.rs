//! # toolgate-core
//!
//! Decides which tools a server exposes.
//!
//! This crate provides:
//! - [`Toolset`], a named group of read and write tools with its own
//!   enablement and read-only switches
//! - [`ToolsetGroup`], which owns every toolset together with global
//!   read-only mode, the `"all"` switch, and the shared disabled-tool set
//! - the [`ToolRegistrar`] trait that active tools are handed to
//!
//! ## Usage
//!
//! ```rust,ignore
//! use toolgate_core::{Toolset, ToolsetGroup};
//!
//! let mut repos = Toolset::new("repos", "Repository tools");
//! repos.add_read_tools([get_file]).add_write_tools([push_files]);
//!
//! let mut group = ToolsetGroup::new(false, ["push_files"]);
//! group.add_toolset(repos);
//! group.enable_toolsets(["repos"])?;
//! group.register_tools(&registrar);
//! ```

pub mod group;
pub mod latch;
pub mod toolset;
pub mod traits;

pub use group::{ToolsetGroup, ALL_TOOLSETS};
pub use latch::Latch;
pub use toolset::Toolset;
pub use traits::ToolRegistrar;

// ── Tests ─────────────────────────────────────────────────────────────────────
