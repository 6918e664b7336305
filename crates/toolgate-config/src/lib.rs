//! # toolgate-config
//!
//! TOML-driven configuration for the toolgate runtime.
//!
//! ## Overview
//!
//! This crate provides [`ToolsetsConfig`], which supplies the read-only mode,
//! the toolsets to enable, and the tools to disable, and [`assemble`], which
//! turns a config plus the declared toolsets into a
//! [`ToolsetGroup`](toolgate_core::ToolsetGroup) ready for registration.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use toolgate_config::{assemble, ToolsetsConfig};
//!
//! let config = ToolsetsConfig::from_file(Path::new("toolsets.toml"))?;
//! let group = assemble(&config, declared_toolsets())?;
//! group.register_tools(&registrar);
//! ```

pub mod assemble;
pub mod config;

pub use assemble::assemble;
pub use config::ToolsetsConfig;

// ── Tests ─────────────────────────────────────────────────────────────────────
