//! Error types for toolset gating.
//!
//! Every fallible operation in the workspace returns `ToolgateResult<T>`.
//! The gating core raises exactly one kind, `ToolsetNotFound`; configuration
//! loading is the only other source of errors.

use thiserror::Error;

/// The unified error type for the toolgate crates.
#[derive(Debug, Error)]
pub enum ToolgateError {
    /// A toolset was named that the group does not contain.
    #[error("toolset '{name}' does not exist")]
    ToolsetNotFound { name: String },

    /// A configuration value is missing, unreadable, or malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the toolgate crates.
pub type ToolgateResult<T> = Result<T, ToolgateError>;
