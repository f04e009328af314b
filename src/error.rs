//! # Bridge Error Types
//!
//! Unified error handling for the bridge library and CLI.

use std::path::PathBuf;

use thiserror::Error;

use crate::operation::Operation;

/// Bridge operation result type
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Error types for everything that can fail between the command line and the
/// foreign call
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Unknown operation: {name} (expected one of: subscribe, deployWorkflow, startWorkflowInstance)")]
    UnknownOperation { name: String },

    #[error("Failed to load workflow engine library {}: {source}", .path.display())]
    LibraryLoad {
        path: PathBuf,
        source: libloading::Error,
    },

    #[error("Workflow engine library is missing entry point `{symbol}`: {source}")]
    SymbolResolution {
        symbol: &'static str,
        source: libloading::Error,
    },

    #[error("Foreign call `{operation}` returned an undecodable response: {source}")]
    ForeignCall {
        operation: Operation,
        source: std::str::Utf8Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl BridgeError {
    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Create an unknown-operation error
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation { name: name.into() }
    }
}
