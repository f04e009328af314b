//! # Zeebe Bridge
//!
//! Thin client bridge to the precompiled Zeebe workflow engine library.
//! Marshals configuration values and fixed resource paths across the Go
//! calling convention boundary and forwards exactly one operation per
//! invocation. All broker communication lives inside the external library;
//! this crate is glue.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod ffi;
pub mod operation;

// Re-export commonly used types for convenience
pub use client::{dispatch, BridgeClient, EngineOps};
pub use config::BridgeConfig;
pub use error::{BridgeError, BridgeResult};
pub use operation::Operation;
