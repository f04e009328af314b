//! # Foreign Boundary
//!
//! Everything that touches the Go calling convention lives here: the
//! `GoString` descriptor layout and the dynamically loaded engine library.
//! The rest of the crate never sees the layout directly.

mod library;
mod types;

pub use library::{resolve_library_path, EngineLibrary};
pub use types::{GoInt, GoString};

pub(crate) use types::decode_response;
