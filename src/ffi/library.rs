//! Binding to the precompiled workflow engine library.

use std::env::consts::DLL_EXTENSION;
use std::os::raw::{c_char, c_int};
use std::path::{Path, PathBuf};

use libloading::Library;
use tracing::debug;

use crate::error::{BridgeError, BridgeResult};
use crate::ffi::types::GoString;

pub(crate) type SubscribeFn =
    unsafe extern "C" fn(GoString, GoString, c_int, GoString, GoString) -> *const c_char;
pub(crate) type DeployWorkflowFn =
    unsafe extern "C" fn(GoString, GoString, GoString) -> *const c_char;
pub(crate) type StartWorkflowInstanceFn =
    unsafe extern "C" fn(GoString, GoString, GoString) -> *const c_char;

/// Resolved entry points plus the owning library handle.
///
/// The handle must outlive the copied function pointers, so it stays in the
/// struct even though nothing reads it after load.
#[derive(Debug)]
pub struct EngineLibrary {
    pub(crate) subscribe: SubscribeFn,
    pub(crate) deploy_workflow: DeployWorkflowFn,
    pub(crate) start_workflow_instance: StartWorkflowInstanceFn,
    _handle: Library,
}

impl EngineLibrary {
    /// Load the shared library and resolve all three entry points.
    ///
    /// Resolution is eager: a missing or mismatched library fails here rather
    /// than mid-operation.
    pub fn load(path: &Path) -> BridgeResult<Self> {
        debug!(path = %path.display(), "loading workflow engine library");

        let handle = unsafe { Library::new(path) }.map_err(|source| BridgeError::LibraryLoad {
            path: path.to_path_buf(),
            source,
        })?;

        unsafe {
            Ok(Self {
                subscribe: resolve(&handle, "subscribe")?,
                deploy_workflow: resolve(&handle, "deployWorkflow")?,
                // The library exports the instance entry point with a capital F
                start_workflow_instance: resolve(&handle, "startWorkFlowInstance")?,
                _handle: handle,
            })
        }
    }
}

unsafe fn resolve<T: Copy>(handle: &Library, symbol: &'static str) -> BridgeResult<T> {
    match handle.get::<T>(symbol.as_bytes()) {
        Ok(entry) => Ok(*entry),
        Err(source) => Err(BridgeError::SymbolResolution { symbol, source }),
    }
}

/// Append the platform dynamic-library extension when the configured path
/// does not carry one.
pub fn resolve_library_path(base: &str) -> PathBuf {
    let path = PathBuf::from(base);
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(DLL_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_path_gains_platform_extension() {
        let path = resolve_library_path("./go/zeebe-go");
        assert_eq!(
            path.extension().and_then(|ext| ext.to_str()),
            Some(DLL_EXTENSION)
        );
        assert!(path.starts_with("./go"));
    }

    #[test]
    fn explicit_extension_is_preserved() {
        assert_eq!(
            resolve_library_path("./go/zeebe-go.so"),
            PathBuf::from("./go/zeebe-go.so")
        );
    }

    #[test]
    fn missing_library_is_a_load_error() {
        let err = EngineLibrary::load(Path::new("./does-not-exist/zeebe-go.so")).unwrap_err();
        assert!(matches!(err, BridgeError::LibraryLoad { .. }));
    }
}
