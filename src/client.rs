//! # Forwarding Client
//!
//! The client owns the engine library binding and the loaded configuration,
//! and forwards exactly one operation per invocation. Argument assembly is
//! kept separate from the foreign calls so the forwarded values can be
//! checked without a native library on disk.

use std::os::raw::c_int;

use tracing::{debug, info};

use crate::config::BridgeConfig;
use crate::constants::{
    DEFAULT_LOCK_OWNER, DEFAULT_PARTITION_ID, DEFAULT_TASK_TYPE, ENGINE_LIBRARY_PATH,
    WORKFLOW_DEFINITION_PATH, WORKFLOW_INSTANCE_PATH,
};
use crate::error::BridgeResult;
use crate::ffi::{decode_response, resolve_library_path, EngineLibrary, GoString};
use crate::operation::Operation;

/// Operations the engine library exposes.
///
/// `BridgeClient` is the production implementation; the seam keeps dispatch
/// testable without a native library on disk. Each operation returns the
/// engine's uninterpreted response text, if it produced one.
pub trait EngineOps {
    fn subscribe(&self) -> BridgeResult<Option<String>>;
    fn deploy_workflow(&self) -> BridgeResult<Option<String>>;
    fn start_workflow_instance(&self) -> BridgeResult<Option<String>>;
}

/// Invoke the one forwarding operation matching `operation`
pub fn dispatch<E: EngineOps>(engine: &E, operation: Operation) -> BridgeResult<Option<String>> {
    match operation {
        Operation::Subscribe => engine.subscribe(),
        Operation::DeployWorkflow => engine.deploy_workflow(),
        Operation::StartWorkflowInstance => engine.start_workflow_instance(),
    }
}

/// Client over the precompiled workflow engine library
pub struct BridgeClient {
    library: EngineLibrary,
    config: BridgeConfig,
}

impl BridgeClient {
    /// Load the engine library and bind the forwarding entry points
    pub fn connect(config: BridgeConfig) -> BridgeResult<Self> {
        let path = resolve_library_path(ENGINE_LIBRARY_PATH);
        let library = EngineLibrary::load(&path)?;

        info!(
            library = %path.display(),
            broker = config.broker_address(),
            "bound workflow engine library"
        );

        Ok(Self { library, config })
    }
}

impl EngineOps for BridgeClient {
    fn subscribe(&self) -> BridgeResult<Option<String>> {
        let (broker, topic, partition_id, lock_owner, task_type) =
            subscribe_arguments(&self.config);
        debug!(broker, topic, partition_id, lock_owner, task_type, "forwarding subscribe");

        let raw = unsafe {
            (self.library.subscribe)(
                GoString::new(broker),
                GoString::new(topic),
                partition_id,
                GoString::new(lock_owner),
                GoString::new(task_type),
            )
        };
        unsafe { decode_response(Operation::Subscribe, raw) }
    }

    fn deploy_workflow(&self) -> BridgeResult<Option<String>> {
        let (definition, broker, topic) = deploy_arguments(&self.config);
        debug!(definition, broker, topic, "forwarding deployWorkflow");

        let raw = unsafe {
            (self.library.deploy_workflow)(
                GoString::new(definition),
                GoString::new(broker),
                GoString::new(topic),
            )
        };
        unsafe { decode_response(Operation::DeployWorkflow, raw) }
    }

    fn start_workflow_instance(&self) -> BridgeResult<Option<String>> {
        let (parameters, broker, topic) = instance_arguments(&self.config);
        debug!(parameters, broker, topic, "forwarding startWorkflowInstance");

        let raw = unsafe {
            (self.library.start_workflow_instance)(
                GoString::new(parameters),
                GoString::new(broker),
                GoString::new(topic),
            )
        };
        unsafe { decode_response(Operation::StartWorkflowInstance, raw) }
    }
}

/// Arguments forwarded by `subscribe`: configuration plus the fixed
/// subscription defaults
fn subscribe_arguments(config: &BridgeConfig) -> (&str, &str, c_int, &'static str, &'static str) {
    (
        config.broker_address(),
        config.default_topic(),
        DEFAULT_PARTITION_ID,
        DEFAULT_LOCK_OWNER,
        DEFAULT_TASK_TYPE,
    )
}

/// Arguments forwarded by `deployWorkflow`: the fixed definition path plus
/// configuration
fn deploy_arguments(config: &BridgeConfig) -> (&'static str, &str, &str) {
    (
        WORKFLOW_DEFINITION_PATH,
        config.broker_address(),
        config.default_topic(),
    )
}

/// Arguments forwarded by `startWorkflowInstance`: the fixed parameter path
/// plus configuration
fn instance_arguments(config: &BridgeConfig) -> (&'static str, &str, &str) {
    (
        WORKFLOW_INSTANCE_PATH,
        config.broker_address(),
        config.default_topic(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingEngine {
        calls: RefCell<Vec<&'static str>>,
    }

    impl EngineOps for RecordingEngine {
        fn subscribe(&self) -> BridgeResult<Option<String>> {
            self.calls.borrow_mut().push("subscribe");
            Ok(None)
        }

        fn deploy_workflow(&self) -> BridgeResult<Option<String>> {
            self.calls.borrow_mut().push("deployWorkflow");
            Ok(None)
        }

        fn start_workflow_instance(&self) -> BridgeResult<Option<String>> {
            self.calls.borrow_mut().push("startWorkflowInstance");
            Ok(None)
        }
    }

    #[test]
    fn dispatch_selects_exactly_one_forwarding_call() {
        for operation in Operation::ALL {
            let engine = RecordingEngine::default();
            dispatch(&engine, operation).unwrap();
            assert_eq!(engine.calls.borrow().as_slice(), [operation.name()]);
        }
    }

    #[test]
    fn subscribe_arguments_follow_configuration_and_fixed_defaults() {
        let mut config = BridgeConfig::default();
        config.zeebe.broker.address = "127.0.0.1:26500".to_string();
        config.zeebe.broker.default_topic = "default-topic".to_string();

        assert_eq!(
            subscribe_arguments(&config),
            ("127.0.0.1:26500", "default-topic", 0, "zbc", "foo")
        );
    }

    #[test]
    fn subscription_defaults_ignore_configuration() {
        let mut config = BridgeConfig::default();
        config.zeebe.broker.address = "10.0.0.9:51015".to_string();
        config.zeebe.broker.default_topic = "orders".to_string();

        let (_, _, partition_id, lock_owner, task_type) = subscribe_arguments(&config);
        assert_eq!(partition_id, 0);
        assert_eq!(lock_owner, "zbc");
        assert_eq!(task_type, "foo");
    }

    #[test]
    fn workflow_operations_reference_fixed_resource_paths() {
        let mut config = BridgeConfig::default();
        config.zeebe.broker.default_topic = "orders".to_string();

        let (definition, _, topic) = deploy_arguments(&config);
        assert_eq!(definition, "./examples/demoProcess.bpmn");
        assert_eq!(topic, "orders");

        let (parameters, _, _) = instance_arguments(&config);
        assert_eq!(parameters, "./examples/create-workflow-instance.yaml");
    }
}
