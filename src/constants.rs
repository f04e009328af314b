//! # Fixed Forwarding Values
//!
//! Every value the dispatcher forwards that does not come from configuration
//! lives here, so the forwarding calls never carry inline literals.

use std::os::raw::c_int;

/// Broker address used when no configuration source provides one
pub const DEFAULT_BROKER_ADDRESS: &str = "127.0.0.1:26500";

/// Topic used when no configuration source provides one
pub const DEFAULT_TOPIC: &str = "default-topic";

/// Path of the precompiled engine library, without its platform extension
pub const ENGINE_LIBRARY_PATH: &str = "./go/zeebe-go";

/// Workflow definition deployed by `deployWorkflow`
pub const WORKFLOW_DEFINITION_PATH: &str = "./examples/demoProcess.bpmn";

/// Instance parameter file consumed by `startWorkflowInstance`
pub const WORKFLOW_INSTANCE_PATH: &str = "./examples/create-workflow-instance.yaml";

/// Partition/offset every subscription opens at
pub const DEFAULT_PARTITION_ID: c_int = 0;

/// Lock owner every subscription registers as
pub const DEFAULT_LOCK_OWNER: &str = "zbc";

/// Task type every subscription consumes
pub const DEFAULT_TASK_TYPE: &str = "foo";
