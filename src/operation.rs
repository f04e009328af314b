//! Enumerated dispatch over the operations the engine library exports.

use std::fmt;
use std::str::FromStr;

use crate::error::{BridgeError, BridgeResult};

/// The operations a single bridge invocation can forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Subscribe,
    DeployWorkflow,
    StartWorkflowInstance,
}

impl Operation {
    pub const ALL: [Operation; 3] = [
        Operation::Subscribe,
        Operation::DeployWorkflow,
        Operation::StartWorkflowInstance,
    ];

    /// The name the operation is invoked by on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Subscribe => "subscribe",
            Operation::DeployWorkflow => "deployWorkflow",
            Operation::StartWorkflowInstance => "startWorkflowInstance",
        }
    }

    /// Parse a command-line operation name.
    ///
    /// Names are matched exactly; anything outside the enumerated set is an
    /// `UnknownOperation` error rather than a silent miss.
    pub fn parse(name: &str) -> BridgeResult<Self> {
        Operation::ALL
            .into_iter()
            .find(|operation| operation.name() == name)
            .ok_or_else(|| BridgeError::unknown_operation(name))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::parse(s)
    }
}
