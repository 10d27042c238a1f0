use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::naming::Identity;

/// What the operator is telling the orchestrator about a manual step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// The step was performed; let the workflow continue.
    Ack,
    /// Skip a step marked `manual` without performing it.
    Proceed,
    /// The step failed; the message is surfaced to whoever watches the
    /// update.
    Error(String),
}

impl Operation {
    /// Select the operation from the CLI flags. An error message wins over
    /// `--proceed`; the flags are mutually exclusive at the parser level,
    /// so both can only arrive here from a non-CLI caller.
    pub fn from_flags(proceed: bool, error: Option<String>) -> Self {
        match error {
            Some(message) => Operation::Error(message),
            None if proceed => Operation::Proceed,
            None => Operation::Ack,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Ack => "ack",
            Operation::Proceed => "proceed",
            Operation::Error(_) => "error",
        }
    }
}

/// Wire body for `/v1/action` and `/v1/wait_action`.
///
/// The control plane models manual-step updates as a button press:
/// `action` is always the literal `update_action`, and `update_action`
/// names the operation. `error_message` is present exactly when the
/// operation is an error.
#[derive(Debug, Clone, Serialize)]
pub struct ActionRequest {
    pub button: Button,
}

#[derive(Debug, Clone, Serialize)]
pub struct Button {
    pub role: String,
    pub group: String,
    pub action: &'static str,
    pub update_action: &'static str,
    pub step: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ActionRequest {
    pub fn new(identity: Identity, operation: Operation) -> Self {
        let update_action = operation.as_str();
        let error_message = match operation {
            Operation::Error(message) => Some(message),
            _ => None,
        };
        Self {
            button: Button {
                role: identity.role,
                group: identity.group,
                action: "update_action",
                update_action,
                step: identity.step,
                error_message,
            },
        }
    }

    pub fn identity(&self) -> Identity {
        Identity {
            role: self.button.role.clone(),
            group: self.button.group.clone(),
            step: self.button.step.clone(),
        }
    }
}

/// Server-assigned identifier from a successful registration.
///
/// The control plane hands back a string or an integer; the pending set is
/// compared by string rendering either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionId(String);

impl ActionId {
    /// Normalize a `registered` JSON value. Anything that is not a string
    /// or a number is not an identifier.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(ActionId(s.clone())),
            Value::Number(n) => Some(ActionId(n.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
