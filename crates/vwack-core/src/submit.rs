use serde_json::Value;

use crate::action::{ActionId, ActionRequest};
use crate::error::{AckError, Result};
use crate::transport::Transport;

/// Register an action on the leader and hand back its tracking id.
///
/// `POST /v1/action` returns as soon as the action is queued; application
/// happens later and is observed through the pending set
/// ([`crate::pending::confirm`]).
pub fn register(
    transport: &Transport,
    leader_url: &str,
    request: &ActionRequest,
) -> Result<ActionId> {
    let response = transport.post(&format!("{leader_url}/v1/action"), request)?;
    response
        .get("registered")
        .and_then(ActionId::from_value)
        .ok_or(AckError::Registration)
}

/// Submit an action through the leader's blocking endpoint.
///
/// `POST /v1/wait_action` does not return until the orchestrator has
/// applied the action, so a 200 is itself the confirmation. The body is
/// whatever the orchestrator chooses to say; an empty body decodes to
/// `Null`, a non-empty one must still be valid JSON.
pub fn wait_applied(
    transport: &Transport,
    leader_url: &str,
    request: &ActionRequest,
) -> Result<Value> {
    let url = format!("{leader_url}/v1/wait_action");
    let body = transport.post_text(&url, request)?;
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&body).map_err(|source| AckError::Decode { url, source })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
