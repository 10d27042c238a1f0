use std::thread;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::action::ActionId;
use crate::error::Result;
use crate::transport::Transport;

/// Poll the leader's pending set until `id` has been applied.
///
/// Runs until the id disappears from `GET /v1/pending_actions` or a
/// transport call fails. There is no iteration bound: application timing
/// belongs entirely to the orchestrator. A failed poll returns
/// immediately instead of retrying here, because the right response to a
/// mid-poll failure is a fresh leader lookup, and the session driver owns
/// that.
pub fn confirm(
    transport: &Transport,
    leader_url: &str,
    id: &ActionId,
    poll_delay: Duration,
) -> Result<()> {
    let url = format!("{leader_url}/v1/pending_actions");
    loop {
        let pending = transport.get(&url)?;
        if !contains(&pending, id.as_str()) {
            return Ok(());
        }
        debug!("action {id} still pending");
        thread::sleep(poll_delay);
    }
}

/// Membership test over both shapes the control plane serves: an array of
/// identifiers or an object keyed by identifier. Identifiers compare by
/// string rendering.
fn contains(pending: &Value, id: &str) -> bool {
    match pending {
        Value::Array(items) => items.iter().any(|item| match item {
            Value::String(s) => s == id,
            Value::Number(n) => n.to_string() == id,
            _ => false,
        }),
        Value::Object(map) => map.contains_key(id),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
