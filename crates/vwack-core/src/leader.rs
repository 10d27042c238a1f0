use serde_json::Value;

use crate::error::{AckError, Result};
use crate::transport::Transport;

/// Ask a cluster node who the current leader is.
///
/// Any node answers `GET /v1/status`, but only the leader accepts writes,
/// so every session starts here. A status body without `leader.name`
/// means the cluster is mid-election; that is a transient condition and
/// the caller retries the whole flow.
pub fn locate(transport: &Transport, seed_url: &str) -> Result<String> {
    let status = transport.get(&format!("{seed_url}/v1/status"))?;
    leader_name(&status).ok_or(AckError::LeaderUnknown)
}

fn leader_name(status: &Value) -> Option<String> {
    status
        .get("leader")?
        .get("name")?
        .as_str()
        .map(str::to_owned)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
