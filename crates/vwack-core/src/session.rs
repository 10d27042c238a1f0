use std::thread;
use std::time::Duration;

use serde_json::Value;
use tracing::{info, warn};

use crate::action::ActionRequest;
use crate::error::Result;
use crate::transport::Transport;
use crate::{leader, pending, submit};

/// Seed address of the cluster. Any node works as a seed; writes go to
/// whichever leader the seed reports, on the same port.
#[derive(Debug, Clone)]
pub struct ClusterAddr {
    pub host: String,
    pub port: u16,
}

impl ClusterAddr {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn seed_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// The status endpoint reports the leader as a bare name.
    pub fn leader_url(&self, leader: &str) -> String {
        format!("http://{leader}:{}", self.port)
    }
}

/// How a submission is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// `POST /v1/action`, then poll the pending set until the returned id
    /// leaves it.
    Track,
    /// `POST /v1/wait_action`; the orchestrator itself blocks until the
    /// action is applied.
    Wait,
}

/// Retry behavior for the whole acknowledge flow.
///
/// The default retries forever on one-second spacing: the tool is meant
/// to outlast orchestrator restarts and leader elections, with an
/// external supervisor bounding total runtime. Tests inject zero-delay
/// bounded policies.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Delay between attempts, and between pending-set polls.
    pub delay: Duration,
    /// `None` retries forever.
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
            max_attempts: None,
        }
    }
}

impl RetryPolicy {
    fn exhausted(&self, attempt: u32) -> bool {
        self.max_attempts.is_some_and(|max| attempt >= max)
    }
}

/// Drive the full flow to completion: locate the leader, submit the
/// action, confirm it was applied.
///
/// Every transient failure restarts from leader lookup, because any
/// failure may mean the leader moved. Returns after the first fully
/// confirmed submission, immediately on a fatal error, or with the last
/// error once a bounded policy runs out of attempts.
pub fn run(
    transport: &Transport,
    addr: &ClusterAddr,
    request: &ActionRequest,
    protocol: Protocol,
    policy: &RetryPolicy,
) -> Result<()> {
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        match attempt_once(transport, addr, request, protocol, policy) {
            Ok(()) => return Ok(()),
            Err(err) if !err.is_transient() => return Err(err),
            Err(err) => {
                warn!("attempt {attempt} for {} failed: {err}", request.identity());
                if policy.exhausted(attempt) {
                    return Err(err);
                }
                thread::sleep(policy.delay);
            }
        }
    }
}

fn attempt_once(
    transport: &Transport,
    addr: &ClusterAddr,
    request: &ActionRequest,
    protocol: Protocol,
    policy: &RetryPolicy,
) -> Result<()> {
    let leader = leader::locate(transport, &addr.seed_url())?;
    let leader_url = addr.leader_url(&leader);

    match protocol {
        Protocol::Track => {
            let id = submit::register(transport, &leader_url, request)?;
            info!("action registered as {id}");
            pending::confirm(transport, &leader_url, &id, policy.delay)?;
            info!("action {id} applied");
        }
        Protocol::Wait => {
            let response = submit::wait_applied(transport, &leader_url, request)?;
            match response {
                Value::Null => info!("response: <empty>"),
                other => info!("response: {other}"),
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
