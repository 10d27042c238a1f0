use std::thread;
use std::time::Duration;

use vwack_core::ActionRequest;

/// Manual instructions for when no process context is available. The
/// operator fills in the leader name by hand.
pub fn manual_ack_instructions(request: &ActionRequest, port: u16) -> anyhow::Result<()> {
    let body = serde_json::to_string(request)?;
    eprintln!("No environ found. To ack manually run:");
    eprintln!(
        "  curl http://leader-name:{port}/v1/action \
         -H 'Content-Type: application/json' -XPOST -d '{body}'"
    );
    Ok(())
}

/// Instructions for a command run by hand (a `cmd.`-prefixed process
/// name): the acknowledgment should go through the blocking endpoint once
/// the human is done.
pub fn manual_cmd_instructions(request: &ActionRequest, port: u16) -> anyhow::Result<()> {
    let body = serde_json::to_string(request)?;
    eprintln!("It looks like you're running command manually. To ack run:");
    eprintln!(
        "  curl http://leader-name:{port}/v1/wait_action \
         -H 'Content-Type: application/json' -XPOST -d '{body}'"
    );
    Ok(())
}

/// Terminal state after a confirmed submission.
///
/// The process stays alive so the supervisor that launched it can reap it
/// on its own schedule; there is nothing left to do but wait for the
/// kill.
pub fn idle_until_killed() -> ! {
    println!("Done, waiting to be killed");
    loop {
        thread::sleep(Duration::from_secs(86_400));
    }
}
