use clap::Parser;

use vwack_cli::opts::{ConnectOpts, OperationOpts};
use vwack_cli::output;
use vwack_core::{session, ActionRequest, Identity, Protocol, RetryPolicy, Transport};

#[derive(Parser)]
#[command(
    name = "vw-ack",
    about = "Acknowledge a verwalter manual action by explicit role/group/step",
    version
)]
struct Cli {
    /// Role to acknowledge
    role: String,

    /// Group to acknowledge
    group: String,

    /// Step to acknowledge
    step: String,

    #[command(flatten)]
    operation: OperationOpts,

    #[command(flatten)]
    connect: ConnectOpts,
}

fn main() {
    let cli = Cli::parse();
    vwack_cli::init_tracing();

    if let Err(e) = run(cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let identity = Identity {
        role: cli.role,
        group: cli.group,
        step: cli.step,
    };
    let request = ActionRequest::new(identity, cli.operation.operation());

    let transport = Transport::new()?;
    session::run(
        &transport,
        &cli.connect.cluster(),
        &request,
        Protocol::Track,
        &RetryPolicy::default(),
    )?;

    output::idle_until_killed();
}
