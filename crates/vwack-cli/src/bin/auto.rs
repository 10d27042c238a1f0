use clap::Parser;
use tracing::info;

use vwack_cli::opts::{ConnectOpts, OperationOpts};
use vwack_cli::output;
use vwack_core::{naming, session, ActionRequest, Mode, Protocol, RetryPolicy, Transport};

/// Exit code for "no naming context found": distinct enough that a
/// supervisor can tell it apart from a crash.
const EXIT_NO_ENVIRON: i32 = 77;

#[derive(Parser)]
#[command(
    name = "vw-ack-auto",
    about = "Acknowledge the verwalter manual action this process was started for, \
             deriving role/group/step from LITHOS_NAME",
    version
)]
struct Cli {
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
    let (identity, mode) = naming::resolve_from_env()?;
    let request = ActionRequest::new(identity, cli.operation.operation());

    match mode {
        Mode::Warn => {
            output::manual_ack_instructions(&request, cli.connect.port)?;
            std::process::exit(EXIT_NO_ENVIRON);
        }
        Mode::Cmd => {
            output::manual_cmd_instructions(&request, cli.connect.port)?;
            std::process::exit(0);
        }
        Mode::Ack => {}
    }

    info!(
        "acking with params {}",
        serde_json::to_string(&request)?
    );

    let transport = Transport::new()?;
    session::run(
        &transport,
        &cli.connect.cluster(),
        &request,
        Protocol::Wait,
        &RetryPolicy::default(),
    )?;

    output::idle_until_killed();
}
