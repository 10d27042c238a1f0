use clap::Args;
use vwack_core::{ClusterAddr, Operation};

/// Where to reach the cluster. Any node works as a seed; the leader is
/// discovered from it.
#[derive(Args, Debug)]
pub struct ConnectOpts {
    /// Initial verwalter host
    #[arg(
        long = "verwalter-host",
        value_name = "HOST",
        default_value = "localhost",
        env = "VERWALTER_HOST"
    )]
    pub host: String,

    /// Verwalter port
    #[arg(
        long = "verwalter-port",
        value_name = "PORT",
        default_value_t = 8379,
        env = "VERWALTER_PORT"
    )]
    pub port: u16,
}

impl ConnectOpts {
    pub fn cluster(&self) -> ClusterAddr {
        ClusterAddr::new(self.host.clone(), self.port)
    }
}

/// Which update to apply to the step.
#[derive(Args, Debug)]
pub struct OperationOpts {
    /// Execute proceed action instead of ack (useful to proceed actions
    /// marked as `manual`)
    #[arg(long, conflicts_with = "error")]
    pub proceed: bool,

    /// Acknowledge step with error message
    #[arg(long, value_name = "MESSAGE")]
    pub error: Option<String>,
}

impl OperationOpts {
    pub fn operation(&self) -> Operation {
        Operation::from_flags(self.proceed, self.error.clone())
    }
}
