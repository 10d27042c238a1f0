use thiserror::Error;

#[derive(Debug, Error)]
pub enum AckError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("status code is {status} from {url}")]
    Status { status: u16, url: String },

    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no leader in cluster status (election in progress?)")]
    LeaderUnknown,

    #[error("action response carries no `registered` id")]
    Registration,

    #[error("malformed process name '{0}': expected <role>/<process>")]
    Format(String),
}

impl AckError {
    /// Whether restarting the flow can help.
    ///
    /// Everything except a malformed process name is transient: the
    /// orchestrator may be unreachable, mid-election, or mid-failover, and
    /// a later attempt can succeed. A bad name never fixes itself.
    pub fn is_transient(&self) -> bool {
        !matches!(self, AckError::Format(_))
    }
}

pub type Result<T> = std::result::Result<T, AckError>;
