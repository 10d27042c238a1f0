//! Shared surface for the `vw-ack` and `vw-ack-auto` binaries: connection
//! and operation flags, logging setup, and operator-facing output.

pub mod opts;
pub mod output;

/// Diagnostics for an attended terminal session: INFO by default so the
/// request/retry stream is visible, `RUST_LOG` overrides.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();
}
