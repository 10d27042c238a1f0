//! `vwack-core` — protocol client for verwalter's manual-action control
//! plane.
//!
//! verwalter pauses a rolling update at steps marked `manual` until an
//! operator acknowledges them. This crate implements the client side of
//! that handshake:
//!
//! ```text
//! naming::resolve          ← role/group/step from LITHOS_NAME (or CLI args)
//!     │
//!     ▼
//! session::run             ← retry wrapper around one attempt:
//!     │
//!     ├─ leader::locate        GET  /v1/status          → leader name
//!     ├─ submit::register      POST /v1/action          → action id   (Track)
//!     │    └─ pending::confirm GET  /v1/pending_actions until id gone
//!     └─ submit::wait_applied  POST /v1/wait_action                   (Wait)
//! ```
//!
//! Every network call funnels through [`transport::Transport`] and every
//! failure into [`AckError`]; the session driver restarts the whole flow
//! on anything transient, forever under the default [`RetryPolicy`].

pub mod action;
pub mod error;
pub mod leader;
pub mod naming;
pub mod pending;
pub mod session;
pub mod submit;
pub mod transport;

pub use action::{ActionId, ActionRequest, Operation};
pub use error::{AckError, Result};
pub use naming::{Identity, Mode};
pub use session::{ClusterAddr, Protocol, RetryPolicy};
pub use transport::Transport;
