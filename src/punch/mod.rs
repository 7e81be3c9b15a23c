//! Punch handling: the status state machine and the session context.
//!
//! The state machine is a pure pre-flight filter over punch actions; the
//! session holds the cached status mirror and reconciles it against the
//! backend's authoritative answers.

mod machine;
mod session;

pub use machine::{allowed_actions, transition};
pub use session::{PunchRequest, Session};
