//! # Call Station
//!
//! Keeps a registry of users and drives the lifecycle of calls between them.
//! Every call ever placed stays in the station's history; each user has at
//! most one call in progress.

pub mod config;
pub mod error;
pub mod station;
pub mod telemetry;
pub mod transitions;

// Re-exports
pub use config::StationConfig;
pub use error::{ActionRejected, StationError};
pub use station::{CallStation, Station};
pub use transitions::{CallTransition, TransitionLog, TransitionTrigger};

pub use call_core::{Call, CallAction, CallId, CallStatus, EndReason, User, UserId};
