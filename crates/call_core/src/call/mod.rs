//! Call module - Call records and lifecycle status
//!
//! Provides the immutable Call record and the CallStatus it moves through.

mod record;
mod status;

pub use record::{Call, CallId};
pub use status::{CallStatus, EndReason};
