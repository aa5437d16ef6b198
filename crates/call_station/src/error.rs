//! Call station error types

use call_core::{CallId, CallStatus, UserId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StationError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, StationError>;

/// Why an action left the station untouched.
///
/// Busy or unreachable callees are not rejections: those calls are recorded
/// with a terminal status and their id is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionRejected {
    #[error("Caller {0} is not registered")]
    CallerNotRegistered(UserId),

    #[error("User {0} has no call in progress")]
    NoCurrentCall(UserId),

    #[error("Call {call_id} is {status}, not ringing")]
    NotRinging { call_id: CallId, status: CallStatus },

    #[error("User {user_id} placed call {call_id} and cannot answer it")]
    NotCallee { user_id: UserId, call_id: CallId },
}
