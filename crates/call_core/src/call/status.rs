//! CallStatus and EndReason
//!
//! `Ended` is terminal; nothing transitions out of it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a call reached its terminal state.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// A talking call was hung up
    End,

    /// A ringing call was hung up before being answered
    Cancel,

    /// One of the participants was already in a call
    UserBusy,

    /// The callee was unknown, or a participant left the station mid-call
    Error,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::End => "end",
            Self::Cancel => "cancel",
            Self::UserBusy => "user_busy",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a call.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CallStatus {
    /// Ringing, waiting for the callee to answer
    Calling,

    /// Both parties connected
    Talk,

    /// Finished
    Ended { reason: EndReason },
}

impl CallStatus {
    pub fn ended(reason: EndReason) -> Self {
        Self::Ended { reason }
    }

    /// Check if this status represents a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ended { .. })
    }

    /// Check if a call in this status still occupies its participants
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Calling | Self::Talk)
    }

    /// The end reason, if the call has finished
    pub fn end_reason(&self) -> Option<EndReason> {
        match self {
            Self::Ended { reason } => Some(*reason),
            _ => None,
        }
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calling => f.write_str("calling"),
            Self::Talk => f.write_str("talk"),
            Self::Ended { reason } => write!(f, "ended({})", reason),
        }
    }
}
