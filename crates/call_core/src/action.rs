//! Call actions - Requests a user submits to a station

use serde::{Deserialize, Serialize};

use crate::user::User;

/// Defines the actions that drive call state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CallAction {
    /// `from` dials `to`.
    Start { from: User, to: User },

    /// `from` picks up the call ringing for them.
    Answer { from: User },

    /// `from` hangs up their current call.
    End { from: User },
}

impl CallAction {
    /// The user who submitted the action.
    pub fn actor(&self) -> &User {
        match self {
            Self::Start { from, .. } | Self::Answer { from } | Self::End { from } => from,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Start { .. } => "start",
            Self::Answer { .. } => "answer",
            Self::End { .. } => "end",
        }
    }
}
