//! Call - Immutable record of a single call
//!
//! A call is never edited in place. Every status change produces a new value
//! that keeps the id, the participants and the creation time.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::{CallStatus, EndReason};
use crate::user::User;

/// Unique identifier of a call, stable across its transitions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CallId(Uuid);

impl CallId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CallId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CallId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Record of a call between two users
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Call {
    /// Unique identifier
    pub id: CallId,

    /// The callee
    pub incoming_user: User,

    /// The caller
    pub outgoing_user: User,

    /// Current status
    pub status: CallStatus,

    /// When the call was placed
    pub created_at: DateTime<Utc>,

    /// When this value was produced
    pub updated_at: DateTime<Utc>,
}

impl Call {
    /// Create a new call from `caller` to `callee` with a fresh id.
    pub fn new(caller: User, callee: User, status: CallStatus) -> Self {
        let now = Utc::now();
        Self {
            id: CallId::new(),
            incoming_user: callee,
            outgoing_user: caller,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Produce the next value of this call with a different status.
    pub fn with_status(&self, status: CallStatus) -> Self {
        Self {
            status,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Produce the terminal value of this call.
    pub fn ended(&self, reason: EndReason) -> Self {
        self.with_status(CallStatus::ended(reason))
    }

    /// Check if `user` is either side of this call
    pub fn involves(&self, user: &User) -> bool {
        self.incoming_user == *user || self.outgoing_user == *user
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
