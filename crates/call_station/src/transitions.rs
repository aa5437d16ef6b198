//! Call transitions - Bounded audit trail of call state changes
//!
//! The station's call history only keeps the latest value of each call. The
//! transition log keeps the recent steps that produced those values.

use std::collections::VecDeque;

use call_core::{CallId, CallStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What caused a call to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionTrigger {
    Start,
    Answer,
    End,
    /// A participant was removed from the station mid-call.
    UserRemoved,
}

/// Represents one stored change of a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallTransition {
    pub call_id: CallId,
    /// The status before the change; `None` when the call was just created.
    pub from: Option<CallStatus>,
    /// The status after the change.
    pub to: CallStatus,
    pub trigger: TransitionTrigger,
    pub at: DateTime<Utc>,
}

/// Fixed-capacity log of the most recent transitions.
#[derive(Debug, Clone)]
pub struct TransitionLog {
    entries: VecDeque<CallTransition>,
    max_entries: usize,
}

impl TransitionLog {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    pub fn record(
        &mut self,
        call_id: CallId,
        from: Option<CallStatus>,
        to: CallStatus,
        trigger: TransitionTrigger,
    ) {
        if self.max_entries == 0 {
            return;
        }

        self.entries.push_back(CallTransition {
            call_id,
            from,
            to,
            trigger,
            at: Utc::now(),
        });
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    /// Transitions, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &CallTransition> {
        self.entries.iter()
    }

    /// Transitions of a single call, oldest first.
    pub fn for_call(&self, call_id: CallId) -> Vec<&CallTransition> {
        self.entries.iter().filter(|t| t.call_id == call_id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_entries
    }
}
