//! Call station - user registry and call lifecycle
//!
//! Per-call state machine:
//!
//! ```text
//! start ──► Calling ──answer──► Talk ──end──► Ended(End)
//!              │                  │
//!              ├──end──► Ended(Cancel)
//!              └──────────────────┴──user removed──► Ended(Error)
//! ```
//!
//! `start` may also record a call that is terminal from the outset:
//! `Ended(Error)` when the callee is not registered and `Ended(UserBusy)` when
//! either side is already in a call.

use std::collections::{HashMap, HashSet};

use call_core::{Call, CallAction, CallId, CallStatus, EndReason, User, UserId};

use crate::config::StationConfig;
use crate::error::ActionRejected;
use crate::transitions::{TransitionLog, TransitionTrigger};

/// Capabilities of a call station.
pub trait Station {
    /// All registered users, in no particular order.
    fn users(&self) -> Vec<&User>;

    /// Register a user. Registering the same id twice is a no-op.
    fn add_user(&mut self, user: User);

    /// Unregister a user, ending their call in progress with `Error`.
    fn remove_user(&mut self, user: &User);

    /// Apply an action. `None` means the action had no effect.
    fn execute(&mut self, action: CallAction) -> Option<CallId>;

    /// Every call ever placed.
    fn calls(&self) -> Vec<&Call>;

    /// Every call where `user` is the caller or the callee.
    fn calls_for(&self, user: &User) -> Vec<&Call>;

    fn call(&self, id: CallId) -> Option<&Call>;

    /// The call `user` is ringing or talking in.
    fn current_call(&self, user: &User) -> Option<&Call>;
}

/// In-memory call station.
#[derive(Debug, Clone)]
pub struct CallStation {
    users: HashSet<User>,
    /// Latest value of every call, keyed by id.
    history: HashMap<CallId, Call>,
    /// Call ids in creation order.
    history_order: Vec<CallId>,
    /// user id -> id of the call they are ringing or talking in
    current_calls: HashMap<UserId, CallId>,
    transitions: TransitionLog,
}

impl Default for CallStation {
    fn default() -> Self {
        Self::new()
    }
}

impl CallStation {
    pub fn new() -> Self {
        Self::with_config(StationConfig::default())
    }

    pub fn with_config(config: StationConfig) -> Self {
        Self {
            users: HashSet::new(),
            history: HashMap::new(),
            history_order: Vec::new(),
            current_calls: HashMap::new(),
            transitions: TransitionLog::new(config.transition_log_limit),
        }
    }

    pub fn is_registered(&self, user: &User) -> bool {
        self.users.contains(user)
    }

    /// Recent call state changes, oldest first.
    pub fn transitions(&self) -> &TransitionLog {
        &self.transitions
    }

    /// Apply an action, reporting why it was ignored if it had no effect.
    pub fn try_execute(&mut self, action: CallAction) -> Result<CallId, ActionRejected> {
        let action_name = action.name();
        let actor = action.actor().id;

        let result = match action {
            CallAction::Start { from, to } => self.start(from, to),
            CallAction::Answer { from } => self.answer(&from),
            CallAction::End { from } => self.end(&from),
        };

        if let Err(reason) = &result {
            tracing::debug!(
                action = action_name,
                user_id = %actor,
                reason = %reason,
                "Station: action had no effect"
            );
        }
        result
    }

    fn start(&mut self, caller: User, callee: User) -> Result<CallId, ActionRejected> {
        if !self.users.contains(&caller) {
            return Err(ActionRejected::CallerNotRegistered(caller.id));
        }

        let status = if !self.users.contains(&callee) {
            CallStatus::ended(EndReason::Error)
        } else if self.current_calls.contains_key(&caller.id)
            || self.current_calls.contains_key(&callee.id)
        {
            CallStatus::ended(EndReason::UserBusy)
        } else {
            CallStatus::Calling
        };

        let call = Call::new(caller, callee, status);
        if call.is_active() {
            self.current_calls.insert(call.outgoing_user.id, call.id);
            self.current_calls.insert(call.incoming_user.id, call.id);
        }

        Ok(self.commit(call, None, TransitionTrigger::Start))
    }

    fn answer(&mut self, user: &User) -> Result<CallId, ActionRejected> {
        let call = self
            .current_call(user)
            .ok_or(ActionRejected::NoCurrentCall(user.id))?;

        if call.status != CallStatus::Calling {
            return Err(ActionRejected::NotRinging {
                call_id: call.id,
                status: call.status,
            });
        }
        if call.incoming_user != *user {
            return Err(ActionRejected::NotCallee {
                user_id: user.id,
                call_id: call.id,
            });
        }

        let previous = call.status;
        let talking = call.with_status(CallStatus::Talk);
        Ok(self.commit(talking, Some(previous), TransitionTrigger::Answer))
    }

    fn end(&mut self, user: &User) -> Result<CallId, ActionRejected> {
        let call = self
            .current_call(user)
            .ok_or(ActionRejected::NoCurrentCall(user.id))?;

        let reason = match call.status {
            CallStatus::Talk => EndReason::End,
            _ => EndReason::Cancel,
        };
        let previous = call.status;
        let ended = call.ended(reason);
        Ok(self.conclude(ended, previous, TransitionTrigger::End))
    }

    /// Store a terminal call value and free both participants.
    fn conclude(&mut self, ended: Call, previous: CallStatus, trigger: TransitionTrigger) -> CallId {
        self.current_calls.remove(&ended.incoming_user.id);
        self.current_calls.remove(&ended.outgoing_user.id);
        self.commit(ended, Some(previous), trigger)
    }

    /// Write a call value to history under its id.
    fn commit(&mut self, call: Call, from: Option<CallStatus>, trigger: TransitionTrigger) -> CallId {
        let id = call.id;

        tracing::info!(
            call_id = %id,
            caller = %call.outgoing_user.id,
            callee = %call.incoming_user.id,
            old_status = ?from,
            new_status = %call.status,
            trigger = ?trigger,
            "Station: call updated"
        );

        self.transitions.record(id, from, call.status, trigger);
        if self.history.insert(id, call).is_none() {
            self.history_order.push(id);
        }
        id
    }
}

impl Station for CallStation {
    fn users(&self) -> Vec<&User> {
        self.users.iter().collect()
    }

    fn add_user(&mut self, user: User) {
        let user_id = user.id;
        if self.users.insert(user) {
            tracing::debug!(user_id = %user_id, "Station: user registered");
        } else {
            tracing::debug!(user_id = %user_id, "Station: user already registered");
        }
    }

    fn remove_user(&mut self, user: &User) {
        if !self.users.remove(user) {
            tracing::debug!(user_id = %user.id, "Station: removing unknown user ignored");
            return;
        }
        tracing::debug!(user_id = %user.id, "Station: user removed");

        if let Some(call) = self.current_call(user) {
            tracing::warn!(
                user_id = %user.id,
                call_id = %call.id,
                status = %call.status,
                "Station: participant left mid-call, ending call with error"
            );
            let previous = call.status;
            let ended = call.ended(EndReason::Error);
            self.conclude(ended, previous, TransitionTrigger::UserRemoved);
        }
    }

    fn execute(&mut self, action: CallAction) -> Option<CallId> {
        self.try_execute(action).ok()
    }

    fn calls(&self) -> Vec<&Call> {
        self.history_order
            .iter()
            .filter_map(|id| self.history.get(id))
            .collect()
    }

    fn calls_for(&self, user: &User) -> Vec<&Call> {
        self.calls()
            .into_iter()
            .filter(|call| call.involves(user))
            .collect()
    }

    fn call(&self, id: CallId) -> Option<&Call> {
        self.history.get(&id)
    }

    fn current_call(&self, user: &User) -> Option<&Call> {
        self.current_calls
            .get(&user.id)
            .and_then(|id| self.history.get(id))
    }
}
