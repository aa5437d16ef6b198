//! call_core - Core value types for the call station
//!
//! This crate provides the plain data shared by the station crate:
//! - `user` - User identity and the id-based equality it relies on
//! - `call` - Call records and their status
//! - `action` - Actions a user can submit to a station

pub mod action;
pub mod call;
pub mod user;

// Re-export commonly used types
pub use action::CallAction;
pub use call::{Call, CallId, CallStatus, EndReason};
pub use user::{User, UserId};
