//! # leadbox-core
//!
//! Core logic for the `leadbox` admin console.
//!
//! This crate provides:
//! - Domain models (contact messages with a normalized read flag)
//! - The inbox reconciler (new-arrival detection, read transitions)
//! - The view state controller (selection, narrow/wide layout)
//! - The session state machine
//! - Login-form validation
//! - Async services over the Firebase REST clients

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
pub mod inbox;
pub mod layout;
pub mod message;
pub mod service;
pub mod session;
pub mod validation;

pub use error::{Error, Result};
pub use inbox::{Inbox, SnapshotOutcome};
pub use layout::{LayoutMode, PaneSet, ViewState, NARROW_MAX_WIDTH};
pub use message::{ContactMessage, MessageId};
pub use service::{
    fetch_inbox, mark_read, request_password_reset, sign_in, watch_inbox, POLL_INTERVAL,
};
pub use session::{Session, SessionGate, SessionState};
pub use validation::{validate_login, ValidationError};
