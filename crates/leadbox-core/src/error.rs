//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
///
/// Nothing here is fatal to the process: login and reset errors are
/// shown inline, subscription errors surface as a list-pane error
/// state, and read-flag failures are tolerated silently.
#[derive(Debug, Error)]
pub enum Error {
    /// Login rejected. Deliberately does not say whether the email
    /// exists or the password was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Password-reset dispatch failed. Independent of any login error.
    #[error("Could not send the reset email: {0}")]
    ResetFailed(String),

    /// The snapshot stream (initial fetch or a poll tick) failed.
    #[error("Inbox subscription failed: {0}")]
    SubscriptionFailed(String),

    /// Marking a message read failed. Tolerated: the flag simply does
    /// not advance until a later selection retries it.
    #[error("Read-flag update failed: {0}")]
    UpdateFailed(String),

    /// The identity provider invalidated the session externally.
    #[error("Session expired")]
    SessionExpired,

    /// Underlying Firebase transport/API error outside the taxonomy
    /// above (e.g. config problems before any request is classified).
    #[error("Firebase error: {0}")]
    Firebase(#[from] leadbox_firebase::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
