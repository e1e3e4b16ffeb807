//! Services over the Firebase REST clients.
//!
//! Thin async wrappers that translate transport/API errors into the
//! console's error taxonomy. The GUI calls these from `Task`s; nothing
//! here holds state.

use std::time::Duration;

use leadbox_firebase::{AuthClient, FirestoreClient, ProjectConfig};

use crate::error::{Error, Result};
use crate::message::ContactMessage;
use crate::session::Session;

/// Delay between inbox polls while the live subscription is active.
pub const POLL_INTERVAL: Duration = Duration::from_secs(15);

/// Signs in with email and password.
///
/// # Errors
///
/// [`Error::InvalidCredentials`] for any credential-shaped rejection
/// (never distinguishing unknown email from wrong password),
/// [`Error::Firebase`] otherwise.
pub async fn sign_in(config: &ProjectConfig, email: &str, password: &str) -> Result<Session> {
    let client = AuthClient::new(config.clone());
    match client.sign_in_with_password(email, password).await {
        Ok(auth) => Ok(Session::from(auth)),
        Err(e) if e.is_invalid_credentials() => Err(Error::InvalidCredentials),
        Err(e) => Err(Error::Firebase(e)),
    }
}

/// Dispatches a password-reset email. Side effect only; session state
/// is untouched whether it succeeds or fails.
///
/// # Errors
///
/// [`Error::ResetFailed`] on any rejection.
pub async fn request_password_reset(config: &ProjectConfig, email: &str) -> Result<()> {
    let client = AuthClient::new(config.clone());
    client
        .send_password_reset(email)
        .await
        .map_err(|e| Error::ResetFailed(e.to_string()))
}

/// Fetches the current inbox snapshot, newest first.
///
/// # Errors
///
/// [`Error::SessionExpired`] when the token is rejected,
/// [`Error::SubscriptionFailed`] for any other failure.
pub async fn fetch_inbox(config: &ProjectConfig, session: &Session) -> Result<Vec<ContactMessage>> {
    let client = FirestoreClient::new(config.clone());
    let documents = client
        .fetch_messages(&session.id_token)
        .await
        .map_err(store_error)?;
    Ok(documents.into_iter().map(ContactMessage::from).collect())
}

/// One tick of the live subscription: waits out the poll interval,
/// then fetches a fresh snapshot. The caller re-issues this after
/// handling the result, exactly like an IDLE loop.
///
/// # Errors
///
/// Same as [`fetch_inbox`].
pub async fn watch_inbox(config: ProjectConfig, session: Session) -> Result<Vec<ContactMessage>> {
    tokio::time::sleep(POLL_INTERVAL).await;
    fetch_inbox(&config, &session).await
}

/// Marks one message read. Idempotent: the store overwrites the flag,
/// so re-marking an already-read message succeeds.
///
/// # Errors
///
/// [`Error::SessionExpired`] when the token is rejected,
/// [`Error::UpdateFailed`] for any other failure; callers tolerate the
/// latter silently.
pub async fn mark_read(config: &ProjectConfig, session: &Session, message_id: &str) -> Result<()> {
    let client = FirestoreClient::new(config.clone());
    client
        .set_read(&session.id_token, message_id)
        .await
        .map_err(|e| match e {
            leadbox_firebase::Error::Unauthenticated => Error::SessionExpired,
            other => Error::UpdateFailed(other.to_string()),
        })
}

fn store_error(e: leadbox_firebase::Error) -> Error {
    match e {
        leadbox_firebase::Error::Unauthenticated => Error::SessionExpired,
        other => Error::SubscriptionFailed(other.to_string()),
    }
}
