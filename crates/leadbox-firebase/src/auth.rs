//! Identity Toolkit (Firebase Authentication) REST client.
//!
//! Covers exactly the two account operations the console uses:
//! email/password sign-in and password-reset dispatch.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::config::ProjectConfig;
use crate::error::{Error, Result};

/// An authenticated session as issued by the Identity Toolkit.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Bearer token for Firestore requests.
    pub id_token: String,
    /// Stable user id (`localId`).
    pub local_id: String,
    /// Email the session was issued for.
    pub email: String,
    /// Instant after which the id token is no longer valid.
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    /// Whether the id token has passed its expiry instant.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Successful `signInWithPassword` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    id_token: String,
    local_id: String,
    email: String,
    /// Lifetime in seconds, as a decimal string.
    expires_in: String,
}

/// Error envelope shared by all Identity Toolkit endpoints.
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Client for the Identity Toolkit account endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    config: ProjectConfig,
}

impl AuthClient {
    /// Creates a client for the given project.
    #[must_use]
    pub fn new(config: ProjectConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Signs in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] with the Identity Toolkit error code on
    /// rejection; [`Error::is_invalid_credentials`] folds the
    /// credential-shaped codes together.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession> {
        let url = self.config.identity_url("signInWithPassword");
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });

        let response = self.http.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(decode_api_error(response).await);
        }

        let signed_in: SignInResponse = response.json().await?;
        let lifetime = signed_in
            .expires_in
            .parse::<i64>()
            .map(Duration::seconds)
            .unwrap_or_else(|_| Duration::hours(1));

        tracing::debug!(email = %signed_in.email, "signed in");
        Ok(AuthSession {
            id_token: signed_in.id_token,
            local_id: signed_in.local_id,
            email: signed_in.email,
            expires_at: Utc::now() + lifetime,
        })
    }

    /// Dispatches a password-reset email via `sendOobCode`.
    ///
    /// This is a side effect only; it never changes session state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] when the dispatch is rejected.
    pub async fn send_password_reset(&self, email: &str) -> Result<()> {
        let url = self.config.identity_url("sendOobCode");
        let body = serde_json::json!({
            "requestType": "PASSWORD_RESET",
            "email": email,
        });

        let response = self.http.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(decode_api_error(response).await);
        }

        tracing::debug!("password reset dispatched");
        Ok(())
    }
}

/// Decodes a non-2xx Identity Toolkit response into an [`Error`].
///
/// The `message` field doubles as the error code, optionally followed by
/// ` : human text` (e.g. `TOO_MANY_ATTEMPTS_TRY_LATER : ...`).
async fn decode_api_error(response: reqwest::Response) -> Error {
    let status = response.status();
    match response.json::<ApiErrorEnvelope>().await {
        Ok(envelope) => {
            let (code, detail) = split_error_message(&envelope.error.message);
            Error::api(code, detail)
        }
        Err(_) => Error::api(status.as_str(), "unrecognized error response"),
    }
}

fn split_error_message(message: &str) -> (&str, &str) {
    message
        .split_once(" : ")
        .map_or((message, ""), |(code, detail)| (code, detail.trim()))
}
