//! Error types for Firebase REST operations.

/// Result type alias for Firebase REST operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Firebase REST error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error reported by the Google API itself.
    #[error("API error: {code} - {message}")]
    Api {
        /// Machine-readable error code (e.g. `INVALID_LOGIN_CREDENTIALS`).
        code: String,
        /// Human-readable description, when the API supplies one.
        message: String,
    },

    /// The bearer token was rejected (expired or revoked).
    #[error("Unauthenticated: token rejected by the server")]
    Unauthenticated,

    /// A document was missing a required field or carried the wrong type.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}

impl Error {
    /// Creates an API error from code and description.
    #[must_use]
    pub fn api(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Whether the error is one of the Identity Toolkit codes returned
    /// for bad credentials. The distinct codes (`EMAIL_NOT_FOUND`,
    /// `INVALID_PASSWORD`, ...) are deliberately not exposed separately:
    /// the UI must not reveal whether an email is registered.
    #[must_use]
    pub fn is_invalid_credentials(&self) -> bool {
        match self {
            Self::Api { code, .. } => matches!(
                code.as_str(),
                "EMAIL_NOT_FOUND"
                    | "INVALID_PASSWORD"
                    | "INVALID_LOGIN_CREDENTIALS"
                    | "INVALID_EMAIL"
                    | "USER_DISABLED"
            ),
            _ => false,
        }
    }
}
