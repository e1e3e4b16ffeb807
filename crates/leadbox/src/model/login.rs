//! Login form state.

/// State for the login screen.
///
/// Login and reset outcomes are reported in separate slots: a reset
/// failure never clears a login error and vice versa, so both can be
/// shown at once when both happened.
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    /// Email field.
    pub email: String,
    /// Password field.
    pub password: String,
    /// Whether a sign-in request is in flight.
    pub is_submitting: bool,
    /// Whether a reset dispatch is in flight.
    pub is_sending_reset: bool,
    /// Inline login error, if the last attempt failed.
    pub login_error: Option<String>,
    /// Inline reset error, if the last dispatch failed.
    pub reset_error: Option<String>,
    /// Whether a reset email was sent successfully.
    pub reset_sent: bool,
}

impl LoginState {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
