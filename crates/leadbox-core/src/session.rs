//! Session state machine gating all store access.

use chrono::{DateTime, Utc};
use leadbox_firebase::AuthSession;

/// The authenticated operator.
#[derive(Debug, Clone)]
pub struct Session {
    /// Bearer token for store requests.
    pub id_token: String,
    /// Stable user id.
    pub local_id: String,
    /// Operator email.
    pub email: String,
    /// Token expiry instant.
    pub expires_at: DateTime<Utc>,
}

impl From<AuthSession> for Session {
    fn from(auth: AuthSession) -> Self {
        Self {
            id_token: auth.id_token,
            local_id: auth.local_id,
            email: auth.email,
            expires_at: auth.expires_at,
        }
    }
}

/// Where the session currently stands.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    /// Startup: identity not yet resolved. The UI shows a neutral
    /// loading state instead of flashing the login prompt.
    #[default]
    Resolving,
    /// No session; only the login screen is reachable.
    Unauthenticated,
    /// Operator signed in; store access is permitted.
    Authenticated(Session),
}

/// Tracks the session and fences asynchronous work started under it.
///
/// Every transition out of `Authenticated` bumps a generation counter.
/// In-flight poll results carry the generation they were started
/// under; [`SessionGate::accepts`] rejects results from a torn-down
/// session, so nothing is delivered after logout.
#[derive(Debug, Default)]
pub struct SessionGate {
    state: SessionState,
    generation: u64,
}

impl SessionGate {
    /// Creates a gate in the `Resolving` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks startup resolution complete with no session present.
    pub fn resolve(&mut self) {
        if matches!(self.state, SessionState::Resolving) {
            self.state = SessionState::Unauthenticated;
        }
    }

    /// Transitions to `Authenticated` after a successful login.
    pub fn sign_in(&mut self, session: Session) {
        self.generation += 1;
        tracing::info!(email = %session.email, "session established");
        self.state = SessionState::Authenticated(session);
    }

    /// Explicit logout: clears the session and invalidates all work
    /// started under it.
    pub fn sign_out(&mut self) {
        self.generation += 1;
        self.state = SessionState::Unauthenticated;
    }

    /// External invalidation (token expired or revoked server-side).
    /// Same effect as logout, different cause.
    pub fn expire(&mut self) {
        if self.is_authenticated() {
            tracing::warn!("session invalidated externally");
            self.sign_out();
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The session, when authenticated.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    /// Whether store access is currently permitted.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// Generation to stamp onto newly started asynchronous work.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a result stamped with `generation` may still be
    /// delivered.
    #[must_use]
    pub fn accepts(&self, generation: u64) -> bool {
        self.is_authenticated() && generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn session() -> Session {
        Session {
            id_token: "tok".into(),
            local_id: "u1".into(),
            email: "ops@example.com".into(),
            expires_at: Utc::now() + chrono::Duration::hours(1),
        }
    }

    #[test]
    fn starts_resolving_then_lands_unauthenticated() {
        let mut gate = SessionGate::new();
        assert!(matches!(gate.state(), SessionState::Resolving));

        gate.resolve();
        assert!(matches!(gate.state(), SessionState::Unauthenticated));
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn resolve_does_not_demote_an_authenticated_session() {
        let mut gate = SessionGate::new();
        gate.sign_in(session());
        gate.resolve();
        assert!(gate.is_authenticated());
    }

    #[test]
    fn sign_out_invalidates_in_flight_work() {
        let mut gate = SessionGate::new();
        gate.sign_in(session());
        let generation = gate.generation();
        assert!(gate.accepts(generation));

        gate.sign_out();
        assert!(!gate.accepts(generation));
        assert!(gate.session().is_none());
    }

    #[test]
    fn relogin_rejects_results_from_the_previous_session() {
        let mut gate = SessionGate::new();
        gate.sign_in(session());
        let stale = gate.generation();

        gate.sign_out();
        gate.sign_in(session());
        assert!(!gate.accepts(stale));
        assert!(gate.accepts(gate.generation()));
    }

    #[test]
    fn expire_is_a_noop_without_a_session() {
        let mut gate = SessionGate::new();
        gate.resolve();
        let generation = gate.generation();
        gate.expire();
        assert_eq!(gate.generation(), generation);
    }
}
