//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use leadbox_core::{ContactMessage, MessageId, Session};
use leadbox_firebase::ProjectConfig;

use crate::model::AppSettings;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Startup
    /// Project connection settings loaded (or failed to load).
    ConfigLoaded(Result<ProjectConfig, String>),
    /// User preferences loaded.
    SettingsLoaded(Result<AppSettings, String>),
    /// User preferences saved.
    SettingsSaved(Result<(), String>),

    // Session
    /// Login form events.
    Login(LoginMessage),
    /// Sign-in attempt finished.
    SignedIn(Result<Session, String>),
    /// Password-reset dispatch finished.
    ResetRequested(Result<(), String>),
    /// Sign the operator out.
    Logout,

    // Inbox
    /// Initial snapshot after login arrived. Stamped with the session
    /// generation it was started under.
    InboxLoaded(u64, Result<Vec<ContactMessage>, FetchError>),
    /// Re-issue the poll tick of the live subscription.
    StartWatch,
    /// A poll tick of the live subscription finished.
    WatchTick(u64, Result<Vec<ContactMessage>, FetchError>),
    /// Fetch a fresh snapshot right away.
    RefreshInbox,

    // Message list / detail
    /// Select a message to view its content.
    SelectMessage(MessageId),
    /// Return from the detail pane to the list (narrow layout).
    Back,
    /// Read-flag update finished.
    ReadMarked(u64, MessageId, Result<(), FetchError>),
    /// Open the submitter's email address in the mail client.
    OpenEmail(String),
    /// Open the submitter's phone number in the dialer.
    OpenPhone(String),

    // Preferences
    /// Toggle the new-message chime.
    ToggleChime,
    /// Toggle between light and dark theme.
    ToggleTheme,

    // UI events
    /// Window resized to the given logical width.
    WindowResized(f32),
    /// Arrival chime finished playing (or failed; ignored either way).
    ChimePlayed,
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
}

/// Messages for the login form.
#[derive(Debug, Clone)]
pub enum LoginMessage {
    /// Email field changed.
    EmailChanged(String),
    /// Password field changed.
    PasswordChanged(String),
    /// Submit the form.
    Submit,
    /// Send a password-reset email to the entered address.
    RequestReset,
}

/// Store/fetch failure, reduced to what the update loop reacts to.
///
/// Errors cross the `Task` boundary as plain data; only external
/// session invalidation needs to stay distinguishable.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// The server rejected the session token.
    SessionExpired,
    /// Anything else, already rendered for display.
    Other(String),
}

impl From<leadbox_core::Error> for FetchError {
    fn from(e: leadbox_core::Error) -> Self {
        match e {
            leadbox_core::Error::SessionExpired => Self::SessionExpired,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Keyboard actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Back/clear selection (Escape).
    Cancel,
    /// Refresh the inbox (F5).
    Refresh,
}
