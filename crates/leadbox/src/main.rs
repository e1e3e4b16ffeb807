//! `leadbox` - Desktop admin console for inbound contact-form submissions.
//!
//! Built with Rust, iced GUI framework, and minimal Firebase REST clients.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use iced::keyboard::{self, Key};
use iced::widget::{column, container, row, text};
use iced::{Element, Length, Subscription, Task};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leadbox_core::{
    Inbox, LayoutMode, MessageId, Session, SessionGate, SessionState, SnapshotOutcome, ViewState,
};
use leadbox_firebase::ProjectConfig;

use message::{FetchError, KeyboardAction, LoginMessage, Message};
use model::{AppSettings, LoginState};

/// Width of the list pane in the two-pane layout.
const LIST_PANE_WIDTH: f32 = 320.0;

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "leadbox=debug,leadbox_core=debug,leadbox_firebase=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting leadbox");

    iced::application(Leadbox::new, Leadbox::update, Leadbox::view)
        .title("Leadbox")
        .subscription(Leadbox::subscription)
        .run()
}

/// Main application state.
struct Leadbox {
    /// Session state machine; gates everything below it.
    gate: SessionGate,
    /// Inbox reconciler (snapshots, arrivals, read transitions).
    inbox: Inbox,
    /// Selection and narrow/wide layout.
    view_state: ViewState,
    /// Login form state.
    login: LoginState,
    /// User preferences.
    settings: AppSettings,
    /// Project connection settings, once loaded.
    config: Option<ProjectConfig>,
    /// Startup configuration problem, shown instead of the login form.
    config_error: Option<String>,
    /// Whether the first snapshot after login is still in flight.
    is_loading_inbox: bool,
    /// Persistent list-pane error from a failed fetch or poll.
    inbox_error: Option<String>,
    /// Whether a poll tick of the live subscription is in flight.
    is_watch_active: bool,
}

impl Default for Leadbox {
    fn default() -> Self {
        Self {
            gate: SessionGate::new(),
            inbox: Inbox::new(),
            // The window opens at the default size; the layout mode
            // must match it from the first frame, not from the first
            // resize event.
            view_state: ViewState::new(iced::window::Settings::default().size.width),
            login: LoginState::new(),
            settings: AppSettings::default(),
            config: None,
            config_error: None,
            is_loading_inbox: false,
            inbox_error: None,
            is_watch_active: false,
        }
    }
}

impl Leadbox {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        app.apply_theme();
        let config_task = Task::perform(load_config(), Message::ConfigLoaded);
        let settings_task = Task::perform(load_settings(), Message::SettingsLoaded);
        (app, Task::batch([config_task, settings_task]))
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        style::palette::set_theme(self.settings.theme_mode);
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    #[allow(clippy::too_many_lines)] // Large match is idiomatic for Elm architecture
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ConfigLoaded(result) => {
                match result {
                    Ok(config) => {
                        info!(project = %config.project_id, "configuration loaded");
                        self.config = Some(config);
                    }
                    Err(e) => {
                        self.config_error = Some(e);
                    }
                }
                // Either way, startup resolution is over: show the
                // login form (or the config problem) instead of the
                // neutral loading screen.
                self.gate.resolve();
            }
            Message::SettingsLoaded(result) => {
                match result {
                    Ok(settings) => {
                        self.settings = settings;
                        self.apply_theme();
                    }
                    Err(e) => {
                        info!("Failed to load settings, using defaults: {}", e);
                    }
                }
            }
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    tracing::warn!("Failed to save settings: {}", e);
                }
            }
            Message::Login(msg) => {
                return self.handle_login(msg);
            }
            Message::SignedIn(result) => {
                self.login.is_submitting = false;
                match result {
                    Ok(session) => {
                        self.login = LoginState::new();
                        self.gate.sign_in(session);
                        return self.start_initial_load();
                    }
                    Err(e) => {
                        self.login.login_error = Some(e);
                    }
                }
            }
            Message::ResetRequested(result) => {
                self.login.is_sending_reset = false;
                match result {
                    Ok(()) => {
                        self.login.reset_sent = true;
                        self.login.reset_error = None;
                    }
                    Err(e) => {
                        // Reset feedback is independent of any login
                        // error already on screen.
                        self.login.reset_error = Some(e);
                        self.login.reset_sent = false;
                    }
                }
            }
            Message::Logout => {
                self.teardown_session();
            }
            Message::InboxLoaded(generation, result) => {
                if !self.gate.accepts(generation) {
                    return Task::none();
                }
                self.is_loading_inbox = false;
                match result {
                    // Same delivery as a poll tick: a manual refresh
                    // that observes growth chimes too. The first
                    // snapshot of a session never does, which the
                    // reconciler already guarantees.
                    Ok(snapshot) => return self.deliver_snapshot(snapshot),
                    Err(e) => return self.handle_fetch_error(e),
                }
            }
            Message::StartWatch => {
                if let Some(session) = self.gate.session().cloned()
                    && let Some(config) = self.config.clone()
                    && !self.is_watch_active
                {
                    self.is_watch_active = true;
                    let generation = self.gate.generation();
                    return Task::perform(watch_tick(config, session), move |result| {
                        Message::WatchTick(generation, result)
                    });
                }
            }
            Message::WatchTick(generation, result) => {
                self.is_watch_active = false;
                if !self.gate.accepts(generation) {
                    // Poll from a torn-down session; drop it.
                    return Task::none();
                }
                match result {
                    Ok(snapshot) => return self.deliver_snapshot(snapshot),
                    Err(FetchError::SessionExpired) => {
                        return self.handle_fetch_error(FetchError::SessionExpired);
                    }
                    Err(FetchError::Other(e)) => {
                        // Surface in the list pane but keep polling;
                        // the next successful tick clears it.
                        self.inbox_error = Some(e);
                        return Task::done(Message::StartWatch);
                    }
                }
            }
            Message::RefreshInbox => {
                if let Some(session) = self.gate.session().cloned()
                    && let Some(config) = self.config.clone()
                {
                    let generation = self.gate.generation();
                    return Task::perform(load_inbox(config, session), move |result| {
                        Message::InboxLoaded(generation, result)
                    });
                }
            }
            Message::SelectMessage(id) => {
                self.view_state.select(id.clone());
                if self.inbox.begin_read(&id)
                    && let Some(session) = self.gate.session().cloned()
                    && let Some(config) = self.config.clone()
                {
                    let generation = self.gate.generation();
                    return Task::perform(push_read(config, session, id.clone()), move |result| {
                        Message::ReadMarked(generation, id.clone(), result)
                    });
                }
            }
            Message::ReadMarked(generation, id, result) => {
                if let Err(e) = result {
                    self.inbox.read_failed(&id);
                    if matches!(e, FetchError::SessionExpired) && self.gate.accepts(generation) {
                        return self.handle_fetch_error(e);
                    }
                    // Not worth alarming the operator over: the badge
                    // simply stays until a later selection retries.
                    tracing::debug!(%id, "read-flag update failed: {e:?}");
                }
            }
            Message::Back => {
                self.view_state.back();
            }
            Message::OpenEmail(address) => {
                if let Err(e) = opener::open(format!("mailto:{address}")) {
                    tracing::warn!("could not open mail client: {e}");
                }
            }
            Message::OpenPhone(number) => {
                if let Err(e) = opener::open(format!("tel:{number}")) {
                    tracing::warn!("could not open dialer: {e}");
                }
            }
            Message::ToggleChime => {
                self.settings.chime_enabled = !self.settings.chime_enabled;
                return Task::perform(save_settings(self.settings), Message::SettingsSaved);
            }
            Message::ToggleTheme => {
                self.settings.theme_mode = match self.settings.theme_mode {
                    style::palette::ThemeMode::Light => style::palette::ThemeMode::Dark,
                    style::palette::ThemeMode::Dark => style::palette::ThemeMode::Light,
                };
                self.apply_theme();
                return Task::perform(save_settings(self.settings), Message::SettingsSaved);
            }
            Message::WindowResized(width) => {
                self.view_state.resize(width);
            }
            Message::ChimePlayed => {}
            Message::KeyPressed(action) => match action {
                KeyboardAction::Cancel => {
                    self.view_state.back();
                }
                KeyboardAction::Refresh => {
                    return Task::done(Message::RefreshInbox);
                }
            },
        }
        Task::none()
    }

    /// Handle login form messages.
    fn handle_login(&mut self, msg: LoginMessage) -> Task<Message> {
        match msg {
            LoginMessage::EmailChanged(email) => {
                self.login.email = email;
            }
            LoginMessage::PasswordChanged(password) => {
                self.login.password = password;
            }
            LoginMessage::Submit => {
                if self.login.is_submitting {
                    return Task::none();
                }
                if let Err(e) = leadbox_core::validate_login(&self.login.email, &self.login.password)
                {
                    self.login.login_error = Some(e.to_string());
                    return Task::none();
                }
                let Some(config) = self.config.clone() else {
                    return Task::none();
                };
                self.login.is_submitting = true;
                self.login.login_error = None;
                let email = self.login.email.trim().to_owned();
                let password = self.login.password.clone();
                return Task::perform(do_sign_in(config, email, password), Message::SignedIn);
            }
            LoginMessage::RequestReset => {
                if self.login.is_sending_reset {
                    return Task::none();
                }
                // Reset only needs the email; an in-progress login
                // error stays on screen untouched.
                if self.login.email.trim().is_empty() {
                    self.login.reset_error = Some("Enter an email address first".to_owned());
                    return Task::none();
                }
                let Some(config) = self.config.clone() else {
                    return Task::none();
                };
                self.login.is_sending_reset = true;
                self.login.reset_error = None;
                self.login.reset_sent = false;
                let email = self.login.email.trim().to_owned();
                return Task::perform(do_request_reset(config, email), Message::ResetRequested);
            }
        }
        Task::none()
    }

    /// Applies a fresh snapshot, whatever path delivered it (initial
    /// load, poll tick, or manual refresh), and keeps the watch loop
    /// running. One chime rule for all of them.
    fn deliver_snapshot(&mut self, snapshot: Vec<leadbox_core::ContactMessage>) -> Task<Message> {
        let outcome = self.inbox.apply_snapshot(snapshot);
        self.inbox_error = None;
        let mut tasks = vec![Task::done(Message::StartWatch)];
        if should_chime(outcome, &self.settings) {
            tasks.push(Task::perform(play_chime(), |()| Message::ChimePlayed));
        }
        Task::batch(tasks)
    }

    /// Kick off the first inbox fetch of a fresh session.
    fn start_initial_load(&mut self) -> Task<Message> {
        let (Some(session), Some(config)) = (self.gate.session().cloned(), self.config.clone())
        else {
            return Task::none();
        };
        self.is_loading_inbox = true;
        self.inbox_error = None;
        let generation = self.gate.generation();
        Task::perform(load_inbox(config, session), move |result| {
            Message::InboxLoaded(generation, result)
        })
    }

    /// Tear the session down: gate closed, inbox forgotten, selection
    /// cleared. In-flight poll results die on the generation check.
    fn teardown_session(&mut self) {
        self.gate.sign_out();
        self.inbox.reset();
        self.view_state.clear_selection();
        self.login = LoginState::new();
        self.is_loading_inbox = false;
        self.is_watch_active = false;
        self.inbox_error = None;
    }

    /// React to a failed fetch, poll, or read update.
    fn handle_fetch_error(&mut self, error: FetchError) -> Task<Message> {
        match error {
            FetchError::SessionExpired => {
                info!("session invalidated by the server, returning to login");
                self.teardown_session();
                self.login.login_error = Some("Session expired. Please sign in again.".to_owned());
            }
            FetchError::Other(e) => {
                self.inbox_error = Some(e);
            }
        }
        Task::none()
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        match self.gate.state() {
            SessionState::Resolving => view_resolving(),
            SessionState::Unauthenticated => match &self.config_error {
                Some(error) => view_config_error(error),
                None => view::view_login(&self.login),
            },
            SessionState::Authenticated(session) => self.view_inbox(session),
        }
    }

    /// Inbox screen: header plus the panes the layout mode calls for.
    fn view_inbox(&self, session: &Session) -> Element<'_, Message> {
        let header = view::view_header(
            &session.email,
            self.inbox.unread_count(),
            self.settings.chime_enabled,
        );

        let panes = self.view_state.visible_panes();
        let narrow = self.view_state.mode() == LayoutMode::Narrow;
        let mut content = row![];

        if panes.list {
            let width = if narrow {
                Length::Fill
            } else {
                Length::Fixed(LIST_PANE_WIDTH)
            };
            content = content.push(view::view_message_list(
                self.inbox.messages(),
                self.view_state.selected(),
                self.is_loading_inbox,
                self.inbox_error.as_deref(),
                width,
            ));
        }

        if panes.detail {
            let selected = self
                .view_state
                .selected()
                .and_then(|id| self.inbox.find(id));
            content = content.push(view::view_message_detail(selected, narrow));
        }

        column![header, content.height(Length::Fill)]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Subscribe to keyboard shortcuts and window resizes.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed {
                key: Key::Named(keyboard::key::Named::Escape),
                ..
            } => Some(Message::KeyPressed(KeyboardAction::Cancel)),
            keyboard::Event::KeyPressed {
                key: Key::Named(keyboard::key::Named::F5),
                ..
            } => Some(Message::KeyPressed(KeyboardAction::Refresh)),
            _ => None,
        });

        let resizes =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size.width));

        Subscription::batch([keys, resizes])
    }
}

/// Whether an applied snapshot should play the arrival chime.
const fn should_chime(outcome: SnapshotOutcome, settings: &AppSettings) -> bool {
    outcome.chime && settings.chime_enabled
}

/// Neutral loading screen shown while startup resolution is pending,
/// so the login prompt never flashes before state is known.
fn view_resolving() -> Element<'static, Message> {
    container(text("Loading...").size(15).style(style::muted_text))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Startup configuration problem; nothing else is usable without it.
fn view_config_error(error: &str) -> Element<'_, Message> {
    container(
        column![
            text("Configuration problem").size(18).style(style::danger_text),
            text(error.to_owned()).size(13).style(style::muted_text),
        ]
        .spacing(10)
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

/// Load project connection settings from file.
async fn load_config() -> Result<ProjectConfig, String> {
    let config_path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("leadbox")
        .join("config.json");

    if !config_path.exists() {
        return Err(format!(
            "No configuration found at {}. Create it with your Firebase api_key and project_id.",
            config_path.display()
        ));
    }

    let contents = tokio::fs::read_to_string(&config_path)
        .await
        .map_err(|e| e.to_string())?;

    serde_json::from_str(&contents).map_err(|e| e.to_string())
}

/// Load user preferences from file.
async fn load_settings() -> Result<AppSettings, String> {
    let settings_path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("leadbox")
        .join("settings.json");

    if !settings_path.exists() {
        return Ok(AppSettings::default());
    }

    let contents = tokio::fs::read_to_string(&settings_path)
        .await
        .map_err(|e| e.to_string())?;

    serde_json::from_str(&contents).map_err(|e| e.to_string())
}

/// Save user preferences to file.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("leadbox");

    tokio::fs::create_dir_all(&config_dir)
        .await
        .map_err(|e| e.to_string())?;

    let settings_path = config_dir.join("settings.json");
    let contents = serde_json::to_string_pretty(&settings).map_err(|e| e.to_string())?;

    tokio::fs::write(&settings_path, contents)
        .await
        .map_err(|e| e.to_string())?;

    tracing::debug!("Settings saved to {:?}", settings_path);
    Ok(())
}

/// Sign in with email and password.
async fn do_sign_in(
    config: ProjectConfig,
    email: String,
    password: String,
) -> Result<Session, String> {
    leadbox_core::sign_in(&config, &email, &password)
        .await
        .map_err(|e| e.to_string())
}

/// Dispatch a password-reset email.
async fn do_request_reset(config: ProjectConfig, email: String) -> Result<(), String> {
    leadbox_core::request_password_reset(&config, &email)
        .await
        .map_err(|e| e.to_string())
}

/// Fetch a fresh inbox snapshot immediately.
async fn load_inbox(
    config: ProjectConfig,
    session: Session,
) -> Result<Vec<leadbox_core::ContactMessage>, FetchError> {
    leadbox_core::fetch_inbox(&config, &session)
        .await
        .map_err(FetchError::from)
}

/// One tick of the live subscription: wait out the poll interval,
/// then fetch. The update loop re-issues this after each result,
/// exactly like an IMAP IDLE loop.
async fn watch_tick(
    config: ProjectConfig,
    session: Session,
) -> Result<Vec<leadbox_core::ContactMessage>, FetchError> {
    leadbox_core::watch_inbox(config, session)
        .await
        .map_err(FetchError::from)
}

/// Push the read flag for a selected message.
async fn push_read(
    config: ProjectConfig,
    session: Session,
    id: MessageId,
) -> Result<(), FetchError> {
    leadbox_core::mark_read(&config, &session, &id.0)
        .await
        .map_err(FetchError::from)
}

/// Play the new-message chime via a desktop notification.
///
/// Fire-and-forget: a missing notification daemon or sound theme is
/// not worth surfacing.
async fn play_chime() {
    let result = notify_rust::Notification::new()
        .summary("New message")
        .body("A new inquiry just arrived.")
        .sound_name("message-new-instant")
        .show();
    if let Err(e) = result {
        tracing::debug!("chime notification failed: {e}");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use leadbox_core::ContactMessage;

    fn message(id: &str, secs: i64) -> ContactMessage {
        ContactMessage {
            id: MessageId(id.to_owned()),
            name: format!("Sender {id}"),
            phone: "+1 555 0100".to_owned(),
            email: format!("{id}@example.com"),
            service: "Consultation".to_owned(),
            body: "Hello".to_owned(),
            timestamp: Utc
                .timestamp_opt(1_700_000_000 + secs, 0)
                .single()
                .unwrap_or_default(),
            read: false,
        }
    }

    fn signed_in_app() -> Leadbox {
        let mut app = Leadbox::default();
        app.gate.resolve();
        app.gate.sign_in(Session {
            id_token: "tok".to_owned(),
            local_id: "u1".to_owned(),
            email: "ops@example.com".to_owned(),
            expires_at: Utc::now() + chrono::Duration::hours(1),
        });
        app
    }

    #[test]
    fn manual_refresh_growth_plays_the_chime() {
        let mut app = signed_in_app();
        let generation = app.gate.generation();

        // Initial load, then a grown snapshot delivered by a manual
        // refresh rather than a poll tick.
        let _ = app.update(Message::InboxLoaded(generation, Ok(vec![message("a", 1)])));
        let _ = app.update(Message::InboxLoaded(
            generation,
            Ok(vec![message("b", 2), message("a", 1)]),
        ));

        assert_eq!(app.inbox.messages().len(), 2);
        // The reconciler reported growth for exactly that transition.
        let outcome = app.inbox.apply_snapshot(vec![
            message("c", 3),
            message("b", 2),
            message("a", 1),
        ]);
        assert!(should_chime(outcome, &app.settings));
    }

    #[test]
    fn chime_toggle_silences_arrivals() {
        let mut app = signed_in_app();
        app.settings.chime_enabled = false;

        let outcome = SnapshotOutcome {
            chime: true,
            count: 2,
        };
        assert!(!should_chime(outcome, &app.settings));
    }

    #[test]
    fn stale_refresh_result_is_dropped_after_logout() {
        let mut app = signed_in_app();
        let generation = app.gate.generation();
        let _ = app.update(Message::InboxLoaded(generation, Ok(vec![message("a", 1)])));

        let _ = app.update(Message::Logout);
        let _ = app.update(Message::InboxLoaded(generation, Ok(vec![message("b", 2)])));

        assert!(app.inbox.messages().is_empty());
    }

    #[test]
    fn startup_layout_matches_the_opening_window_width() {
        let app = Leadbox::default();
        let width = iced::window::Settings::default().size.width;
        assert_eq!(app.view_state.mode(), LayoutMode::from_width(width));
    }
}
