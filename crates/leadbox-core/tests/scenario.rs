//! End-to-end exercises of the session gate, reconciler, and view
//! state working together, without any network.

use chrono::{TimeZone, Utc};
use leadbox_core::{ContactMessage, Inbox, MessageId, Session, SessionGate, ViewState};

fn message(id: &str, secs: i64, read: bool) -> ContactMessage {
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
        read,
    }
}

fn session() -> Session {
    Session {
        id_token: "tok".to_owned(),
        local_id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        expires_at: Utc::now() + chrono::Duration::hours(1),
    }
}

#[test]
fn login_watch_select_and_read_flow() {
    let mut gate = SessionGate::new();
    let mut inbox = Inbox::new();
    let mut view = ViewState::new(1024.0);

    // Login succeeds; the gate opens and the watch starts.
    gate.resolve();
    gate.sign_in(session());
    assert!(gate.is_authenticated());
    let generation = gate.generation();

    // First snapshot: one unread message, no chime.
    let outcome = inbox.apply_snapshot(vec![message("1", 10, false)]);
    assert!(!outcome.chime);
    assert_eq!(inbox.unread_count(), 1);

    // A newer message lands: exactly one chime, newest first.
    assert!(gate.accepts(generation));
    let outcome = inbox.apply_snapshot(vec![message("2", 20, false), message("1", 10, false)]);
    assert!(outcome.chime);
    assert_eq!(inbox.messages()[0].id, MessageId("2".to_owned()));

    // Operator opens the new message: one read update goes out.
    view.select(MessageId("2".to_owned()));
    assert!(inbox.begin_read(&MessageId("2".to_owned())));
    assert!(!inbox.begin_read(&MessageId("2".to_owned())));

    // The store echoes the flag; the badge is gone.
    let outcome = inbox.apply_snapshot(vec![message("2", 20, true), message("1", 10, false)]);
    assert!(!outcome.chime);
    assert_eq!(inbox.unread_count(), 1);
    assert!(inbox.find(&MessageId("2".to_owned())).is_some_and(|m| m.read));
}

#[test]
fn logout_tears_down_the_subscription_and_selection() {
    let mut gate = SessionGate::new();
    let mut inbox = Inbox::new();
    let mut view = ViewState::new(1024.0);

    gate.resolve();
    gate.sign_in(session());
    let generation = gate.generation();

    inbox.apply_snapshot(vec![message("1", 10, false)]);
    view.select(MessageId("1".to_owned()));

    // Logout: selection and inbox clear, and a poll result that was
    // already in flight is refused delivery.
    gate.sign_out();
    view.clear_selection();
    inbox.reset();

    assert!(!gate.accepts(generation));
    assert_eq!(view.selected(), None);
    assert!(inbox.messages().is_empty());

    // Back in: the first snapshot of the new session is a first load.
    gate.sign_in(session());
    let outcome = inbox.apply_snapshot(vec![message("2", 20, false), message("1", 10, false)]);
    assert!(!outcome.chime);
}

#[test]
fn dangling_selection_degrades_to_the_placeholder() {
    let mut inbox = Inbox::new();
    let mut view = ViewState::new(500.0);

    inbox.apply_snapshot(vec![message("x", 10, false), message("y", 5, false)]);
    view.select(MessageId("x".to_owned()));

    // The selected message disappears from the next snapshot.
    inbox.apply_snapshot(vec![message("y", 5, false)]);

    // Selection dangles; lookup is None and nothing panics. In narrow
    // mode the detail pane stays up, rendering its fallback.
    let selected = view.selected().cloned();
    assert_eq!(selected, Some(MessageId("x".to_owned())));
    assert!(inbox.find(&MessageId("x".to_owned())).is_none());
    assert!(view.visible_panes().detail);

    view.back();
    assert!(view.visible_panes().list);
}
