//! Message detail pane.

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Length};

use leadbox_core::ContactMessage;

use crate::message::Message;
use crate::model::format_timestamp;
use crate::style::{
    back_button_style, detail_pane_style, ghost_button_style, muted_text, scrollable_style,
};

/// Renders the detail pane (right pane, or the only pane in narrow
/// layout). A dangling selection falls back to the placeholder.
pub fn view_message_detail(
    message: Option<&ContactMessage>,
    show_back: bool,
) -> Element<'static, Message> {
    message.map_or_else(view_empty, |msg| view_message(msg, show_back))
}

/// Renders empty state when no message is selected (or the selected
/// message is gone from the store).
fn view_empty() -> Element<'static, Message> {
    container(
        text("Select a message to view")
            .size(15)
            .style(muted_text),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(detail_pane_style)
    .into()
}

fn view_message(msg: &ContactMessage, show_back: bool) -> Element<'static, Message> {
    let mut content = Vec::new();

    if show_back {
        content.push(
            button(text("\u{2190} Back to messages").size(13))
                .padding([6, 10])
                .style(back_button_style)
                .on_press(Message::Back)
                .into(),
        );
    }

    let service = text(msg.service.clone()).size(20).font(iced::Font {
        weight: iced::font::Weight::Bold,
        ..Default::default()
    });
    let body = text(msg.body.clone()).size(15);

    let phone_btn = button(text(format!("\u{260E} {}", msg.phone)).size(13))
        .padding([6, 10])
        .style(ghost_button_style)
        .on_press(Message::OpenPhone(msg.phone.clone()));
    let email_btn = button(text(format!("\u{2709} {}", msg.email)).size(13))
        .padding([6, 10])
        .style(ghost_button_style)
        .on_press(Message::OpenEmail(msg.email.clone()));
    let when = text(format!("\u{1F552} {}", format_timestamp(&msg.timestamp)))
        .size(13)
        .style(muted_text);

    let contact = column![
        text(format!("From {}", msg.name)).size(13).style(muted_text),
        row![phone_btn, email_btn].spacing(8),
        when,
    ]
    .spacing(6);

    content.push(
        scrollable(column![service, body, contact].spacing(18).padding(24))
            .height(Length::Fill)
            .style(scrollable_style)
            .into(),
    );

    container(iced::widget::Column::with_children(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(detail_pane_style)
        .into()
}
