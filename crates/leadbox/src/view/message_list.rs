//! Message list pane.

use iced::widget::{button, column, container, row, scrollable, text, Column, Space};
use iced::{Element, Length};

use leadbox_core::{ContactMessage, MessageId};

use crate::message::Message;
use crate::model::format_timestamp;
use crate::style::{
    danger_text, list_pane_style, muted_text, row_selected_style, row_style, scrollable_style,
    unread_badge_style,
};

/// Renders the list pane: loading spinner, error state, empty state,
/// or the message rows.
pub fn view_message_list(
    messages: &[ContactMessage],
    selected: Option<&MessageId>,
    is_loading: bool,
    load_error: Option<&str>,
    width: Length,
) -> Element<'static, Message> {
    if is_loading {
        return pane_placeholder(
            text("Loading messages...").size(15).style(muted_text),
            width,
        );
    }

    if let Some(error) = load_error {
        return pane_placeholder(
            column![
                text("Could not load messages").size(15).style(danger_text),
                text(error.to_owned()).size(12).style(muted_text),
            ]
            .spacing(8)
            .align_x(iced::Alignment::Center),
            width,
        );
    }

    if messages.is_empty() {
        return pane_placeholder(text("No messages yet").size(15).style(muted_text), width);
    }

    let mut rows = Column::new();
    for msg in messages {
        let is_selected = selected == Some(&msg.id);
        rows = rows.push(view_row(msg, is_selected));
    }

    container(scrollable(rows).height(Length::Fill).style(scrollable_style))
        .width(width)
        .height(Length::Fill)
        .style(list_pane_style)
        .into()
}

/// One message row: name and phone on the left, time and the "New"
/// badge on the right.
fn view_row(msg: &ContactMessage, is_selected: bool) -> Element<'static, Message> {
    let name = text(msg.name.clone()).size(14).font(iced::Font {
        weight: if msg.read {
            iced::font::Weight::Normal
        } else {
            iced::font::Weight::Bold
        },
        ..Default::default()
    });
    let phone = text(msg.phone.clone()).size(12).style(muted_text);
    let when = text(format_timestamp(&msg.timestamp))
        .size(11)
        .style(muted_text);

    let mut right = Column::new().spacing(4).align_x(iced::Alignment::End).push(when);
    if !msg.read {
        right = right.push(
            container(text("New").size(10))
                .padding([2, 8])
                .style(unread_badge_style),
        );
    }

    let content = row![
        column![name, phone].spacing(2),
        Space::new().width(Length::Fill),
        right,
    ]
    .align_y(iced::Alignment::Start)
    .padding([10, 12]);

    button(content)
        .width(Length::Fill)
        .style(if is_selected {
            row_selected_style
        } else {
            row_style
        })
        .on_press(Message::SelectMessage(msg.id.clone()))
        .into()
}

fn pane_placeholder(
    content: impl Into<Element<'static, Message>>,
    width: Length,
) -> Element<'static, Message> {
    container(content)
        .width(width)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(list_pane_style)
        .into()
}
