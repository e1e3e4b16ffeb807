//! Header bar: brand strip with unread count and session actions.

use iced::widget::{button, container, row, text, Space};
use iced::{Element, Length};

use crate::message::Message;
use crate::style::{ghost_button_style, header_style};

/// Renders the top bar shown while signed in.
pub fn view_header(
    operator_email: &str,
    unread_count: usize,
    chime_enabled: bool,
) -> Element<'static, Message> {
    let title = text("Inbound Messages").size(18).font(iced::Font {
        weight: iced::font::Weight::Bold,
        ..Default::default()
    });

    let unread = if unread_count > 0 {
        text(format!("{unread_count} new")).size(13)
    } else {
        text("").size(13)
    };

    let chime_label = if chime_enabled {
        "\u{1F514} Chime on"
    } else {
        "\u{1F515} Chime off"
    };
    let chime_toggle = button(text(chime_label).size(13))
        .padding([6, 10])
        .style(ghost_button_style)
        .on_press(Message::ToggleChime);

    let theme_toggle = button(text("\u{25D1} Theme").size(13))
        .padding([6, 10])
        .style(ghost_button_style)
        .on_press(Message::ToggleTheme);

    let refresh = button(text("\u{21BB} Refresh").size(13))
        .padding([6, 10])
        .style(ghost_button_style)
        .on_press(Message::RefreshInbox);

    let logout = button(text(format!("Sign out ({operator_email})")).size(13))
        .padding([6, 10])
        .style(ghost_button_style)
        .on_press(Message::Logout);

    container(
        row![
            title,
            unread,
            Space::new().width(Length::Fill),
            refresh,
            chime_toggle,
            theme_toggle,
            logout,
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center)
        .padding([10, 16]),
    )
    .width(Length::Fill)
    .style(header_style)
    .into()
}
