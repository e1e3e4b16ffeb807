//! Login screen.

use iced::widget::{button, column, container, text, text_input};
use iced::{Element, Length};

use crate::message::{LoginMessage, Message};
use crate::model::LoginState;
use crate::style::{danger_text, ghost_button_style, input_style, primary_button_style, success_text};

/// Renders the login form with inline login and reset feedback.
pub fn view_login(state: &LoginState) -> Element<'_, Message> {
    let title = text("Admin Console").size(26).font(iced::Font {
        weight: iced::font::Weight::Bold,
        ..Default::default()
    });

    let email = text_input("Email", &state.email)
        .padding([10, 14])
        .style(input_style)
        .on_input(|v| Message::Login(LoginMessage::EmailChanged(v)))
        .on_submit(Message::Login(LoginMessage::Submit));

    let password = text_input("Password", &state.password)
        .secure(true)
        .padding([10, 14])
        .style(input_style)
        .on_input(|v| Message::Login(LoginMessage::PasswordChanged(v)))
        .on_submit(Message::Login(LoginMessage::Submit));

    let submit_label = if state.is_submitting {
        "Signing in..."
    } else {
        "Sign in"
    };
    let mut submit = button(text(submit_label).size(15))
        .padding([10, 24])
        .width(Length::Fill)
        .style(primary_button_style);
    if !state.is_submitting {
        submit = submit.on_press(Message::Login(LoginMessage::Submit));
    }

    let reset_label = if state.is_sending_reset {
        "Sending reset email..."
    } else {
        "Forgot password?"
    };
    let mut reset = button(text(reset_label).size(13)).style(ghost_button_style);
    if !state.is_sending_reset {
        reset = reset.on_press(Message::Login(LoginMessage::RequestReset));
    }

    let mut form = column![title, email, password, submit, reset]
        .spacing(14)
        .width(Length::Fixed(340.0));

    // Login and reset feedback render independently; both can be
    // visible at the same time.
    if let Some(error) = &state.login_error {
        form = form.push(text(error.clone()).size(13).style(danger_text));
    }
    if let Some(error) = &state.reset_error {
        form = form.push(text(error.clone()).size(13).style(danger_text));
    }
    if state.reset_sent {
        form = form.push(
            text("Reset email sent. Check the inbox.")
                .size(13)
                .style(success_text),
        );
    }

    container(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
