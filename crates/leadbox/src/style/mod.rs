//! Styling and theming for the application.

pub mod palette;
mod widgets;

pub use widgets::{
    back_button_style, danger_text, detail_pane_style, ghost_button_style, header_style,
    input_style, list_pane_style, muted_text, primary_button_style, row_selected_style, row_style,
    scrollable_style, success_text, unread_badge_style,
};
