//! View components for the application.

mod header;
mod login;
mod message_list;
mod message_view;

pub use header::view_header;
pub use login::view_login;
pub use message_list::view_message_list;
pub use message_view::view_message_detail;
