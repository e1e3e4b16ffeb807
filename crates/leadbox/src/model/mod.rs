//! Data models for the admin console UI.

mod login;
mod message;
mod settings;

pub use login::LoginState;
pub use message::{format_timestamp, relative_label};
pub use settings::AppSettings;
