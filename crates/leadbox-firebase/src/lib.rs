//! # leadbox-firebase
//!
//! Minimal REST clients for the two hosted Google services `leadbox`
//! talks to:
//!
//! - **Identity Toolkit** (Firebase Authentication): email/password
//!   sign-in and password-reset dispatch.
//! - **Cloud Firestore**: ordered collection queries and single-field
//!   updates over the documents REST API.
//!
//! Only the handful of endpoints the admin console needs are covered;
//! this is not a general Firebase SDK.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod auth;
mod config;
mod error;
mod firestore;

pub use auth::{AuthClient, AuthSession};
pub use config::ProjectConfig;
pub use error::{Error, Result};
pub use firestore::{FirestoreClient, MessageDocument};
