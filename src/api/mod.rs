//! # API Module
//!
//! HTTP endpoints for the local callback server that runs during the
//! authorization flow.
//!
//! - [`callback`] - Receives the implicit grant redirect from Spotify's
//!   authorization server, relays the URL fragment back as a query string
//!   and classifies the result as success, cancellation or error.
//! - [`health`] - Health check endpoint returning application status and
//!   version information.
//!
//! The module is built on the [Axum](https://docs.rs/axum) web framework;
//! each endpoint is an async handler wired into the router in
//! [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
