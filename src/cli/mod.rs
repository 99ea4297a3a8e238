//! # CLI Module
//!
//! User-facing command implementations. The one substantial command is
//! [`tracks`], which runs the whole pipeline: show the connect prompt, run
//! the browser authorization on activation, fetch the selected track listing
//! once, and render it as a table.
//!
//! Every failure class gets its own visible state rather than a silent empty
//! screen: cancellation and provider errors return to the prompt with a
//! notice, fetch failures and malformed records render an error line naming
//! the cause.

mod tracks;

pub use tracks::tracks;
