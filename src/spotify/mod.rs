//! # Spotify Integration Module
//!
//! The integration layer between the CLI and the Spotify Web API. It covers
//! the two concerns the pipeline needs and nothing more:
//!
//! - [`auth`] - The implicit grant authorization flow. Exposes the
//!   [`auth::Authorizer`] capability consumed by the CLI and the browser
//!   implementation behind it (local callback server, browser launch,
//!   outcome polling).
//! - [`tracks`] - The single authenticated catalog read per session: the
//!   user's top tracks or the tracks of one album.
//!
//! ## API Coverage
//!
//! - `GET /me/top/tracks` - the authorized user's top tracks
//! - `GET /albums/{id}` - one album with its track listing
//!
//! Both requests authenticate with `Authorization: Bearer <token>`. There is
//! no token refresh and no persistence; a token lives exactly as long as the
//! process.

pub mod auth;
pub mod tracks;
