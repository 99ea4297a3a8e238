use serde::{Deserialize, Serialize};
use tabled::Tabled;
use thiserror::Error;

/// Which track listing the application fetches after authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackSource {
    /// `GET /me/top/tracks` for the authorized user.
    TopTracks,
    /// `GET /albums/{id}` for the configured album.
    Album,
}

impl TrackSource {
    pub fn heading(&self) -> &'static str {
        match self {
            TrackSource::TopTracks => "My Top Tracks",
            TrackSource::Album => "Current Album Tracks",
        }
    }
}

/// Bearer credential delivered by the implicit grant redirect.
///
/// Held in process memory for the lifetime of the session; never refreshed
/// and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Classified result of one authorization interaction.
///
/// Consumed exactly once to populate (or not populate) the session token.
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    Success(Token),
    Cancelled,
    Error(String),
}

/// Why the last authorization attempt left the session unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    Cancelled,
    Provider(String),
}

/// Shared state between the authorization flow and the callback handler.
///
/// The `state` parameter is written before the browser is opened; the
/// callback handler checks it against the redirect and deposits the
/// classified outcome.
#[derive(Debug, Clone)]
pub struct PendingAuth {
    pub state_param: String,
    pub outcome: Option<AuthOutcome>,
}

impl PendingAuth {
    pub fn new() -> Self {
        PendingAuth {
            state_param: String::new(),
            outcome: None,
        }
    }
}

impl Default for PendingAuth {
    fn default() -> Self {
        Self::new()
    }
}

/// How a track fetch failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Spotify returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("track {index} is missing {field}")]
    MalformedTrack { index: usize, field: &'static str },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<Track>,
}

/// One track as returned by the catalog, with its album attached.
///
/// Top-track responses carry the album inline; album responses carry
/// simplified tracks that get the album stamped on afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub track_number: u32,
    pub name: String,
    pub duration_ms: u64,
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumDetailResponse {
    pub name: String,
    pub images: Vec<Image>,
    pub tracks: AlbumTrackPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTrackPage {
    pub items: Vec<AlbumTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTrack {
    pub track_number: u32,
    pub name: String,
    pub duration_ms: u64,
    pub artists: Vec<TrackArtist>,
}

#[derive(Tabled)]
pub struct TrackRow {
    pub number: u32,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub length: String,
    pub cover: String,
}
