use rand::{Rng, distr::Alphanumeric};

use crate::types::{Track, TrackRow};

/// Random `state` parameter guarding the authorization redirect.
pub fn generate_state_param() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Renders a duration in milliseconds as `minutes:seconds`, seconds
/// zero-padded to two digits, minutes unpadded.
pub fn format_duration_ms(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Maps tracks onto display rows, preserving provider order.
///
/// The first listed artist and the first album image win when several are
/// present. The mapping is total; records with no artist or no image render
/// with the field blank (fetch validation rejects them before they get here).
pub fn track_rows(tracks: &[Track]) -> Vec<TrackRow> {
    tracks
        .iter()
        .map(|t| TrackRow {
            number: t.track_number,
            title: t.name.clone(),
            artist: t
                .artists
                .first()
                .map(|a| a.name.clone())
                .unwrap_or_default(),
            album: t.album.name.clone(),
            length: format_duration_ms(t.duration_ms),
            cover: t
                .album
                .images
                .first()
                .map(|i| i.url.clone())
                .unwrap_or_default(),
        })
        .collect()
}
