use reqwest::Client;

use crate::{
    config,
    types::{
        AlbumDetailResponse, FetchError, TopTracksResponse, Track, TrackAlbum, TrackSource,
    },
};

/// Fetches the track listing for the selected source.
///
/// One outbound read per call; the pipeline invokes it exactly once per
/// successful authorization. There is no retry and no deadline beyond the
/// transport's own.
pub async fn fetch_tracks(token: &str, source: TrackSource) -> Result<Vec<Track>, FetchError> {
    match source {
        TrackSource::TopTracks => top_tracks(token).await,
        TrackSource::Album => album_tracks(token, &config::spotify_album_id()).await,
    }
}

/// Retrieves the authorized user's top tracks from the Spotify Web API.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Track>)` - Top tracks in the provider's order
/// - `Err(FetchError)` - Network failure, non-success HTTP status, or a
///   malformed track record
pub async fn top_tracks(token: &str) -> Result<Vec<Track>, FetchError> {
    let client = Client::new();
    let api_url = format!("{uri}/me/top/tracks", uri = &config::spotify_apiurl());

    let response = client.get(&api_url).bearer_auth(token).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let json = response.json::<TopTracksResponse>().await?;
    validate_tracks(&json.items)?;

    Ok(json.items)
}

/// Retrieves the track listing of one album from the Spotify Web API.
///
/// Fetches the full album object and stamps the album's name and images
/// onto each of its simplified tracks, so both sources yield the same
/// record shape downstream.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `album_id` - Spotify ID of the album to list
pub async fn album_tracks(token: &str, album_id: &str) -> Result<Vec<Track>, FetchError> {
    let client = Client::new();
    let api_url = format!(
        "{uri}/albums/{id}",
        uri = &config::spotify_apiurl(),
        id = album_id
    );

    let response = client.get(&api_url).bearer_auth(token).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let album = response.json::<AlbumDetailResponse>().await?;
    let tracks = assemble_album_tracks(album);
    validate_tracks(&tracks)?;

    Ok(tracks)
}

/// Attaches the album's name and images to each of its simplified tracks.
pub fn assemble_album_tracks(album: AlbumDetailResponse) -> Vec<Track> {
    let AlbumDetailResponse {
        name,
        images,
        tracks,
    } = album;
    let album = TrackAlbum { name, images };

    tracks
        .items
        .into_iter()
        .map(|t| Track {
            track_number: t.track_number,
            name: t.name,
            duration_ms: t.duration_ms,
            artists: t.artists,
            album: album.clone(),
        })
        .collect()
}

/// Rejects records the row mapping could not display in full.
///
/// Every accepted track has at least one artist and at least one album
/// image, so the first-of-each projection downstream is total.
pub fn validate_tracks(tracks: &[Track]) -> Result<(), FetchError> {
    for (index, track) in tracks.iter().enumerate() {
        if track.artists.is_empty() {
            return Err(FetchError::MalformedTrack {
                index,
                field: "artists",
            });
        }
        if track.album.images.is_empty() {
            return Err(FetchError::MalformedTrack {
                index,
                field: "album.images",
            });
        }
    }

    Ok(())
}
