use trackli::session::{Session, SessionState};
use trackli::types::{
    AuthFailure, AuthOutcome, FetchError, Image, Token, Track, TrackAlbum, TrackArtist,
};

fn create_test_token(access_token: &str) -> Token {
    Token {
        access_token: access_token.to_string(),
        token_type: "Bearer".to_string(),
        expires_in: 3600,
    }
}

fn create_test_track(number: u32, name: &str) -> Track {
    Track {
        track_number: number,
        name: name.to_string(),
        duration_ms: 180000,
        artists: vec![TrackArtist {
            name: "Artist".to_string(),
        }],
        album: TrackAlbum {
            name: "Album".to_string(),
            images: vec![Image {
                url: "https://img.example/cover.jpg".to_string(),
            }],
        },
    }
}

#[test]
fn test_new_session_is_unauthenticated() {
    let session = Session::new();

    assert!(matches!(
        session.state(),
        SessionState::Unauthenticated { failure: None }
    ));
    assert_eq!(session.token(), None);
}

#[test]
fn test_successful_authorization_holds_exact_token_and_triggers_one_fetch() {
    let mut session = Session::new();

    session.begin_authorization();
    assert!(matches!(session.state(), SessionState::Authenticating));

    let fetch_token = session.complete_authorization(AuthOutcome::Success(create_test_token(
        "BQD-access-token",
    )));

    // the fetch directive is issued exactly once, carrying the held token
    assert_eq!(fetch_token.as_deref(), Some("BQD-access-token"));
    assert_eq!(session.token(), Some("BQD-access-token"));
    assert!(matches!(
        session.state(),
        SessionState::AuthenticatedEmpty { .. }
    ));
}

#[test]
fn test_cancelled_authorization_leaves_token_empty() {
    let mut session = Session::new();
    session.begin_authorization();

    let fetch_token = session.complete_authorization(AuthOutcome::Cancelled);

    assert_eq!(fetch_token, None);
    assert_eq!(session.token(), None);
    match session.state() {
        SessionState::Unauthenticated { failure } => {
            assert_eq!(failure.as_ref(), Some(&AuthFailure::Cancelled));
        }
        other => panic!("expected Unauthenticated, got {:?}", other),
    }
}

#[test]
fn test_errored_authorization_records_provider_code() {
    let mut session = Session::new();
    session.begin_authorization();

    let fetch_token =
        session.complete_authorization(AuthOutcome::Error("invalid_scope".to_string()));

    assert_eq!(fetch_token, None);
    assert_eq!(session.token(), None);
    match session.state() {
        SessionState::Unauthenticated { failure } => {
            assert_eq!(
                failure.as_ref(),
                Some(&AuthFailure::Provider("invalid_scope".to_string()))
            );
        }
        other => panic!("expected Unauthenticated, got {:?}", other),
    }
}

#[test]
fn test_empty_access_token_never_authenticates() {
    let mut session = Session::new();
    session.begin_authorization();

    let fetch_token = session.complete_authorization(AuthOutcome::Success(create_test_token("")));

    assert_eq!(fetch_token, None);
    assert_eq!(session.token(), None);
    assert!(matches!(
        session.state(),
        SessionState::Unauthenticated { failure: Some(_) }
    ));
}

#[test]
fn test_fetch_success_loads_tracks_in_order() {
    let mut session = Session::new();
    session.begin_authorization();
    session.complete_authorization(AuthOutcome::Success(create_test_token("tok")));

    session.complete_fetch(Ok(vec![
        create_test_track(1, "One"),
        create_test_track(2, "Two"),
        create_test_track(3, "Three"),
    ]));

    match session.state() {
        SessionState::AuthenticatedLoaded { token, tracks } => {
            assert_eq!(token, "tok");
            assert_eq!(tracks.len(), 3);
            let names: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();
            assert_eq!(names, vec!["One", "Two", "Three"]);
        }
        other => panic!("expected AuthenticatedLoaded, got {:?}", other),
    }
}

#[test]
fn test_fetch_failure_keeps_token_and_records_error() {
    let mut session = Session::new();
    session.begin_authorization();
    session.complete_authorization(AuthOutcome::Success(create_test_token("tok")));

    session.complete_fetch(Err(FetchError::Status(
        reqwest::StatusCode::INTERNAL_SERVER_ERROR,
    )));

    assert_eq!(session.token(), Some("tok"));
    match session.state() {
        SessionState::AuthenticatedError { error, .. } => {
            assert!(matches!(error, FetchError::Status(_)));
        }
        other => panic!("expected AuthenticatedError, got {:?}", other),
    }
}

#[test]
fn test_fetch_result_ignored_without_authorization() {
    let mut session = Session::new();

    session.complete_fetch(Ok(vec![create_test_track(1, "One")]));

    assert!(matches!(
        session.state(),
        SessionState::Unauthenticated { .. }
    ));
    assert_eq!(session.token(), None);
}

#[test]
fn test_reauthorization_replaces_token() {
    let mut session = Session::new();
    session.begin_authorization();
    session.complete_authorization(AuthOutcome::Success(create_test_token("first-token")));
    session.complete_fetch(Ok(vec![create_test_track(1, "One")]));
    assert_eq!(session.token(), Some("first-token"));

    // manual re-trigger after a prior success
    session.begin_authorization();
    assert_eq!(session.token(), None);

    let fetch_token =
        session.complete_authorization(AuthOutcome::Success(create_test_token("second-token")));

    // the new token replaces the old one wholesale, and a new fetch starts
    assert_eq!(fetch_token.as_deref(), Some("second-token"));
    assert_eq!(session.token(), Some("second-token"));
    assert!(matches!(
        session.state(),
        SessionState::AuthenticatedEmpty { .. }
    ));
}

#[test]
fn test_cancellation_after_prior_success_discards_old_token() {
    let mut session = Session::new();
    session.begin_authorization();
    session.complete_authorization(AuthOutcome::Success(create_test_token("first-token")));

    session.begin_authorization();
    session.complete_authorization(AuthOutcome::Cancelled);

    assert_eq!(session.token(), None);
    assert!(matches!(
        session.state(),
        SessionState::Unauthenticated {
            failure: Some(AuthFailure::Cancelled)
        }
    ));
}
