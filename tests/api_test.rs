use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query};
use tokio::sync::Mutex;

use trackli::api;
use trackli::types::{AuthOutcome, PendingAuth};

fn create_pending_auth(state_param: &str) -> Arc<Mutex<PendingAuth>> {
    Arc::new(Mutex::new(PendingAuth {
        state_param: state_param.to_string(),
        outcome: None,
    }))
}

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn test_callback_success_deposits_token() {
    let shared = create_pending_auth("expected-state");
    let query = params(&[
        ("access_token", "BQD-access-token"),
        ("token_type", "Bearer"),
        ("expires_in", "3600"),
        ("state", "expected-state"),
    ]);

    api::callback(Query(query), Extension(Arc::clone(&shared))).await;

    let lock = shared.lock().await;
    match &lock.outcome {
        Some(AuthOutcome::Success(token)) => {
            assert_eq!(token.access_token, "BQD-access-token");
            assert_eq!(token.token_type, "Bearer");
            assert_eq!(token.expires_in, 3600);
        }
        other => panic!("expected Success, got {:?}", other),
    }
}

#[tokio::test]
async fn test_callback_denial_classifies_as_cancelled() {
    let shared = create_pending_auth("expected-state");
    let query = params(&[("error", "access_denied"), ("state", "expected-state")]);

    api::callback(Query(query), Extension(Arc::clone(&shared))).await;

    let lock = shared.lock().await;
    assert!(matches!(lock.outcome, Some(AuthOutcome::Cancelled)));
}

#[tokio::test]
async fn test_callback_provider_error_keeps_code() {
    let shared = create_pending_auth("expected-state");
    let query = params(&[("error", "invalid_scope"), ("state", "expected-state")]);

    api::callback(Query(query), Extension(Arc::clone(&shared))).await;

    let lock = shared.lock().await;
    match &lock.outcome {
        Some(AuthOutcome::Error(code)) => assert_eq!(code, "invalid_scope"),
        other => panic!("expected Error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_callback_state_mismatch_is_an_error() {
    let shared = create_pending_auth("expected-state");
    let query = params(&[
        ("access_token", "BQD-access-token"),
        ("state", "tampered-state"),
    ]);

    api::callback(Query(query), Extension(Arc::clone(&shared))).await;

    let lock = shared.lock().await;
    match &lock.outcome {
        Some(AuthOutcome::Error(code)) => assert_eq!(code, "state_mismatch"),
        other => panic!("expected Error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_callback_without_params_serves_relay_page() {
    let shared = create_pending_auth("expected-state");

    let response = api::callback(Query(HashMap::new()), Extension(Arc::clone(&shared))).await;

    // fragment relay only; no outcome is classified yet
    assert!(response.0.contains("window.location.hash"));
    let lock = shared.lock().await;
    assert!(lock.outcome.is_none());
}

#[tokio::test]
async fn test_callback_missing_token_is_an_error() {
    let shared = create_pending_auth("expected-state");
    let query = params(&[("state", "expected-state")]);

    api::callback(Query(query), Extension(Arc::clone(&shared))).await;

    let lock = shared.lock().await;
    match &lock.outcome {
        Some(AuthOutcome::Error(code)) => assert_eq!(code, "missing access_token"),
        other => panic!("expected Error, got {:?}", other),
    }
}
