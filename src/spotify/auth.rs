use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    config,
    server::start_callback_server,
    types::{AuthOutcome, PendingAuth},
    utils, warning,
};

/// The delegated authorization capability the pipeline consumes.
///
/// One operation: run an external authorization interaction to completion
/// and yield the classified outcome. The production implementation is
/// [`BrowserAuthorizer`]; tests substitute scripted outcomes.
#[allow(async_fn_in_trait)]
pub trait Authorizer {
    async fn begin_authorization(&self) -> AuthOutcome;
}

/// Runs the implicit grant flow through the system browser.
///
/// Construction starts the local callback server; every authorization
/// attempt in the session reuses it. Each attempt:
///
/// 1. Generates a fresh `state` parameter and resets the shared outcome slot
/// 2. Opens the Spotify authorization URL (`response_type=token`, no PKCE)
///    in the default browser
/// 3. Waits for the callback handler to deposit the classified outcome
///
/// The wait polls once per second with a 60 second ceiling; expiry is
/// reported as an error outcome. Browser launch failures degrade to a
/// warning with the URL for manual navigation.
pub struct BrowserAuthorizer {
    shared: Arc<Mutex<PendingAuth>>,
}

impl BrowserAuthorizer {
    pub fn new() -> Self {
        let shared = Arc::new(Mutex::new(PendingAuth::new()));

        let server_state = Arc::clone(&shared);
        tokio::spawn(async move {
            start_callback_server(server_state).await;
        });

        BrowserAuthorizer { shared }
    }
}

impl Default for BrowserAuthorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Authorizer for BrowserAuthorizer {
    async fn begin_authorization(&self) -> AuthOutcome {
        let state_param = utils::generate_state_param();

        // Arm the callback handler for this attempt before the redirect
        {
            let mut lock = self.shared.lock().await;
            lock.state_param = state_param.clone();
            lock.outcome = None;
        }

        let auth_url = format!(
            "{spotify_auth_url}?client_id={client_id}&response_type=token&redirect_uri={redirect_uri}&scope={scope}&state={state}",
            spotify_auth_url = &config::spotify_apiauth_url(),
            client_id = &config::spotify_client_id(),
            redirect_uri = &config::spotify_redirect_uri(),
            scope = &config::spotify_scope(),
            state = state_param
        );

        if webbrowser::open(&auth_url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                auth_url
            )
        }

        match wait_for_outcome(Arc::clone(&self.shared)).await {
            Some(outcome) => outcome,
            None => AuthOutcome::Error("authorization timed out".to_string()),
        }
    }
}

/// Waits for the callback handler to classify the redirect.
///
/// Polls the shared state once per second with a 60 second ceiling and
/// returns `None` when the ceiling is reached without an outcome.
async fn wait_for_outcome(shared_state: Arc<Mutex<PendingAuth>>) -> Option<AuthOutcome> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(outcome) = &lock.outcome {
            return Some(outcome.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
