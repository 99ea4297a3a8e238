//! Session state machine for the auth-then-fetch pipeline.
//!
//! The session moves through five states. The two asynchronous events of the
//! pipeline drive it: the classified authorization outcome and the fetch
//! result. A fetch is started exactly when [`Session::complete_authorization`]
//! hands back a token, which happens once per successful authorization and
//! never otherwise.

use crate::types::{AuthFailure, AuthOutcome, FetchError, Track};

#[derive(Debug)]
pub enum SessionState {
    /// No token held. Carries the reason the last attempt failed, if any,
    /// so the prompt can show it.
    Unauthenticated { failure: Option<AuthFailure> },
    /// The external authorization interaction is in flight.
    Authenticating,
    /// A token is held but no track listing has been loaded yet.
    AuthenticatedEmpty { token: String },
    /// A token is held and the track listing arrived, in provider order.
    AuthenticatedLoaded { token: String, tracks: Vec<Track> },
    /// A token is held but the fetch failed.
    AuthenticatedError { token: String, error: FetchError },
}

#[derive(Debug)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Session {
            state: SessionState::Unauthenticated { failure: None },
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The held bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        match &self.state {
            SessionState::AuthenticatedEmpty { token }
            | SessionState::AuthenticatedLoaded { token, .. }
            | SessionState::AuthenticatedError { token, .. } => Some(token.as_str()),
            SessionState::Unauthenticated { .. } | SessionState::Authenticating => None,
        }
    }

    /// Enters the Authenticating state. Any previously held token is
    /// discarded; a later success replaces it wholesale.
    pub fn begin_authorization(&mut self) {
        self.state = SessionState::Authenticating;
    }

    /// Applies the classified authorization outcome.
    ///
    /// Returns the token to fetch with exactly when the outcome populated
    /// the session token; the caller must start one fetch for it. Cancelled
    /// and errored outcomes leave the session unauthenticated and start
    /// nothing. A success carrying an empty token never authenticates.
    pub fn complete_authorization(&mut self, outcome: AuthOutcome) -> Option<String> {
        match outcome {
            AuthOutcome::Success(token) if token.access_token.is_empty() => {
                self.state = SessionState::Unauthenticated {
                    failure: Some(AuthFailure::Provider("empty access token".to_string())),
                };
                None
            }
            AuthOutcome::Success(token) => {
                self.state = SessionState::AuthenticatedEmpty {
                    token: token.access_token.clone(),
                };
                Some(token.access_token)
            }
            AuthOutcome::Cancelled => {
                self.state = SessionState::Unauthenticated {
                    failure: Some(AuthFailure::Cancelled),
                };
                None
            }
            AuthOutcome::Error(code) => {
                self.state = SessionState::Unauthenticated {
                    failure: Some(AuthFailure::Provider(code)),
                };
                None
            }
        }
    }

    /// Applies the fetch result. Only meaningful right after a successful
    /// authorization; in any other state the event is ignored.
    pub fn complete_fetch(&mut self, result: Result<Vec<Track>, FetchError>) {
        let token = match &self.state {
            SessionState::AuthenticatedEmpty { token } => token.clone(),
            _ => return,
        };

        self.state = match result {
            Ok(tracks) => SessionState::AuthenticatedLoaded { token, tracks },
            Err(error) => SessionState::AuthenticatedError { token, error },
        };
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
