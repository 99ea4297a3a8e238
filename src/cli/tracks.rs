use std::{
    io::{self, BufRead},
    time::Duration,
};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, info,
    session::{Session, SessionState},
    spotify::{
        self,
        auth::{Authorizer, BrowserAuthorizer},
    },
    types::{AuthFailure, Track, TrackRow},
    utils, warning,
};

/// Runs the connect-then-list pipeline.
///
/// The session starts unauthenticated and the loop drives it through the
/// state machine: prompt, authorize, fetch once per successful
/// authorization, render. Cancelled or errored authorizations fall back to
/// the prompt for a manual re-trigger; nothing is retried automatically.
pub async fn tracks() {
    let authorizer = BrowserAuthorizer::new();
    let mut session = Session::new();

    loop {
        match session.state() {
            SessionState::Unauthenticated { failure } => {
                render_connect_prompt(failure.as_ref());
                if !wait_for_activation() {
                    return;
                }
                session.begin_authorization();
            }
            SessionState::Authenticating => {
                let pb = spinner("Waiting for Spotify authorization in the browser...");
                let outcome = authorizer.begin_authorization().await;
                pb.finish_and_clear();

                if let Some(token) = session.complete_authorization(outcome) {
                    let pb = spinner("Fetching tracks from Spotify...");
                    let result = spotify::tracks::fetch_tracks(&token, config::TRACK_SOURCE).await;
                    pb.finish_and_clear();
                    session.complete_fetch(result);
                }
            }
            SessionState::AuthenticatedEmpty { .. } => {
                // the fetch runs inline after authorization; seeing this
                // state here means it never started
                warning!("No track fetch was started.");
                return;
            }
            SessionState::AuthenticatedLoaded { tracks, .. } => {
                render_track_list(tracks);
                return;
            }
            SessionState::AuthenticatedError { error, .. } => {
                warning!("Could not load tracks: {}", error);
                return;
            }
        }
    }
}

fn render_connect_prompt(failure: Option<&AuthFailure>) {
    match failure {
        Some(AuthFailure::Cancelled) => warning!("Spotify connection was cancelled."),
        Some(AuthFailure::Provider(code)) => {
            warning!("Spotify reported an authorization error: {}", code)
        }
        None => {}
    }

    println!("{}", "CONNECT WITH SPOTIFY".green().bold());
    info!("Press Enter to open the authorization page (Ctrl-C to quit).");
}

/// Blocks until the user activates the prompt. Returns false on EOF.
fn wait_for_activation() -> bool {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map(|read| read > 0)
        .unwrap_or(false)
}

fn render_track_list(tracks: &[Track]) {
    let rows: Vec<TrackRow> = utils::track_rows(tracks);
    let table = Table::new(rows);
    println!(
        "{heading}\n{table}",
        heading = config::TRACK_SOURCE.heading().bold(),
        table = table
    );
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
