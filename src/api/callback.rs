use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::types::{AuthOutcome, PendingAuth, Token};

/// Page served when the callback is hit without query parameters.
///
/// The implicit grant delivers the token in the URL fragment, which never
/// reaches the server. This page re-requests the callback with the fragment
/// converted to a query string so the handler can read it.
const FRAGMENT_RELAY_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <script>
      var fragment = window.location.hash;
      if (fragment && fragment.length > 1) {
        window.location.replace(window.location.pathname + "?" + fragment.substring(1));
      } else {
        document.body.innerHTML = "<h4>Missing authorization response.</h4>";
      }
    </script>
  </body>
</html>"#;

/// Classifies the authorization redirect and deposits the outcome in the
/// shared state the flow is polling on.
///
/// Success redirects carry `access_token` (relayed from the fragment);
/// denials and provider errors carry `error` in the query directly. The
/// `state` parameter must match the one generated for this attempt.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<PendingAuth>>>,
) -> Html<&'static str> {
    if params.is_empty() {
        return Html(FRAGMENT_RELAY_PAGE);
    }

    let mut state = shared_state.lock().await;

    if params.get("state").map(String::as_str) != Some(state.state_param.as_str()) {
        state.outcome = Some(AuthOutcome::Error("state_mismatch".to_string()));
        return Html("<h4>Login failed.</h4>");
    }

    if let Some(access_token) = params.get("access_token") {
        let token = Token {
            access_token: access_token.clone(),
            token_type: params
                .get("token_type")
                .cloned()
                .unwrap_or_else(|| "Bearer".to_string()),
            expires_in: params
                .get("expires_in")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
        };
        state.outcome = Some(AuthOutcome::Success(token));
        Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
    } else if let Some(error) = params.get("error") {
        state.outcome = Some(if error == "access_denied" {
            AuthOutcome::Cancelled
        } else {
            AuthOutcome::Error(error.clone())
        });
        Html("<h4>Login was not completed.</h4>")
    } else {
        state.outcome = Some(AuthOutcome::Error("missing access_token".to_string()));
        Html("<h4>Missing token in authorization response.</h4>")
    }
}
