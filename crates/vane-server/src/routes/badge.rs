use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;
use vane_core::badge::{self, BadgeSpec};
use vane_core::gate;
use vane_core::resolve::{self, Selector};

/// Badges reflect live, potentially sensitive state and must never be
/// cached by intermediaries.
const CACHE_CONTROL_VALUE: &str = "private, no-store";

const SVG_CONTENT_TYPE: &str = "image/svg+xml";

#[derive(serde::Deserialize)]
pub struct BadgeParams {
    /// Single-application selector.
    pub name: Option<String>,
    /// Project selector; `name` wins when both are given.
    pub project: Option<String>,
    /// Boolean-ish flag: only the literal `"true"` requests the suffix.
    pub revision: Option<String>,
}

/// GET /api/badge?name=…|project=…&revision=true
///
/// Always responds 200 with an SVG body. Disabled feature, unknown
/// application and store failure all render the same Unknown badge, so a
/// caller cannot probe for application existence through this endpoint.
pub async fn status_badge(
    State(app): State<AppState>,
    Query(params): Query<BadgeParams>,
) -> Response {
    let spec = tokio::task::spawn_blocking(move || badge_spec(&app, &params))
        .await
        .unwrap_or_else(|_| BadgeSpec::unknown());
    let body = badge::render(&spec);

    (
        [
            (header::CACHE_CONTROL, CACHE_CONTROL_VALUE),
            (header::CONTENT_TYPE, SVG_CONTENT_TYPE),
        ],
        body,
    )
        .into_response()
}

/// Run the gate → resolve → map pipeline for one request. Shared with
/// `vane render`, which prints the same badge to stdout.
pub fn badge_spec(app: &AppState, params: &BadgeParams) -> BadgeSpec {
    if !gate::badge_enabled(app.settings.as_ref()) {
        // Skip resolution entirely: a disabled badge must not reveal
        // whether the application exists.
        return BadgeSpec::unknown();
    }

    let selector = Selector::from_params(params.name.as_deref(), params.project.as_deref());
    let status = match &selector {
        Some(selector) => {
            resolve::resolve(app.apps.as_ref(), selector).unwrap_or_else(|err| {
                tracing::debug!("status lookup failed: {err}");
                None
            })
        }
        None => None,
    };

    let revision_requested = params.revision.as_deref() == Some("true");
    let show_revision = revision_requested && gate::revision_enabled(app.settings.as_ref());
    badge::map_status(true, status.as_ref(), show_revision)
}
