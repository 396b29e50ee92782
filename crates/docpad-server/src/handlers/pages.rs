//! Page views.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use docpad_viewer::RouteDecision;

use crate::handlers::see_other;
use crate::state::AppState;
use crate::view;

/// Handle GET /.
pub(crate) async fn get_root(State(state): State<Arc<AppState>>) -> Response {
    show(&state, None).await
}

/// Handle GET /{title}.
pub(crate) async fn get_page(
    Path(title): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    show(&state, Some(title.as_str())).await
}

async fn show(state: &AppState, title: Option<&str>) -> Response {
    let mut controller = state.controller.lock().await;
    match controller.navigate(title) {
        RouteDecision::Redirect(_) => see_other(&controller.location()),
        RouteDecision::Unloaded | RouteDecision::Empty | RouteDecision::Show(_) => {
            Html(view::render(&controller, &state.version)).into_response()
        }
    }
}
