//! Whole-document actions posted to `/`: fetch from a URL and export.

use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use md5::{Digest, Md5};

use crate::error::ServerError;
use crate::handlers::{ActionForm, see_other};
use crate::state::AppState;

/// Handle POST /.
pub(crate) async fn post_root(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ActionForm>,
) -> Result<Response, ServerError> {
    match form.action.as_str() {
        "fetch" => fetch(&state, form.url.unwrap_or_default()).await,
        "export" => export(&state).await,
        other => Err(ServerError::UnknownAction(other.to_owned())),
    }
}

/// Validate the URL, fetch on a blocking worker and apply the result.
///
/// The controller lock is released while the request is in flight, so other
/// requests see the loading state.
async fn fetch(state: &AppState, url_input: String) -> Result<Response, ServerError> {
    let (url, source) = {
        let mut controller = state.controller.lock().await;
        controller.set_url_input(url_input);
        match controller.begin_fetch() {
            Ok(url) => (url, controller.source()),
            Err(_) => return Ok(see_other(&controller.location())),
        }
    };

    let joined = tokio::task::spawn_blocking(move || source.fetch(&url)).await;

    let mut controller = state.controller.lock().await;
    match joined {
        Ok(result) => {
            // Failures are shown inline by the next render.
            let _ = controller.complete_fetch(result);
            Ok(see_other(&controller.location()))
        }
        Err(e) => {
            controller.abort_fetch();
            Err(e.into())
        }
    }
}

async fn export(state: &AppState) -> Result<Response, ServerError> {
    let export = state.controller.lock().await.export()?;
    let etag = compute_etag(&state.version, &export.contents);

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.file_name),
            ),
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "no-store".to_owned()),
        ],
        export.contents,
    )
        .into_response())
}

/// Compute `ETag` from version and content.
///
/// MD5 truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
