//! Page editing actions posted to `/{title}`.

use std::sync::Arc;

use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use docpad_viewer::{RouteDecision, ViewerError};

use crate::error::ServerError;
use crate::handlers::{ActionForm, see_other};
use crate::state::AppState;
use crate::view;

/// Handle POST /{title}.
///
/// Posts against a page that does not exist (any more) are redirected to
/// wherever the route guard points, without applying the action.
pub(crate) async fn post_page(
    Path(title): Path<String>,
    State(state): State<Arc<AppState>>,
    Form(form): Form<ActionForm>,
) -> Result<Response, ServerError> {
    let mut controller = state.controller.lock().await;
    if !matches!(controller.navigate(Some(title.as_str())), RouteDecision::Show(_)) {
        return Ok(see_other(&controller.location()));
    }

    match form.action.as_str() {
        "edit" => {
            controller.begin_edit();
            Ok(see_other(&controller.location()))
        }
        "save" => {
            let result = controller.submit_edit(
                form.title.unwrap_or_default(),
                form.body_text.unwrap_or_default(),
            );
            match result {
                Ok(_) | Err(ViewerError::Storage(_)) => Ok(see_other(&controller.location())),
                Err(ViewerError::Validation(errors)) => {
                    tracing::debug!(title = %title, errors = ?errors, "Rejected page edit");
                    Ok((
                        StatusCode::UNPROCESSABLE_ENTITY,
                        Html(view::render(&controller, &state.version)),
                    )
                        .into_response())
                }
                Err(e) => Err(e.into()),
            }
        }
        other => Err(ServerError::UnknownAction(other.to_owned())),
    }
}
