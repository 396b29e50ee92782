//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use docpad_viewer::ViewerError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Form posted with an action the route does not handle.
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Controller operation failed.
    #[error(transparent)]
    Viewer(#[from] ViewerError),

    /// Blocking fetch task panicked or was cancelled.
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::UnknownAction(action) => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Unknown action", "action": action}),
            ),
            Self::Viewer(ViewerError::NotLoaded) => (
                StatusCode::NOT_FOUND,
                json!({"error": "No documentation loaded"}),
            ),
            Self::Viewer(_) | Self::Task(_) => {
                tracing::error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": self.to_string()}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_action_is_bad_request() {
        let response = ServerError::UnknownAction("delete".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_loaded_is_not_found() {
        let response = ServerError::Viewer(ViewerError::NotLoaded).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
