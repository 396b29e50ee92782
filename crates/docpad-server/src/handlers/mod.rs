//! HTTP request handlers.
//!
//! Reads render the controller view; mutations are form posts answered with
//! `303 See Other` to the controller's location.

pub(crate) mod document;
pub(crate) mod editor;
pub(crate) mod pages;

use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

/// Fields of every form the views post. Which ones are used depends on
/// `action`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ActionForm {
    #[serde(default)]
    pub(crate) action: String,
    pub(crate) url: Option<String>,
    pub(crate) title: Option<String>,
    #[serde(rename = "bodyText")]
    pub(crate) body_text: Option<String>,
}

/// Redirect the browser to `location` with a GET.
pub(crate) fn see_other(location: &str) -> Response {
    Redirect::to(location).into_response()
}
