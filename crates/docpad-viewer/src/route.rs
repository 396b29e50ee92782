//! Page routes and the route-consistency guard.
//!
//! A page lives at `/{title}` with the title percent-encoded as a single path
//! segment. The guard [`reconcile_route`] decides what a requested route
//! actually shows, so a stale or mistyped URL never lands on "page not found"
//! while the document has pages.

use docpad_storage::{Documentation, Page};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Characters escaped in a title path segment.
///
/// Same as `encodeURI`, plus the delimiters (`/`, `?`, `#`) that would split
/// the title across URL components.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Outcome of reconciling a requested route against the loaded document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// No document is loaded.
    Unloaded,
    /// A document is loaded but has no pages.
    Empty,
    /// The requested page exists; carries its exact title.
    Show(String),
    /// The requested page does not exist; go to this title instead.
    Redirect(String),
}

impl RouteDecision {
    /// Title that ends up displayed, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Show(title) | Self::Redirect(title) => Some(title),
            Self::Unloaded | Self::Empty => None,
        }
    }
}

/// URL path of the page with this title.
#[must_use]
pub fn page_path(title: &str) -> String {
    format!("/{}", utf8_percent_encode(title, PATH_SEGMENT))
}

/// Decode the title from a `/{title}` path. Returns `None` for `/`.
#[must_use]
pub fn title_from_path(path: &str) -> Option<String> {
    let segment = path.strip_prefix('/').unwrap_or(path);
    if segment.is_empty() {
        return None;
    }
    Some(percent_decode_str(segment).decode_utf8_lossy().into_owned())
}

/// Find the page a route title refers to.
///
/// Matches the title exactly first, then against the encoded form so that a
/// segment that reached us still encoded resolves too.
#[must_use]
pub fn find_page<'a>(documentation: &'a Documentation, requested: &str) -> Option<&'a Page> {
    documentation.find(requested).or_else(|| {
        documentation
            .pages
            .iter()
            .find(|p| utf8_percent_encode(&p.title, PATH_SEGMENT).to_string() == requested)
    })
}

/// Decide which page a requested route shows.
///
/// Any miss (including no title at all) redirects to the first page when the
/// document has pages.
#[must_use]
pub fn reconcile_route(
    documentation: Option<&Documentation>,
    requested: Option<&str>,
) -> RouteDecision {
    let Some(documentation) = documentation else {
        return RouteDecision::Unloaded;
    };
    let Some(first) = documentation.first_title() else {
        return RouteDecision::Empty;
    };

    match requested.and_then(|title| find_page(documentation, title)) {
        Some(page) => RouteDecision::Show(page.title.clone()),
        None => RouteDecision::Redirect(first.to_owned()),
    }
}
