//! Viewer controller.
//!
//! The controller owns the loaded [`Documentation`] and everything the
//! viewer shows around it: the current route, the URL input, loading flags,
//! the inline error and the page editor. Every operation ends by reconciling
//! the route so the displayed page always exists.

use std::sync::Arc;

use docpad_renderer::MarkdownRenderer;
use docpad_storage::{Documentation, Page, Storage};

use crate::editor::PageEditor;
use crate::error::{FetchError, ViewerError};
use crate::route::{RouteDecision, find_page, page_path, reconcile_route};
use crate::sidebar::{SidebarItem, sidebar_items};
use crate::source::DocumentSource;
use crate::url::{fetch_url, is_valid_url};
use crate::validation::{FieldErrors, ValidationRules};

/// Inline error for input that is not a URL.
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL.";

/// Inline error for any fetch failure.
pub const FETCH_FAILED_MESSAGE: &str = "Something went wrong";

/// File name offered for exports.
pub const EXPORT_FILE_NAME: &str = "documentation.json";

/// Serialized documentation ready to be downloaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
    /// Suggested file name.
    pub file_name: &'static str,
    /// JSON contents, identical to what storage holds.
    pub contents: String,
}

/// Owner of the viewer state.
pub struct Controller {
    storage: Arc<dyn Storage>,
    source: Arc<dyn DocumentSource>,
    renderer: MarkdownRenderer,
    documentation: Option<Documentation>,
    route_title: Option<String>,
    decision: RouteDecision,
    url_input: String,
    loading_submit: bool,
    loading_export: bool,
    error_message: Option<&'static str>,
    editor: PageEditor,
}

impl Controller {
    /// Create an unloaded controller. Call [`Controller::hydrate`] to pick up
    /// stored documentation.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, source: Arc<dyn DocumentSource>) -> Self {
        Self {
            storage,
            source,
            renderer: MarkdownRenderer::new(),
            documentation: None,
            route_title: None,
            decision: RouteDecision::Unloaded,
            url_input: String::new(),
            loading_submit: false,
            loading_export: false,
            error_message: None,
            editor: PageEditor::default(),
        }
    }

    /// Load the stored documentation, if any.
    ///
    /// A missing or unreadable entry leaves the controller unloaded.
    pub fn hydrate(&mut self) -> RouteDecision {
        match self.storage.get() {
            Ok(Some(documentation)) => {
                tracing::info!(pages = documentation.len(), "Loaded stored documentation");
                self.documentation = Some(documentation);
            }
            Ok(None) => tracing::debug!("No stored documentation"),
            Err(e) => tracing::warn!(error = %e, "Ignoring unreadable stored documentation"),
        }
        self.reconcile()
    }

    /// Loaded documentation, if any.
    #[must_use]
    pub fn documentation(&self) -> Option<&Documentation> {
        self.documentation.as_ref()
    }

    /// Title in the current route.
    #[must_use]
    pub fn route_title(&self) -> Option<&str> {
        self.route_title.as_deref()
    }

    /// Outcome of the last route reconciliation.
    #[must_use]
    pub fn route(&self) -> &RouteDecision {
        &self.decision
    }

    /// Path the viewer should be at.
    #[must_use]
    pub fn location(&self) -> String {
        match (&self.decision, &self.route_title) {
            (RouteDecision::Show(_) | RouteDecision::Redirect(_), Some(title)) => page_path(title),
            _ => "/".to_owned(),
        }
    }

    /// Current URL input.
    #[must_use]
    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    /// Replace the URL input.
    pub fn set_url_input(&mut self, value: impl Into<String>) {
        self.url_input = value.into();
    }

    /// True while a fetch is in flight.
    #[must_use]
    pub fn is_loading_submit(&self) -> bool {
        self.loading_submit
    }

    /// True while an export is being produced.
    #[must_use]
    pub fn is_loading_export(&self) -> bool {
        self.loading_export
    }

    /// Inline error shown under the URL input.
    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        self.error_message
    }

    /// Source documents are fetched from.
    #[must_use]
    pub fn source(&self) -> Arc<dyn DocumentSource> {
        Arc::clone(&self.source)
    }

    /// Validate the URL input and mark a fetch as started.
    ///
    /// Returns the URL to request. The caller performs the request (without
    /// holding the controller) and hands the result to
    /// [`Controller::complete_fetch`].
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] and sets the inline error when the
    /// input is not a URL. Nothing else changes in that case.
    pub fn begin_fetch(&mut self) -> Result<String, FetchError> {
        if !is_valid_url(&self.url_input) {
            tracing::debug!(input = %self.url_input, "Rejected URL input");
            self.error_message = Some(INVALID_URL_MESSAGE);
            return Err(FetchError::InvalidUrl(self.url_input.clone()));
        }
        self.loading_submit = true;
        Ok(fetch_url(&self.url_input))
    }

    /// Apply the result of a fetch started with [`Controller::begin_fetch`].
    ///
    /// On success the fetched documentation replaces the current one and is
    /// persisted, the route moves to its first page and the inline error is
    /// cleared. A failed fetch sets the generic error and changes nothing
    /// else. The loading flag is cleared either way.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Fetch`] for a failed fetch and
    /// [`ViewerError::Storage`] when the new documentation could not be
    /// persisted. In the latter case the documentation is still shown.
    pub fn complete_fetch(
        &mut self,
        result: Result<Documentation, FetchError>,
    ) -> Result<RouteDecision, ViewerError> {
        self.loading_submit = false;
        let documentation = match result {
            Ok(documentation) => documentation,
            Err(e) => {
                tracing::warn!(error = %e, "Fetching documentation failed");
                self.error_message = Some(FETCH_FAILED_MESSAGE);
                return Err(e.into());
            }
        };

        tracing::info!(pages = documentation.len(), "Fetched documentation");
        let persisted = self.storage.set(&documentation);
        if let Some(first) = documentation.first_title() {
            self.route_title = Some(first.to_owned());
        }
        self.documentation = Some(documentation);
        let decision = self.reconcile();

        match persisted {
            Ok(()) => {
                self.error_message = None;
                Ok(decision)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Persisting fetched documentation failed");
                self.error_message = Some(FETCH_FAILED_MESSAGE);
                Err(e.into())
            }
        }
    }

    /// Give up on a fetch whose result never arrived.
    ///
    /// Clears the loading flag and shows the generic error; the loaded
    /// documentation is untouched.
    pub fn abort_fetch(&mut self) {
        tracing::warn!("Fetch aborted");
        self.loading_submit = false;
        self.error_message = Some(FETCH_FAILED_MESSAGE);
    }

    /// Validate, fetch and apply in one step using the configured source.
    ///
    /// # Errors
    ///
    /// See [`Controller::begin_fetch`] and [`Controller::complete_fetch`].
    pub fn fetch_document(&mut self) -> Result<RouteDecision, ViewerError> {
        let url = self.begin_fetch()?;
        let result = self.source.fetch(&url);
        self.complete_fetch(result)
    }

    /// Move to the page titled `title` (or to `/` for `None`).
    ///
    /// The route is corrected to the first page when the title does not
    /// exist.
    pub fn navigate(&mut self, title: Option<&str>) -> RouteDecision {
        self.route_title = title.map(str::to_owned);
        self.reconcile()
    }

    fn reconcile(&mut self) -> RouteDecision {
        let decision = reconcile_route(self.documentation.as_ref(), self.route_title.as_deref());
        match &decision {
            RouteDecision::Redirect(title) => {
                tracing::debug!(
                    from = self.route_title.as_deref().unwrap_or(""),
                    to = %title,
                    "Redirecting to first page"
                );
                self.route_title = Some(title.clone());
            }
            RouteDecision::Show(title) => self.route_title = Some(title.clone()),
            RouteDecision::Unloaded | RouteDecision::Empty => {}
        }

        let page = self
            .documentation
            .as_ref()
            .zip(self.route_title.as_deref())
            .and_then(|(documentation, title)| find_page(documentation, title));
        self.editor.sync(page);
        self.decision = decision.clone();
        decision
    }

    /// Page matching the current route.
    #[must_use]
    pub fn current_page(&self) -> Option<&Page> {
        let documentation = self.documentation.as_ref()?;
        find_page(documentation, self.route_title.as_deref()?)
    }

    /// Replace the current page with `edited`, persist and follow its title.
    ///
    /// Every page titled like the current route is replaced, so a rename
    /// moves the route to the new title.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::NotLoaded`] without documentation, and
    /// [`ViewerError::Storage`] when persisting fails. The in-memory edit is
    /// kept and the generic error is shown in the latter case.
    pub fn save(&mut self, edited: Page) -> Result<RouteDecision, ViewerError> {
        let Some(documentation) = self.documentation.as_mut() else {
            return Err(ViewerError::NotLoaded);
        };
        let previous = self.route_title.clone().unwrap_or_default();
        let replaced = documentation.replace_page(&previous, &edited);
        tracing::info!(from = %previous, to = %edited.title, replaced, "Saved page");

        let persisted = self.storage.set(documentation);
        self.route_title = Some(edited.title);
        let decision = self.reconcile();

        match persisted {
            Ok(()) => {
                self.error_message = None;
                Ok(decision)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Persisting edited documentation failed");
                self.error_message = Some(FETCH_FAILED_MESSAGE);
                Err(e.into())
            }
        }
    }

    /// Serialize the loaded documentation for download.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::NotLoaded`] without documentation.
    pub fn export(&mut self) -> Result<Export, ViewerError> {
        let Some(documentation) = self.documentation.as_ref() else {
            return Err(ViewerError::NotLoaded);
        };
        self.loading_export = true;
        let contents = documentation.to_json();
        self.loading_export = false;

        let contents = contents?;
        tracing::info!(bytes = contents.len(), "Exported documentation");
        Ok(Export {
            file_name: EXPORT_FILE_NAME,
            contents,
        })
    }

    /// Editor for the current page.
    #[must_use]
    pub fn editor(&self) -> &PageEditor {
        &self.editor
    }

    /// Mutable editor for the current page.
    pub fn editor_mut(&mut self) -> &mut PageEditor {
        &mut self.editor
    }

    /// Switch the editor to edit mode. Returns `false` without a page.
    pub fn begin_edit(&mut self) -> bool {
        self.editor.begin_edit()
    }

    /// Rules an edit of the current page is validated against.
    ///
    /// Titles must stay unique; keeping the current title is allowed.
    #[must_use]
    pub fn validation_rules(&self) -> ValidationRules {
        match &self.documentation {
            Some(documentation) => {
                ValidationRules::unique_titles(documentation.titles(), self.route_title.as_deref())
            }
            None => ValidationRules::new(),
        }
    }

    /// Submit an edit of the current page with the given field values.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Validation`] with the field errors (the editor
    /// stays in edit mode), or any error from [`Controller::save`].
    pub fn submit_edit(
        &mut self,
        title: impl Into<String>,
        body_text: impl Into<String>,
    ) -> Result<RouteDecision, ViewerError> {
        let rules = self.validation_rules();
        self.editor.begin_edit();
        self.editor.set_title(title, &rules);
        self.editor.set_body_text(body_text, &rules);

        let mut edited = None;
        self.editor
            .submit(&rules, |page| edited = Some(page))
            .map_err(ViewerError::Validation)?;
        match edited {
            Some(page) => self.save(page),
            None => Err(ViewerError::NotLoaded),
        }
    }

    /// Validation errors of the editor.
    #[must_use]
    pub fn field_errors(&self) -> &FieldErrors {
        self.editor.errors()
    }

    /// Sidebar links for the loaded documentation.
    #[must_use]
    pub fn sidebar(&self) -> Vec<SidebarItem> {
        self.documentation
            .as_ref()
            .map(|documentation| sidebar_items(&documentation.pages, &self.location()))
            .unwrap_or_default()
    }

    /// Current page body as sanitized HTML.
    #[must_use]
    pub fn render_current_page(&self) -> Option<String> {
        self.current_page().map(|page| self.renderer.render(&page.body_text))
    }
}

#[cfg(test)]
mod tests {
    use docpad_storage::MockStorage;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::mock::StaticSource;
    use crate::validation::{Field, TITLE_NOT_UNIQUE, TITLE_REQUIRED};

    const URL: &str = "https://example.com/docs.json";

    fn doc() -> Documentation {
        Documentation::new(vec![Page::new("A", "alpha"), Page::new("B", "beta")])
    }

    fn loaded() -> (Controller, Arc<MockStorage>) {
        let storage = Arc::new(MockStorage::new().with_documentation(&doc()));
        let mut controller = Controller::new(storage.clone(), Arc::new(StaticSource::new()));
        controller.hydrate();
        (controller, storage)
    }

    fn with_source(source: StaticSource) -> (Controller, Arc<MockStorage>, Arc<StaticSource>) {
        let storage = Arc::new(MockStorage::new());
        let source = Arc::new(source);
        let controller = Controller::new(storage.clone(), source.clone());
        (controller, storage, source)
    }

    #[test]
    fn test_new_is_unloaded() {
        let (controller, _, _) = with_source(StaticSource::new());

        assert!(controller.documentation().is_none());
        assert_eq!(controller.route(), &RouteDecision::Unloaded);
        assert_eq!(controller.location(), "/");
        assert!(controller.sidebar().is_empty());
    }

    #[test]
    fn test_hydrate_loads_and_redirects_to_first() {
        let (controller, _) = loaded();

        assert_eq!(controller.documentation(), Some(&doc()));
        assert_eq!(controller.route(), &RouteDecision::Redirect("A".to_owned()));
        assert_eq!(controller.location(), "/A");
        assert_eq!(controller.editor().page(), Some(&Page::new("A", "alpha")));
    }

    #[test]
    fn test_hydrate_ignores_corrupt_entry() {
        let storage = Arc::new(MockStorage::new().with_raw("{not json"));
        let mut controller = Controller::new(storage, Arc::new(StaticSource::new()));

        assert_eq!(controller.hydrate(), RouteDecision::Unloaded);
        assert!(controller.documentation().is_none());
    }

    #[test]
    fn test_hydrate_empty_documentation() {
        let storage = Arc::new(MockStorage::new().with_documentation(&Documentation::default()));
        let mut controller = Controller::new(storage, Arc::new(StaticSource::new()));

        assert_eq!(controller.hydrate(), RouteDecision::Empty);
        assert_eq!(controller.location(), "/");
        assert!(controller.current_page().is_none());
    }

    #[test]
    fn test_navigate_to_missing_page_redirects() {
        let (mut controller, _) = loaded();

        let decision = controller.navigate(Some("Z"));

        assert_eq!(decision, RouteDecision::Redirect("A".to_owned()));
        assert_eq!(controller.location(), "/A");
    }

    #[test]
    fn test_navigate_to_existing_page() {
        let (mut controller, _) = loaded();

        assert_eq!(controller.navigate(Some("B")), RouteDecision::Show("B".to_owned()));
        assert_eq!(controller.current_page(), Some(&Page::new("B", "beta")));
        assert_eq!(
            controller.render_current_page().as_deref(),
            Some("<p>beta</p>")
        );
    }

    #[test]
    fn test_sidebar_marks_current_page() {
        let (mut controller, _) = loaded();
        controller.navigate(Some("B"));

        let selected: Vec<_> = controller
            .sidebar()
            .into_iter()
            .filter(|item| item.selected)
            .map(|item| item.href)
            .collect();

        assert_eq!(selected, vec!["/B".to_owned()]);
    }

    #[test]
    fn test_empty_url_sets_error_without_request() {
        let (mut controller, storage, source) = with_source(StaticSource::new());

        let result = controller.fetch_document();

        assert!(matches!(
            result,
            Err(ViewerError::Fetch(FetchError::InvalidUrl(_)))
        ));
        assert_eq!(controller.error_message(), Some(INVALID_URL_MESSAGE));
        assert!(!controller.is_loading_submit());
        assert!(source.calls().is_empty());
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_begin_fetch_sets_loading() {
        let (mut controller, _, _) = with_source(StaticSource::new());
        controller.set_url_input("example.com/docs.json");

        let url = controller.begin_fetch().unwrap();

        assert_eq!(url, URL);
        assert!(controller.is_loading_submit());
    }

    #[test]
    fn test_abort_fetch_clears_loading() {
        let (mut controller, _) = loaded();
        controller.set_url_input(URL);
        controller.begin_fetch().unwrap();

        controller.abort_fetch();

        assert!(!controller.is_loading_submit());
        assert_eq!(controller.error_message(), Some(FETCH_FAILED_MESSAGE));
        assert_eq!(controller.documentation(), Some(&doc()));
    }

    #[test]
    fn test_successful_fetch_loads_persists_and_navigates() {
        let (mut controller, storage, source) =
            with_source(StaticSource::new().with_document(URL, doc()));
        controller.set_url_input(URL);

        let decision = controller.fetch_document().unwrap();

        assert_eq!(decision, RouteDecision::Show("A".to_owned()));
        assert_eq!(controller.documentation(), Some(&doc()));
        assert_eq!(storage.raw(), Some(doc().to_json().unwrap()));
        assert_eq!(controller.error_message(), None);
        assert!(!controller.is_loading_submit());
        assert_eq!(source.calls(), vec![URL.to_owned()]);
    }

    #[test]
    fn test_successful_fetch_clears_previous_error() {
        let (mut controller, _, _) = with_source(StaticSource::new().with_document(URL, doc()));
        let _ = controller.fetch_document();
        assert_eq!(controller.error_message(), Some(INVALID_URL_MESSAGE));

        controller.set_url_input(URL);
        controller.fetch_document().unwrap();

        assert_eq!(controller.error_message(), None);
    }

    #[test]
    fn test_rejected_fetch_keeps_unloaded_view() {
        let (mut controller, storage, _) = with_source(StaticSource::new());
        controller.set_url_input(URL);

        let result = controller.fetch_document();

        assert!(matches!(result, Err(ViewerError::Fetch(FetchError::Http(_)))));
        assert!(controller.documentation().is_none());
        assert!(!controller.is_loading_submit());
        assert_eq!(controller.error_message(), Some(FETCH_FAILED_MESSAGE));
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_non_2xx_fetch_fails() {
        let (mut controller, _, _) = with_source(StaticSource::new().with_status(URL, 404));
        controller.set_url_input(URL);

        assert!(controller.fetch_document().is_err());
        assert_eq!(controller.error_message(), Some(FETCH_FAILED_MESSAGE));
    }

    #[test]
    fn test_body_without_pages_fails_and_keeps_prior_state() {
        let (mut controller, storage) = loaded();
        let source = StaticSource::new().with_body(URL, r#"{"pages": []}"#);
        controller.source = Arc::new(source);
        controller.set_url_input(URL);

        let result = controller.fetch_document();

        assert!(matches!(result, Err(ViewerError::Fetch(FetchError::Json(_)))));
        assert_eq!(controller.documentation(), Some(&doc()));
        assert_eq!(controller.location(), "/A");
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_fetch_empty_documentation() {
        let (mut controller, _, _) = with_source(
            StaticSource::new().with_body(URL, r#"{"Pages": []}"#),
        );
        controller.set_url_input(URL);

        assert_eq!(controller.fetch_document().unwrap(), RouteDecision::Empty);
        assert_eq!(controller.documentation().map(Documentation::len), Some(0));
    }

    #[test]
    fn test_fetch_empty_after_loaded_resets_location() {
        let storage = Arc::new(MockStorage::new().with_documentation(&doc()));
        let source = StaticSource::new().with_body(URL, r#"{"Pages": []}"#);
        let mut controller = Controller::new(storage, Arc::new(source));
        controller.hydrate();
        controller.navigate(Some("B"));
        assert_eq!(controller.location(), "/B");
        controller.set_url_input(URL);

        assert_eq!(controller.fetch_document().unwrap(), RouteDecision::Empty);
        assert_eq!(controller.location(), "/");
    }

    #[test]
    fn test_failed_submit_survives_reload_of_same_page() {
        let (mut controller, _) = loaded();
        let _ = controller.submit_edit("", "alpha");

        controller.navigate(Some("A"));

        assert!(controller.editor().is_editing());
        assert_eq!(controller.editor().form().title, "");
        assert_eq!(controller.field_errors().get(Field::Title), Some(TITLE_REQUIRED));
    }

    #[test]
    fn test_fetch_persist_failure_still_shows_document() {
        let (mut controller, storage, _) = with_source(StaticSource::new().with_document(URL, doc()));
        storage.fail_writes(true);
        controller.set_url_input(URL);

        let result = controller.fetch_document();

        assert!(matches!(result, Err(ViewerError::Storage(_))));
        assert_eq!(controller.documentation(), Some(&doc()));
        assert_eq!(controller.error_message(), Some(FETCH_FAILED_MESSAGE));
    }

    #[test]
    fn test_save_unchanged_page_keeps_length_and_order() {
        let (mut controller, _) = loaded();

        controller.save(Page::new("A", "alpha")).unwrap();

        assert_eq!(controller.documentation(), Some(&doc()));
    }

    #[test]
    fn test_rename_moves_route() {
        let (mut controller, storage) = loaded();

        let decision = controller.save(Page::new("C", "gamma")).unwrap();

        let titles: Vec<_> = controller.documentation().unwrap().titles().collect();
        assert_eq!(titles, vec!["C", "B"]);
        assert_eq!(decision, RouteDecision::Show("C".to_owned()));
        assert_eq!(controller.location(), "/C");
        assert_eq!(
            storage.raw(),
            Some(r#"{"Pages":[{"title":"C","bodyText":"gamma"},{"title":"B","bodyText":"beta"}]}"#.to_owned())
        );
    }

    #[test]
    fn test_save_without_documentation() {
        let (mut controller, _, _) = with_source(StaticSource::new());

        assert!(matches!(
            controller.save(Page::new("A", "x")),
            Err(ViewerError::NotLoaded)
        ));
    }

    #[test]
    fn test_save_persist_failure_keeps_edit() {
        let (mut controller, storage) = loaded();
        storage.fail_writes(true);

        let result = controller.save(Page::new("A", "changed"));

        assert!(matches!(result, Err(ViewerError::Storage(_))));
        assert_eq!(controller.current_page(), Some(&Page::new("A", "changed")));
        assert_eq!(controller.error_message(), Some(FETCH_FAILED_MESSAGE));

        storage.fail_writes(false);
        controller.save(Page::new("A", "again")).unwrap();
        assert_eq!(controller.error_message(), None);
    }

    #[test]
    fn test_export_matches_stored_json() {
        let (mut controller, storage) = loaded();
        controller.save(Page::new("A", "edited")).unwrap();

        let export = controller.export().unwrap();

        assert_eq!(export.file_name, EXPORT_FILE_NAME);
        assert_eq!(Some(export.contents.clone()), storage.raw());
        assert!(!controller.is_loading_export());
        assert_eq!(
            Documentation::from_json(&export.contents).unwrap(),
            controller.documentation().cloned().unwrap()
        );
    }

    #[test]
    fn test_export_without_documentation() {
        let (mut controller, _, _) = with_source(StaticSource::new());

        assert!(matches!(controller.export(), Err(ViewerError::NotLoaded)));
    }

    #[test]
    fn test_submit_edit_with_empty_title() {
        let (mut controller, storage) = loaded();
        let writes = storage.write_count();

        let result = controller.submit_edit("", "alpha");

        let Err(ViewerError::Validation(errors)) = result else {
            panic!("expected validation error");
        };
        assert_eq!(errors.get(Field::Title), Some(TITLE_REQUIRED));
        assert!(controller.editor().is_editing());
        assert_eq!(controller.field_errors().get(Field::Title), Some(TITLE_REQUIRED));
        assert_eq!(storage.write_count(), writes);
    }

    #[test]
    fn test_submit_edit_with_duplicate_title() {
        let (mut controller, _) = loaded();

        let result = controller.submit_edit("B", "alpha");

        let Err(ViewerError::Validation(errors)) = result else {
            panic!("expected validation error");
        };
        assert_eq!(errors.get(Field::Title), Some(TITLE_NOT_UNIQUE));
    }

    #[test]
    fn test_submit_edit_saves_and_leaves_edit_mode() {
        let (mut controller, _) = loaded();
        assert!(controller.begin_edit());

        controller.submit_edit("Renamed", "new body").unwrap();

        assert!(!controller.editor().is_editing());
        assert_eq!(controller.location(), "/Renamed");
        assert_eq!(controller.current_page(), Some(&Page::new("Renamed", "new body")));
    }

    #[test]
    fn test_encoded_route_resolves() {
        let storage = Arc::new(
            MockStorage::new()
                .with_documentation(&Documentation::new(vec![Page::new("Getting Started", "g")])),
        );
        let mut controller = Controller::new(storage, Arc::new(StaticSource::new()));
        controller.hydrate();

        let decision = controller.navigate(Some("Getting%20Started"));

        assert_eq!(decision, RouteDecision::Show("Getting Started".to_owned()));
        assert_eq!(controller.location(), "/Getting%20Started");
    }
}
