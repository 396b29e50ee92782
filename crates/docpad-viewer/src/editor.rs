//! Page editor state machine.
//!
//! ```text
//!            begin_edit()
//!   Display ─────────────► Edit ──┐ submit() with errors
//!      ▲                    │  ◄──┘ (stays, errors shown)
//!      └──── submit() ok ───┘
//! ```
//!
//! Validation runs on submit. After the first submit attempt every field
//! change re-validates, so errors disappear as soon as they are fixed.

use docpad_renderer::MarkdownRenderer;
use docpad_storage::Page;

use crate::validation::{FieldErrors, PageForm, ValidationRules};

/// Editor render state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorMode {
    /// Rendered page with an "Edit" affordance.
    #[default]
    Display,
    /// Form bound to title and body.
    Edit,
}

/// Display/edit state for a single page.
#[derive(Clone, Debug, Default)]
pub struct PageEditor {
    page: Option<Page>,
    mode: EditorMode,
    form: PageForm,
    errors: FieldErrors,
    submitted: bool,
}

impl PageEditor {
    /// Create an editor for `page` in display mode.
    #[must_use]
    pub fn new(page: Option<&Page>) -> Self {
        Self {
            page: page.cloned(),
            form: page.map(PageForm::from_page).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Point the editor at a (possibly different) page.
    ///
    /// An edit in progress on the same, unchanged page keeps its form and
    /// errors. Otherwise the form is re-seeded from the page and errors are
    /// dropped; the mode is kept.
    pub fn sync(&mut self, page: Option<&Page>) {
        let Some(page) = page else {
            self.page = None;
            return;
        };
        if self.is_editing() && self.page.as_ref() == Some(page) {
            return;
        }
        self.form = PageForm::from_page(page);
        self.page = Some(page.clone());
        self.errors = FieldErrors::default();
        self.submitted = false;
    }

    /// Page being shown, if any.
    #[must_use]
    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// True in edit mode.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.mode == EditorMode::Edit
    }

    /// Current form values.
    #[must_use]
    pub fn form(&self) -> &PageForm {
        &self.form
    }

    /// Errors from the last validation.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Switch to edit mode. Returns `false` when there is no page to edit.
    pub fn begin_edit(&mut self) -> bool {
        if self.page.is_none() {
            return false;
        }
        self.mode = EditorMode::Edit;
        true
    }

    /// Update the title input.
    pub fn set_title(&mut self, value: impl Into<String>, rules: &ValidationRules) {
        self.form.title = value.into();
        self.revalidate(rules);
    }

    /// Update the body input.
    pub fn set_body_text(&mut self, value: impl Into<String>, rules: &ValidationRules) {
        self.form.body_text = value.into();
        self.revalidate(rules);
    }

    fn revalidate(&mut self, rules: &ValidationRules) {
        if self.submitted {
            self.errors = self.form.validate(rules);
        }
    }

    /// Submit the form.
    ///
    /// On success calls `on_save` with the edited page and returns to display
    /// mode. On failure keeps edit mode, records the errors and never calls
    /// `on_save`.
    ///
    /// # Errors
    ///
    /// Returns the field errors when validation fails.
    pub fn submit<F>(&mut self, rules: &ValidationRules, on_save: F) -> Result<(), FieldErrors>
    where
        F: FnOnce(Page),
    {
        self.submitted = true;
        self.errors = self.form.validate(rules);
        if !self.errors.is_empty() {
            return Err(self.errors.clone());
        }

        if self.page.is_some() {
            on_save(self.form.to_page());
        }
        self.mode = EditorMode::Display;
        self.submitted = false;
        Ok(())
    }

    /// Render the page body as sanitized HTML.
    #[must_use]
    pub fn render_body(&self, renderer: &MarkdownRenderer) -> Option<String> {
        self.page.as_ref().map(|p| renderer.render(&p.body_text))
    }
}
