//! Field-level validation of page edits.

use std::collections::BTreeMap;

use docpad_storage::Page;

/// Message for an empty title.
pub const TITLE_REQUIRED: &str = "Title is required";
/// Message for a title already used by another page.
pub const TITLE_NOT_UNIQUE: &str = "Title must be unique";
/// Message for an empty body.
pub const BODY_REQUIRED: &str = "Body is required";

/// Editable page fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Page title.
    Title,
    /// Markdown body.
    BodyText,
}

impl Field {
    /// Field name as used in forms and the JSON document.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::BodyText => "bodyText",
        }
    }
}

/// Validation errors keyed by field. At most one message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    /// True if there are no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Error message for a field.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// All errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    /// Record an error unless the field already has one.
    fn add(&mut self, field: Field, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }
}

/// Rules a form is validated against.
///
/// The default rules only require both fields. [`ValidationRules::unique_titles`]
/// additionally rejects a title used by another page.
#[derive(Clone, Debug, Default)]
pub struct ValidationRules {
    existing_titles: Vec<String>,
    own_title: Option<String>,
}

impl ValidationRules {
    /// Required-field rules only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also require the title to be unique among `existing_titles`.
    ///
    /// `own_title` is the edited page's title before the edit; keeping it is
    /// never a collision.
    #[must_use]
    pub fn unique_titles<I, S>(existing_titles: I, own_title: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            existing_titles: existing_titles.into_iter().map(Into::into).collect(),
            own_title: own_title.map(str::to_owned),
        }
    }

    fn is_taken(&self, title: &str) -> bool {
        self.own_title.as_deref() != Some(title)
            && self.existing_titles.iter().any(|t| t == title)
    }
}

/// Form state for editing a page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageForm {
    /// Title input.
    pub title: String,
    /// Body input.
    pub body_text: String,
}

impl PageForm {
    /// Create a form with the given values.
    #[must_use]
    pub fn new(title: impl Into<String>, body_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body_text: body_text.into(),
        }
    }

    /// Seed a form from an existing page.
    #[must_use]
    pub fn from_page(page: &Page) -> Self {
        Self::new(page.title.clone(), page.body_text.clone())
    }

    /// Validate the current values.
    ///
    /// Only the empty string counts as missing.
    #[must_use]
    pub fn validate(&self, rules: &ValidationRules) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.title.is_empty() {
            errors.add(Field::Title, TITLE_REQUIRED);
        } else if rules.is_taken(&self.title) {
            errors.add(Field::Title, TITLE_NOT_UNIQUE);
        }

        if self.body_text.is_empty() {
            errors.add(Field::BodyText, BODY_REQUIRED);
        }

        errors
    }

    /// Convert the form into a page.
    #[must_use]
    pub fn to_page(&self) -> Page {
        Page::new(self.title.clone(), self.body_text.clone())
    }
}
