//! Documentation and page types.
//!
//! The serialized form is fixed by the documents users already publish:
//!
//! ```json
//! { "Pages": [ { "title": "Intro", "bodyText": "# Hello" } ] }
//! ```
//!
//! Keys we do not model are kept in `extra` so that a fetched document survives
//! a save/export cycle without losing data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A titled markdown page. The title is the page identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page title, unique within a [`Documentation`] once edited.
    pub title: String,
    /// Markdown source.
    #[serde(rename = "bodyText")]
    pub body_text: String,
    /// Unknown keys carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Page {
    /// Create a page without extra fields.
    #[must_use]
    pub fn new(title: impl Into<String>, body_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body_text: body_text.into(),
            extra: Map::new(),
        }
    }

    /// Overlay `edited` onto this page.
    ///
    /// Title and body are replaced, extra keys from `edited` win over ours and
    /// keys only we have are kept.
    pub fn merge(&mut self, edited: Page) {
        self.title = edited.title;
        self.body_text = edited.body_text;
        self.extra.extend(edited.extra);
    }
}

/// The whole document: an ordered list of pages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentation {
    /// Pages in display order.
    #[serde(rename = "Pages")]
    pub pages: Vec<Page>,
    /// Unknown top-level keys carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Documentation {
    /// Create a document from pages.
    #[must_use]
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            extra: Map::new(),
        }
    }

    /// Parse a document from JSON.
    ///
    /// Title uniqueness is not checked here; it is only enforced when a page
    /// is edited.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to the compact JSON used for storage and export.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True if the document has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Find the first page with exactly this title.
    #[must_use]
    pub fn find(&self, title: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.title == title)
    }

    /// Title of the first page, if any.
    #[must_use]
    pub fn first_title(&self) -> Option<&str> {
        self.pages.first().map(|p| p.title.as_str())
    }

    /// Titles in page order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|p| p.title.as_str())
    }

    /// Overlay `edited` onto every page titled `previous_title`.
    ///
    /// Imported documents may contain duplicate titles, so all matches are
    /// replaced. Returns the number of pages changed.
    pub fn replace_page(&mut self, previous_title: &str, edited: &Page) -> usize {
        let mut replaced = 0;
        for page in self.pages.iter_mut().filter(|p| p.title == previous_title) {
            page.merge(edited.clone());
            replaced += 1;
        }
        replaced
    }
}
