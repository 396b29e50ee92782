//! Sidebar navigation links.

use std::borrow::Cow;

use docpad_storage::Page;

use crate::route::page_path;

/// Longest label shown before truncation, in characters.
pub const MAX_LABEL_CHARS: usize = 50;

/// One sidebar link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarItem {
    /// Display label (possibly truncated title).
    pub label: String,
    /// Link target path.
    pub href: String,
    /// True for the page matching the current path.
    pub selected: bool,
}

/// Shorten a title to [`MAX_LABEL_CHARS`] characters plus `...`.
#[must_use]
pub fn truncate_title(title: &str) -> Cow<'_, str> {
    match title.char_indices().nth(MAX_LABEL_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &title[..cut])),
        None => Cow::Borrowed(title),
    }
}

/// Build one link per page, in page order.
#[must_use]
pub fn sidebar_items(pages: &[Page], current_path: &str) -> Vec<SidebarItem> {
    pages
        .iter()
        .map(|page| {
            let href = page_path(&page.title);
            SidebarItem {
                label: truncate_title(&page.title).into_owned(),
                selected: href == current_path,
                href,
            }
        })
        .collect()
}
