//! Markdown to sanitized HTML rendering.
//!
//! Page bodies come from whatever JSON document the user loaded, so the
//! output must be safe to inline into the viewer:
//!
//! - raw HTML blocks and inline HTML are escaped and shown as text
//! - link and image URLs with script-capable schemes are dropped
//! - every text node and attribute is HTML-escaped
//!
//! # Example
//!
//! ```
//! use docpad_renderer::MarkdownRenderer;
//!
//! let html = MarkdownRenderer::new().render("# Hello\n\n**Bold** <b>raw</b>");
//! assert!(html.contains("<strong>Bold</strong>"));
//! assert!(html.contains("&lt;b&gt;raw&lt;/b&gt;"));
//! ```

mod html;
mod renderer;

pub use html::{escape_html, is_safe_url};
pub use renderer::MarkdownRenderer;
