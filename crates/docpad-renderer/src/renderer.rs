//! Event-driven markdown renderer.

use std::fmt::Write;

use pulldown_cmark::{Alignment, CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::html::{escape_html, is_safe_url};

/// Markdown renderer producing sanitized HTML.
///
/// GitHub Flavored Markdown (tables, strikethrough, task lists) is enabled by
/// default.
#[derive(Clone, Debug)]
pub struct MarkdownRenderer {
    gfm: bool,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a new renderer with GFM enabled.
    #[must_use]
    pub fn new() -> Self {
        Self { gfm: true }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Render markdown text to HTML.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        let mut state = RenderState::default();
        for event in Parser::new_ext(markdown, self.parser_options()) {
            state.process_event(event);
        }
        state.output
    }
}

/// Image whose alt text is still being collected.
struct PendingImage {
    src: String,
    title: String,
    alt: String,
}

#[derive(Default)]
struct RenderState {
    output: String,
    /// One entry per open link: whether an `<a>` was emitted for it.
    links: Vec<bool>,
    image: Option<PendingImage>,
    /// Nested image depth inside a pending image's alt text.
    image_depth: usize,
    alignments: Vec<Alignment>,
    in_table_head: bool,
    cell_index: usize,
}

impl RenderState {
    fn process_event(&mut self, event: Event<'_>) {
        if self.image.is_some() {
            self.process_image_event(event);
            return;
        }

        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.output.push_str(&escape_html(&text)),
            Event::Code(code) => {
                write!(self.output, "<code>{}</code>", escape_html(&code)).unwrap();
            }
            // Raw HTML is shown as text, never interpreted
            Event::Html(html) | Event::InlineHtml(html) => {
                self.output.push_str(&escape_html(&html));
            }
            Event::SoftBreak => self.output.push('\n'),
            Event::HardBreak => self.output.push_str("<br>"),
            Event::Rule => self.output.push_str("<hr>"),
            Event::TaskListMarker(checked) => {
                if checked {
                    self.output
                        .push_str(r#"<input type="checkbox" disabled checked> "#);
                } else {
                    self.output.push_str(r#"<input type="checkbox" disabled> "#);
                }
            }
            _ => {}
        }
    }

    fn process_image_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Image { .. }) => self.image_depth += 1,
            Event::End(TagEnd::Image) if self.image_depth > 0 => self.image_depth -= 1,
            Event::End(TagEnd::Image) => self.finish_image(),
            Event::Text(text) | Event::Code(text) => {
                if let Some(image) = self.image.as_mut() {
                    image.alt.push_str(&text);
                }
            }
            _ => {}
        }
    }

    fn finish_image(&mut self) {
        let Some(image) = self.image.take() else {
            return;
        };
        if !is_safe_url(&image.src) {
            self.output.push_str(&escape_html(&image.alt));
            return;
        }
        let title_attr = if image.title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(&image.title))
        };
        write!(
            self.output,
            r#"<img src="{}"{title_attr} alt="{}">"#,
            escape_html(&image.src),
            escape_html(&image.alt)
        )
        .unwrap();
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.output.push_str("<p>"),
            Tag::Heading { level, id, .. } => {
                let n = heading_level_to_num(level);
                match id {
                    Some(id) => write!(self.output, r#"<h{n} id="{}">"#, escape_html(&id)),
                    None => write!(self.output, "<h{n}>"),
                }
                .unwrap();
            }
            Tag::BlockQuote(kind) => match kind {
                Some(kind) => {
                    let class = format!("{kind:?}").to_ascii_lowercase();
                    write!(self.output, r#"<blockquote class="alert-{class}">"#).unwrap();
                }
                None => self.output.push_str("<blockquote>"),
            },
            Tag::CodeBlock(kind) => {
                let lang = match &kind {
                    CodeBlockKind::Fenced(info) => info.split_whitespace().next(),
                    CodeBlockKind::Indented => None,
                };
                match lang {
                    Some(lang) => write!(
                        self.output,
                        r#"<pre><code class="language-{}">"#,
                        escape_html(lang)
                    )
                    .unwrap(),
                    None => self.output.push_str("<pre><code>"),
                }
            }
            Tag::List(Some(1)) => self.output.push_str("<ol>"),
            Tag::List(Some(start)) => write!(self.output, r#"<ol start="{start}">"#).unwrap(),
            Tag::List(None) => self.output.push_str("<ul>"),
            Tag::Item => self.output.push_str("<li>"),
            Tag::Table(alignments) => {
                self.alignments = alignments;
                self.output.push_str("<table>");
            }
            Tag::TableHead => {
                self.in_table_head = true;
                self.cell_index = 0;
                self.output.push_str("<thead><tr>");
            }
            Tag::TableRow => {
                self.cell_index = 0;
                self.output.push_str("<tr>");
            }
            Tag::TableCell => {
                let cell = if self.in_table_head { "th" } else { "td" };
                match self.alignments.get(self.cell_index).and_then(alignment_css) {
                    Some(align) => {
                        write!(self.output, r#"<{cell} style="text-align: {align}">"#).unwrap();
                    }
                    None => write!(self.output, "<{cell}>").unwrap(),
                }
            }
            Tag::Emphasis => self.output.push_str("<em>"),
            Tag::Strong => self.output.push_str("<strong>"),
            Tag::Strikethrough => self.output.push_str("<del>"),
            Tag::Link {
                dest_url, title, ..
            } => {
                let safe = is_safe_url(&dest_url);
                if safe {
                    write!(self.output, r#"<a href="{}""#, escape_html(&dest_url)).unwrap();
                    if !title.is_empty() {
                        write!(self.output, r#" title="{}""#, escape_html(&title)).unwrap();
                    }
                    self.output.push('>');
                }
                self.links.push(safe);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                self.image = Some(PendingImage {
                    src: dest_url.into_string(),
                    title: title.into_string(),
                    alt: String::new(),
                });
                self.image_depth = 0;
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.output.push_str("</p>"),
            TagEnd::Heading(level) => {
                write!(self.output, "</h{}>", heading_level_to_num(level)).unwrap();
            }
            TagEnd::BlockQuote(_) => self.output.push_str("</blockquote>"),
            TagEnd::CodeBlock => self.output.push_str("</code></pre>"),
            TagEnd::List(true) => self.output.push_str("</ol>"),
            TagEnd::List(false) => self.output.push_str("</ul>"),
            TagEnd::Item => self.output.push_str("</li>"),
            TagEnd::Table => {
                self.output.push_str("</tbody></table>");
                self.alignments.clear();
            }
            TagEnd::TableHead => {
                self.in_table_head = false;
                self.output.push_str("</tr></thead><tbody>");
            }
            TagEnd::TableRow => self.output.push_str("</tr>"),
            TagEnd::TableCell => {
                let cell = if self.in_table_head { "th" } else { "td" };
                write!(self.output, "</{cell}>").unwrap();
                self.cell_index += 1;
            }
            TagEnd::Emphasis => self.output.push_str("</em>"),
            TagEnd::Strong => self.output.push_str("</strong>"),
            TagEnd::Strikethrough => self.output.push_str("</del>"),
            TagEnd::Link => {
                if self.links.pop().unwrap_or(false) {
                    self.output.push_str("</a>");
                }
            }
            _ => {}
        }
    }
}

fn alignment_css(alignment: &Alignment) -> Option<&'static str> {
    match alignment {
        Alignment::None => None,
        Alignment::Left => Some("left"),
        Alignment::Center => Some("center"),
        Alignment::Right => Some("right"),
    }
}

/// Convert heading level enum to number (1-6).
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
