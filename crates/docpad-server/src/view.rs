//! HTML views.
//!
//! The whole viewer is rendered server-side from the controller state. All
//! user-provided text goes through [`escape_html`]; page bodies are rendered
//! by the sanitizing markdown renderer.

use std::fmt::Write;

use docpad_renderer::escape_html;
use docpad_viewer::{Controller, Field, FieldErrors, RouteDecision, SidebarItem};

/// Path of the bundled stylesheet.
pub(crate) const STYLESHEET_PATH: &str = "/assets/docpad.css";

/// Render the full page for the controller's current state.
pub(crate) fn render(controller: &Controller, version: &str) -> String {
    let mut body = String::new();
    match controller.route() {
        RouteDecision::Unloaded => render_url_form(&mut body, controller),
        RouteDecision::Empty => render_empty(&mut body, controller),
        RouteDecision::Show(_) | RouteDecision::Redirect(_) => render_loaded(&mut body, controller),
    }
    document(&body, version)
}

fn document(body: &str, version: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>docpad</title>",
            r#"<link rel="stylesheet" href="{}?v={}">"#,
            r#"</head><body><div class="app">{}</div></body></html>"#,
        ),
        STYLESHEET_PATH,
        escape_html(version),
        body,
    )
}

fn render_url_form(out: &mut String, controller: &Controller) {
    out.push_str(r#"<main class="fetch"><form method="post" action="/">"#);
    out.push_str(r#"<input type="hidden" name="action" value="fetch">"#);
    write!(
        out,
        r#"<input type="text" name="url" placeholder="Documentation URL" aria-label="Documentation URL" value="{}">"#,
        escape_html(controller.url_input())
    )
    .unwrap();
    submit_button(out, "Submit", controller.is_loading_submit());
    out.push_str("</form>");
    error_message(out, controller);
    out.push_str("</main>");
}

fn render_empty(out: &mut String, controller: &Controller) {
    out.push_str(r#"<main class="empty"><p>This documentation has no pages</p>"#);
    export_form(out, controller);
    out.push_str("</main>");
}

fn render_loaded(out: &mut String, controller: &Controller) {
    out.push_str(r#"<aside class="sidebar">"#);
    sidebar(out, &controller.sidebar());
    export_form(out, controller);
    out.push_str("</aside>");

    out.push_str(r#"<main class="content">"#);
    error_message(out, controller);
    match controller.current_page() {
        Some(_) if controller.editor().is_editing() => edit_form(out, controller),
        Some(page) => {
            out.push_str(r#"<div class="page-display"><header class="page-title">"#);
            write!(out, "<h1>{}</h1>", escape_html(&page.title)).unwrap();
            write!(
                out,
                r#"<form method="post" action="{}">"#,
                escape_html(&controller.location())
            )
            .unwrap();
            out.push_str(r#"<input type="hidden" name="action" value="edit">"#);
            submit_button(out, "Edit", false);
            out.push_str("</form></header>");
            write!(
                out,
                r#"<article class="markdown">{}</article></div>"#,
                controller.render_current_page().unwrap_or_default()
            )
            .unwrap();
        }
        None => out.push_str("<div>Page not found</div>"),
    }
    out.push_str("</main>");
}

fn sidebar(out: &mut String, items: &[SidebarItem]) {
    out.push_str(r#"<nav class="menu"><ul>"#);
    for item in items {
        let class = if item.selected { r#" class="selected""# } else { "" };
        write!(
            out,
            r#"<li><a href="{}"{class}>{}</a></li>"#,
            escape_html(&item.href),
            escape_html(&item.label),
        )
        .unwrap();
    }
    out.push_str("</ul></nav>");
}

fn export_form(out: &mut String, controller: &Controller) {
    out.push_str(r#"<form method="post" action="/" class="export">"#);
    out.push_str(r#"<input type="hidden" name="action" value="export">"#);
    submit_button(out, "Export", controller.is_loading_export());
    out.push_str("</form>");
}

fn edit_form(out: &mut String, controller: &Controller) {
    let editor = controller.editor();
    let form = editor.form();
    let errors = editor.errors();

    write!(
        out,
        r#"<form method="post" action="{}" class="page-edit">"#,
        escape_html(&controller.location())
    )
    .unwrap();
    out.push_str(r#"<input type="hidden" name="action" value="save">"#);
    write!(
        out,
        r#"<label>Title<input type="text" name="title" value="{}"{}></label>"#,
        escape_html(&form.title),
        invalid_attr(errors, Field::Title),
    )
    .unwrap();
    field_error(out, errors, Field::Title);
    write!(
        out,
        "<label>Body<textarea name=\"bodyText\" rows=\"20\"{}>\n{}</textarea></label>",
        invalid_attr(errors, Field::BodyText),
        escape_html(&form.body_text),
    )
    .unwrap();
    field_error(out, errors, Field::BodyText);
    submit_button(out, "Complete Edit", false);
    out.push_str("</form>");
}

fn invalid_attr(errors: &FieldErrors, field: Field) -> &'static str {
    if errors.get(field).is_some() {
        r#" aria-invalid="true""#
    } else {
        ""
    }
}

fn field_error(out: &mut String, errors: &FieldErrors, field: Field) {
    if let Some(message) = errors.get(field) {
        write!(
            out,
            r#"<p class="field-error" data-field="{}">{}</p>"#,
            field.name(),
            escape_html(message)
        )
        .unwrap();
    }
}

fn error_message(out: &mut String, controller: &Controller) {
    if let Some(message) = controller.error_message() {
        write!(out, r#"<p class="error" role="alert">{}</p>"#, escape_html(message)).unwrap();
    }
}

fn submit_button(out: &mut String, label: &str, loading: bool) {
    if loading {
        write!(
            out,
            r#"<button type="submit" disabled aria-busy="true">{label}…</button>"#
        )
        .unwrap();
    } else {
        write!(out, r#"<button type="submit">{label}</button>"#).unwrap();
    }
}
