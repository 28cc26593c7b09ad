//! Embedded template set and rendering helpers.
//!
//! Templates are compiled into the binary so the server has no runtime
//! template directory to locate.

use axum::http::StatusCode;
use axum::response::Html;
use once_cell::sync::Lazy;
use tera::{Context, Tera};

use crate::errors::AppError;

/// The application template set.
pub static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("index.html", include_str!("../../templates/index.html")),
        ("detail.html", include_str!("../../templates/detail.html")),
        ("results.html", include_str!("../../templates/results.html")),
        ("404.html", include_str!("../../templates/404.html")),
    ])
    .expect("embedded templates must parse");
    tera
});

/// Render a template to an HTML response body.
pub fn render(name: &str, context: &Context) -> Result<Html<String>, AppError> {
    Ok(Html(TEMPLATES.render(name, context)?))
}

/// Render an error page for the given status code.
///
/// Looks for a template named after the status code (e.g. `404.html`) and
/// falls back to a minimal built-in page when none exists.
pub fn render_error_page(status: StatusCode) -> String {
    let template_name = format!("{}.html", status.as_u16());

    let mut context = Context::new();
    context.insert("status_code", &status.as_u16());

    TEMPLATES
        .render(&template_name, &context)
        .unwrap_or_else(|_| default_error_page(status))
}

fn default_error_page(status: StatusCode) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{status} {reason}</title></head>\n\
         <body><h1>{reason}</h1></body>\n</html>\n",
        status = status.as_u16(),
        reason = reason,
    )
}
