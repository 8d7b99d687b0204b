pub mod artifact_model;
pub mod color;
pub mod css;
pub mod html;
pub mod js;

use crate::generate::artifact_model::FormArtifacts;
use crate::schema::form_model::FormSchema;

/// Render all three artifacts for a schema.
///
/// Deterministic: the same `(schema, title, theme_color)` always yields
/// byte-identical output. The HTML document embeds the other two artifacts,
/// so it stands alone; the stylesheet and script are also returned separately
/// for callers that want them as files.
pub fn generate(schema: &FormSchema, title: &str, theme_color: &str) -> FormArtifacts {
    let css = css::render_stylesheet(theme_color);
    let js = js::render_behavior();
    let html = html::render_document(schema, title, &css, &js);
    FormArtifacts { html, css, js }
}
