use crate::extract::error::ExtractError;
use crate::extract::markup::extract_markup;
use crate::extract::prefill::extract_prefill;
use crate::extract::title::{title_from_link, GENERIC_TITLE};
use crate::generate::artifact_model::FormArtifacts;
use crate::schema::form_model::FormSchema;
use crate::trace::logger::TraceLogger;

pub mod cli;
pub mod extract;
pub mod generate;
pub mod schema;
pub mod trace;

/// A completed conversion: the extracted schema, the title that ended up in
/// the artifacts, and the artifacts themselves.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub schema: FormSchema,
    pub title: String,
    pub artifacts: FormArtifacts,
}

/// Convert a prefill link end to end: extract, resolve a title, generate.
///
/// An explicit `title` wins; otherwise one is synthesized from the link.
pub fn convert_prefill_link(
    link: &str,
    title: Option<&str>,
    theme_color: &str,
    tracer: &TraceLogger,
) -> Result<Conversion, ExtractError> {
    let schema = extract_prefill(link, tracer)?;
    let title = match explicit_title(title) {
        Some(t) => t,
        None => title_from_link(link),
    };
    let artifacts = generate::generate(&schema, &title, theme_color);
    Ok(Conversion {
        schema,
        title,
        artifacts,
    })
}

/// Convert pasted form-page markup end to end.
///
/// An explicit `title` wins, then the title extracted from the markup, then
/// the generic fallback.
pub fn convert_markup_page(
    markup: &str,
    title: Option<&str>,
    theme_color: &str,
    tracer: &TraceLogger,
) -> Result<Conversion, ExtractError> {
    let schema = extract_markup(markup, tracer)?;
    let title = explicit_title(title)
        .or_else(|| schema.title.clone())
        .unwrap_or_else(|| GENERIC_TITLE.to_string());
    let artifacts = generate::generate(&schema, &title, theme_color);
    Ok(Conversion {
        schema,
        title,
        artifacts,
    })
}

fn explicit_title(title: Option<&str>) -> Option<String> {
    title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
