use url::Url;

use crate::extract::error::ExtractError;
use crate::schema::classifier::classify;
use crate::schema::form_model::{FieldDescriptor, FormSchema, WireFidelity, ENTRY_PREFIX};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

// ============================================================================
// Prefill-link extraction — form id and fields from a shareable URL
// ============================================================================

/// Path segments that mark "the next segment is the form id".
const ID_MARKERS: [&str; 2] = ["e", "d"];

/// Build the canonical submission endpoint for a form id.
pub fn action_url_for(form_id: &str) -> String {
    format!("https://docs.google.com/forms/d/e/{}/formResponse", form_id)
}

/// Whether a link points at a Google Form view or response page.
pub fn is_prefill_link(link: &str) -> bool {
    match Url::parse(link) {
        Ok(parsed) => references_forms_host(&parsed),
        Err(_) => false,
    }
}

fn references_forms_host(link: &Url) -> bool {
    let host_ok = link
        .host_str()
        .map_or(false, |h| h.contains("docs.google.com"));
    let path = link.path();
    host_ok
        && path.contains("/forms/")
        && (path.contains("viewform") || path.contains("formResponse"))
}

/// Scan path segments left to right for an `e` or `d` marker; the first
/// following segment that is not itself a marker is the form id.
pub fn form_id_from_path(path: &str) -> Option<String> {
    let segments: Vec<&str> = path.split('/').collect();
    for (i, segment) in segments.iter().enumerate() {
        if !ID_MARKERS.contains(segment) {
            continue;
        }
        if let Some(next) = segments.get(i + 1) {
            if !next.is_empty() && !ID_MARKERS.contains(next) {
                return Some((*next).to_string());
            }
        }
    }
    None
}

/// Extract a normalized schema from a prefill link.
///
/// The returned schema has no title; the caller synthesizes one (see
/// `title::title_from_link`). Fields keep query-string order, keyed by every
/// `entry.*` parameter; a repeated key keeps its first occurrence.
pub fn extract_prefill(link: &str, tracer: &TraceLogger) -> Result<FormSchema, ExtractError> {
    let parsed = Url::parse(link).map_err(|source| ExtractError::UrlParse {
        context: "prefill link".to_string(),
        source,
    })?;

    if !references_forms_host(&parsed) {
        return Err(ExtractError::InvalidInputFormat(
            "expected a docs.google.com/forms viewform or formResponse link".to_string(),
        ));
    }

    let form_id = form_id_from_path(parsed.path()).ok_or_else(|| {
        ExtractError::MissingIdentifier("no e/d marker segment in the link path".to_string())
    })?;
    tracer.log(&TraceEvent::new("form_id", "path-marker").with_detail(&form_id));

    let mut fields: Vec<FieldDescriptor> = Vec::new();
    for (key, value) in parsed.query_pairs() {
        if !key.starts_with(ENTRY_PREFIX) {
            continue;
        }
        // First occurrence wins; the schema never holds duplicate names.
        if fields.iter().any(|f| f.name == key.as_ref()) {
            continue;
        }

        let id = key.as_ref()[ENTRY_PREFIX.len()..].to_string();
        fields.push(FieldDescriptor {
            id,
            name: key.to_string(),
            kind: classify(&value),
            value: value.to_string(),
            label: None,
            required: None,
            fidelity: WireFidelity::Verified,
        });
    }
    tracer.log(&TraceEvent::new("fields", "query-parameters").with_detail(fields.len()));

    Ok(FormSchema {
        action_url: action_url_for(&form_id),
        form_id,
        title: None,
        fields,
    })
}
