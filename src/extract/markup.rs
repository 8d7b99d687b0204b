use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::extract::error::ExtractError;
use crate::extract::prefill::{action_url_for, form_id_from_path};
use crate::schema::classifier::classify;
use crate::schema::form_model::{
    ChoiceOption, FieldDescriptor, FieldKind, FormSchema, WireFidelity, ENTRY_PREFIX,
};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

// ============================================================================
// Markup-tree extraction — schema recovery from a rendered form page
// ============================================================================
//
// Rendered form markup varies across layout generations, so every resolution
// step is an ordered cascade of independent strategies: the first one that
// yields a result wins and later ones are never consulted.

/// Question-container strategies, most recent layout first.
const CONTAINER_SELECTORS: [&str; 6] = [
    r#".Qr7Oae[role="listitem"]"#,
    ".freebirdFormviewerViewNumberedItemContainer",
    ".freebirdFormviewerViewItemsItemItem",
    ".freebirdFormviewerComponentsQuestionBaseRoot",
    "[data-params]",
    ".freebirdFormviewerViewItemsItemItemHeader",
];

/// Question-label strategies, searched inside one container.
const LABEL_SELECTORS: [&str; 5] = [
    r#"[role="heading"]"#,
    ".freebirdFormviewerComponentsQuestionBaseHeader",
    ".freebirdFormviewerComponentsQuestionTextTitle",
    ".freebirdFormviewerViewItemsItemItemTitle",
    ".freebirdFormviewerViewItemsItemItemHeader",
];

/// Option-label strategies, searched inside one choice control's parent.
const OPTION_LABEL_SELECTORS: [&str; 4] = [
    ".aDTYNe",
    ".docssharedWizToggleLabeledLabelText",
    ".freebirdFormviewerComponentsQuestionRadioLabel",
    ".freebirdFormviewerComponentsQuestionCheckboxLabel",
];

/// Class markers that flag a question as required.
const REQUIRED_MARKER_SELECTORS: [&str; 2] = [
    ".vnumgf",
    ".freebirdFormviewerViewItemsItemRequiredAsterisk",
];

/// Title used when every title strategy fails.
const TITLE_FALLBACK: &str = "Google Form";

/// Form ids are long opaque tokens; anything shorter is markup noise.
static OPAQUE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9A-Za-z_-]{25,}").unwrap());

/// `"<numericId>","<label>"` embedded in a data-params payload.
static DATA_PARAMS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(\d+)","([^"]+)""#).unwrap());

/// Field tuple literal emitted into script bodies by the form renderer.
static SCRIPT_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[null,null,"([^"]+)",null,null,null,null,null,null,\[\]\]"#).unwrap()
});

/// Parse a selector literal. Only called with known-valid CSS.
fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// Extract a normalized schema from the raw markup of a rendered form page.
///
/// Fatal only when the markup is not a form page at all or no identifier
/// survives the fallback chain; an empty field list is returned as-is (the
/// generator renders a form with no inputs rather than failing).
pub fn extract_markup(markup: &str, tracer: &TraceLogger) -> Result<FormSchema, ExtractError> {
    if !markup.contains("docs.google.com/forms") {
        return Err(ExtractError::InvalidInputFormat(
            "markup does not reference docs.google.com/forms".to_string(),
        ));
    }

    let doc = Html::parse_document(markup);

    let form_id = resolve_form_id(&doc, tracer)?;
    let title = resolve_title(&doc, tracer);
    let mut fields = collect_fields(&doc, tracer);

    if fields.is_empty() {
        fields = script_literal_fields(&doc);
        if fields.is_empty() {
            tracer.log(&TraceEvent::exhausted("fields"));
        } else {
            let event = TraceEvent::new("fields", "script-literal")
                .with_detail(format!("{} synthesized", fields.len()));
            tracer.log(&event);
        }
    }

    Ok(FormSchema {
        action_url: action_url_for(&form_id),
        form_id,
        title: Some(title),
        fields,
    })
}

// ============================================================================
// Identifier resolution
// ============================================================================

fn resolve_form_id(doc: &Html, tracer: &TraceLogger) -> Result<String, ExtractError> {
    // A submission URL can live in three places; take the first one present.
    let url_candidates: [(&str, &str, &str); 3] = [
        ("form", "action", "form-action"),
        (r#"meta[property="og:url"]"#, "content", "og-url"),
        (r#"link[rel="canonical"]"#, "href", "canonical-link"),
    ];

    let mut candidate: Option<(String, &str)> = None;
    for (css, attr, strategy) in url_candidates {
        let found = doc
            .select(&sel(css))
            .filter_map(|el| el.value().attr(attr))
            .find(|value| !value.trim().is_empty());
        if let Some(value) = found {
            candidate = Some((value.to_string(), strategy));
            break;
        }
    }

    if let Some((candidate_url, strategy)) = candidate {
        if let Some(id) = form_id_from_candidate(&candidate_url) {
            tracer.log(&TraceEvent::new("form_id", strategy).with_detail(&id));
            return Ok(id);
        }
        // URL present but without an id marker; fall through to the
        // token-level strategies below.
    }

    // Hidden anti-forgery field carries the id on some response pages.
    let fbzx = doc
        .select(&sel(r#"input[name="fbzx"]"#))
        .filter_map(|el| el.value().attr("value"))
        .find(|value| !value.trim().is_empty());
    if let Some(value) = fbzx {
        tracer.log(&TraceEvent::new("form_id", "fbzx-input").with_detail(value));
        return Ok(value.to_string());
    }

    // Last resort: any long opaque token in a script body.
    for script in doc.select(&sel("script")) {
        let body: String = script.text().collect();
        if let Some(token) = OPAQUE_TOKEN_RE.find(&body) {
            tracer.log(&TraceEvent::new("form_id", "script-token"));
            return Ok(token.as_str().to_string());
        }
    }

    tracer.log(&TraceEvent::exhausted("form_id"));
    Err(ExtractError::MissingIdentifier(
        "no form action, metadata URL, anti-forgery field, or script token".to_string(),
    ))
}

/// Marker-scan a candidate URL. Relative action URLs keep their path shape,
/// so a failed parse falls back to scanning the raw string.
fn form_id_from_candidate(candidate: &str) -> Option<String> {
    match Url::parse(candidate) {
        Ok(parsed) => form_id_from_path(parsed.path()),
        Err(_) => form_id_from_path(candidate),
    }
}

// ============================================================================
// Title resolution
// ============================================================================

fn resolve_title(doc: &Html, tracer: &TraceLogger) -> String {
    let strategies: [(&str, &str); 4] = [
        ("title", "title-tag"),
        (r#"meta[property="og:title"]"#, "og-title"),
        (r#"[role="heading"]"#, "heading-role"),
        (".freebirdFormviewerViewHeaderTitle", "header-class"),
    ];

    for (css, strategy) in strategies {
        let found = doc.select(&sel(css)).find_map(|el| {
            // Meta tags carry their text in the content attribute.
            let text = match el.value().attr("content") {
                Some(content) => content.to_string(),
                None => el.text().collect::<String>(),
            };
            let text = text.trim().to_string();
            if text.is_empty() { None } else { Some(text) }
        });
        if let Some(title) = found {
            tracer.log(&TraceEvent::new("title", strategy).with_detail(&title));
            return title;
        }
    }

    tracer.log(&TraceEvent::exhausted("title"));
    TITLE_FALLBACK.to_string()
}

// ============================================================================
// Field resolution
// ============================================================================

fn collect_fields(doc: &Html, tracer: &TraceLogger) -> Vec<FieldDescriptor> {
    let mut fields: Vec<FieldDescriptor> = Vec::new();

    let Some(containers) = find_containers(doc, tracer) else {
        return fields;
    };

    let control_sel = sel("input, textarea, select");
    for container in containers {
        let question_label = resolve_question_label(&container);
        let controls: Vec<ElementRef> = container.select(&control_sel).collect();

        if controls.is_empty() {
            // Some layouts only expose the question through a data payload.
            if let Some(field) = field_from_data_params(&container, question_label.as_deref()) {
                if !fields.iter().any(|f| f.name == field.name) {
                    fields.push(field);
                }
            }
            continue;
        }

        for control in controls {
            let Some(name) = control.value().attr("name") else {
                continue;
            };
            if !name.starts_with(ENTRY_PREFIX) {
                continue;
            }

            let value = control.value().attr("value").unwrap_or("").to_string();
            let required = is_required(&container, &control);
            let mut kind = kind_for_control(&control, &value);

            if kind.is_choice() {
                let options = collect_options(&container, name);
                kind = match kind {
                    FieldKind::Checkbox { .. } => FieldKind::Checkbox { options },
                    _ => FieldKind::Radio { options },
                };
            }

            match fields.iter_mut().find(|f| f.name == name) {
                Some(existing) => merge_options(existing, &kind),
                None => fields.push(FieldDescriptor {
                    id: name[ENTRY_PREFIX.len()..].to_string(),
                    name: name.to_string(),
                    value,
                    label: question_label.clone(),
                    kind,
                    required: Some(required),
                    fidelity: WireFidelity::Verified,
                }),
            }
        }
    }

    fields
}

/// First container strategy with at least one match wins.
fn find_containers<'a>(doc: &'a Html, tracer: &TraceLogger) -> Option<Vec<ElementRef<'a>>> {
    for css in CONTAINER_SELECTORS {
        let matched: Vec<ElementRef> = doc.select(&sel(css)).collect();
        if !matched.is_empty() {
            tracer.log(&TraceEvent::new("containers", css).with_detail(matched.len()));
            return Some(matched);
        }
    }
    tracer.log(&TraceEvent::exhausted("containers"));
    None
}

fn resolve_question_label(container: &ElementRef) -> Option<String> {
    for css in LABEL_SELECTORS {
        if let Some(el) = container.select(&sel(css)).next() {
            let text: String = el.text().collect();
            let text = text.trim();
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }

    // No labelled element; take the container's own first line of text.
    let own: String = container.text().collect();
    own.trim()
        .lines()
        .next()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
}

/// Declared control type when it maps onto a field kind; otherwise classify
/// the current value.
fn kind_for_control(control: &ElementRef, value: &str) -> FieldKind {
    if control.value().name() == "textarea" {
        return FieldKind::Textarea;
    }
    match control.value().attr("type") {
        Some("email") => FieldKind::Email,
        Some("url") => FieldKind::Url,
        Some("date") => FieldKind::Date,
        Some("number") => FieldKind::Number,
        Some("radio") => FieldKind::Radio { options: Vec::new() },
        Some("checkbox") => FieldKind::Checkbox { options: Vec::new() },
        _ => classify(value),
    }
}

/// Required when the control says so, or when the container carries a
/// required-marker class or a literal `*` anywhere in its text.
fn is_required(container: &ElementRef, control: &ElementRef) -> bool {
    if control.value().attr("required").is_some() {
        return true;
    }
    has_required_markers(container)
}

fn has_required_markers(container: &ElementRef) -> bool {
    for css in REQUIRED_MARKER_SELECTORS {
        if container.select(&sel(css)).next().is_some() {
            return true;
        }
    }
    container.text().any(|text| text.contains('*'))
}

/// All same-named choice controls in the container become options, unique by
/// value; options with an empty label or value are dropped.
fn collect_options(container: &ElementRef, name: &str) -> Vec<ChoiceOption> {
    let Ok(group_sel) = Selector::parse(&format!(r#"input[name="{}"]"#, name)) else {
        return Vec::new();
    };

    let mut options: Vec<ChoiceOption> = Vec::new();
    for control in container.select(&group_sel) {
        let value = control.value().attr("value").unwrap_or("").trim().to_string();
        let label = option_label(&control);
        if label.is_empty() || value.is_empty() {
            continue;
        }
        if options.iter().any(|o| o.value == value) {
            continue;
        }
        options.push(ChoiceOption { label, value });
    }
    options
}

fn option_label(control: &ElementRef) -> String {
    let Some(parent) = control.parent().and_then(ElementRef::wrap) else {
        return String::new();
    };

    for css in OPTION_LABEL_SELECTORS {
        if let Some(el) = parent.select(&sel(css)).next() {
            let text: String = el.text().collect();
            let text = text.trim();
            if !text.is_empty() {
                return text.to_string();
            }
        }
    }

    parent.text().collect::<String>().trim().to_string()
}

/// A repeated wire name contributes its options to the first-seen descriptor
/// instead of creating a duplicate. Options already present are kept.
fn merge_options(existing: &mut FieldDescriptor, incoming: &FieldKind) {
    let Some(new_options) = incoming.options() else {
        return;
    };
    if new_options.is_empty() {
        return;
    }
    match existing.kind.options() {
        Some(current) if !current.is_empty() => {}
        _ => existing.kind = incoming.clone(),
    }
}

/// Synthesize a minimal text field from a container's bracketed data payload.
fn field_from_data_params(
    container: &ElementRef,
    question_label: Option<&str>,
) -> Option<FieldDescriptor> {
    let raw = container.value().attr("data-params")?;
    let caps = DATA_PARAMS_RE.captures(raw)?;

    let id = caps[1].to_string();
    let label = Some(caps[2].to_string())
        .filter(|l| !l.is_empty())
        .or_else(|| question_label.map(str::to_string));

    Some(FieldDescriptor {
        name: format!("{}{}", ENTRY_PREFIX, id),
        id,
        value: String::new(),
        label,
        kind: FieldKind::Text,
        required: Some(has_required_markers(container)),
        fidelity: WireFidelity::Verified,
    })
}

// ============================================================================
// Global script-literal fallback
// ============================================================================

/// Synthesize one text field per field-tuple literal found in script bodies.
///
/// The positional wire names invented here are unlikely to match the real
/// submission protocol, so every field is marked `BestEffort`.
fn script_literal_fields(doc: &Html) -> Vec<FieldDescriptor> {
    let mut fields = Vec::new();
    for script in doc.select(&sel("script")) {
        let body: String = script.text().collect();
        for caps in SCRIPT_FIELD_RE.captures_iter(&body) {
            let index = fields.len();
            fields.push(FieldDescriptor {
                id: format!("generated_{}", index),
                name: format!("{}generated_{}", ENTRY_PREFIX, index),
                value: String::new(),
                label: Some(caps[1].to_string()),
                kind: FieldKind::Text,
                required: Some(false),
                fidelity: WireFidelity::BestEffort,
            });
        }
    }
    fields
}
