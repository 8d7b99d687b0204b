use url::Url;

use crate::extract::prefill::form_id_from_path;

// ============================================================================
// Title and label synthesis — readable names when the source has none
// ============================================================================

/// Fallback when nothing about the form suggests a name.
pub const GENERIC_TITLE: &str = "Custom Form";

/// Path segments that can never be a human-chosen form name.
const RESERVED_SEGMENTS: [&str; 5] = ["d", "e", "u", "viewform", "formResponse"];

/// A prefilled value longer than this is useless as a label.
const VALUE_LABEL_MAX: usize = 20;

/// Derive a form title from a prefill link.
///
/// Prefers a human-chosen path segment after `forms`, then an id-derived
/// placeholder, then [`GENERIC_TITLE`].
pub fn title_from_link(link: &str) -> String {
    let Ok(parsed) = Url::parse(link) else {
        return GENERIC_TITLE.to_string();
    };

    let form_id = form_id_from_path(parsed.path());
    let segments: Vec<&str> = parsed.path().split('/').filter(|s| !s.is_empty()).collect();

    if let Some(pos) = segments.iter().position(|s| *s == "forms") {
        for segment in &segments[pos + 1..] {
            if RESERVED_SEGMENTS.contains(segment) {
                continue;
            }
            if Some(*segment) == form_id.as_deref() {
                continue;
            }
            // Bare numerals are account indexes (/u/0/), not names.
            if segment.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            return format_title(segment);
        }
    }

    match form_id {
        Some(id) => {
            let prefix: String = id.chars().take(8).collect();
            format!("Google Form {}", prefix)
        }
        None => GENERIC_TITLE.to_string(),
    }
}

/// Turn a URL-ish segment into a title: separators become spaces, every word
/// is capitalized. `customer-feedback_form` → `Customer Feedback Form`.
pub fn format_title(raw: &str) -> String {
    raw.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Best-effort label for a field that arrived without one.
///
/// A short prefilled value usually echoes the question (`fullName`,
/// `yourAge`); otherwise fall back to the entry id.
pub fn synthesize_label(id: &str, value: &str) -> String {
    if !value.is_empty() && value.len() < VALUE_LABEL_MAX {
        return format_label(value);
    }
    format!("Field {}", id)
}

/// Split camel-case word boundaries and capitalize the first letter.
/// `fullName` → `Full Name`.
pub fn format_label(raw: &str) -> String {
    let mut spaced = String::with_capacity(raw.len() + 4);
    for c in raw.chars() {
        if c.is_uppercase() && !spaced.is_empty() {
            spaced.push(' ');
        }
        spaced.push(c);
    }
    capitalize_first(spaced.trim())
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
