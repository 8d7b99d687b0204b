use std::sync::LazyLock;

use regex::Regex;

use crate::schema::form_model::FieldKind;

// ============================================================================
// Value-shape classifier — guesses a field type from a prefilled value
// ============================================================================

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$").unwrap());
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());

/// Guess a field kind from its current value.
///
/// Total and order-sensitive: email wins over URL, URL over date, date over
/// number. Only consulted when a control carries no meaningful declared type.
pub fn classify(value: &str) -> FieldKind {
    let value = value.trim();

    if value.is_empty() {
        return FieldKind::Text;
    }
    if EMAIL_RE.is_match(value) {
        return FieldKind::Email;
    }
    if URL_RE.is_match(value) {
        return FieldKind::Url;
    }
    if DATE_RE.is_match(value) {
        return FieldKind::Date;
    }
    if NUMBER_RE.is_match(value) {
        return FieldKind::Number;
    }

    FieldKind::Text
}
