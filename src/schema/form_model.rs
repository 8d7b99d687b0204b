use serde::{Deserialize, Serialize};

// ============================================================================
// Normalized form description produced by extraction
// ============================================================================

/// Wire-name prefix shared by every submittable field.
pub const ENTRY_PREFIX: &str = "entry.";

/// Normalized description of a form: its submission target and fields.
///
/// Produced once per extraction call and immutable afterwards. Regenerating
/// artifacts (for example after a theme change) re-invokes the generator with
/// the same schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Opaque form identifier, used only to build `action_url`.
    pub form_id: String,

    /// Fully-qualified submission endpoint derived from `form_id`.
    pub action_url: String,

    /// Best-effort form name. `None` in prefill-link mode (the caller
    /// synthesizes one from the link).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Fields in first-seen source order. No two entries share a `name`.
    pub fields: Vec<FieldDescriptor>,
}

/// One form field, keyed by its wire name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Entry identifier: the suffix of `name` after the `entry.` prefix.
    pub id: String,

    /// Full submission name (`entry.<id>`), preserved verbatim. The original
    /// endpoint only accepts responses that carry these exact names.
    pub name: String,

    /// Prefilled value, possibly empty.
    #[serde(default)]
    pub value: String,

    /// Question text. Synthesized at generation time when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(flatten)]
    pub kind: FieldKind,

    /// `Some(..)` when the source carried evidence either way (markup mode);
    /// `None` when the source says nothing (prefill mode). The generator
    /// treats `None` as required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default)]
    pub fidelity: WireFidelity,
}

/// Semantic field type. Choice kinds carry their options in the variant
/// payload; scalar kinds have none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Url,
    Date,
    Number,
    Textarea,
    Radio {
        #[serde(default)]
        options: Vec<ChoiceOption>,
    },
    Checkbox {
        #[serde(default)]
        options: Vec<ChoiceOption>,
    },
}

impl FieldKind {
    /// Options carried by a choice kind; `None` for scalar kinds.
    pub fn options(&self) -> Option<&[ChoiceOption]> {
        match self {
            FieldKind::Radio { options } | FieldKind::Checkbox { options } => Some(options),
            _ => None,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, FieldKind::Radio { .. } | FieldKind::Checkbox { .. })
    }

    /// Lowercase tag for display and trace output.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Url => "url",
            FieldKind::Date => "date",
            FieldKind::Number => "number",
            FieldKind::Textarea => "textarea",
            FieldKind::Radio { .. } => "radio",
            FieldKind::Checkbox { .. } => "checkbox",
        }
    }
}

/// One selectable option of a radio or checkbox field. Label and value are
/// both non-empty; options are unique by value within a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub label: String,
    pub value: String,
}

/// Whether a field's wire name was recovered from the source or invented.
///
/// The script-literal fallback synthesizes positional names that are unlikely
/// to match the real submission protocol; its fields are `BestEffort` so
/// consumers can tell degraded output from faithful output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireFidelity {
    #[default]
    Verified,
    BestEffort,
}
