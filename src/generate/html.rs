use crate::extract::title::synthesize_label;
use crate::schema::form_model::{ChoiceOption, FieldDescriptor, FieldKind, FormSchema};

// ============================================================================
// Document generation — one fragment per field inside a fixed shell
// ============================================================================

/// Script references needed by the async submission strategy. The generated
/// document loads nothing else from the network.
const ENHANCEMENT_SCRIPTS: [&str; 2] = [
    "https://code.jquery.com/jquery-3.7.1.min.js",
    "https://cdnjs.cloudflare.com/ajax/libs/jquery.form/4.3.0/jquery.form.min.js",
];

/// Render the self-contained form document.
///
/// Fields render in schema order. The stylesheet and behavior script are
/// embedded inline so the document works standalone; the hidden inputs mimic
/// the auxiliary parameters the original submission protocol expects.
pub fn render_document(schema: &FormSchema, title: &str, css: &str, js: &str) -> String {
    let fields_html: String = schema
        .fields
        .iter()
        .map(render_field)
        .collect::<Vec<_>>()
        .join("\n");

    let scripts: String = ENHANCEMENT_SCRIPTS
        .iter()
        .map(|src| format!("    <script src=\"{}\"></script>", src))
        .collect::<Vec<_>>()
        .join("\n");

    let title = escape_html(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <div class="container">
        <form id="customForm" action="{action}" method="POST">
            <div class="form-header">
                <h1>{title}</h1>
                <p class="form-description">Please fill out the form below.</p>
            </div>

            <div class="form-fields">
{fields_html}
            </div>

            <input type="hidden" name="fvv" value="1">
            <input type="hidden" name="draftResponse" value="[]">
            <input type="hidden" name="pageHistory" value="0">

            <div class="form-footer">
                <button type="submit" class="submit-button">Submit</button>
            </div>
        </form>

        <div id="success-message" class="success-message" style="display: none;">
            <div class="success-icon">&#10003;</div>
            <h2>Thank You!</h2>
            <p>Your response has been submitted successfully.</p>
        </div>
    </div>

    <iframe name="submit-sink" class="submit-sink" title="submission sink" aria-hidden="true"></iframe>

{scripts}
    <script>
{js}
    </script>
</body>
</html>"#,
        action = escape_html(&schema.action_url),
    )
}

// ============================================================================
// Field fragments
// ============================================================================

fn render_field(field: &FieldDescriptor) -> String {
    let field_id = format!("field-{}", field.id);
    let label = match &field.label {
        Some(label) => label.clone(),
        None => synthesize_label(&field.id, &field.value),
    };

    // Absent evidence means required; only explicit optionality relaxes it.
    let required = field.required.unwrap_or(true);
    let label_html = if required {
        format!("{} *", escape_html(&label))
    } else {
        escape_html(&label)
    };

    match &field.kind {
        FieldKind::Radio { options } if !options.is_empty() => {
            render_choice_group(field, &field_id, &label_html, "radio", options, required)
        }
        FieldKind::Checkbox { options } if !options.is_empty() => {
            render_choice_group(field, &field_id, &label_html, "checkbox", options, required)
        }
        FieldKind::Textarea => render_textarea(field, &field_id, &label_html, required),
        scalar => render_input(field, &field_id, &label_html, scalar, required),
    }
}

fn render_input(
    field: &FieldDescriptor,
    field_id: &str,
    label_html: &str,
    kind: &FieldKind,
    required: bool,
) -> String {
    let (input_type, placeholder, autocomplete, helper) = match kind {
        FieldKind::Email => (
            "email",
            Some("Enter your email"),
            Some("email"),
            Some("Your address is sent only to the form owner."),
        ),
        FieldKind::Url => (
            "url",
            Some("https://example.com"),
            Some("url"),
            Some("Include http:// or https://."),
        ),
        FieldKind::Date => ("date", None, None, None),
        FieldKind::Number => ("number", None, None, None),
        // Text, plus any choice field whose options never materialized.
        _ => ("text", Some("Enter your response"), None, None),
    };

    let mut attrs = String::new();
    if let Some(autocomplete) = autocomplete {
        attrs.push_str(&format!("\n            autocomplete=\"{}\"", autocomplete));
    }
    if let Some(placeholder) = placeholder {
        attrs.push_str(&format!("\n            placeholder=\"{}\"", placeholder));
    }

    let required_attr = if required { "\n            required" } else { "" };
    let helper_html = match helper {
        Some(text) => format!("\n        <p class=\"helper-text\">{}</p>", text),
        None => String::new(),
    };

    format!(
        r#"    <div class="form-group">
        <label for="{field_id}">{label_html}</label>
        <input
            type="{input_type}"
            id="{field_id}"
            name="{name}"{attrs}
            value="{value}"{required_attr}>{helper_html}
    </div>"#,
        name = escape_html(&field.name),
        value = escape_html(&field.value),
    )
}

fn render_textarea(
    field: &FieldDescriptor,
    field_id: &str,
    label_html: &str,
    required: bool,
) -> String {
    let required_attr = if required { " required" } else { "" };

    format!(
        r#"    <div class="form-group">
        <label for="{field_id}">{label_html}</label>
        <textarea
            id="{field_id}"
            name="{name}"
            rows="4"
            placeholder="Enter your response"{required_attr}>{value}</textarea>
    </div>"#,
        name = escape_html(&field.name),
        value = escape_html(&field.value),
    )
}

fn render_choice_group(
    field: &FieldDescriptor,
    field_id: &str,
    label_html: &str,
    control_type: &str,
    options: &[ChoiceOption],
    required: bool,
) -> String {
    let controls: String = options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let option_id = format!("{}-{}", field_id, index);
            let checked = if option.value == field.value {
                " checked"
            } else {
                ""
            };
            // A required checkbox would force every box to be ticked, so the
            // attribute only applies to radio groups.
            let required_attr = if required && control_type == "radio" {
                " required"
            } else {
                ""
            };

            format!(
                r#"            <div class="choice-option">
                <input type="{control_type}" id="{option_id}" name="{name}" value="{value}"{checked}{required_attr}>
                <label for="{option_id}">{label}</label>
            </div>"#,
                name = escape_html(&field.name),
                value = escape_html(&option.value),
                label = escape_html(&option.label),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"    <div class="form-group">
        <fieldset class="choice-group">
            <legend>{label_html}</legend>
{controls}
        </fieldset>
    </div>"#,
    )
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
