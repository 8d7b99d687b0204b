use formforge::schema::form_model::{
    ChoiceOption, FieldDescriptor, FieldKind, FormSchema, WireFidelity,
};

// ============================================================================
// Helper builders
// ============================================================================

fn sample_schema() -> FormSchema {
    FormSchema {
        form_id: "ROUND1".to_string(),
        action_url: "https://docs.google.com/forms/d/e/ROUND1/formResponse".to_string(),
        title: Some("Roundtrip".to_string()),
        fields: vec![
            FieldDescriptor {
                id: "1".to_string(),
                name: "entry.1".to_string(),
                value: "a@b.com".to_string(),
                label: Some("Email".to_string()),
                kind: FieldKind::Email,
                required: Some(true),
                fidelity: WireFidelity::Verified,
            },
            FieldDescriptor {
                id: "2".to_string(),
                name: "entry.2".to_string(),
                value: "Small".to_string(),
                label: Some("Size".to_string()),
                kind: FieldKind::Radio {
                    options: vec![
                        ChoiceOption {
                            label: "Small".to_string(),
                            value: "Small".to_string(),
                        },
                        ChoiceOption {
                            label: "Large".to_string(),
                            value: "Large".to_string(),
                        },
                    ],
                },
                required: None,
                fidelity: WireFidelity::Verified,
            },
            FieldDescriptor {
                id: "generated_0".to_string(),
                name: "entry.generated_0".to_string(),
                value: String::new(),
                label: Some("Synthesized".to_string()),
                kind: FieldKind::Text,
                required: Some(false),
                fidelity: WireFidelity::BestEffort,
            },
        ],
    }
}

// ============================================================================
// Roundtrips
// ============================================================================

#[test]
fn schema_json_roundtrip() {
    let schema = sample_schema();
    let json = serde_json::to_string(&schema).unwrap();
    let parsed: FormSchema = serde_json::from_str(&json).unwrap();
    assert_eq!(schema, parsed);
}

#[test]
fn schema_yaml_roundtrip() {
    let schema = sample_schema();
    let yaml = serde_yaml::to_string(&schema).unwrap();
    let parsed: FormSchema = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(schema, parsed);
}

// ============================================================================
// Serialized shape
// ============================================================================

#[test]
fn field_kind_flattens_into_the_field_object() {
    let schema = sample_schema();
    let value = serde_json::to_value(&schema).unwrap();

    let email = &value["fields"][0];
    assert_eq!(email["type"], "email");
    assert!(email.get("options").is_none());

    let radio = &value["fields"][1];
    assert_eq!(radio["type"], "radio");
    assert_eq!(radio["options"].as_array().unwrap().len(), 2);
    assert_eq!(radio["options"][0]["label"], "Small");
}

#[test]
fn unset_required_is_omitted() {
    let value = serde_json::to_value(&sample_schema()).unwrap();
    assert!(value["fields"][1].get("required").is_none());
    assert_eq!(value["fields"][0]["required"], true);
}

#[test]
fn fidelity_serializes_as_snake_case() {
    let value = serde_json::to_value(&sample_schema()).unwrap();
    assert_eq!(value["fields"][0]["fidelity"], "verified");
    assert_eq!(value["fields"][2]["fidelity"], "best_effort");
}

#[test]
fn missing_fidelity_defaults_to_verified() {
    let json = r#"{
        "id": "3",
        "name": "entry.3",
        "value": "",
        "type": "text"
    }"#;
    let field: FieldDescriptor = serde_json::from_str(json).unwrap();
    assert_eq!(field.fidelity, WireFidelity::Verified);
    assert_eq!(field.required, None);
    assert_eq!(field.label, None);
}

// ============================================================================
// Kind helpers
// ============================================================================

#[test]
fn options_accessor_only_answers_for_choice_kinds() {
    let radio = FieldKind::Radio {
        options: vec![ChoiceOption {
            label: "A".to_string(),
            value: "a".to_string(),
        }],
    };
    assert_eq!(radio.options().unwrap().len(), 1);
    assert!(radio.is_choice());

    assert!(FieldKind::Text.options().is_none());
    assert!(!FieldKind::Email.is_choice());
}

#[test]
fn kind_tags_are_lowercase() {
    assert_eq!(FieldKind::Text.as_str(), "text");
    assert_eq!(FieldKind::Textarea.as_str(), "textarea");
    assert_eq!(FieldKind::Radio { options: vec![] }.as_str(), "radio");
    assert_eq!(FieldKind::Checkbox { options: vec![] }.as_str(), "checkbox");
}
