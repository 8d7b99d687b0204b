use formforge::extract::error::ExtractError;
use formforge::extract::prefill::{
    action_url_for, extract_prefill, form_id_from_path, is_prefill_link,
};
use formforge::schema::form_model::{FieldKind, WireFidelity};
use formforge::trace::logger::TraceLogger;

fn tracer() -> TraceLogger {
    TraceLogger::disabled()
}

// ============================================================================
// Link validation
// ============================================================================

#[test]
fn accepts_viewform_and_formresponse_links() {
    assert!(is_prefill_link(
        "https://docs.google.com/forms/d/e/ABC123/viewform"
    ));
    assert!(is_prefill_link(
        "https://docs.google.com/forms/d/e/ABC123/formResponse"
    ));
}

#[test]
fn rejects_foreign_hosts_and_paths() {
    assert!(!is_prefill_link("https://example.com/forms/d/e/ABC/viewform"));
    assert!(!is_prefill_link("https://docs.google.com/spreadsheets/d/ABC"));
    assert!(!is_prefill_link("https://docs.google.com/forms/d/e/ABC/edit"));
    assert!(!is_prefill_link("not a url"));
}

#[test]
fn invalid_link_is_a_format_error() {
    let err = extract_prefill("https://example.com/forms/d/e/ABC/viewform", &tracer())
        .expect_err("foreign host must be rejected");
    assert!(matches!(err, ExtractError::InvalidInputFormat(_)));
}

#[test]
fn unparsable_link_is_a_url_error() {
    let err = extract_prefill("not a url", &tracer()).expect_err("garbage must be rejected");
    assert!(matches!(err, ExtractError::UrlParse { .. }));
}

// ============================================================================
// Identifier scan
// ============================================================================

#[test]
fn marker_scan_takes_segment_after_e() {
    assert_eq!(
        form_id_from_path("/forms/d/e/ABCXYZ/viewform"),
        Some("ABCXYZ".to_string())
    );
}

#[test]
fn marker_scan_takes_segment_after_d() {
    assert_eq!(
        form_id_from_path("/forms/d/OLD123/viewform"),
        Some("OLD123".to_string())
    );
}

#[test]
fn marker_scan_without_markers_finds_nothing() {
    assert_eq!(form_id_from_path("/forms/viewform"), None);
    assert_eq!(form_id_from_path("/"), None);
}

#[test]
fn missing_marker_is_a_missing_identifier_error() {
    let err = extract_prefill("https://docs.google.com/forms/u/0/viewform", &tracer())
        .expect_err("no marker segment present");
    assert!(matches!(err, ExtractError::MissingIdentifier(_)));
}

#[test]
fn action_url_template() {
    assert_eq!(
        action_url_for("ABC"),
        "https://docs.google.com/forms/d/e/ABC/formResponse"
    );
}

// ============================================================================
// Field enumeration
// ============================================================================

#[test]
fn end_to_end_prefill_extraction() {
    let link =
        "https://docs.google.com/forms/d/e/ABCXYZ/viewform?entry.111=a@b.com&entry.222=5";
    let schema = extract_prefill(link, &tracer()).unwrap();

    assert_eq!(schema.form_id, "ABCXYZ");
    assert!(schema.action_url.ends_with("/e/ABCXYZ/formResponse"));
    assert!(schema.title.is_none());
    assert_eq!(schema.fields.len(), 2);

    assert_eq!(schema.fields[0].name, "entry.111");
    assert_eq!(schema.fields[0].id, "111");
    assert_eq!(schema.fields[0].value, "a@b.com");
    assert_eq!(schema.fields[0].kind, FieldKind::Email);
    assert_eq!(schema.fields[0].required, None);
    assert_eq!(schema.fields[0].fidelity, WireFidelity::Verified);

    assert_eq!(schema.fields[1].name, "entry.222");
    assert_eq!(schema.fields[1].kind, FieldKind::Number);
}

#[test]
fn field_order_matches_query_order() {
    let link = "https://docs.google.com/forms/d/e/ID1/viewform?entry.9=x&entry.2=y&entry.5=z";
    let schema = extract_prefill(link, &tracer()).unwrap();
    let names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["entry.9", "entry.2", "entry.5"]);
}

#[test]
fn repeated_keys_keep_first_occurrence() {
    let link = "https://docs.google.com/forms/d/e/ID1/viewform?entry.5=first&entry.5=second";
    let schema = extract_prefill(link, &tracer()).unwrap();
    assert_eq!(schema.fields.len(), 1);
    assert_eq!(schema.fields[0].value, "first");
}

#[test]
fn non_entry_parameters_are_ignored() {
    let link = "https://docs.google.com/forms/d/e/ID1/viewform?usp=pp_url&entry.1=a&hl=en";
    let schema = extract_prefill(link, &tracer()).unwrap();
    assert_eq!(schema.fields.len(), 1);
    assert_eq!(schema.fields[0].name, "entry.1");
}

#[test]
fn values_are_percent_decoded() {
    let link = "https://docs.google.com/forms/d/e/ID1/viewform?entry.7=hello%20world&entry.8=a+b";
    let schema = extract_prefill(link, &tracer()).unwrap();
    assert_eq!(schema.fields[0].value, "hello world");
    assert_eq!(schema.fields[1].value, "a b");
}

#[test]
fn no_entries_yields_an_empty_field_list() {
    let link = "https://docs.google.com/forms/d/e/ID1/viewform";
    let schema = extract_prefill(link, &tracer()).unwrap();
    assert!(schema.fields.is_empty());
}

#[test]
fn extraction_is_idempotent() {
    let link = "https://docs.google.com/forms/d/e/SAME/viewform?entry.1=x&entry.2=2020-02-02";
    let first = extract_prefill(link, &tracer()).unwrap();
    let second = extract_prefill(link, &tracer()).unwrap();
    assert_eq!(first, second);
}
