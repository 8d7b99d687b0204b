use formforge::trace::logger::TraceLogger;
use formforge::trace::trace::TraceEvent;
use formforge::{convert_markup_page, convert_prefill_link};

fn tracer() -> TraceLogger {
    TraceLogger::disabled()
}

// ============================================================================
// Prefill link, end to end
// ============================================================================

#[test]
fn prefill_conversion_produces_all_three_artifacts() {
    let link =
        "https://docs.google.com/forms/d/e/ABCXYZ/viewform?entry.111=a@b.com&entry.222=5";
    let conversion = convert_prefill_link(link, None, "#ff0000", &tracer()).unwrap();

    assert_eq!(conversion.schema.fields.len(), 2);
    assert_eq!(conversion.title, "Google Form ABCXYZ");

    // The artifacts carry the schema through: wire names, endpoint, theme.
    assert!(conversion.artifacts.html.contains(r#"name="entry.111""#));
    assert!(conversion.artifacts.html.contains(r#"name="entry.222""#));
    assert!(conversion
        .artifacts
        .html
        .contains("/d/e/ABCXYZ/formResponse"));
    assert!(conversion.artifacts.css.contains("--primary-rgb: 255, 0, 0;"));
    assert!(conversion.artifacts.js.contains("ajaxSubmit"));
}

#[test]
fn explicit_title_wins_over_synthesis() {
    let link = "https://docs.google.com/forms/d/e/ABCXYZ/viewform?entry.1=x";
    let conversion = convert_prefill_link(link, Some("Signup Sheet"), "#ff0000", &tracer()).unwrap();
    assert_eq!(conversion.title, "Signup Sheet");
    assert!(conversion
        .artifacts
        .html
        .contains("<title>Signup Sheet</title>"));
}

#[test]
fn blank_explicit_title_falls_back_to_synthesis() {
    let link = "https://docs.google.com/forms/d/e/ABCXYZ/viewform?entry.1=x";
    let conversion = convert_prefill_link(link, Some("   "), "#ff0000", &tracer()).unwrap();
    assert_eq!(conversion.title, "Google Form ABCXYZ");
}

#[test]
fn regeneration_with_the_same_inputs_is_stable() {
    let link = "https://docs.google.com/forms/d/e/ABCXYZ/viewform?entry.1=x";
    let first = convert_prefill_link(link, None, "#123456", &tracer()).unwrap();
    let second = convert_prefill_link(link, None, "#123456", &tracer()).unwrap();
    assert_eq!(first.artifacts, second.artifacts);
}

#[test]
fn theme_color_only_changes_the_stylesheet_variables() {
    let link = "https://docs.google.com/forms/d/e/ABCXYZ/viewform?entry.1=x";
    let red = convert_prefill_link(link, None, "#ff0000", &tracer()).unwrap();
    let blue = convert_prefill_link(link, None, "#0000ff", &tracer()).unwrap();

    assert_eq!(red.schema, blue.schema);
    assert!(red.artifacts.css.contains("255, 0, 0"));
    assert!(blue.artifacts.css.contains("0, 0, 255"));
    assert_eq!(red.artifacts.js, blue.artifacts.js);
}

// ============================================================================
// Markup, end to end
// ============================================================================

#[test]
fn markup_conversion_uses_the_extracted_title() {
    let markup = r#"<html><head><title>Team Lunch</title></head><body>
<form action="https://docs.google.com/forms/d/e/LUNCH1/formResponse">
  <div class="Qr7Oae" role="listitem">
    <div role="heading">Dish</div>
    <input type="text" name="entry.1" value="">
  </div>
</form>
</body></html>"#;
    let conversion = convert_markup_page(markup, None, "#00ff00", &tracer()).unwrap();

    assert_eq!(conversion.title, "Team Lunch");
    assert!(conversion.artifacts.html.contains("<h1>Team Lunch</h1>"));
    assert!(conversion.artifacts.html.contains(r#"name="entry.1""#));
}

#[test]
fn markup_conversion_honors_an_explicit_title() {
    let markup = r#"<html><head><title>Ignored</title></head><body>
<form action="https://docs.google.com/forms/d/e/LUNCH1/formResponse"></form>
</body></html>"#;
    let conversion = convert_markup_page(markup, Some("Chosen"), "#00ff00", &tracer()).unwrap();
    assert_eq!(conversion.title, "Chosen");
}

// ============================================================================
// Trace logging
// ============================================================================

#[test]
fn trace_logger_records_strategy_decisions() {
    let path = std::env::temp_dir().join("formforge_trace_test.jsonl");
    let path_str = path.to_str().unwrap();
    let _ = std::fs::remove_file(&path);

    {
        let tracer = TraceLogger::new(path_str);
        let link = "https://docs.google.com/forms/d/e/TRACED/viewform?entry.1=x";
        convert_prefill_link(link, None, "#ff0000", &tracer).unwrap();
    }

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains(r#""stage":"form_id""#));
    assert!(content.contains(r#""strategy":"path-marker""#));
    assert!(content.contains("TRACED"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn disabled_logger_is_a_silent_no_op() {
    let tracer = TraceLogger::disabled();
    tracer.log(&TraceEvent::new("form_id", "path-marker").with_detail("X"));
}
