use std::path::Path;

use crate::extract::markup::extract_markup;
use crate::extract::prefill::extract_prefill;
use crate::generate::artifact_model::fingerprint;
use crate::schema::form_model::{FormSchema, WireFidelity};
use crate::trace::logger::TraceLogger;
use crate::{convert_markup_page, convert_prefill_link, Conversion};

// ============================================================================
// convert subcommand
// ============================================================================

pub fn cmd_convert(
    url: Option<&str>,
    input: Option<&str>,
    title: Option<&str>,
    theme_color: &str,
    output_dir: &str,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let conversion = run_conversion(url, input, title, theme_color, tracer)?;
    warn_degraded(&conversion.schema);

    std::fs::create_dir_all(output_dir)?;
    let out = Path::new(output_dir);
    let outputs = [
        (out.join("index.html"), &conversion.artifacts.html),
        (out.join("styles.css"), &conversion.artifacts.css),
        (out.join("script.js"), &conversion.artifacts.js),
    ];

    for (path, content) in &outputs {
        std::fs::write(path, content)?;
        if verbose > 0 {
            eprintln!("  Wrote: {} ({})", path.display(), fingerprint(content));
        }
    }

    println!(
        "Converted \"{}\": {} fields -> {}/",
        conversion.title,
        conversion.schema.fields.len(),
        output_dir
    );

    if verbose > 0 {
        for field in &conversion.schema.fields {
            println!(
                "  [{}] {} — {}",
                field.kind.as_str(),
                field.name,
                field.label.as_deref().unwrap_or("(no label)")
            );
        }
    }

    Ok(())
}

fn run_conversion(
    url: Option<&str>,
    input: Option<&str>,
    title: Option<&str>,
    theme_color: &str,
    tracer: &TraceLogger,
) -> Result<Conversion, Box<dyn std::error::Error>> {
    match (url, input) {
        (Some(link), None) => Ok(convert_prefill_link(link, title, theme_color, tracer)?),
        (None, Some(path)) => {
            let markup = std::fs::read_to_string(path)?;
            Ok(convert_markup_page(&markup, title, theme_color, tracer)?)
        }
        _ => Err("provide exactly one of --url or --input".into()),
    }
}

// ============================================================================
// inspect subcommand
// ============================================================================

/// Extract a schema and print it, without generating artifacts.
pub fn cmd_inspect(
    url: Option<&str>,
    input: Option<&str>,
    format: &str,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let schema = match (url, input) {
        (Some(link), None) => extract_prefill(link, tracer)?,
        (None, Some(path)) => {
            let markup = std::fs::read_to_string(path)?;
            extract_markup(&markup, tracer)?
        }
        _ => return Err("provide exactly one of --url or --input".into()),
    };
    warn_degraded(&schema);

    let rendered = match format {
        "yaml" => serde_yaml::to_string(&schema)?,
        _ => serde_json::to_string_pretty(&schema)?,
    };
    println!("{}", rendered);

    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Surface degraded extraction results on stderr; both are non-fatal.
fn warn_degraded(schema: &FormSchema) {
    if schema.fields.is_empty() {
        eprintln!("Warning: no fields recovered; the generated form has no inputs.");
        return;
    }

    let best_effort = schema
        .fields
        .iter()
        .filter(|f| f.fidelity == WireFidelity::BestEffort)
        .count();
    if best_effort > 0 {
        eprintln!(
            "Warning: {} field(s) use synthesized wire names that may not match the original form.",
            best_effort
        );
    }
}
