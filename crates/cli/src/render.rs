//! Output rendering for the `gak` binary.
//!
//! Results go to stdout either as an aligned field table or as a single JSON
//! document. Decode failures are drawn with ariadne against the key itself so
//! the offending character is underlined.

use std::io::{self, IsTerminal};

use anyhow::Result;
use ariadne::{Color, Config, Fmt, Label, Report, ReportKind, Source};
use global_address_key::{DecodeError, Field, Sample};
use serde::Serialize;

// ── Output format ───────────────────────────────────────────────────────

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Aligned, coloured terminal output.
    Pretty,
    /// Machine-readable JSON.
    Json,
}

impl Format {
    /// Use the explicit choice, or pick from whether stdout is a TTY.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            // Default: pretty for interactive terminals, JSON for pipes
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ── Fields ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct FieldRow<'a> {
    name: &'a str,
    value: &'a str,
    length: usize,
}

impl<'a> From<&Field<'a>> for FieldRow<'a> {
    fn from(f: &Field<'a>) -> Self {
        Self {
            name: f.name,
            value: f.value,
            length: f.value_len(),
        }
    }
}

/// Render decoded fields.
///
/// Pretty output is one line per field: name, value and the value length in
/// parentheses.
pub(crate) fn render_fields(fields: &[Field<'_>], format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let rows: Vec<FieldRow<'_>> = fields.iter().map(FieldRow::from).collect();
            print_json(&serde_json::json!({
                "success": true,
                "fields": rows,
            }))
        }
        Format::Pretty => {
            if fields.is_empty() {
                eprintln!("no fields");
                return Ok(());
            }
            let width = fields
                .iter()
                .map(|f| f.name.chars().count())
                .max()
                .unwrap_or(0);
            for f in fields {
                let padded = format!("{:<width$}", f.name);
                let len = format!("({})", f.value_len());
                println!("{}  {} {}", padded.fg(Color::Cyan), f.value, len.fg(Color::Blue));
            }
            Ok(())
        }
    }
}

/// Render the decoded payload text as-is.
pub(crate) fn render_payload(payload: &str, format: Format) -> Result<()> {
    match format {
        Format::Json => print_json(&serde_json::json!({
            "success": true,
            "payload": payload,
        })),
        Format::Pretty => {
            println!("{payload}");
            Ok(())
        }
    }
}

/// Render a single field lookup. `None` means absent or empty.
pub(crate) fn render_lookup(name: &str, value: Option<&str>, format: Format) -> Result<()> {
    match format {
        Format::Json => print_json(&serde_json::json!({
            "success": true,
            "name": name,
            "found": value.is_some(),
            "value": value,
        })),
        Format::Pretty => {
            match value {
                // Raw value only, nothing else on stdout.
                Some(v) => println!("{v}"),
                None => eprintln!("{}: not present", name.fg(Color::Cyan)),
            }
            Ok(())
        }
    }
}

/// Render a freshly encoded key.
pub(crate) fn render_encoded(token: &str, format: Format) -> Result<()> {
    match format {
        Format::Json => print_json(&serde_json::json!({
            "success": true,
            "key": token,
        })),
        Format::Pretty => {
            println!("{token}");
            Ok(())
        }
    }
}

/// Render the sample key list with each sample's alt key.
pub(crate) fn render_samples(samples: &[Sample], format: Format) -> Result<()> {
    let alt_keys: Vec<Option<String>> = samples
        .iter()
        .map(|s| global_address_key::get_alt_key(s.token))
        .collect();
    match format {
        Format::Json => {
            let items: Vec<serde_json::Value> = samples
                .iter()
                .zip(&alt_keys)
                .enumerate()
                .map(|(i, (s, alt))| {
                    serde_json::json!({
                        "number": i + 1,
                        "label": s.label,
                        "key": s.token,
                        "alt_key": alt,
                    })
                })
                .collect();
            print_json(&serde_json::json!({ "success": true, "samples": items }))
        }
        Format::Pretty => {
            for (i, (s, alt)) in samples.iter().zip(&alt_keys).enumerate() {
                let alt = alt.as_deref().unwrap_or("-");
                println!("{}. {} (alt_key: {})", i + 1, s.label.fg(Color::Cyan), alt);
                println!("   {}", s.token);
            }
            Ok(())
        }
    }
}

// ── Failures ────────────────────────────────────────────────────────────

/// Report a key that failed to decode.
///
/// Pretty output goes to stderr with the key as source; JSON output is an
/// error envelope on stdout.
pub(crate) fn render_decode_failure(token: &str, err: &DecodeError, format: Format) {
    match format {
        Format::Json => {
            let out = serde_json::json!({
                "success": false,
                "error": "decode_failed",
                "message": err.to_string(),
                "position": err.position(),
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&out).expect("error JSON serialization cannot fail")
            );
        }
        Format::Pretty => render_decode_failure_pretty(token, err),
    }
}

fn render_decode_failure_pretty(token: &str, err: &DecodeError) {
    let token_chars = token.chars().count();
    let Some(start) = err.position().filter(|&p| p < token_chars) else {
        eprintln!("{}: {err}", "error".fg(Color::Red));
        return;
    };

    let source_name = "<key>";
    let span = start..start + 1;
    let label = match err {
        DecodeError::InvalidLength { .. } => "dangling character",
        _ => "not in the base64url alphabet",
    };

    let report = Report::build(ReportKind::Error, (source_name, span.clone()))
        .with_message(err.to_string())
        .with_config(Config::default().with_compact(false))
        .with_label(
            Label::new((source_name, span))
                .with_message(label)
                .with_color(Color::Red),
        )
        .with_help("global address keys use the characters A-Z a-z 0-9 - _ (padding '=' optional)")
        .finish();

    let mut cache = (source_name, Source::from(token));
    report.eprint(&mut cache).ok();
}

/// Report any other command failure.
pub(crate) fn render_command_failure(err: &anyhow::Error, format: Format) {
    match format {
        Format::Json => {
            let out = serde_json::json!({
                "success": false,
                "error": "command_failed",
                "message": format!("{err:#}"),
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&out).expect("error JSON serialization cannot fail")
            );
        }
        Format::Pretty => eprintln!("{}: {err:#}", "error".fg(Color::Red)),
    }
}
