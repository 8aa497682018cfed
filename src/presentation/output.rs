//! Output Rendering
//!
//! Text for people, NDJSON events (`{"event": ...}`, one per line) for scripts.

use std::io::{self, Write};

use crate::application::{BundleReport, PlanSummary};
use crate::config::ConfigWarning;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

pub fn report_event(report: &BundleReport) -> serde_json::Value {
    serde_json::json!({
        "event": "bundled",
        "output": report.output_path.display().to_string(),
        "bytes": report.bytes,
        "engine": report.engine,
        "redirects": report.redirects,
        "excludes": report.excludes,
    })
}

pub fn plan_event(summary: &PlanSummary) -> serde_json::Value {
    serde_json::to_value(summary).unwrap_or_else(|_| serde_json::json!({ "event": "plan" }))
}

pub fn warning_event(warning: &ConfigWarning) -> serde_json::Value {
    serde_json::json!({
        "event": "warning",
        "kind": "unknown_config_key",
        "key": warning.key,
        "file": warning.file.display().to_string(),
        "line": warning.line,
        "suggestion": warning.suggestion,
    })
}

/// `configuration` marks failures raised before the engine ran.
pub fn error_event(message: &str, configuration: bool) -> serde_json::Value {
    serde_json::json!({
        "event": "error",
        "message": message,
        "configuration": configuration,
    })
}

pub fn render_report(report: &BundleReport) -> String {
    format!(
        "✓ Bundle written\n\n  Output: {}\n  Engine: {}\n  {} redirects, {} exclusions, {} bytes\n",
        report.output_path.display(),
        report.engine,
        report.redirects,
        report.excludes,
        report.bytes
    )
}

pub fn render_plan(summary: &PlanSummary) -> String {
    let mut out = String::new();
    out.push_str("Bundle plan\n\n");
    out.push_str(&format!("  Entry:  {}\n", summary.entry));
    out.push_str(&format!("  Output: {}\n", summary.output));

    out.push_str(&format!(
        "\n  First-party ({}): {}\n",
        summary.first_party.len(),
        summary.first_party.join(", ")
    ));

    out.push_str(&format!("\n  Redirects ({}):\n", summary.redirects.len()));
    for redirect in &summary.redirects {
        out.push_str(&format!("    {}\n", redirect.replace('|', " -> ")));
    }

    out.push_str(&format!("\n  Excludes ({}):\n", summary.excludes.len()));
    for exclude in &summary.excludes {
        out.push_str(&format!("    {}\n", exclude));
    }
    out
}

pub fn render_warning(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => format!(
            "[!] unknown config key '{}' at {} (did you mean '{}'?)",
            warning.key, location, suggestion
        ),
        None => format!("[!] unknown config key '{}' at {}", warning.key, location),
    }
}
