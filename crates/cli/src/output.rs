//! Output formatting for match reports and catalogs

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use nsight_common::{MatchOutcome, Port, Report};
use nsight_signatures::SignatureCatalog;

use crate::args::OutputFormat;
use crate::config::OutputConfig;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Marker,
    Service,
    Required,
    Present,
    Missing,
    Notice,
}

fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        Tone::Marker | Tone::Required => text.green().bold().to_string(),
        Tone::Service => text.cyan().bold().to_string(),
        Tone::Present => text.yellow().bold().to_string(),
        Tone::Missing => text.dimmed().to_string(),
        Tone::Notice => text.yellow().to_string(),
    }
}

/// "139, 445" with every port styled on its own.
fn join_ports(ports: &[Port], tone: Tone, color: bool) -> String {
    ports
        .iter()
        .map(|p| paint(&p.to_string(), tone, color))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a report in the configured format.
pub fn render_report(report: &Report, config: &OutputConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(report_text(report, config.color)),
        OutputFormat::Json => report_json(report),
    }
}

/// Render the catalog in the configured format.
pub fn render_catalog(catalog: &SignatureCatalog, config: &OutputConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(catalog_text(catalog, config.color)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(catalog)?),
    }
}

fn report_text(report: &Report, color: bool) -> String {
    let outcomes = match report {
        Report::NoOpenPorts => {
            return format!("{}\n", paint("No open ports found.", Tone::Notice, color));
        }
        Report::Evaluated { outcomes, .. } => outcomes,
    };

    let mut out = String::new();
    for outcome in outcomes {
        out.push_str(&outcome_line(outcome, color));
        out.push('\n');
    }
    if outcomes.is_empty() {
        out.push_str(&paint(
            "No composite service signatures recognised.",
            Tone::Notice,
            color,
        ));
        out.push('\n');
    }
    out.push('\n');
    out
}

fn outcome_line(outcome: &MatchOutcome, color: bool) -> String {
    let mut line = format!(
        "{} {}: Required ports {} are present",
        paint("▶", Tone::Marker, color),
        paint(&format!("Possible {} detected", outcome.name), Tone::Service, color),
        join_ports(&outcome.required, Tone::Required, color)
    );
    if !outcome.has_optional() {
        return line;
    }
    if !outcome.present.is_empty() {
        line.push_str(&format!(
            ", optional ports {} are also present",
            join_ports(&outcome.present, Tone::Present, color)
        ));
    }
    if !outcome.missing.is_empty() {
        line.push_str(&format!(
            ", optional ports {} are missing",
            join_ports(&outcome.missing, Tone::Missing, color)
        ));
    }
    line
}

fn report_json(report: &Report) -> Result<String> {
    let status = match report {
        Report::NoOpenPorts => "no_open_ports",
        Report::Evaluated { outcomes, .. } if outcomes.is_empty() => "no_matches",
        Report::Evaluated { .. } => "matched",
    };

    let output = json!({
        "open_ports": report.open_ports(),
        "status": status,
        "matches": report.outcomes(),
    });

    Ok(serde_json::to_string_pretty(&output)?)
}

fn catalog_text(catalog: &SignatureCatalog, color: bool) -> String {
    let mut out = String::new();
    for (idx, sig) in catalog.iter().enumerate() {
        let required: Vec<Port> = sig.required.iter().copied().collect();
        out.push_str(&format!(
            "[{}] {}: required {}",
            idx + 1,
            paint(&sig.name, Tone::Service, color),
            join_ports(&required, Tone::Required, color)
        ));
        if !sig.optional.is_empty() {
            let optional: Vec<Port> = sig.optional.iter().copied().collect();
            out.push_str(&format!(
                ", optional {}",
                join_ports(&optional, Tone::Present, color)
            ));
        }
        out.push('\n');
    }
    out
}
