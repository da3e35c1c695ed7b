// runner.rs
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

use nsight_common::{PortSource, Report};
use nsight_nmap::source_for;
use nsight_signatures::{build_report, SignatureCatalog};

use crate::config::OutputConfig;
use crate::output::{render_catalog, render_report};

pub async fn run_analyze(
    report: &Path,
    signatures: Option<&Path>,
    config: &OutputConfig,
) -> Result<()> {
    let catalog = load_catalog(signatures)?;
    let source = source_for(report);
    let result = analyze(source.as_ref(), &catalog).await?;

    print!("{}", render_report(&result, config)?);
    Ok(())
}

pub fn run_signatures(signatures: Option<&Path>, config: &OutputConfig) -> Result<()> {
    let catalog = load_catalog(signatures)?;
    print!("{}", render_catalog(&catalog, config)?);
    Ok(())
}

/// Read open ports from `source` and match them against `catalog`.
pub async fn analyze(source: &dyn PortSource, catalog: &SignatureCatalog) -> Result<Report> {
    info!("Reading open ports from {}", source.describe());
    let ports = source
        .open_ports()
        .await
        .with_context(|| format!("cannot parse {}", source.describe()))?;

    if ports.is_empty() {
        warn!("No open TCP ports in {}", source.describe());
    } else {
        info!("Found {} open TCP port(s)", ports.len());
    }

    let report = build_report(&ports, catalog);
    if report.has_matches() {
        info!("{} signature(s) matched", report.outcomes().len());
    } else if !ports.is_empty() {
        warn!("No signature matched {} open port(s)", ports.len());
    }
    Ok(report)
}

/// Load and validate the catalog, defaulting to the built-in table.
pub fn load_catalog(path: Option<&Path>) -> Result<SignatureCatalog> {
    let catalog = match path {
        Some(p) => {
            info!("Loading signatures from {}", p.display());
            SignatureCatalog::from_json_file(p)
                .with_context(|| format!("cannot load signatures from {}", p.display()))?
        }
        None => SignatureCatalog::builtin(),
    };
    catalog.validate().context("invalid signature catalog")?;
    info!("Using {} signature(s)", catalog.len());
    Ok(catalog)
}
