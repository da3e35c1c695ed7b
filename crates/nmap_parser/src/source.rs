//! Port sources backed by nmap reports

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::debug;

use nsight_common::{PortSet, PortSource};

use crate::parser::parse_open_ports;

/// Nmap normal-output report stored on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PortSource for FileSource {
    async fn open_ports(&self) -> Result<PortSet> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("cannot read {}", self.path.display()))?;
        let ports = parse_open_ports(&text);
        debug!("Parsed {} open port(s) from {}", ports.len(), self.describe());
        Ok(ports)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Nmap normal-output report piped on standard input.
#[derive(Debug, Clone, Default)]
pub struct StdinSource;

#[async_trait]
impl PortSource for StdinSource {
    async fn open_ports(&self) -> Result<PortSet> {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("cannot read standard input")?;
        let ports = parse_open_ports(&text);
        debug!("Parsed {} open port(s) from stdin", ports.len());
        Ok(ports)
    }

    fn describe(&self) -> String {
        "<stdin>".to_string()
    }
}

/// Pick a source for a command-line path; `-` means standard input.
pub fn source_for(path: &Path) -> Box<dyn PortSource> {
    if path.as_os_str() == "-" {
        Box::new(StdinSource)
    } else {
        Box::new(FileSource::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_file_source_reads_report() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "PORT    STATE SERVICE").unwrap();
        writeln!(file, "139/tcp open  netbios-ssn").unwrap();
        writeln!(file, "445/tcp open  microsoft-ds").unwrap();
        writeln!(file, "3389/tcp closed ms-wbt-server").unwrap();

        let source = FileSource::new(file.path());
        let ports = source.open_ports().await.unwrap();
        assert_eq!(ports.sorted(), vec![139, 445]);
    }

    #[tokio::test]
    async fn test_missing_file_names_path() {
        let source = FileSource::new("/nonexistent/nsight/report.txt");
        let err = source.open_ports().await.unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/nsight/report.txt"));
    }

    #[test]
    fn test_source_for_dash_is_stdin() {
        assert_eq!(source_for(Path::new("-")).describe(), "<stdin>");
        assert_eq!(source_for(Path::new("scan.txt")).describe(), "scan.txt");
    }
}
