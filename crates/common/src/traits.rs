//! Core traits for nsight components

use crate::types::{Port, PortSet};
use anyhow::Result;
use async_trait::async_trait;

/// Anything that can produce the set of open TCP ports for a host,
/// e.g. a saved scan report on disk or piped on stdin.
#[async_trait]
pub trait PortSource: Send + Sync {
    /// Read the source and collect its open ports.
    async fn open_ports(&self) -> Result<PortSet>;

    /// Human-readable origin, used in log lines and error context.
    fn describe(&self) -> String;
}
