//! Line-oriented parsing of nmap port tables

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use nsight_common::{Port, PortSet};

/// `<port>/tcp <ws> open` at the start of a line; whatever follows the state
/// prefix (service, version, `|filtered`) is ignored.
static OPEN_TCP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)/tcp\s+open").expect("valid open-port regex"));

/// Collect every TCP port reported in state `open`.
///
/// Lines that do not match are ignored. Any positive port number is kept,
/// including values outside the conventional TCP range.
pub fn parse_open_ports(text: &str) -> PortSet {
    text.lines()
        .filter_map(|line| parse_line(line.trim()))
        .collect()
}

fn parse_line(line: &str) -> Option<Port> {
    let captures = OPEN_TCP_RE.captures(line)?;
    match captures[1].parse::<Port>() {
        Ok(0) | Err(_) => {
            trace!("Ignoring non-positive or oversized port in line: {}", line);
            None
        }
        Ok(port) => Some(port),
    }
}
