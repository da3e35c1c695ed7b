//! Nmap Parser - open port extraction from nmap normal output (`-oN`)
//!
//! Supported inputs:
//! - a report file on disk
//! - a report piped on standard input (path `-`)

mod parser;
mod source;

pub use parser::parse_open_ports;
pub use source::{source_for, FileSource, StdinSource};
