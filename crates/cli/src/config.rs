//! Output configuration resolved from flags and environment

use std::ffi::OsString;

use crate::args::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub color: bool,
    pub format: OutputFormat,
}

impl OutputConfig {
    /// Resolve against the process environment and apply the colour choice
    /// to the `colored` crate.
    pub fn from_env(no_color: bool, format: OutputFormat) -> Self {
        let color = color_enabled(no_color, std::env::var_os("NO_COLOR"));
        colored::control::set_override(color);
        Self { color, format }
    }
}

/// Colour is off when requested by flag or when `NO_COLOR` is set to a
/// non-empty value.
pub fn color_enabled(no_color_flag: bool, no_color_env: Option<OsString>) -> bool {
    if no_color_flag {
        return false;
    }
    !matches!(no_color_env, Some(v) if !v.is_empty())
}
