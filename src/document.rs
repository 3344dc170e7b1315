//! Hosts file load/save as an ordered list of lines.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::report::Reporter;

/// Read `path` into lines with trailing `\r` / `\n` terminators removed.
pub fn load(path: &Path, reporter: &dyn Reporter) -> Result<Vec<String>> {
    reporter.info(&format!("Reading {}", path.display()));
    let content =
        fs::read_to_string(path).with_context(|| format!("read hosts file: {}", path.display()))?;
    Ok(content
        .lines()
        .map(|l| l.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string())
        .collect())
}

/// Replace the contents of `path` with `lines` joined by `\n` (no trailing newline).
pub fn save(path: &Path, lines: &[String], reporter: &dyn Reporter) -> Result<()> {
    reporter.info(&format!("Writing {}", path.display()));
    fs::write(path, lines.join("\n"))
        .with_context(|| format!("write hosts file: {}", path.display()))?;
    Ok(())
}
