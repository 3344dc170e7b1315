//! Hosts file actions: backup, read, transform, write.

use anyhow::Result;
use std::path::Path;

use crate::backup;
use crate::document;
use crate::grammar::MarkerGrammar;
use crate::merge::Merger;
use crate::platform::HostnameSource;
use crate::remove::{list_sections, Remover, SectionSpan};
use crate::report::Reporter;

/// Whether an action persists its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Back up, then overwrite the local hosts file.
    Write,
    /// Compute the result only; no backup, no write.
    DryRun,
}

/// Merge `custom` into `local`. Returns the resulting lines.
pub fn merge_file(
    local: &Path,
    custom: &Path,
    merger: &Merger,
    hostnames: &dyn HostnameSource,
    mode: Mode,
    reporter: &dyn Reporter,
) -> Result<Vec<String>> {
    if mode == Mode::Write {
        backup::backup(local, reporter)?;
    }

    let local_lines = document::load(local, reporter)?;
    let custom_lines = document::load(custom, reporter)?;

    let hostname = hostnames.hostname()?;
    reporter.info(&format!("Hostname is {hostname}"));

    let combined = merger.merge(&local_lines, &custom_lines, &hostname, reporter);

    if mode == Mode::Write {
        document::save(local, &combined, reporter)?;
    }
    reporter.info("Done");
    Ok(combined)
}

/// Remove section `name` from `local`. Returns the resulting lines.
pub fn remove_section(
    local: &Path,
    name: &str,
    remover: &Remover,
    mode: Mode,
    reporter: &dyn Reporter,
) -> Result<Vec<String>> {
    if mode == Mode::Write {
        backup::backup(local, reporter)?;
    }

    let local_lines = document::load(local, reporter)?;
    let lines = remover.remove(&local_lines, name, reporter)?;

    if mode == Mode::Write {
        document::save(local, &lines, reporter)?;
    }
    reporter.info("Done");
    Ok(lines)
}

/// Named sections present in `local`. Read-only.
pub fn sections(
    local: &Path,
    grammar: &MarkerGrammar,
    reporter: &dyn Reporter,
) -> Result<Vec<SectionSpan>> {
    let lines = document::load(local, reporter)?;
    Ok(list_sections(grammar, &lines)?)
}
