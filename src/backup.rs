//! Rolling `.bak` copy taken before the hosts file is rewritten.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::Reporter;

/// `<path>.bak`, keeping the original extension (`hosts.txt` -> `hosts.txt.bak`).
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Copy `path` over its `.bak` sibling. Returns the backup location.
pub fn backup(path: &Path, reporter: &dyn Reporter) -> Result<PathBuf> {
    let dest = backup_path(path);
    reporter.info(&format!(
        "Saving copy of {} to {}",
        path.display(),
        dest.display()
    ));
    fs::copy(path, &dest)
        .with_context(|| format!("back up {} to {}", path.display(), dest.display()))?;
    Ok(dest)
}
