//! Optional TOML configuration and its location.
//!
//! Supports HOSTS_MERGE_CONFIG env var override for testing.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::grammar::MarkerGrammar;
use crate::merge::{Merger, TokenScan};
use crate::remove::Remover;

pub const CONFIG_FILE_NAME: &str = "hosts-merge.toml";

/// Contents of `hosts-merge.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Drop custom lines that map this machine's own hostname.
    pub skip_own_hostname: bool,
    /// Compare every token, not just the first, against the hostname.
    pub scan_all_tokens: bool,
    pub grammar: MarkerGrammar,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_own_hostname: true,
            scan_all_tokens: false,
            grammar: MarkerGrammar::default(),
        }
    }
}

/// Config file path: explicit path, else HOSTS_MERGE_CONFIG, else the
/// per-user config dir.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    if let Ok(p) = std::env::var("HOSTS_MERGE_CONFIG") {
        return Some(PathBuf::from(p));
    }
    directories::ProjectDirs::from("", "", "hosts-merge")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

impl Config {
    /// Load from `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Config> {
        if !path.is_file() {
            return Ok(Config::default());
        }
        let s = fs::read_to_string(path)
            .with_context(|| format!("read config: {}", path.display()))?;
        let cfg: Config =
            toml::from_str(&s).with_context(|| format!("parse config: {}", path.display()))?;
        cfg.grammar.validate()?;
        Ok(cfg)
    }

    /// Load from the resolved location (see [`config_path`]).
    ///
    /// An explicit path must exist; the env var and per-user locations
    /// fall back to defaults when absent.
    pub fn load_default(explicit: Option<&Path>) -> Result<Config> {
        if let Some(p) = explicit {
            if !p.is_file() {
                anyhow::bail!("config file not found: {}", p.display());
            }
        }
        match config_path(explicit) {
            Some(p) => Config::load(&p),
            None => Ok(Config::default()),
        }
    }

    pub fn token_scan(&self) -> TokenScan {
        if self.scan_all_tokens {
            TokenScan::AllTokens
        } else {
            TokenScan::FirstToken
        }
    }

    pub fn merger(&self) -> Merger {
        Merger::new(self.grammar.clone())
            .skip_own_hostname(self.skip_own_hostname)
            .token_scan(self.token_scan())
    }

    pub fn remover(&self) -> Remover {
        Remover::new(self.grammar.clone())
    }
}
