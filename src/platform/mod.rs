//! Platform abstraction: hosts file location and the machine's hostname.

use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

use crate::error::HostsError;

/// `--local-hosts` value that asks for platform detection.
pub const AUTO: &str = "auto";

/// Operating systems with a known hosts file location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    Haiku,
    Other(String),
}

impl Platform {
    /// Platform this binary was built for.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            "haiku" => Platform::Haiku,
            other => Platform::Other(other.to_string()),
        }
    }

    /// System hosts file, if this platform has a known one.
    pub fn hosts_path(&self) -> Result<PathBuf, HostsError> {
        match self {
            Platform::Windows => Ok(PathBuf::from(r"C:\Windows\system32\drivers\etc\hosts")),
            Platform::Linux => Ok(PathBuf::from("/etc/hosts")),
            Platform::Haiku => Ok(PathBuf::from("/system/settings/network/hosts")),
            Platform::Other(os) => Err(HostsError::UnsupportedPlatform(os.clone())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => f.write_str("Windows"),
            Platform::Linux => f.write_str("Linux"),
            Platform::Haiku => f.write_str("Haiku"),
            Platform::Other(os) => f.write_str(os),
        }
    }
}

/// Resolve `--local-hosts` on the running platform.
pub fn resolve_hosts_path(requested: &str) -> Result<PathBuf, HostsError> {
    resolve_hosts_path_for(requested, &Platform::current())
}

/// `auto` becomes the platform's hosts path; anything else is taken literally.
pub fn resolve_hosts_path_for(requested: &str, platform: &Platform) -> Result<PathBuf, HostsError> {
    if requested == AUTO {
        platform.hosts_path()
    } else {
        Ok(PathBuf::from(requested))
    }
}

/// Source of the current machine's hostname.
pub trait HostnameSource {
    fn hostname(&self) -> Result<String>;
}

/// Asks the operating system.
pub struct SystemHostname;

impl HostnameSource for SystemHostname {
    fn hostname(&self) -> Result<String> {
        #[cfg(unix)]
        return unix::hostname();

        #[cfg(windows)]
        return windows::hostname();

        #[cfg(not(any(unix, windows)))]
        return Err(HostsError::Hostname("no hostname lookup on this platform".to_string()).into());
    }
}

/// Always reports the same name.
#[derive(Debug, Clone)]
pub struct FixedHostname(pub String);

impl HostnameSource for FixedHostname {
    fn hostname(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Get platform HostnameSource implementation.
/// If HOSTS_MERGE_HOSTNAME is set (e.g. in tests), that name is used instead.
pub fn default_hostname_source() -> Box<dyn HostnameSource> {
    if let Ok(name) = std::env::var("HOSTS_MERGE_HOSTNAME") {
        return Box::new(FixedHostname(name));
    }
    Box::new(SystemHostname)
}
