//! Typed errors raised by the hosts grammar, locator and hostname lookup.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostsError {
    /// `auto` hosts path requested on an OS without a known hosts location.
    #[error("cannot auto-detect hosts file on unsupported platform '{0}'")]
    UnsupportedPlatform(String),

    /// A section sentinel line without a `|name` payload.
    #[error("malformed section sentinel on line {line}: {text:?}")]
    MalformedSentinel { line: usize, text: String },

    #[error("invalid marker grammar: {0}")]
    InvalidGrammar(String),

    #[error("could not resolve hostname: {0}")]
    Hostname(String),
}
