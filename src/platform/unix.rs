//! Unix (Linux, Haiku, macOS) platform implementations.

use anyhow::{Context, Result};

use crate::error::HostsError;

const HOST_NAME_MAX: usize = 256;

/// Kernel hostname via gethostname(2).
pub fn hostname() -> Result<String> {
    let mut buf = vec![0u8; HOST_NAME_MAX];
    // SAFETY: buf is valid for writes of buf.len() bytes.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast::<libc::c_char>(), buf.len()) };
    if rc != 0 {
        return Err(std::io::Error::last_os_error()).context("gethostname");
    }
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    buf.truncate(end);
    let name = String::from_utf8(buf)
        .map_err(|_| HostsError::Hostname("hostname is not valid UTF-8".to_string()))?;
    if name.is_empty() {
        return Err(HostsError::Hostname("empty hostname".to_string()).into());
    }
    Ok(name)
}
