//! Windows platform implementations.

use anyhow::{Context, Result};
use windows_sys::Win32::System::SystemInformation::{
    ComputerNamePhysicalDnsHostname, GetComputerNameExW,
};

use crate::error::HostsError;

/// DNS host name, case preserved (not the 15-char NetBIOS `COMPUTERNAME`).
pub fn hostname() -> Result<String> {
    let mut size: u32 = 0;
    // First call only reports the required buffer length (including NUL).
    // SAFETY: a null buffer with size 0 is the documented way to query the length.
    unsafe { GetComputerNameExW(ComputerNamePhysicalDnsHostname, std::ptr::null_mut(), &mut size) };
    if size == 0 {
        return Err(std::io::Error::last_os_error()).context("GetComputerNameExW");
    }

    let mut buf = vec![0u16; size as usize];
    // SAFETY: buf is valid for writes of `size` UTF-16 units.
    let ok = unsafe {
        GetComputerNameExW(ComputerNamePhysicalDnsHostname, buf.as_mut_ptr(), &mut size)
    };
    if ok == 0 {
        return Err(std::io::Error::last_os_error()).context("GetComputerNameExW");
    }
    buf.truncate(size as usize);

    let name = String::from_utf16(&buf)
        .map_err(|_| HostsError::Hostname("hostname is not valid UTF-16".to_string()))?;
    if name.is_empty() {
        return Err(HostsError::Hostname("empty hostname".to_string()).into());
    }
    Ok(name)
}
