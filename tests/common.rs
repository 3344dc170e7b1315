//! Shared test helpers.

use std::cell::RefCell;
use tempfile::TempDir;

use hosts_merge::report::Reporter;

/// Scratch directory for hosts files.
/// Uses current dir (workspace) so sandbox allows full access.
pub fn temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("hosts_merge_test_")
        .tempdir_in(std::env::current_dir().unwrap_or_else(|_| std::path::Path::new(".").into()))
        .expect("temp dir")
}

pub fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Reporter that keeps every message, tagged with its level.
#[derive(Default)]
pub struct RecordingReporter {
    messages: RefCell<Vec<(&'static str, String)>>,
}

impl RecordingReporter {
    pub fn messages(&self) -> Vec<(&'static str, String)> {
        self.messages.borrow().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages.borrow().iter().any(|(_, m)| m.contains(needle))
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.messages.borrow_mut().push(("info", message.to_string()));
    }

    fn debug(&self, message: &str) {
        self.messages.borrow_mut().push(("debug", message.to_string()));
    }
}
