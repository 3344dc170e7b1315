//! Marker and section sentinel grammar of a managed hosts file.
//!
//! ```text
//! # Following lines are appended by hosts-merge
//! # start|<name>
//! # end|<name>
//! ```

use serde::{Deserialize, Serialize};

use crate::error::HostsError;

/// Line separating original local content from content appended by a merge.
pub const MERGE_MARKER: &str = "# Following lines are appended by hosts-merge";
/// Prefix of a named section's opening line.
pub const SECTION_START: &str = "# start|";
/// Prefix of a named section's closing line.
pub const SECTION_END: &str = "# end|";

const NAME_SEPARATOR: char = '|';

/// Literals recognised by the merger and remover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerGrammar {
    pub marker: String,
    pub section_start: String,
    pub section_end: String,
}

impl Default for MarkerGrammar {
    fn default() -> Self {
        Self {
            marker: MERGE_MARKER.to_string(),
            section_start: SECTION_START.to_string(),
            section_end: SECTION_END.to_string(),
        }
    }
}

/// Which sentinel a line opens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    Start,
    End,
}

impl MarkerGrammar {
    pub fn new(
        marker: impl Into<String>,
        section_start: impl Into<String>,
        section_end: impl Into<String>,
    ) -> Result<Self, HostsError> {
        let grammar = Self {
            marker: marker.into(),
            section_start: section_start.into(),
            section_end: section_end.into(),
        };
        grammar.validate()?;
        Ok(grammar)
    }

    /// Reject literals that would match every line.
    pub fn validate(&self) -> Result<(), HostsError> {
        for (what, value) in [
            ("marker", &self.marker),
            ("section_start", &self.section_start),
            ("section_end", &self.section_end),
        ] {
            if value.is_empty() {
                return Err(HostsError::InvalidGrammar(format!("{what} must not be empty")));
            }
        }
        Ok(())
    }

    /// True when `line` is (or begins with) the merge marker.
    pub fn is_marker(&self, line: &str) -> bool {
        line.starts_with(&self.marker)
    }

    pub fn sentinel(&self, line: &str) -> Option<Sentinel> {
        if line.starts_with(&self.section_start) {
            Some(Sentinel::Start)
        } else if line.starts_with(&self.section_end) {
            Some(Sentinel::End)
        } else {
            None
        }
    }

    /// Section name carried by a sentinel line: the second `|`-delimited field.
    ///
    /// `line_no` is 1-based and only used for the error.
    pub fn section_name<'a>(&self, line: &'a str, line_no: usize) -> Result<&'a str, HostsError> {
        line.split(NAME_SEPARATOR)
            .nth(1)
            .ok_or_else(|| HostsError::MalformedSentinel {
                line: line_no,
                text: line.to_string(),
            })
    }

    /// `sentinel` if `line` opens with it and names `name`.
    pub fn matches(
        &self,
        line: &str,
        line_no: usize,
        sentinel: Sentinel,
        name: &str,
    ) -> Result<bool, HostsError> {
        let prefix = match sentinel {
            Sentinel::Start => &self.section_start,
            Sentinel::End => &self.section_end,
        };
        if !line.starts_with(prefix.as_str()) {
            return Ok(false);
        }
        Ok(self.section_name(line, line_no)? == name)
    }
}
