//! Excise a named `# start|name` .. `# end|name` block from a hosts file.

use crate::error::HostsError;
use crate::grammar::{MarkerGrammar, Sentinel};
use crate::report::Reporter;

#[derive(Debug, Clone, Default)]
pub struct Remover {
    grammar: MarkerGrammar,
}

impl Remover {
    pub fn new(grammar: MarkerGrammar) -> Self {
        Self { grammar }
    }

    /// Copy `local` minus every line from a start sentinel naming `name`
    /// through the matching end sentinel, both inclusive.
    ///
    /// Sections do not nest. A start sentinel without a matching end drops
    /// the remainder of the document.
    pub fn remove(
        &self,
        local: &[String],
        name: &str,
        reporter: &dyn Reporter,
    ) -> Result<Vec<String>, HostsError> {
        reporter.info(&format!("Removing custom hosts section {name}"));
        let mut kept = Vec::with_capacity(local.len());
        let mut skipping = false;

        for (idx, line) in local.iter().enumerate() {
            let line_no = idx + 1;

            if self.grammar.matches(line, line_no, Sentinel::Start, name)? {
                reporter.info(&format!("Found start of section {name}, will skip content."));
                skipping = true;
            }

            if skipping {
                reporter.debug(&format!("Skipping\t{line}"));
            } else {
                reporter.debug(&format!("Adding from local\t{line}"));
                kept.push(line.clone());
            }

            if self.grammar.matches(line, line_no, Sentinel::End, name)? {
                reporter.info(&format!("Found end of section {name}, will stop skipping content."));
                skipping = false;
            }
        }

        if skipping {
            reporter.info(&format!(
                "Section {name} has no end sentinel; dropped everything after its start"
            ));
        }

        Ok(kept)
    }
}

/// A named section found in a document. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    pub name: String,
    pub start: usize,
    /// `None` when the section is never closed.
    pub end: Option<usize>,
}

/// Every named section in `lines`, in order of their start sentinels.
/// End sentinels close the most recent open section of the same name.
pub fn list_sections(
    grammar: &MarkerGrammar,
    lines: &[String],
) -> Result<Vec<SectionSpan>, HostsError> {
    let mut spans: Vec<SectionSpan> = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        match grammar.sentinel(line) {
            Some(Sentinel::Start) => {
                let name = grammar.section_name(line, line_no)?;
                spans.push(SectionSpan {
                    name: name.to_string(),
                    start: line_no,
                    end: None,
                });
            }
            Some(Sentinel::End) => {
                let name = grammar.section_name(line, line_no)?;
                if let Some(open) = spans
                    .iter_mut()
                    .rev()
                    .find(|s| s.end.is_none() && s.name == name)
                {
                    open.end = Some(line_no);
                }
            }
            None => {}
        }
    }

    Ok(spans)
}
