//! Merge a custom hosts file below the untouched prefix of the local one.

use crate::grammar::MarkerGrammar;
use crate::report::Reporter;

/// How a custom line is checked for the machine's own hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenScan {
    /// Only the first whitespace token is compared. A hostname that appears
    /// later on the line (e.g. `127.0.0.1 myhost`) does not cause a skip.
    #[default]
    FirstToken,
    /// Every whitespace token is compared.
    AllTokens,
}

#[derive(Debug, Clone)]
pub struct Merger {
    grammar: MarkerGrammar,
    skip_own_hostname: bool,
    scan: TokenScan,
}

impl Default for Merger {
    fn default() -> Self {
        Self::new(MarkerGrammar::default())
    }
}

impl Merger {
    pub fn new(grammar: MarkerGrammar) -> Self {
        Self {
            grammar,
            skip_own_hostname: true,
            scan: TokenScan::FirstToken,
        }
    }

    pub fn skip_own_hostname(mut self, skip: bool) -> Self {
        self.skip_own_hostname = skip;
        self
    }

    pub fn token_scan(mut self, scan: TokenScan) -> Self {
        self.scan = scan;
        self
    }

    /// Local lines up to the first marker, then the marker, then every custom
    /// line not mapping `hostname`.
    ///
    /// Anything at or after an existing marker is dropped, so merging the
    /// same custom file again yields the same document.
    pub fn merge(
        &self,
        local: &[String],
        custom: &[String],
        hostname: &str,
        reporter: &dyn Reporter,
    ) -> Vec<String> {
        reporter.info("Combining hosts");
        let mut combined = Vec::with_capacity(local.len() + custom.len() + 1);

        for line in local.iter().take_while(|l| !self.grammar.is_marker(l)) {
            reporter.debug(&format!("Adding from local\t{line}"));
            combined.push(line.clone());
        }

        reporter.debug(&format!("Adding\t{}", self.grammar.marker));
        combined.push(self.grammar.marker.clone());

        for line in custom {
            if self.names_own_host(line, hostname) {
                reporter.info(&format!("Skipping from custom {hostname}"));
                continue;
            }
            reporter.debug(&format!("Adding from custom\t{line}"));
            combined.push(line.clone());
        }

        combined
    }

    fn names_own_host(&self, line: &str, hostname: &str) -> bool {
        if !self.skip_own_hostname || hostname.is_empty() || !line.contains(hostname) {
            return false;
        }
        let mut tokens = line.split_whitespace();
        match self.scan {
            TokenScan::FirstToken => tokens.next() == Some(hostname),
            TokenScan::AllTokens => tokens.any(|t| t == hostname),
        }
    }
}
