//! CLI definitions and command routing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::hosts::{self, Mode};
use crate::merge::TokenScan;
use crate::platform;
use crate::report::{self, Reporter, TracingReporter};

#[derive(Parser)]
#[command(name = "hosts-merge")]
#[command(about = "Merge a custom hosts file into the system hosts file, or remove a named section")]
pub struct Cli {
    /// Full path to local hosts file, or "auto" to detect it from the platform
    #[arg(long = "local-hosts", value_name = "PATH")]
    pub local_hosts: String,

    /// Config file (default: HOSTS_MERGE_CONFIG or the user config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the resulting hosts file instead of writing it (no backup is taken)
    #[arg(long)]
    pub dry_run: bool,

    /// Log every line decision
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge two hosts files
    Merge {
        /// Full path to custom hosts file
        #[arg(long = "custom-hosts", value_name = "PATH")]
        custom_hosts: PathBuf,
        /// Keep custom lines that map this machine's own hostname
        #[arg(long)]
        keep_own_hostname: bool,
        /// Match the hostname against every token of a line, not only the first
        #[arg(long)]
        scan_all_tokens: bool,
    },
    /// Remove a hosts section
    Remove {
        /// Name of the section to remove
        #[arg(long = "section", value_name = "NAME")]
        section: String,
    },
    /// List named sections in the local hosts file
    Sections,
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    report::init_logging(cli.verbose)?;

    let config = Config::load_default(cli.config.as_deref())?;
    let local = resolve_local(&cli.local_hosts, &TracingReporter)?;
    let mode = if cli.dry_run { Mode::DryRun } else { Mode::Write };

    match cli.command {
        Commands::Merge {
            custom_hosts,
            keep_own_hostname,
            scan_all_tokens,
        } => cmd_merge(&config, &local, &custom_hosts, keep_own_hostname, scan_all_tokens, mode),
        Commands::Remove { section } => cmd_remove(&config, &local, &section, mode),
        Commands::Sections => cmd_sections(&config, &local),
    }
}

/// Resolve `--local-hosts`, reporting when platform detection is used.
pub fn resolve_local(requested: &str, reporter: &dyn Reporter) -> Result<PathBuf> {
    if requested == platform::AUTO {
        reporter.info("Auto detecting hosts location");
    }
    let path = platform::resolve_hosts_path(requested)?;
    if requested == platform::AUTO {
        reporter.info(&format!("Hosts set to {}", path.display()));
    }
    Ok(path)
}

fn cmd_merge(
    config: &Config,
    local: &Path,
    custom: &Path,
    keep_own_hostname: bool,
    scan_all_tokens: bool,
    mode: Mode,
) -> Result<()> {
    let mut merger = config.merger();
    if keep_own_hostname {
        merger = merger.skip_own_hostname(false);
    }
    if scan_all_tokens {
        merger = merger.token_scan(TokenScan::AllTokens);
    }
    let hostnames = platform::default_hostname_source();
    let lines = hosts::merge_file(
        local,
        custom,
        &merger,
        hostnames.as_ref(),
        mode,
        &TracingReporter,
    )?;
    if mode == Mode::DryRun {
        println!("{}", lines.join("\n"));
    }
    Ok(())
}

fn cmd_remove(config: &Config, local: &Path, section: &str, mode: Mode) -> Result<()> {
    let lines = hosts::remove_section(local, section, &config.remover(), mode, &TracingReporter)?;
    if mode == Mode::DryRun {
        println!("{}", lines.join("\n"));
    }
    Ok(())
}

fn cmd_sections(config: &Config, local: &Path) -> Result<()> {
    for span in hosts::sections(local, &config.grammar, &TracingReporter)? {
        match span.end {
            Some(end) => println!("{}\t{}\t{}", span.name, span.start, end),
            None => println!("{}\t{}\tunterminated", span.name, span.start),
        }
    }
    Ok(())
}
