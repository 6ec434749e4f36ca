//! stylecheck CLI tool.
//!
//! Usage:
//! ```bash
//! sc --spec <file>|<rule>[,<rule>...] [OPTIONS] <file>...
//! sc --list [lang][,lang...]
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;

/// Line-oriented style checker with pluggable, per-language rule sets
#[derive(Parser)]
#[command(name = "sc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files to check; use "-" for standard input
    files: Vec<String>,

    /// Set of rules to check: a spec file or comma-separated rule names
    #[arg(long, value_name = "FILE|RULE[,RULE...]")]
    spec: Option<String>,

    /// List available rules, optionally filtered by language
    #[arg(
        long,
        value_name = "LANG[,LANG...]",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    list: Option<String>,

    /// Use color output
    #[arg(long)]
    color: bool,

    /// Output format for check results
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Diagnostic lines on the error stream (the stable format).
    #[default]
    Text,
    /// A JSON report of the whole run on standard output.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Some(langs) = cli.list {
        commands::list::run(&langs)
    } else if let Some(spec) = cli.spec {
        commands::check::run(&cli.files, &spec, cli.format, cli.color)
    } else {
        anyhow::bail!("nothing to do: pass --spec with files to check, or --list");
    }
}
