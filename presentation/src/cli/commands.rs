//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for tribunal results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fact sheet, every round and the verdict
    Full,
    /// Only the verdict
    Verdict,
    /// JSON output
    Json,
}

impl From<OutputFormat> for tribunal_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => tribunal_domain::OutputFormat::Full,
            OutputFormat::Verdict => tribunal_domain::OutputFormat::Verdict,
            OutputFormat::Json => tribunal_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for payment-tribunal
#[derive(Parser, Debug)]
#[command(name = "payment-tribunal")]
#[command(author, version, about = "Adversarial tribunal for disputed payments")]
#[command(long_about = r#"
Payment Tribunal adjudicates a disputed charge with a fixed panel of roles.

The process has three rounds:
1. Opening: the User Advocate and the Risk Officer state their positions
2. Rebuttal: each challenges the other
3. Final vote: the Judge scores the votes and escalates to a human when
   confidence is low, agreement is weak, the Risk Officer vetoes, or the
   bank state cannot be established

Configuration files are loaded from (in priority order):
1. TRIBUNAL_* environment variables
2. --config <path>     Explicit config file
3. ./tribunal.toml     Project-level config
4. ~/.config/payment-tribunal/config.toml   Global config

Example:
  payment-tribunal scenario circuit_breaker
  payment-tribunal scenario --all --output verdict
  payment-tribunal adjudicate dispute.json --output json
  echo '{"bank_status":"FAILED","ledger_status":"NOT_FOUND","amount":42}' | payment-tribunal adjudicate -
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress round-by-round progress
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Never call the enrichment service
    #[arg(long, global = true)]
    pub no_enrich: bool,

    /// Do not append verdicts to the history file
    #[arg(long, global = true)]
    pub no_history: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Adjudicate a dispute event read from a JSON file (`-` for stdin)
    Adjudicate {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Run a bundled scenario
    Scenario {
        /// Scenario name (see `scenarios`)
        #[arg(value_name = "NAME", required_unless_present = "all")]
        name: Option<String>,

        /// Run every bundled scenario in order
        #[arg(long, conflicts_with = "name")]
        all: bool,
    },

    /// List the bundled scenarios
    Scenarios,

    /// Summarize the verdict history
    Stats {
        /// History file (defaults to the configured path)
        #[arg(long, value_name = "PATH")]
        history: Option<PathBuf>,
    },
}

impl Cli {
    /// Whether `adjudicate` reads from standard input
    pub fn reads_stdin(&self) -> bool {
        matches!(&self.command, Some(Command::Adjudicate { input }) if input.as_os_str() == "-")
    }
}
