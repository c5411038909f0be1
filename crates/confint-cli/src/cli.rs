//! CLI argument definitions and parsing.

use clap::{ArgAction, Parser};
use confint_domain::Method;
use std::path::PathBuf;

/// Confint - Estimates and confidence intervals of a binomial proportion.
#[derive(Debug, Parser)]
#[command(name = "confint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of positive observations
    pub successes: Option<u64>,

    /// Total number of observations
    pub trials: Option<u64>,

    /// Confidence level in percent [default: 95, or the configured level]
    pub confidence: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Restrict output to the given interval method (repeatable)
    #[arg(short, long = "method", value_enum)]
    pub methods: Vec<MethodArg>,

    /// Number of decimals to print
    #[arg(long)]
    pub precision: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, env = "CONFINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The `(successes, trials)` pair, if both were given.
    pub fn counts(&self) -> Option<(u64, u64)> {
        Some((self.successes?, self.trials?))
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Labelled lines (default)
    Plain,
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// Interval method argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MethodArg {
    /// Normal approximation (Wald)
    Normal,
    /// Clopper-Pearson ("exact")
    ClopperPearson,
    /// Agresti-Coull
    AgrestiCoull,
    /// Wilson score
    Wilson,
    /// Wilson score with continuity correction
    WilsonCc,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Plain => crate::config::OutputFormat::Plain,
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<MethodArg> for Method {
    fn from(method: MethodArg) -> Self {
        match method {
            MethodArg::Normal => Method::Normal,
            MethodArg::ClopperPearson => Method::ClopperPearson,
            MethodArg::AgrestiCoull => Method::AgrestiCoull,
            MethodArg::Wilson => Method::Wilson,
            MethodArg::WilsonCc => Method::WilsonCc,
        }
    }
}
