//! Estimate command implementation.

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use confint_domain::{summarize, ConfidenceLevel, Method, Sample};

/// Largest precision that still carries information for an `f64`
const MAX_PRECISION: usize = 17;

/// Fully resolved inputs for one estimation run.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateRequest {
    /// Number of positive observations
    pub successes: u64,
    /// Sample size
    pub trials: u64,
    /// Confidence level in percent
    pub confidence: f64,
    /// Methods to report, in order
    pub methods: Vec<Method>,
}

impl EstimateRequest {
    /// Merge command-line arguments over configured settings.
    ///
    /// Returns `None` when the command line lacks successes or trials.
    pub fn resolve(cli: &Cli, settings: &Settings) -> Result<Option<Self>> {
        let Some((successes, trials)) = cli.counts() else {
            return Ok(None);
        };

        let confidence = cli.confidence.unwrap_or(settings.confidence);

        let requested: Vec<Method> = if cli.methods.is_empty() {
            settings
                .methods()?
                .unwrap_or_else(|| Method::ALL.to_vec())
        } else {
            cli.methods.iter().map(|m| (*m).into()).collect()
        };

        let mut methods = Vec::with_capacity(requested.len());
        for method in requested {
            if !methods.contains(&method) {
                methods.push(method);
            }
        }

        Ok(Some(Self {
            successes,
            trials,
            confidence,
            methods,
        }))
    }
}

/// Resolve the number of decimals to print.
pub fn resolve_precision(cli: &Cli, settings: &Settings) -> Option<usize> {
    let precision = cli.precision.or(settings.precision)?;
    if precision > MAX_PRECISION {
        tracing::warn!(
            "precision {} exceeds {} digits; clamping",
            precision,
            MAX_PRECISION
        );
        return Some(MAX_PRECISION);
    }
    Some(precision)
}

/// Execute the estimate command and render its output.
pub fn execute_estimate(request: &EstimateRequest, formatter: &Formatter) -> Result<String> {
    tracing::debug!(
        successes = request.successes,
        trials = request.trials,
        confidence = request.confidence,
        "estimating proportion"
    );

    if request.methods.is_empty() {
        return Err(CliError::InvalidInput("No interval methods selected".into()));
    }

    let sample = Sample::new(request.successes, request.trials)?;
    let level = ConfidenceLevel::new(request.confidence)?;
    let summary = summarize(sample, level, &request.methods)?;

    tracing::info!(
        sample = %summary.sample,
        level = %summary.level,
        intervals = summary.intervals.len(),
        "computed estimates"
    );

    formatter.format_summary(&summary)
}
