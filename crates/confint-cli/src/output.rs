//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use confint_domain::{Interval, ProportionSummary};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Width of the label column in plain output
const LABEL_WIDTH: usize = 18;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    precision: Option<usize>,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
            precision: None,
        }
    }

    /// Print numbers with a fixed number of decimals.
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    /// Format a full estimation summary.
    pub fn format_summary(&self, summary: &ProportionSummary) -> Result<String> {
        match self.format {
            OutputFormat::Plain => Ok(self.format_summary_plain(summary)),
            OutputFormat::Table => Ok(self.format_summary_table(summary)),
            OutputFormat::Json => self.format_summary_json(summary),
        }
    }

    /// Labelled lines, one estimate per line.
    fn format_summary_plain(&self, summary: &ProportionSummary) -> String {
        let point = &summary.point;
        let mut lines = vec![
            String::new(),
            self.heading("Estimates of probability"),
            String::new(),
            format!("Max. likelihood (x/n) = {}", self.number(point.max_likelihood)),
            format!("Laplace   (x+1)/(n+2) = {}", self.number(point.laplace)),
            format!("Wilson (x+z2/2)/(n+z2)= {}", self.number(point.wilson)),
            String::new(),
            self.heading(&format!(
                "Estimates of {} confidence interval (mid, min, max)",
                summary.level
            )),
            String::new(),
        ];

        for (method, ci) in &summary.intervals {
            lines.push(format!(
                "{:<width$}{}",
                format!("{}:", method.label()),
                self.triple(ci),
                width = LABEL_WIDTH
            ));
        }

        lines.join("\n")
    }

    /// Point estimates and intervals as two tables.
    fn format_summary_table(&self, summary: &ProportionSummary) -> String {
        let point = &summary.point;

        let mut builder = Builder::default();
        builder.push_record(["Estimate", "Formula", "Value"]);
        builder.push_record([
            "Max. likelihood".to_string(),
            "x/n".to_string(),
            self.number(point.max_likelihood),
        ]);
        builder.push_record([
            "Laplace".to_string(),
            "(x+1)/(n+2)".to_string(),
            self.number(point.laplace),
        ]);
        builder.push_record([
            "Wilson".to_string(),
            "(x+z²/2)/(n+z²)".to_string(),
            self.number(point.wilson),
        ]);
        let points = Self::styled(builder);

        let mut builder = Builder::default();
        builder.push_record(["Method", "Mid", "Min", "Max", "Width"]);
        for (method, ci) in &summary.intervals {
            builder.push_record([
                method.label().to_string(),
                self.number(ci.estimate),
                self.number(ci.lower),
                self.number(ci.upper),
                self.number(ci.width()),
            ]);
        }
        let intervals = Self::styled(builder);

        format!(
            "{}\n{}\n\n{}\n{}",
            self.heading(&format!("Estimates of probability ({})", summary.sample)),
            points,
            self.heading(&format!("{} confidence intervals", summary.level)),
            intervals
        )
    }

    /// Summary as a pretty-printed JSON document.
    fn format_summary_json(&self, summary: &ProportionSummary) -> Result<String> {
        let intervals: Vec<serde_json::Value> = summary
            .intervals
            .iter()
            .map(|(method, ci)| {
                serde_json::json!({
                    "method": method.as_str(),
                    "label": method.label(),
                    "estimate": ci.estimate,
                    "lower": ci.lower,
                    "upper": ci.upper
                })
            })
            .collect();

        let document = serde_json::json!({
            "successes": summary.sample.successes(),
            "trials": summary.sample.trials(),
            "confidence_percent": summary.level.percent(),
            "critical_value": summary.level.z(),
            "point_estimates": {
                "max_likelihood": summary.point.max_likelihood,
                "laplace": summary.point.laplace,
                "wilson": summary.point.wilson
            },
            "intervals": intervals
        });

        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Usage text shown when too few arguments are given.
    pub fn usage(&self, program: &str) -> String {
        format!(
            "{}\n\nUsage: {} nr_positive nr_total [confidence_percent]\n  \
             95% confidence interval is calculated if the last argument is omitted",
            self.heading("Calculates confidence intervals of portions"),
            program
        )
    }

    fn triple(&self, ci: &Interval) -> String {
        format!(
            "({}, {}, {})",
            self.number(ci.estimate),
            self.number(ci.lower),
            self.number(ci.upper)
        )
    }

    /// Shortest round-trip representation unless a precision is set.
    fn number(&self, value: f64) -> String {
        match self.precision {
            Some(digits) => format!("{:.*}", digits, value),
            None => format!("{:?}", value),
        }
    }

    fn styled(builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn heading(&self, text: &str) -> String {
        if self.color_enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}
