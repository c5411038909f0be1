//! Confint CLI - Estimates and confidence intervals of a binomial proportion.

use clap::Parser;
use confint_cli::commands::{self, EstimateRequest};
use confint_cli::config::OutputFormat;
use confint_cli::{telemetry, Cli, Config, Formatter};

fn main() {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> confint_cli::Result<()> {
    // Too few arguments is not an error: show usage and exit successfully
    if cli.counts().is_none() {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| "confint".to_string());
        let formatter = Formatter::new(OutputFormat::Plain, !cli.no_color);
        println!("{}", formatter.usage(&program));
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    let settings = &config.settings;

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && settings.color;

    let formatter = Formatter::new(format, color_enabled)
        .with_precision(commands::resolve_precision(&cli, settings));

    if let Some(request) = EstimateRequest::resolve(&cli, settings)? {
        let output = commands::execute_estimate(&request, &formatter)?;
        println!("{}", output);
    }

    Ok(())
}
