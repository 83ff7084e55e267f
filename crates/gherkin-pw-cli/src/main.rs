//! `gherkin-pw`: convert a Gherkin feature file into a Playwright test file.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use gherkin_pw_cli::cli::{Cli, run};
use gherkin_pw_cli::config::CliConfig;
use gherkin_pw_cli::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.build_config() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);

    match run(&cli) {
        Ok(summary) => {
            if summary.unmapped_steps > 0 {
                info!(
                    unmapped_steps = summary.unmapped_steps,
                    "some steps have no Playwright mapping; see `// Step not mapped:` comments"
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let message = format!("{e:#}");
            error!(error = %message, "conversion failed");
            ExitCode::FAILURE
        }
    }
}
