//! # Pocketcalc CLI Application
//!
//! Terminal front end for calc_core. With no subcommand it opens the
//! interactive menu; each calculator is also reachable as a one-shot
//! subcommand for scripts:
//!
//! ```text
//! calc_cli si 1000 5 2
//! calc_cli temp --mode c2f -- -40
//! calc_cli --json age 2000-01-01
//! ```
//!
//! Calculation errors exit with status 1, configuration errors with status 2.

mod cli;
mod config;
mod output;
mod shell;

use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;

use calc_core::app::CalculatorApp;
use calc_core::calculations::evaluate;
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use thiserror::Error;

use cli::{Cli, Commands};
use config::ResolvedConfig;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let args = Cli::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: Cli) -> Result<ExitCode, CliError> {
    let file_config = config::load_config(args.config.as_deref())?;
    let env_policy = std::env::var(config::POLICY_ENV).ok();
    let resolved = config::resolve(&file_config, &args, env_policy.as_deref())?;
    init_logging(&resolved);

    log::debug!("Config file: {:?}", file_config);
    log::info!(
        "Resolved config: output={:?} policy={} reference_date={:?}",
        resolved.output, resolved.settings.parse_policy, resolved.settings.reference_date
    );

    let command = args.command.unwrap_or(Commands::Menu);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::List => {
            output::print_features(&mut out, resolved.output)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Menu => {
            let app = CalculatorApp::new(resolved.settings);
            let stdin = io::stdin();
            shell::Shell::new(app, stdin.lock(), &mut out).run()?;
            Ok(ExitCode::SUCCESS)
        }
        other => {
            let Some(request) = other.request() else {
                return Ok(ExitCode::SUCCESS);
            };
            match evaluate(&request, &resolved.settings) {
                Ok(report) => {
                    output::print_report(&mut out, resolved.output, &report)?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(error) => {
                    log::debug!("{} failed: {:?}", request.feature.id(), error);
                    output::print_error(&mut out, &mut io::stderr(), resolved.output, &error)?;
                    out.flush()?;
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

fn init_logging(resolved: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    // Logging is best effort; a second init or an unwritable file leaves it off.
    match &resolved.log_file {
        Some(path) => {
            if let Ok(log_file) = File::create(path) {
                let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
            }
        }
        None => {
            let _ = WriteLogger::init(resolved.log_level, log_config, io::stderr());
        }
    }
}
