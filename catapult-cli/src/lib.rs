// catapult-cli/src/lib.rs
//
// Library portion of the Catapult CLI application.
// Contains argument definitions, logging setup and the command runner shared
// by the `catapult` and `envy` binaries.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

// Re-export items needed by the binaries or integration tests
pub use cli::Cli;
pub use config::{CATAPULT, ENVY, LaunchProfile};
pub use error::{CliResult, WithContext};

use catapult_core::CoreError;

use clap::Parser;
use owo_colors::OwoColorize;

/// Parses the process arguments and runs them under `profile`.
///
/// Returns the process exit code. Usage errors are reported by clap, which
/// exits on its own.
pub fn launch(profile: &LaunchProfile) -> i32 {
    let cli = Cli::parse();
    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    match run(&cli, profile, &argv) {
        Ok(()) => 0,
        Err(e) => {
            report_error(&e);
            1
        }
    }
}

/// Runs one invocation: logging setup, then discovery or the payload.
pub fn run(cli: &Cli, profile: &LaunchProfile, argv: &[String]) -> CliResult<()> {
    if cli.testing {
        println!("{:?}", argv);
        println!("{:?}", cli);
    }

    let script = logging::script_name(argv.first().map(std::ffi::OsStr::new), profile.name);
    let config = cli.to_config(profile);

    let (logger, log_path) = logging::configure_logging(&config, profile, &script)?;
    logging::log_startup(&logger, profile, argv, cli, log_path.as_deref());
    logger.status(format_args!("Running main, with args: {:?}", config));

    if config.is_discovery() {
        commands::discover::run_discover(&config, &logger)?;
    } else {
        commands::payload::run_payload_command(&config, &logger)?;
    }

    logger.flush();
    Ok(())
}

fn report_error(e: &CoreError) {
    if supports_color::on(supports_color::Stream::Stderr).is_some() {
        eprintln!("{} {}", "Error:".red().bold(), e);
    } else {
        eprintln!("Error: {}", e);
    }
}
