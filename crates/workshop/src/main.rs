//! Algorithm workshop.

use std::process::ExitCode;

use tracing::Level;
use workshop_lib::{app, config, errors};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    let level = if config.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            workshop_cli::ui::print_error(&format!("{err:#}"));
            ExitCode::from(errors::exit_status(&err))
        }
    }
}
