use std::io;

use anyhow::{Context, Result};
use tracing::info;

use launchform::config::Config;
use launchform::console::{run_session, ConsoleNotifier, ConsoleSurface};
use launchform::form::FormReducer;
use launchform::logging::init_tracing;
use launchform::validator::FormValidator;

fn main() -> Result<()> {
    init_tracing();

    let config = Config::load().context("Failed to load configuration")?;
    info!(path = %Config::config_path().display(), "Configuration loaded");

    let mut validator = FormValidator::new(
        ConsoleSurface::new(io::stderr()),
        ConsoleNotifier::new(io::stdout()),
        FormReducer::from_config(&config),
    );

    let stdin = io::stdin();
    let submitted = run_session(stdin.lock(), &mut validator).context("Failed to read input")?;
    info!(submitted, "Session finished");

    Ok(())
}
