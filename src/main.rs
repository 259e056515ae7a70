//! Issuebot entrypoint: load configuration, connect, and relay until
//! interrupted.

use std::io::{self, Write};
use std::process::ExitCode;

use issuebot::{
    BotError, ConfigError, Dispatcher, IrcConnector, IssuebotConfig, OctocrabIssueGateway,
    PersonalAccessToken, ReferenceScanner, logging, run_forever,
};
use ortho_config::OrthoConfig;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BotError> {
    let config = load_config()?;
    config.validate()?;
    logging::init(config.log_filter.as_deref())?;

    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    let gateway =
        OctocrabIssueGateway::for_token(&token, &config.api_base()?, config.lookup_timeout())?;
    let dispatcher = Dispatcher::new(
        gateway,
        ReferenceScanner::new()?,
        config.resolver()?,
        config.ignore_list(),
    );

    let settings = config.irc_settings()?;
    let connector = IrcConnector::new(&settings)?;

    tokio::select! {
        outcome = run_forever(&connector, &settings, &dispatcher) => outcome?,
        signal = tokio::signal::ctrl_c() => {
            signal.map_err(|error| BotError::Signal { message: error.to_string() })?;
            info!("shutdown requested; exiting");
        }
    }
    Ok(())
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ConfigError::Load`] when ortho-config fails to parse arguments
/// or load configuration files.
fn load_config() -> Result<IssuebotConfig, ConfigError> {
    IssuebotConfig::load().map_err(|error| ConfigError::Load {
        message: error.to_string(),
    })
}
