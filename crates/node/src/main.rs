//! `athrd`: resolves the network, verifies every parameter set and prints the
//! active one.

pub mod config;
pub mod report;

use std::fmt;

use athrd_chainparams::ParamsError;
use athrd_log as logging;
use athrd_log::{log_debug, log_error, log_info};

use crate::config::{parse_args, usage, CliAction, Config, OutputFormat};
use crate::report::ParamsReport;

#[derive(Debug)]
pub enum RunError {
    /// Bad command line or config file; nothing was selected.
    Usage(String),
    Params(ParamsError),
    Output(String),
}

impl RunError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Usage(_) => 2,
            RunError::Params(_) | RunError::Output(_) => 1,
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Usage(message) => f.write_str(message),
            RunError::Params(err) => write!(f, "{err}"),
            RunError::Output(message) => write!(f, "failed to render report: {message}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Params(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParamsError> for RunError {
    fn from(err: ParamsError) -> Self {
        RunError::Params(err)
    }
}

pub fn run_entry() -> Result<(), RunError> {
    match parse_args().map_err(RunError::Usage)? {
        CliAction::PrintHelp => {
            println!("{}", usage());
            Ok(())
        }
        CliAction::PrintVersion => {
            println!("athrd {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        CliAction::Run(config) => {
            let output = run_with_config(&config)?;
            print!("{output}");
            Ok(())
        }
    }
}

/// Runs startup against `config` and returns the rendered report.
pub fn run_with_config(config: &Config) -> Result<String, RunError> {
    logging::init(logging::LogConfig {
        level: config.log_level,
        format: config.log_format,
        timestamps: config.log_timestamps,
    });
    log_debug!(
        "Startup: network={} conf={}",
        config.network,
        config.conf_path.display()
    );

    let registry = athrd_chainparams::initialize().map_err(|err| {
        log_error!("{err}");
        RunError::from(err)
    })?;
    registry.select(config.network);
    let params = registry.active()?;
    log_info!(
        "Startup: {} parameters verified (genesis {}, port {})",
        params.name(),
        athrd_consensus::hash256_to_hex(&params.genesis_hash()),
        params.default_port
    );

    let report = ParamsReport::new(&params, config.show_checkpoints, config.show_seeds);
    match config.output {
        OutputFormat::Text => Ok(report.to_text()),
        OutputFormat::Json => report
            .to_json()
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|err| RunError::Output(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(RunError::Usage("bad".to_string()).exit_code(), 2);
        assert_eq!(RunError::Params(ParamsError::NoActiveNetwork).exit_code(), 1);
        assert_eq!(RunError::Output("io".to_string()).exit_code(), 1);
    }

    #[test]
    fn params_error_is_the_source() {
        let err = RunError::from(ParamsError::NoActiveNetwork);
        assert_eq!(err.to_string(), "no network parameters selected");
        assert!(std::error::Error::source(&err).is_some());
    }
}
