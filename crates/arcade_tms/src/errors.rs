use arcade_config::ConfigError;
use arcade_core::CoreError;
use thiserror::Error;

/// Application-level error, wrapping the lower layers plus export failures.
#[derive(Debug, Error)]
pub enum TmsError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("config error: {0}")]
    Config(String),

    #[error("export error: {0}")]
    Export(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for TmsError {
    fn from(err: ConfigError) -> Self {
        TmsError::Config(err.to_string())
    }
}

impl From<csv::Error> for TmsError {
    fn from(err: csv::Error) -> Self {
        TmsError::Export(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for TmsError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        TmsError::Export(err.to_string())
    }
}

/// Error surfaced by the CLI front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(String),

    #[error(transparent)]
    App(#[from] TmsError),
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::App(TmsError::Core(err))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::App(err.into())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::App(TmsError::Io(err))
    }
}
