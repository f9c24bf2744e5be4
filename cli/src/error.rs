use storefront_core::{AppConfigError, ValidationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(#[from] AppConfigError),

    #[error("failed to read catalog: {0}")]
    CatalogIo(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("not a number: {0}")]
    NotANumber(String),

    #[error("{0}")]
    Invalid(#[from] ValidationError),
}
