use thiserror::Error;

use crate::config::ConfigError;

/// Crate-level error.
///
/// Counter operations never fail, so only the ambient layers contribute
/// variants here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

pub type InternalResult<T> = Result<T, Error>;
