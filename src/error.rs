use thiserror::Error;

use crate::form::LengthError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Length(#[from] LengthError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("clipboard error: {0}")]
    Clipboard(String),
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
