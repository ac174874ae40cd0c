// src/error.rs
use kiji_core::KijiError;
use thiserror::Error;

/// Errors surfaced by the native CLI.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Kiji(#[from] KijiError),
}

impl From<kiji_traits::IndexError> for CliError {
    fn from(e: kiji_traits::IndexError) -> Self {
        CliError::Kiji(KijiError::Index(e))
    }
}
