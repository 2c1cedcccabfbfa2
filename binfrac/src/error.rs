//! Error type for the printer and its configuration

use binfrac_core::BinfracError;

/// Crate-level error type
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid fraction or layout: {0}")]
    Core(BinfracError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<BinfracError> for Error {
    fn from(e: BinfracError) -> Self {
        Error::Core(e)
    }
}

impl Error {
    /// Whether the reader on the other end of the output went away
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
