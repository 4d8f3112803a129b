use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Custom error types for the imhash library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding error
    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),

    /// The image decoded but no hash could be computed from it
    #[error("Could not compute hash: {0}")]
    Computation(String),

    /// Invalid configuration error
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Malformed fingerprint string
    #[error("Invalid fingerprint: {0}")]
    InvalidFingerprint(String),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be opened, read or decoded
    Input,
    /// The input decoded but the hashing pipeline failed
    Computation,
    /// The hasher configuration is invalid
    Configuration,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) | Error::Image(_) | Error::InvalidFingerprint(_) => ErrorKind::Input,
            Error::Computation(_) => ErrorKind::Computation,
            Error::Configuration(_) => ErrorKind::Configuration,
        }
    }

    pub fn is_input(&self) -> bool {
        self.kind() == ErrorKind::Input
    }

    pub fn is_computation(&self) -> bool {
        self.kind() == ErrorKind::Computation
    }
}
