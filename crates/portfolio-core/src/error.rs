//! Error Types
//!
//! One enum per fallible boundary. Nothing here is fatal to the page:
//! relay errors become notifications, content errors hit the error boundary.

use thiserror::Error;

/// Failures of a single contact-relay delivery attempt
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("relay is not configured: missing {0}")]
    MissingConfig(&'static str),

    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("relay rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("relay did not answer within {0} ms")]
    Timeout(u64),
}

/// A carousel needs at least as many items as its window shows
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("carousel needs at least {required} items, got {actual}")]
pub struct CarouselError {
    pub required: usize,
    pub actual: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotationError {
    #[error("title rotation needs at least one title")]
    Empty,
}

/// Embedded site content could not be loaded
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid content: {message}")]
    Invalid { message: String },

    #[error(transparent)]
    Carousel(#[from] CarouselError),

    #[error(transparent)]
    Rotation(#[from] RotationError),
}

impl ContentError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ContentError::Invalid { message: message.into() }
    }
}

pub type RelayResult<T> = Result<T, RelayError>;
