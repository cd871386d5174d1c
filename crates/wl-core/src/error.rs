//! Framework error type.
//!
//! The taxonomy is deliberately small: anything wrong with the static
//! parameters of a run is [`WlError::InvalidConfiguration`]; anything wrong
//! with a value produced while a run is in progress is
//! [`WlError::InvalidInput`].

use thiserror::Error;

/// The top-level error type for `wl-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WlError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl WlError {
    pub fn config(msg: impl Into<String>) -> Self {
        WlError::InvalidConfiguration(msg.into())
    }

    pub fn input(msg: impl Into<String>) -> Self {
        WlError::InvalidInput(msg.into())
    }
}

/// Shorthand result type for all `wl-*` crates.
pub type WlResult<T> = Result<T, WlError>;
