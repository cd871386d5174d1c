use thiserror::Error;
use wl_core::WlError;

#[derive(Debug, Error)]
pub enum SimError {
    /// Bad static parameters or a bad value produced mid-run.
    #[error(transparent)]
    Wl(#[from] WlError),

    #[cfg(feature = "parallel")]
    #[error("could not build trial thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl SimError {
    /// `true` for errors caught before any trial ran.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, SimError::Wl(WlError::InvalidConfiguration(_)))
    }

    /// `true` for bad values produced while a run was in progress.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SimError::Wl(WlError::InvalidInput(_)))
    }
}

pub type SimResult<T> = Result<T, SimError>;
