use thiserror::Error;

use vg_core::VgError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] VgError),
}

pub type SimResult<T> = Result<T, SimError>;
