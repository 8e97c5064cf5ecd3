use mt_core::MtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] MtError),
}

pub type SimResult<T> = Result<T, SimError>;
