use thiserror::Error;

#[derive(Debug, Error)]
pub enum SensorError {
    #[error("sensor parse error: {0}")]
    Parse(String),

    #[error("sensor configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SensorResult<T> = Result<T, SensorError>;
