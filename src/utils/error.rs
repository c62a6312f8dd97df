use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Termination signal lost: {0}")]
    SignalError(#[from] tokio::sync::oneshot::error::RecvError),
}

pub type Result<T> = std::result::Result<T, PrimeError>;
