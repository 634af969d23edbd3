use divine_net::NetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DivineError {
    #[error("network setup failed: {0}")]
    Net(#[from] NetError),
}

pub type DivineResult<T> = Result<T, DivineError>;
