use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    InvalidFrameCount { frame_count: usize },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidFrameCount { frame_count } => {
                write!(
                    f,
                    "simulation error: frame count must be at least 1 (got {})",
                    frame_count
                )
            }
        }
    }
}

impl std::error::Error for SimError {}

pub type SimResult<T> = Result<T, SimError>;
