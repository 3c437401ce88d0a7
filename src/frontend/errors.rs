use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    InvalidFrameCount { input: String },
    NoPages,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidFrameCount { input } => {
                write!(
                    f,
                    "input error: frame count must be a positive integer (got '{}')",
                    input
                )
            }

            InputError::NoPages => {
                write!(f, "input error: no page numbers found in input")
            }
        }
    }
}

impl std::error::Error for InputError {}
