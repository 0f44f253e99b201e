use std::{error::Error, fmt, io};

pub type BenchResult<T> = Result<T, BenchError>;

#[derive(Debug)]
pub enum BenchError {
    Wave(io::Error),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::Wave(err) => write!(f, "waveform capture failed: {err}"),
        }
    }
}

impl Error for BenchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BenchError::Wave(err) => Some(err),
        }
    }
}

impl From<io::Error> for BenchError {
    fn from(value: io::Error) -> Self {
        BenchError::Wave(value)
    }
}
