use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations. All of them are caller bugs: they are raised
/// before anything is mutated and the same call always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid operation on empty structure")]
    EmptyStructure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfRange,
    EmptyStructure,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
            Error::EmptyStructure => ErrorKind::EmptyStructure,
        }
    }

    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(Error::OutOfRange { index, len })
        }
    }
}
