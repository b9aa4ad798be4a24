use thiserror::Error;

/// Broad classification of a [`NotesError`], for callers that branch on the
/// kind of failure rather than its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong kind of input (e.g. a non-string where a string was expected).
    Type,
    /// A validation rule was violated.
    Value,
    /// The looked-up record or tag does not exist.
    NotFound,
    Io,
    Serialization,
    Store,
}

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Type error: {0}")]
    Type(String),

    #[error("Invalid value: {0}")]
    Value(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl NotesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NotesError::Type(_) => ErrorKind::Type,
            NotesError::Value(_) => ErrorKind::Value,
            NotesError::NotFound(_) => ErrorKind::NotFound,
            NotesError::Io(_) => ErrorKind::Io,
            NotesError::Serialization(_) => ErrorKind::Serialization,
            NotesError::Store(_) => ErrorKind::Store,
        }
    }
}

pub type Result<T> = std::result::Result<T, NotesError>;
