use std::fmt;
use std::io;

/// Failure reasons a file backend can report. Display output is the
/// reason phrase alone; callers prepend operation and file name.
#[derive(Debug)]
pub enum SourceError {
    NotFound,
    PermissionDenied,
    Io(io::Error),
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::NotFound => write!(f, "No such file or directory"),
            SourceError::PermissionDenied => write!(f, "Permission denied"),
            SourceError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl From<io::Error> for SourceError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound,
            io::ErrorKind::PermissionDenied => SourceError::PermissionDenied,
            _ => SourceError::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, SourceError>;
