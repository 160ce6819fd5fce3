use std::fmt;

/// Specifies a category of the error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong dimensions, unknown or mismatched labels, non-finite values.
    Shape,
    /// A precondition of the algorithm is violated (e.g. profiles are not dominant).
    Domain,
}

/// An error returned by any stage of the decision pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct McdaError {
    kind: ErrorKind,
    message: String,
}

/// A type alias for result type with `McdaError`.
pub type McdaResult<T> = Result<T, McdaError>;

impl McdaError {
    /// Creates a shape error.
    pub fn shape(message: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Shape, message: message.into() }
    }

    /// Creates a domain error.
    pub fn domain(message: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Domain, message: message.into() }
    }

    /// Returns error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns error message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for McdaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for McdaError {}
