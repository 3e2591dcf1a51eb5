use std::collections::TryReserveError;

/// Memory for a key copy or a bucket array could not be obtained.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocError(TryReserveError);

impl std::fmt::Display for AllocError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "symbol table allocation failed: {}", self.0)
    }
}

impl std::error::Error for AllocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<TryReserveError> for AllocError {
    fn from(value: TryReserveError) -> Self {
        Self(value)
    }
}

/// Why `put` left the table unchanged.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InsertError {
    /// A binding with this key already exists; its value was kept.
    DuplicateKey,

    /// Allocation failed; nothing was inserted and no growth was applied.
    Alloc(AllocError),
}

impl std::fmt::Display for InsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKey => f.write_str("key already bound"),
            Self::Alloc(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for InsertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DuplicateKey => None,
            Self::Alloc(e) => Some(e),
        }
    }
}

impl From<AllocError> for InsertError {
    fn from(value: AllocError) -> Self {
        Self::Alloc(value)
    }
}

impl From<TryReserveError> for InsertError {
    fn from(value: TryReserveError) -> Self {
        Self::Alloc(value.into())
    }
}
