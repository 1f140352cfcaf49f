//! Error type shared by both containers.

use core::fmt;

/// Error raised by fallible container operations.
///
/// Callers should match on the variant, never on the rendered message.
/// A failed operation leaves the container unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A pop was attempted on a container with zero elements.
    EmptyCollection,
    /// A position crossed a container boundary or no longer denotes an
    /// element: dereferencing or advancing past the end, retreating past
    /// the start, or removing at the end position.
    InvalidPosition,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyCollection => write!(f, "collection is empty"),
            Error::InvalidPosition => write!(f, "position is out of range"),
        }
    }
}

impl std::error::Error for Error {}
