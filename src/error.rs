//! Error surface shared by all three containers.
//!
//! Contract violations are reported synchronously at the point of detection
//! and never recovered from internally. Duplicate-key insertion into the map
//! is deliberately not represented here: it is a normal outcome reported
//! through the `(cursor, inserted)` return of `UnorderedMap::insert`.

use thiserror::Error;

/// Error returned by fallible container operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ContainerError {
    /// Element access beyond the valid bounds: an index at or past `len`,
    /// or `pop`/`front`/`back` on an empty container.
    #[error("out of range for {container}")]
    OutOfRange { container: &'static str },

    /// A cursor argument does not refer to a position reachable within the
    /// container's current bounds.
    #[error("invalid cursor for {container}")]
    InvalidIterator { container: &'static str },

    /// A non-positive (or NaN) max load factor was supplied.
    #[error("invalid load factor {value}")]
    InvalidLoadFactor { value: f64 },
}

impl ContainerError {
    pub(crate) fn out_of_range(container: &'static str) -> Self {
        ContainerError::OutOfRange { container }
    }

    pub(crate) fn invalid_iterator(container: &'static str) -> Self {
        ContainerError::InvalidIterator { container }
    }
}
