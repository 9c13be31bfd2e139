use thiserror::Error;

/// Errors that can occur when configuring or operating on a [`Vector`][crate::Vector].
///
/// Every operation validates its arguments before touching the vector, so a call that
/// returns an error has not modified the vector.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The vector could not be created because the element type is zero-sized or the
    /// growth step is zero.
    #[error(
        "invalid vector configuration: element size {element_size} and growth step {growth_step} must both be non-zero"
    )]
    InvalidConfiguration {
        /// Size in bytes of one element of the vector.
        element_size: usize,

        /// The growth step that was requested.
        growth_step: usize,
    },

    /// The position is out of bounds for the requested operation.
    ///
    /// Insertion accepts positions in `0..=length`, all other positional operations
    /// accept positions in `0..length`.
    #[error("position {position} is out of bounds for vector of length {length}")]
    InvalidPosition {
        /// The position that was requested.
        position: usize,

        /// The length of the vector at the time of the call.
        length: usize,
    },

    /// A search was requested without a key to search for.
    #[error("search key is missing")]
    InvalidKey,

    /// The search start position is not the position of an element in the vector.
    #[error("search start {start} is out of bounds for vector of length {length}")]
    InvalidStart {
        /// The start position that was requested.
        start: usize,

        /// The length of the vector at the time of the call.
        length: usize,
    },

    /// The search completed without finding a matching element.
    #[error("no matching element found")]
    NotFound,
}

/// A specialized `Result` type for vector operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
