//! Error types for simdarg

use crate::dtype::DataType;
use thiserror::Error;

/// Result type alias using simdarg's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding argument values
///
/// Only data-dependent conditions are reported here. Passing a region whose
/// length is not a multiple of the element stride to a typed view is a
/// programming error and panics instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value's type is known but differs from the slot's declared type
    #[error("Argument type mismatch: provided {provided}, expected {expected}")]
    ArgumentTypeMismatch {
        /// Device-side name of the provided value's type (e.g. `float3`)
        provided: &'static str,
        /// Data type declared by the argument slot
        expected: DataType,
    },

    /// A byte sink cannot hold the bytes it was asked to write
    #[error(
        "Destination too small: {required} bytes requested at offset {offset}, {available} available"
    )]
    DestinationTooSmall {
        /// Byte offset of the write within the destination region
        offset: usize,
        /// Number of bytes the write needs
        required: usize,
        /// Number of bytes left in the region after `offset`
        available: usize,
    },
}

impl Error {
    /// Create an argument type mismatch error
    pub fn argument_type_mismatch(provided: &'static str, expected: DataType) -> Self {
        Self::ArgumentTypeMismatch { provided, expected }
    }

    /// Create a destination overflow error
    pub fn destination_too_small(offset: usize, required: usize, available: usize) -> Self {
        Self::DestinationTooSmall {
            offset,
            required,
            available,
        }
    }
}
