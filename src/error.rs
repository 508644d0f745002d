//! Error types for random draws and source configuration.

use thiserror::Error;

/// Errors that can occur while configuring a source or drawing from a collection.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Nothing to choose from: an empty slice, a zero total weight, or an empty value sequence
    #[error("cannot choose from an empty input")]
    EmptyInput,

    /// A replacement source was requested but none was supplied
    #[error("replacement is not a usable uniform source")]
    InvalidSource,
}

/// Result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
