//! Error type for the checked byte-slice surface.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Rejections raised before any transform runs. None are retryable: they
/// indicate the caller passed a buffer of the wrong size.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key was not exactly 16 bytes.
    #[error("invalid key length (expected {expected}, got {actual})")]
    InvalidKeyLength {
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// State, block or round key was not exactly 16 bytes.
    #[error("invalid block length (expected {expected}, got {actual})")]
    InvalidBlockLength {
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Key text was not valid hexadecimal.
    #[error("key is not valid hex")]
    InvalidHex,
}
