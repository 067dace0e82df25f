use thiserror::Error;

/// Errors raised when an input cannot be turned into a range or an order.
///
/// Both are detected before any computation happens, so an operation either
/// produces its full result or fails with one of these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The input is not a pair of bounds.
    #[error("invalid argument: expected a range of exactly 2 bounds, got {len}")]
    InvalidArgument { len: usize },

    /// The order is neither ascending nor descending.
    #[error("invalid option value: unknown order `{value}`, expected `ascending` or `descending`")]
    InvalidOption { value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
