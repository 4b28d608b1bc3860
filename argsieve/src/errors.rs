//! Error types for flag registration and argument parsing
//!
//! Only conditions that stop a call outright live here. Problems with the
//! user's input are collected as [`Diagnostic`](crate::Diagnostic)s on the
//! [`ParseResult`](crate::ParseResult) instead.

use thiserror::Error;

/// Errors that abort flag registration or a whole parse call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsieveError {
    /// A flag with the same long token is already registered
    #[error("Flag token '--{0}' is already registered")]
    DuplicateFlagToken(String),

    /// A flag with the same short code is already registered
    #[error("Flag code '-{0}' is already registered")]
    DuplicateFlagCode(char),

    /// An input token, or the token resolved as a flag parameter, is empty
    #[error("Empty argument at position {index}")]
    EmptyArgument {
        /// Position of the empty token in the input sequence
        index: usize,
    },

    /// The keyword bounds are inverted
    #[error("Invalid keyword count: maximum {maximum} is less than minimum {minimum}")]
    InvalidKeywordCount {
        /// Configured minimum number of keywords
        minimum: usize,
        /// Configured maximum number of keywords
        maximum: usize,
    },
}

/// Result type for registration and parsing operations
pub type ArgsieveResult<T> = Result<T, ArgsieveError>;
