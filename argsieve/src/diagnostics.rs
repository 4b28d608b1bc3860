//! Recoverable problems found while scanning input tokens

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A recoverable problem reported by [`Parser::parse`](crate::Parser::parse)
///
/// Diagnostics never stop the scan. They are collected in arrival order and
/// their `Display` output is the human-readable message shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Diagnostic {
    /// A bare `-` or `--`
    EmptyFlag,
    /// A keyword arrived after the maximum keyword count was reached
    UnexpectedKeyword(String),
    /// A character in a short-flag cluster is not an ASCII letter
    InvalidFlag(char),
    /// A letter in a short-flag cluster matches no registered code
    UnrecognizedCode(char),
    /// A short flag needs a parameter but none follows the cluster
    MissingShortParameter(char),
    /// A flawed cluster spells out a registered long token
    SuggestLongFlag(String),
    /// A `--token` matches no registered flag
    UnrecognizedToken(String),
    /// A long flag needs a parameter but none follows it
    MissingLongParameter(String),
    /// Fewer keywords than the configured minimum
    TooFewKeywords {
        /// Configured minimum number of keywords
        expected: usize,
        /// Number of keywords actually accepted
        found: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFlag => f.write_str("empty flag"),
            Self::UnexpectedKeyword(keyword) => write!(f, "unexpected keyword '{keyword}'"),
            Self::InvalidFlag(code) => write!(f, "invalid flag '-{code}'"),
            Self::UnrecognizedCode(code) => write!(f, "unrecognized flag '-{code}'"),
            Self::MissingShortParameter(code) => {
                write!(f, "parameter expected for flag '-{code}'")
            }
            Self::SuggestLongFlag(token) => write!(f, "did you mean '--{token}'?"),
            Self::UnrecognizedToken(token) => write!(f, "unrecognized flag '--{token}'"),
            Self::MissingLongParameter(token) => {
                write!(f, "flag '--{token}' expects a parameter")
            }
            Self::TooFewKeywords { expected, found } => {
                write!(f, "{expected} keyword(s) expected, but found {found}")
            }
        }
    }
}
