//! Parser configuration and parse results

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{diagnostics::Diagnostic, flags::FlagHandle};

/// Bounds on the number of keywords a parse accepts
///
/// The default accepts any number of keywords.
///
/// # Examples
///
/// ```
/// use argsieve::ParserConfig;
///
/// let config = ParserConfig::keyword_range(1, 2);
/// assert_eq!(config.minimum_keyword_count, 1);
/// assert_eq!(config.maximum_keyword_count, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParserConfig {
    /// Fewer keywords than this is reported as a diagnostic
    pub minimum_keyword_count: usize,
    /// Keywords beyond this are reported as diagnostics and dropped
    pub maximum_keyword_count: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            minimum_keyword_count: 0,
            maximum_keyword_count: usize::MAX,
        }
    }
}

impl ParserConfig {
    /// Create a config with the given inclusive keyword bounds
    #[must_use]
    pub fn keyword_range(minimum: usize, maximum: usize) -> Self {
        Self {
            minimum_keyword_count: minimum,
            maximum_keyword_count: maximum,
        }
    }

    /// Set the minimum keyword count
    #[must_use]
    pub fn with_minimum_keywords(mut self, minimum: usize) -> Self {
        self.minimum_keyword_count = minimum;
        self
    }

    /// Set the maximum keyword count
    #[must_use]
    pub fn with_maximum_keywords(mut self, maximum: usize) -> Self {
        self.maximum_keyword_count = maximum;
        self
    }

    /// Whether the bounds are usable, i.e. maximum is not below minimum
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.maximum_keyword_count >= self.minimum_keyword_count
    }
}

/// Everything one call to [`Parser::parse`](crate::Parser::parse) found
///
/// A non-empty [`diagnostics`](Self::diagnostics) list means the input was
/// flawed, but the keywords and flags that could be understood are still
/// present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParseResult {
    /// Recoverable problems, in the order they were found
    pub diagnostics: Vec<Diagnostic>,
    /// Positional arguments, in input order
    pub keywords: Vec<String>,
    /// Flags that were given, with their parameter (empty if they take none)
    pub flags: BTreeMap<FlagHandle, String>,
}

impl ParseResult {
    /// Create an empty result
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the input parsed without any diagnostics
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Human-readable diagnostic messages, in the order they were found
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    /// Parameter of a flag that was given; empty if it takes none
    #[must_use]
    pub fn flag(&self, handle: FlagHandle) -> Option<&str> {
        self.flags.get(&handle).map(String::as_str)
    }

    /// Whether a flag was given
    #[must_use]
    pub fn is_set(&self, handle: FlagHandle) -> bool {
        self.flags.contains_key(&handle)
    }

    pub(crate) fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Record a flag occurrence; a repeated flag keeps the last parameter
    pub(crate) fn set_flag(&mut self, handle: FlagHandle, parameter: String) {
        self.flags.insert(handle, parameter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_unbounded() {
        let config = ParserConfig::default();
        assert_eq!(config.minimum_keyword_count, 0);
        assert_eq!(config.maximum_keyword_count, usize::MAX);
        assert!(config.is_valid());
    }

    #[test]
    fn test_config_builders() {
        let config = ParserConfig::default()
            .with_minimum_keywords(3)
            .with_maximum_keywords(1);
        assert_eq!(config, ParserConfig::keyword_range(3, 1));
        assert!(!config.is_valid());
    }

    #[test]
    fn test_error_messages_keep_order() {
        let mut result = ParseResult::new();
        assert!(result.is_clean());

        result.push_diagnostic(Diagnostic::EmptyFlag);
        result.push_diagnostic(Diagnostic::UnrecognizedCode('z'));

        assert!(!result.is_clean());
        assert_eq!(
            result.error_messages(),
            vec!["empty flag", "unrecognized flag '-z'"]
        );
    }
}
