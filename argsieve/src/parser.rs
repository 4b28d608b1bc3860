//! Classification of raw input tokens into keywords, flags and diagnostics

use std::ffi::OsStr;

use tracing::{debug, trace};

use crate::{
    diagnostics::Diagnostic,
    errors::{ArgsieveError, ArgsieveResult},
    flags::{Flag, FlagHandle, FlagRegistry},
    types::{ParseResult, ParserConfig},
};

/// A flag registry together with keyword bounds
///
/// Register flags first, then call [`parse`](Self::parse) any number of
/// times. Parsing only borrows the parser, so a finished parser can be shared
/// between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parser {
    registry: FlagRegistry,
    config: ParserConfig,
}

impl Parser {
    /// Create a parser from an existing registry and keyword bounds
    #[must_use]
    pub fn new(registry: FlagRegistry, config: ParserConfig) -> Self {
        Self { registry, config }
    }

    /// Create a parser with no flags and the given keyword bounds
    #[must_use]
    pub fn with_config(config: ParserConfig) -> Self {
        Self::new(FlagRegistry::new(), config)
    }

    /// Register a flag with this parser's registry
    ///
    /// # Errors
    ///
    /// Returns an error if the token or code is already registered, see
    /// [`FlagRegistry::add_flag`].
    pub fn add_flag(&mut self, flag: Flag) -> ArgsieveResult<FlagHandle> {
        self.registry.add_flag(flag)
    }

    /// Registered flags
    #[must_use]
    pub fn registry(&self) -> &FlagRegistry {
        &self.registry
    }

    /// Keyword bounds
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Mutable access to the keyword bounds
    pub fn config_mut(&mut self) -> &mut ParserConfig {
        &mut self.config
    }

    /// Classify a sequence of input tokens
    ///
    /// Tokens not starting with `-` are keywords. `--token` is a long flag and
    /// `-abc` a cluster of short flags. A flag that takes a parameter reads it
    /// from the following input token; several such flags in one cluster read
    /// consecutive tokens after the cluster, in order.
    ///
    /// Malformed input never stops the scan: it is reported through
    /// [`ParseResult::diagnostics`] next to whatever could be understood.
    /// Repeating a flag overwrites its earlier parameter.
    ///
    /// # Errors
    ///
    /// - [`ArgsieveError::InvalidKeywordCount`] if the maximum keyword count
    ///   is below the minimum, checked before any token is looked at
    /// - [`ArgsieveError::EmptyArgument`] if a token that is scanned or
    ///   resolved as a parameter is the empty string
    ///
    /// # Examples
    ///
    /// ```
    /// use argsieve::{Flag, Parser, ParserConfig};
    ///
    /// let mut parser = Parser::with_config(ParserConfig::keyword_range(1, 1));
    /// let all = parser.add_flag(Flag::new("all", 'a'))?;
    /// let output = parser.add_flag(Flag::with_parameter("output", 'o'))?;
    ///
    /// let result = parser.parse(&["-ao", "out.txt", "input.txt"])?;
    ///
    /// assert!(result.is_clean());
    /// assert_eq!(result.keywords, vec!["input.txt"]);
    /// assert_eq!(result.flag(all), Some(""));
    /// assert_eq!(result.flag(output), Some("out.txt"));
    /// # Ok::<(), argsieve::ArgsieveError>(())
    /// ```
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> ArgsieveResult<ParseResult> {
        if !self.config.is_valid() {
            return Err(ArgsieveError::InvalidKeywordCount {
                minimum: self.config.minimum_keyword_count,
                maximum: self.config.maximum_keyword_count,
            });
        }

        let mut result = ParseResult::new();
        let mut cursor = 0;

        while cursor < tokens.len() {
            let token = tokens[cursor].as_ref();

            let step = if token.is_empty() {
                return Err(ArgsieveError::EmptyArgument { index: cursor });
            } else if token == "-" || token == "--" {
                trace!(cursor, "empty flag");
                result.push_diagnostic(Diagnostic::EmptyFlag);
                1
            } else if let Some(long) = token.strip_prefix("--") {
                self.parse_long_flag(long, tokens, cursor, &mut result)?
            } else if let Some(cluster) = token.strip_prefix('-') {
                self.parse_cluster(cluster, tokens, cursor, &mut result)?
            } else {
                self.accept_keyword(token, &mut result);
                1
            };

            cursor += step;
        }

        let found = result.keywords.len();
        if found < self.config.minimum_keyword_count {
            result.push_diagnostic(Diagnostic::TooFewKeywords {
                expected: self.config.minimum_keyword_count,
                found,
            });
        }

        debug!(
            tokens = tokens.len(),
            keywords = result.keywords.len(),
            flags = result.flags.len(),
            diagnostics = result.diagnostics.len(),
            "parsed arguments"
        );

        Ok(result)
    }

    /// Classify the current process's arguments, without the program name
    ///
    /// Arguments that are not valid Unicode are converted lossily, with
    /// invalid sequences replaced by `U+FFFD`.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use argsieve::{Flag, Parser};
    ///
    /// let mut parser = Parser::default();
    /// let help = parser.add_flag(Flag::new("help", 'h'))?;
    ///
    /// let result = parser.parse_env()?;
    /// if result.is_set(help) {
    ///     println!("usage: tool [-h] FILE...");
    /// }
    /// # Ok::<(), argsieve::ArgsieveError>(())
    /// ```
    pub fn parse_env(&self) -> ArgsieveResult<ParseResult> {
        self.parse_os(std::env::args_os().skip(1))
    }

    /// Classify platform strings, converting them to Unicode lossily
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse).
    pub fn parse_os<I>(&self, args: I) -> ArgsieveResult<ParseResult>
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        let args: Vec<String> = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string_lossy().into_owned())
            .collect();
        self.parse(&args)
    }

    fn accept_keyword(&self, keyword: &str, result: &mut ParseResult) {
        if result.keywords.len() >= self.config.maximum_keyword_count {
            trace!(keyword, "keyword over maximum");
            result.push_diagnostic(Diagnostic::UnexpectedKeyword(keyword.to_string()));
        } else {
            trace!(keyword, "keyword");
            result.keywords.push(keyword.to_string());
        }
    }

    /// Handle `-abc`, returning how many tokens the cluster and its
    /// parameters occupy
    fn parse_cluster<S: AsRef<str>>(
        &self,
        cluster: &str,
        tokens: &[S],
        cursor: usize,
        result: &mut ParseResult,
    ) -> ArgsieveResult<usize> {
        let mut consumed = 0;
        let mut flawed = false;

        for code in cluster.chars() {
            if !code.is_ascii_alphabetic() {
                result.push_diagnostic(Diagnostic::InvalidFlag(code));
                flawed = true;
                continue;
            }

            let Some((handle, flag)) = self.registry.find_by_code(code) else {
                result.push_diagnostic(Diagnostic::UnrecognizedCode(code));
                flawed = true;
                continue;
            };

            if !flag.takes_parameter {
                trace!(%code, "short flag");
                result.set_flag(handle, String::new());
                continue;
            }

            // Parameters stack up right after the cluster token
            // A dash token is left in place for the main loop
            match lookahead_parameter(tokens, cursor + 1 + consumed)? {
                Lookahead::Value(parameter) => {
                    trace!(%code, parameter, "short flag with parameter");
                    result.set_flag(handle, parameter.to_string());
                    consumed += 1;
                }
                Lookahead::FlagLike | Lookahead::End => {
                    result.push_diagnostic(Diagnostic::MissingShortParameter(code));
                }
            }
        }

        if flawed && let Some((_, flag)) = self.registry.find_by_token(cluster) {
            result.push_diagnostic(Diagnostic::SuggestLongFlag(flag.token.clone()));
        }

        Ok(1 + consumed)
    }

    /// Handle `--token`, returning how many tokens the flag and its parameter
    /// occupy
    fn parse_long_flag<S: AsRef<str>>(
        &self,
        token: &str,
        tokens: &[S],
        cursor: usize,
        result: &mut ParseResult,
    ) -> ArgsieveResult<usize> {
        let Some((handle, flag)) = self.registry.find_by_token(token) else {
            result.push_diagnostic(Diagnostic::UnrecognizedToken(token.to_string()));
            return Ok(1);
        };

        if !flag.takes_parameter {
            trace!(token, "long flag");
            result.set_flag(handle, String::new());
            return Ok(1);
        }

        match lookahead_parameter(tokens, cursor + 1)? {
            Lookahead::Value(parameter) => {
                trace!(token, parameter, "long flag with parameter");
                result.set_flag(handle, parameter.to_string());
                Ok(2)
            }
            // The dash token is swallowed along with the flag
            Lookahead::FlagLike => {
                result.push_diagnostic(Diagnostic::MissingLongParameter(token.to_string()));
                Ok(2)
            }
            Lookahead::End => {
                result.push_diagnostic(Diagnostic::MissingLongParameter(token.to_string()));
                Ok(1)
            }
        }
    }
}

/// What sits where a flag expects its parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookahead<'a> {
    /// A usable parameter
    Value(&'a str),
    /// A token starting with `-`
    FlagLike,
    /// The input ended
    End,
}

/// Look at the token a flag would take as its parameter
fn lookahead_parameter<S: AsRef<str>>(
    tokens: &[S],
    index: usize,
) -> ArgsieveResult<Lookahead<'_>> {
    match tokens.get(index).map(AsRef::as_ref) {
        None => Ok(Lookahead::End),
        Some("") => Err(ArgsieveError::EmptyArgument { index }),
        Some(candidate) if candidate.starts_with('-') => Ok(Lookahead::FlagLike),
        Some(candidate) => Ok(Lookahead::Value(candidate)),
    }
}
