#![deny(
    unsafe_code,
    unused_must_use,
    unreachable_pub,
    rust_2018_idioms,
    missing_docs,
    clippy::pedantic
)]

//! Forgiving Command-Line Argument Parser
//!
//! This crate classifies a raw sequence of command-line tokens into
//! positional keywords and registered flags. Malformed input does not stop
//! the parse: each problem is recorded as a [`Diagnostic`] next to whatever
//! could be understood, so callers can report every mistake at once.
//!
//! # Features
//!
//! - **Short flags**: `-v`, and clusters such as `-xvf` expanding to three flags
//! - **Long flags**: `--verbose`
//! - **Parameters**: flags may take the following token as their value; several
//!   parameter flags in one cluster read consecutive tokens (`-io in.txt out.txt`)
//! - **Keyword bounds**: minimum and maximum number of positional arguments
//! - **Suggestions**: `-help` suggests `--help` when `help` is a registered token
//!
//! Only programmer errors abort a call: registering a duplicate flag, passing
//! an empty string as an argument, or configuring inverted keyword bounds.
//! Those are reported through [`ArgsieveError`].
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use argsieve::{Flag, Parser, ParserConfig};
//!
//! let mut parser = Parser::with_config(ParserConfig::keyword_range(1, 2));
//! let verbose = parser.add_flag(Flag::new("verbose", 'v'))?;
//! let output = parser.add_flag(Flag::with_parameter("output", 'o'))?;
//!
//! let result = parser.parse(&["--verbose", "src.txt", "-o", "dst.txt"])?;
//!
//! assert!(result.is_clean());
//! assert_eq!(result.keywords, vec!["src.txt"]);
//! assert!(result.is_set(verbose));
//! assert_eq!(result.flag(output), Some("dst.txt"));
//! # Ok::<(), argsieve::ArgsieveError>(())
//! ```
//!
//! ## Collecting Diagnostics
//!
//! ```
//! use argsieve::{Flag, Parser, ParserConfig};
//!
//! let mut parser = Parser::with_config(ParserConfig::keyword_range(0, 1));
//! let output = parser.add_flag(Flag::with_parameter("output", 'o'))?;
//!
//! let result = parser.parse(&["one", "two", "--colour", "-o"])?;
//!
//! assert_eq!(result.keywords, vec!["one"]);
//! assert_eq!(result.flag(output), None);
//! assert_eq!(
//!     result.error_messages(),
//!     vec![
//!         "unexpected keyword 'two'",
//!         "unrecognized flag '--colour'",
//!         "parameter expected for flag '-o'",
//!     ]
//! );
//! # Ok::<(), argsieve::ArgsieveError>(())
//! ```
//!
//! ## Fatal Errors
//!
//! ```
//! use argsieve::{ArgsieveError, Parser};
//!
//! let parser = Parser::default();
//! let err = parser.parse(&["keyword", ""]).unwrap_err();
//!
//! assert_eq!(err, ArgsieveError::EmptyArgument { index: 1 });
//! ```

mod diagnostics;
mod errors;
mod flags;
mod parser;
mod types;

pub use diagnostics::Diagnostic;
pub use errors::{ArgsieveError, ArgsieveResult};
pub use flags::{Flag, FlagHandle, FlagRegistry};
pub use parser::Parser;
pub use types::{ParseResult, ParserConfig};
