//! Flag descriptors and the registry that hands out their handles

use std::fmt;

use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{ArgsieveError, ArgsieveResult};

/// Opaque identifier of a registered flag
///
/// Handles are registration indices and stay valid for the lifetime of the
/// registry that issued them, since flags are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FlagHandle(usize);

impl FlagHandle {
    /// Registration index behind this handle
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FlagHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A flag that can be given as `-<code>` or `--<token>`
///
/// # Examples
///
/// - `Flag::new("verbose", 'v')` matches `-v` and `--verbose`
/// - `Flag::with_parameter("output", 'o')` matches `-o FILE` and `--output FILE`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Flag {
    /// Long form, matched after `--`
    pub token: String,
    /// Short form, matched after `-` or inside a cluster
    pub code: char,
    /// Whether the flag consumes the next input token as its parameter
    pub takes_parameter: bool,
}

impl Flag {
    /// Create a flag that takes no parameter
    #[must_use]
    pub fn new(token: impl Into<String>, code: char) -> Self {
        Self {
            token: token.into(),
            code,
            takes_parameter: false,
        }
    }

    /// Create a flag that takes a parameter
    #[must_use]
    pub fn with_parameter(token: impl Into<String>, code: char) -> Self {
        Self {
            token: token.into(),
            code,
            takes_parameter: true,
        }
    }

    /// Set whether the flag takes a parameter
    #[must_use]
    pub fn takes_parameter(mut self, takes_parameter: bool) -> Self {
        self.takes_parameter = takes_parameter;
        self
    }
}

/// Append-only set of flags with unique tokens and codes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagRegistry {
    flags: Vec<Flag>,
}

impl FlagRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a flag and return its handle
    ///
    /// Existing flags are checked in registration order. The first one whose
    /// token equals the new token, or failing that whose code equals the new
    /// code, decides the error.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsieveError::DuplicateFlagToken`] or
    /// [`ArgsieveError::DuplicateFlagCode`] if the flag collides with one
    /// already registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use argsieve::{ArgsieveError, Flag, FlagRegistry};
    ///
    /// let mut registry = FlagRegistry::new();
    /// let verbose = registry.add_flag(Flag::new("verbose", 'v'))?;
    /// assert_eq!(registry.get(verbose).map(|f| f.code), Some('v'));
    ///
    /// let clash = registry.add_flag(Flag::new("version", 'v'));
    /// assert_eq!(clash, Err(ArgsieveError::DuplicateFlagCode('v')));
    /// # Ok::<(), ArgsieveError>(())
    /// ```
    pub fn add_flag(&mut self, flag: Flag) -> ArgsieveResult<FlagHandle> {
        for existing in &self.flags {
            if existing.token == flag.token {
                return Err(ArgsieveError::DuplicateFlagToken(flag.token));
            } else if existing.code == flag.code {
                return Err(ArgsieveError::DuplicateFlagCode(flag.code));
            }
        }

        let handle = FlagHandle(self.flags.len());
        debug!(
            token = %flag.token,
            code = %flag.code,
            takes_parameter = flag.takes_parameter,
            %handle,
            "registered flag"
        );
        self.flags.push(flag);
        Ok(handle)
    }

    /// Get the flag behind a handle
    #[must_use]
    pub fn get(&self, handle: FlagHandle) -> Option<&Flag> {
        self.flags.get(handle.0)
    }

    /// Find the flag registered under a short code
    #[must_use]
    pub fn find_by_code(&self, code: char) -> Option<(FlagHandle, &Flag)> {
        self.iter().find(|(_, flag)| flag.code == code)
    }

    /// Find the flag registered under a long token
    #[must_use]
    pub fn find_by_token(&self, token: &str) -> Option<(FlagHandle, &Flag)> {
        self.iter().find(|(_, flag)| flag.token == token)
    }

    /// Number of registered flags
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no flag has been registered yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Iterate over handles and flags in registration order
    pub fn iter(&self) -> impl Iterator<Item = (FlagHandle, &Flag)> {
        self.flags
            .iter()
            .enumerate()
            .map(|(index, flag)| (FlagHandle(index), flag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_follow_registration_order() {
        let mut registry = FlagRegistry::new();
        let help = registry.add_flag(Flag::new("help", 'h')).unwrap();
        let output = registry.add_flag(Flag::with_parameter("output", 'o')).unwrap();

        assert_eq!(help.index(), 0);
        assert_eq!(output.index(), 1);
        assert_eq!(registry.len(), 2);
        assert!(registry.get(output).unwrap().takes_parameter);
    }

    #[test]
    fn test_duplicate_token_rejected() {
        let mut registry = FlagRegistry::new();
        registry.add_flag(Flag::new("help", 'h')).unwrap();

        let err = registry.add_flag(Flag::new("help", 'x')).unwrap_err();
        assert_eq!(err, ArgsieveError::DuplicateFlagToken("help".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let mut registry = FlagRegistry::new();
        registry.add_flag(Flag::new("help", 'h')).unwrap();

        let err = registry.add_flag(Flag::new("hidden", 'h')).unwrap_err();
        assert_eq!(err, ArgsieveError::DuplicateFlagCode('h'));
    }

    #[test]
    fn test_token_wins_on_same_entry() {
        let mut registry = FlagRegistry::new();
        registry.add_flag(Flag::new("help", 'h')).unwrap();

        let err = registry.add_flag(Flag::new("help", 'h')).unwrap_err();
        assert_eq!(err, ArgsieveError::DuplicateFlagToken("help".to_string()));
    }

    #[test]
    fn test_first_colliding_entry_decides() {
        let mut registry = FlagRegistry::new();
        registry.add_flag(Flag::new("all", 'a')).unwrap();
        registry.add_flag(Flag::new("brief", 'b')).unwrap();

        // Code collides with the first entry, token with the second
        let err = registry.add_flag(Flag::new("brief", 'a')).unwrap_err();
        assert_eq!(err, ArgsieveError::DuplicateFlagCode('a'));
    }

    #[test]
    fn test_lookups() {
        let mut registry = FlagRegistry::new();
        assert!(registry.is_empty());
        let quiet = registry.add_flag(Flag::new("quiet", 'q')).unwrap();

        assert_eq!(registry.find_by_code('q').map(|(h, _)| h), Some(quiet));
        assert_eq!(registry.find_by_token("quiet").map(|(h, _)| h), Some(quiet));
        assert!(registry.find_by_code('Q').is_none());
        assert!(registry.find_by_token("q").is_none());
        assert!(registry.get(FlagHandle(7)).is_none());
    }

    #[test]
    fn test_takes_parameter_toggle() {
        let flag = Flag::new("level", 'l').takes_parameter(true);
        assert_eq!(flag, Flag::with_parameter("level", 'l'));
    }
}
