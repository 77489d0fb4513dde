//! Administrator capability flags
//!
//! Stored in the database as a space-separated token string (`"mod admin"`),
//! handled in the domain as a bitflag set.

use bitflags::bitflags;
use serde::{Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Capability flags granted to an administrator account
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u32 {
        /// Community owner
        const OWNER  = 1 << 0;
        /// Full administrator
        const ADMIN  = 1 << 1;
        /// Moderator
        const MOD    = 1 << 2;
        /// Helper / trial moderator
        const HELPER = 1 << 3;
        /// Reserved-slot holder
        const VIP    = 1 << 4;
    }
}

/// Token table, in display order
const TOKENS: [(Flags, &str); 5] = [
    (Flags::OWNER, "owner"),
    (Flags::ADMIN, "admin"),
    (Flags::MOD, "mod"),
    (Flags::HELPER, "helper"),
    (Flags::VIP, "vip"),
];

impl Flags {
    /// Look up a single flag token
    pub fn from_token(token: &str) -> Option<Flags> {
        TOKENS
            .iter()
            .find(|(_, name)| *name == token)
            .map(|(flag, _)| *flag)
    }

    /// Parse a stored flag string, ignoring tokens that are not known flags
    pub fn parse_lossy(s: &str) -> Flags {
        s.split_whitespace()
            .filter_map(Flags::from_token)
            .fold(Flags::empty(), |acc, f| acc | f)
    }

    /// Build a set from a list of tokens
    pub fn from_tokens<'a, I>(tokens: I) -> Result<Flags, FlagParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens.into_iter().try_fold(Flags::empty(), |acc, token| {
            Flags::from_token(token)
                .map(|f| acc | f)
                .ok_or_else(|| FlagParseError::UnknownFlag(token.to_string()))
        })
    }

    /// Check if this set shares at least one flag with the requirement.
    ///
    /// An empty requirement is never satisfied.
    #[inline]
    pub fn satisfies(&self, required: Flags) -> bool {
        self.intersects(required)
    }

    /// Token names of the flags that are set
    pub fn tokens(&self) -> Vec<&'static str> {
        TOKENS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::empty()
    }
}

/// Space-separated tokens, the storage format
impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().join(" "))
    }
}

/// Strict parse: every token must be a known flag
impl std::str::FromStr for Flags {
    type Err = FlagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flags::from_tokens(s.split_whitespace())
    }
}

// Serialized as a list of tokens
impl Serialize for Flags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.tokens())
    }
}

/// Error when parsing flag tokens
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlagParseError {
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
}
