//! Steam64 identity - stable platform account identifier
//!
//! Layout of the 64-bit value:
//! - Bits 63-56: Universe (1 = public)
//! - Bits 55-52: Account type (1 = individual)
//! - Bits 51-32: Instance
//! - Bits 31-0:  Account ID

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Steam64 identity of an individual account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SteamId(u64);

impl SteamId {
    /// Smallest valid individual Steam64 id (account id 0 in the public universe)
    pub const BASE: u64 = 76_561_197_960_265_728;

    const UNIVERSE_PUBLIC: u64 = 1;
    const TYPE_INDIVIDUAL: u64 = 1;

    /// Create a SteamId from a raw value, validating universe and account type
    pub fn new(value: u64) -> Result<Self, SteamIdParseError> {
        let universe = value >> 56;
        let account_type = (value >> 52) & 0xF;

        if universe != Self::UNIVERSE_PUBLIC || account_type != Self::TYPE_INDIVIDUAL {
            return Err(SteamIdParseError::NotIndividual(value));
        }

        Ok(Self(value))
    }

    /// Build the Steam64 id of an account id in the public universe
    pub const fn from_account_id(account_id: u32) -> Self {
        Self(Self::BASE + account_id as u64)
    }

    /// Get the raw 64-bit value
    #[inline]
    pub const fn into_inner(self) -> u64 {
        self.0
    }

    /// Lower 32 bits - the account id
    #[inline]
    pub const fn account_id(&self) -> u32 {
        (self.0 & 0xFFFF_FFFF) as u32
    }

    /// Parse from the decimal string representation
    pub fn parse(s: &str) -> Result<Self, SteamIdParseError> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|_| SteamIdParseError::InvalidFormat(s.to_string()))?;
        Self::new(value)
    }
}

/// Error when parsing a SteamId
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SteamIdParseError {
    #[error("invalid steam64 format: {0}")]
    InvalidFormat(String),

    #[error("not an individual steam64 id: {0}")]
    NotIndividual(u64),
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SteamId {
    type Err = SteamIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SteamId::parse(s)
    }
}

impl TryFrom<u64> for SteamId {
    type Error = SteamIdParseError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        SteamId::new(value)
    }
}

// Always a string in JSON: 64-bit ids do not survive JavaScript numbers
impl Serialize for SteamId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for SteamId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        SteamId::parse(&raw).map_err(serde::de::Error::custom)
    }
}
