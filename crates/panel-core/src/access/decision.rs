//! Admin access decision
//!
//! Pure evaluation of an administrator lookup against a flag requirement.
//! Transport layers translate a denial into their own response.

use std::fmt;

use crate::entities::Admin;
use crate::value_objects::Flags;

/// Why a request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenialReason {
    /// No authenticated identity attached to the request
    MissingIdentity,
    /// The identity has no administrator record
    UnknownAdmin,
    /// The administrator holds none of the required flags
    InsufficientFlags,
}

impl DenialReason {
    /// Message returned to the caller for every denial
    pub const MESSAGE: &'static str = "Protected Route";

    /// HTTP status for this denial
    pub const fn status_code(self) -> u16 {
        match self {
            Self::MissingIdentity => 400,
            Self::UnknownAdmin => 401,
            Self::InsufficientFlags => 403,
        }
    }

    /// Error code for API responses
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingIdentity => "MISSING_IDENTITY",
            Self::UnknownAdmin => "UNKNOWN_ADMIN",
            Self::InsufficientFlags => "INSUFFICIENT_FLAGS",
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

/// Outcome of the admin guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed(Admin),
    Denied(DenialReason),
}

impl AccessDecision {
    /// Decide on an administrator lookup result.
    ///
    /// `required == None` admits any administrator. Otherwise the admin's
    /// flags must intersect `required`; an empty requirement admits nobody.
    pub fn evaluate(admin: Option<Admin>, required: Option<Flags>) -> Self {
        let Some(admin) = admin else {
            return Self::Denied(DenialReason::UnknownAdmin);
        };

        match required {
            None => Self::Allowed(admin),
            Some(required) if admin.has_any(required) => Self::Allowed(admin),
            Some(_) => Self::Denied(DenialReason::InsufficientFlags),
        }
    }

    /// Check if the request may proceed
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }

    /// Convert into a `Result`, for `?` at call sites
    pub fn into_result(self) -> Result<Admin, DenialReason> {
        match self {
            Self::Allowed(admin) => Ok(admin),
            Self::Denied(reason) => Err(reason),
        }
    }
}
