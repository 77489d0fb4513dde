//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::SanctionKind;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("{kind} not found: {id}")]
    SanctionNotFound { kind: SanctionKind, id: i64 },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Invalid stored data: {0}")]
    InvalidData(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::SanctionNotFound { kind, .. } => match kind {
                SanctionKind::Ban => "UNKNOWN_BAN",
                SanctionKind::Mute => "UNKNOWN_MUTE",
            },
            Self::InvalidData(_) => "INVALID_DATA",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SanctionNotFound { .. })
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else {
            500
        }
    }
}
