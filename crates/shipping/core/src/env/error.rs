//! Oracle access errors.

use crate::error::{ErrorSeverity, ShippingError};

/// A collaborator required by the operation was not wired into the [`super::Env`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("WorldOracle not available")]
    WorldNotAvailable,

    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    #[error("CommerceOracle not available")]
    CommerceNotAvailable,

    #[error("SessionOracle not available")]
    SessionNotAvailable,
}

impl ShippingError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            WorldNotAvailable => "ORACLE_WORLD_NOT_AVAILABLE",
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            CommerceNotAvailable => "ORACLE_COMMERCE_NOT_AVAILABLE",
            SessionNotAvailable => "ORACLE_SESSION_NOT_AVAILABLE",
        }
    }
}
