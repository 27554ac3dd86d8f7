//! Common error infrastructure for shipping-core.
//!
//! Domain-specific errors (e.g. [`crate::SettlementError`]) live beside the
//! operations that raise them and implement [`ShippingError`] so the runtime can
//! classify and log them uniformly.
//!
//! Not-found conditions (shop absent, container absent, tile outside the grid)
//! are never errors here; they are `None` values checked by callers.

/// Severity level of an error, used for logging priority at the fault boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Bad data from the host for a single unit of work.
    ///
    /// Examples: unknown item id, container shorter than its capacity
    Validation,

    /// Arithmetic or bookkeeping went outside its representable range.
    ///
    /// Examples: stack value overflow
    Internal,

    /// A required collaborator is missing; no unit of work can proceed.
    ///
    /// Examples: item oracle not wired into the environment
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all shipping-core errors.
pub trait ShippingError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
