//! Best-effort execution of independent units of work.
//!
//! A day's settlement is a batch of containers with no shared transaction.
//! [`BestEffort`] runs one unit, and if it fails, records the failure and lets
//! the caller move on to the next one.
use std::fmt;

use shipping_core::ShippingError;
use tracing::warn;

/// Result of a single unit run under [`BestEffort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitOutcome<T, E> {
    Completed(T),
    /// The unit failed part way; whatever it changed before the fault stays changed.
    Abandoned { error: E },
}

impl<T, E> UnitOutcome<T, E> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    pub fn completed(&self) -> Option<&T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Abandoned { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Completed(_) => None,
            Self::Abandoned { error } => Some(error),
        }
    }
}

/// Fault policy for batches whose units must not affect one another.
pub struct BestEffort;

impl BestEffort {
    /// Runs `work`, converting a failure into [`UnitOutcome::Abandoned`].
    ///
    /// Failures are logged at warn level with the unit label and error code.
    pub fn run<T, E, F>(unit: impl fmt::Display, work: F) -> UnitOutcome<T, E>
    where
        E: ShippingError,
        F: FnOnce() -> Result<T, E>,
    {
        match work() {
            Ok(value) => UnitOutcome::Completed(value),
            Err(error) => {
                warn!(
                    target: "shipping::daily",
                    unit = %unit,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    error = %error,
                    "Abandoned unit of work"
                );
                UnitOutcome::Abandoned { error }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use shipping_core::{OracleError, SettlementError};

    use super::*;

    #[test]
    fn success_is_completed() {
        let outcome: UnitOutcome<u32, SettlementError> = BestEffort::run("unit", || Ok(7));
        assert_eq!(outcome, UnitOutcome::Completed(7));
        assert_eq!(outcome.completed(), Some(&7));
    }

    #[test]
    fn failure_is_abandoned_with_its_error() {
        let outcome: UnitOutcome<(), OracleError> =
            BestEffort::run("unit", || Err(OracleError::ItemsNotAvailable));

        assert!(!outcome.is_completed());
        assert_eq!(outcome.error(), Some(&OracleError::ItemsNotAvailable));
    }
}
