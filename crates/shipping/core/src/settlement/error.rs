//! Settlement fault errors.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, ShippingError};
use crate::state::ItemTypeId;

/// Faults that abort settlement of a single container.
///
/// Slots processed before the fault stay cleared; the caller's fault boundary
/// decides what happens next.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SettlementError {
    /// The container handed over by the host is shorter than its capacity.
    #[error("container has no slot {index}")]
    SlotOutOfRange { index: usize },

    #[error("item {item} in slot {index} is missing from the catalog")]
    UnknownItem { index: usize, item: ItemTypeId },

    #[error("sale value of slot {index} overflows")]
    ValueOverflow { index: usize },

    #[error("depositing {amount} into slot {index} overflows the stack")]
    DepositOverflow { index: usize, amount: u32 },

    /// Proceeds exist but no slot was designated to receive them.
    #[error("no deposit slot for {amount} currency")]
    NoDepositSlot { amount: u32 },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl ShippingError for SettlementError {
    fn severity(&self) -> ErrorSeverity {
        use SettlementError::*;
        match self {
            SlotOutOfRange { .. } | UnknownItem { .. } => ErrorSeverity::Validation,
            ValueOverflow { .. } | DepositOverflow { .. } | NoDepositSlot { .. } => {
                ErrorSeverity::Internal
            }
            Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use SettlementError::*;
        match self {
            SlotOutOfRange { .. } => "SETTLE_SLOT_OUT_OF_RANGE",
            UnknownItem { .. } => "SETTLE_UNKNOWN_ITEM",
            ValueOverflow { .. } => "SETTLE_VALUE_OVERFLOW",
            DepositOverflow { .. } => "SETTLE_DEPOSIT_OVERFLOW",
            NoDepositSlot { .. } => "SETTLE_NO_DEPOSIT_SLOT",
            Oracle(error) => error.error_code(),
        }
    }
}
