//! Selling a container's contents to the shopkeeper.
//!
//! Settlement walks every slot of one container, prices what may be sold,
//! clears those slots, applies the commerce bonus, and pays the proceeds
//! either back into the container as a currency stack or into the wallet.
//! Each call is independent: totals and bonuses are never shared between
//! containers, so the order in which containers are settled does not change
//! any result.

mod error;
mod ledger;
mod pricing;

pub use error::SettlementError;
pub use ledger::{Deposit, SaleLedger};
pub use pricing::{commerce_bonus, sale_tasks};

use crate::config::{CurrencyPolicy, SettlementRules, ShippingConfig};
use crate::env::{ItemOracle, SaleTask, SettlementSink};
use crate::state::Container;

/// Sells every eligible slot of `container` and pays out the proceeds.
///
/// Per slot, in index order:
/// - the currency item is kept and its slot becomes the deposit target
///   (a later currency slot replaces an earlier one);
/// - empty slots are skipped;
/// - unique and deed items are kept;
/// - everything else is sold in full (one unit for unstackable items),
///   tallied, and cleared; the first sold slot becomes the deposit target if
///   no currency slot has been seen yet.
///
/// When nothing is sold, or the proceeds come to zero, no payout happens and
/// the ledger's deposit is [`Deposit::None`].
///
/// # Errors
///
/// Any fault aborts the container where it happened. Slots already cleared
/// stay cleared and the bookkeeping already sent to `sink` is not undone.
pub fn settle<I, K>(
    container: &mut Container,
    items: &I,
    commerce_level: u32,
    rules: &SettlementRules,
    sink: &mut K,
) -> Result<SaleLedger, SettlementError>
where
    I: ItemOracle + ?Sized,
    K: SettlementSink + ?Sized,
{
    let mut ledger = SaleLedger::default();
    let mut deposit_slot: Option<usize> = None;

    for index in 0..ShippingConfig::CONTAINER_SLOTS {
        let slot = container
            .slot_mut(index)
            .ok_or(SettlementError::SlotOutOfRange { index })?;

        if slot.item == rules.currency_item {
            deposit_slot = Some(index);
            continue;
        }
        if slot.is_empty() {
            continue;
        }

        let info = items
            .item_info(slot.item)
            .ok_or(SettlementError::UnknownItem {
                index,
                item: slot.item,
            })?;
        if info.is_protected() {
            continue;
        }

        let quantity = info.sell_quantity(slot.quantity);
        deposit_slot.get_or_insert(index);

        let stack_value = info
            .value
            .checked_mul(quantity)
            .ok_or(SettlementError::ValueOverflow { index })?;
        ledger.gross = ledger
            .gross
            .checked_add(stack_value)
            .ok_or(SettlementError::ValueOverflow { index })?;

        sink.add_to_day_tally(slot.item, quantity);
        for task in sale_tasks(&info) {
            sink.record_task(task, quantity);
            ledger.credit_task(task, quantity);
        }
        ledger.units_sold += u64::from(quantity);
        ledger.slots_sold += 1;

        slot.clear();
    }

    if ledger.is_empty() {
        return Ok(ledger);
    }

    ledger.bonus = commerce_bonus(commerce_level, ledger.gross);
    ledger.total = ledger
        .gross
        .checked_add(ledger.bonus)
        .ok_or(SettlementError::ValueOverflow {
            index: ShippingConfig::CONTAINER_SLOTS,
        })?;
    if ledger.total == 0 {
        return Ok(ledger);
    }

    let total = ledger.total;
    sink.record_spending(rules.shopkeeper, total);

    ledger.deposit = match rules.policy {
        CurrencyPolicy::AsItem => {
            let index = deposit_slot.ok_or(SettlementError::NoDepositSlot { amount: total })?;
            let slot = container
                .slot_mut(index)
                .ok_or(SettlementError::SlotOutOfRange { index })?;
            let quantity = slot
                .quantity
                .checked_add(total)
                .ok_or(SettlementError::DepositOverflow {
                    index,
                    amount: total,
                })?;
            slot.item = rules.currency_item;
            slot.quantity = quantity;
            Deposit::Slot { index, quantity }
        }
        CurrencyPolicy::ToWallet => {
            sink.credit_wallet(total);
            Deposit::Wallet
        }
    };

    sink.add_to_todays_money(total);
    sink.record_task(SaleTask::SellItems, total);
    ledger.credit_task(SaleTask::SellItems, total);

    Ok(ledger)
}
