use crate::state::{ItemTypeId, NpcId};

/// Daily task categories the host tracks for sales.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SaleTask {
    /// Credited with the day's currency total once per settled container.
    SellItems,
    SellFruit,
    SellCrops,
    SellFish,
    SellBugs,
    /// Host-defined task attached to a specific item.
    Other(u16),
}

/// Write-only host bookkeeping touched by a settlement.
///
/// Calls are fire-and-forget; the host decides what to persist.
pub trait SettlementSink {
    /// Pays `amount` straight into the player's wallet.
    fn credit_wallet(&mut self, amount: u32);

    fn record_task(&mut self, task: SaleTask, amount: u32);

    /// Adds to the running total a shopkeeper has taken in.
    fn record_spending(&mut self, npc: NpcId, amount: u32);

    /// Feeds the host's end-of-day sale tally for one sold stack.
    fn add_to_day_tally(&mut self, item: ItemTypeId, quantity: u32);

    fn add_to_todays_money(&mut self, amount: u32);
}

impl<S: SettlementSink + ?Sized> SettlementSink for &mut S {
    fn credit_wallet(&mut self, amount: u32) {
        (**self).credit_wallet(amount);
    }

    fn record_task(&mut self, task: SaleTask, amount: u32) {
        (**self).record_task(task, amount);
    }

    fn record_spending(&mut self, npc: NpcId, amount: u32) {
        (**self).record_spending(npc, amount);
    }

    fn add_to_day_tally(&mut self, item: ItemTypeId, quantity: u32) {
        (**self).add_to_day_tally(item, quantity);
    }

    fn add_to_todays_money(&mut self, amount: u32) {
        (**self).add_to_todays_money(amount);
    }
}
