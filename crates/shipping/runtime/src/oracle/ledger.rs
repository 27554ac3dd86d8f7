//! In-memory bookkeeping sink.
use std::collections::BTreeMap;

use shipping_core::{ItemTypeId, NpcId, SaleTask, SettlementSink};

/// SettlementSink that accumulates everything it is told.
///
/// Hosts that persist bookkeeping themselves replay the totals from here once
/// the day transition finishes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LedgerRecorder {
    pub wallet: u64,
    pub tasks: BTreeMap<SaleTask, u64>,
    pub spending: BTreeMap<NpcId, u64>,
    pub day_tally: BTreeMap<ItemTypeId, u64>,
    pub todays_money: u64,
}

impl LedgerRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task(&self, task: SaleTask) -> u64 {
        self.tasks.get(&task).copied().unwrap_or(0)
    }

    pub fn spending(&self, npc: NpcId) -> u64 {
        self.spending.get(&npc).copied().unwrap_or(0)
    }

    pub fn tallied(&self, item: ItemTypeId) -> u64 {
        self.day_tally.get(&item).copied().unwrap_or(0)
    }
}

impl SettlementSink for LedgerRecorder {
    fn credit_wallet(&mut self, amount: u32) {
        self.wallet += u64::from(amount);
    }

    fn record_task(&mut self, task: SaleTask, amount: u32) {
        *self.tasks.entry(task).or_default() += u64::from(amount);
    }

    fn record_spending(&mut self, npc: NpcId, amount: u32) {
        *self.spending.entry(npc).or_default() += u64::from(amount);
    }

    fn add_to_day_tally(&mut self, item: ItemTypeId, quantity: u32) {
        *self.day_tally.entry(item).or_default() += u64::from(quantity);
    }

    fn add_to_todays_money(&mut self, amount: u32) {
        self.todays_money += u64::from(amount);
    }
}
