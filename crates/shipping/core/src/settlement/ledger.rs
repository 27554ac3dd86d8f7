use std::collections::BTreeMap;

use crate::env::SaleTask;

/// Where a settlement's proceeds ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Deposit {
    /// Nothing was paid out.
    #[default]
    None,
    /// Currency stacked into the container at `index`; `quantity` is the new stack size.
    Slot { index: usize, quantity: u32 },
    Wallet,
}

/// Outcome of settling one container, reported for daily aggregation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SaleLedger {
    /// Sum of stack values before the commerce bonus.
    pub gross: u32,
    pub bonus: u32,
    /// Currency paid out: `gross + bonus`.
    pub total: u32,
    pub units_sold: u64,
    pub slots_sold: usize,
    /// Quantities credited per task. [`SaleTask::SellItems`] carries currency, not units.
    pub tasks: BTreeMap<SaleTask, u64>,
    pub deposit: Deposit,
}

impl SaleLedger {
    /// True when no slot was sold.
    pub fn is_empty(&self) -> bool {
        self.slots_sold == 0
    }

    pub fn task(&self, task: SaleTask) -> u64 {
        self.tasks.get(&task).copied().unwrap_or(0)
    }

    pub(crate) fn credit_task(&mut self, task: SaleTask, amount: u32) {
        *self.tasks.entry(task).or_default() += u64::from(amount);
    }

    /// Folds another container's ledger into a running daily summary.
    ///
    /// Deposits are per container and are not carried over.
    pub fn absorb(&mut self, other: &SaleLedger) {
        self.gross = self.gross.saturating_add(other.gross);
        self.bonus = self.bonus.saturating_add(other.bonus);
        self.total = self.total.saturating_add(other.total);
        self.units_sold += other.units_sold;
        self.slots_sold += other.slots_sold;
        for (task, amount) in &other.tasks {
            *self.tasks.entry(*task).or_default() += amount;
        }
    }
}
