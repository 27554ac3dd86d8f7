use std::sync::Mutex;

use crate::error::HookError;
use crate::shipping::{DailyReport, DailySettlement};

use super::{DayContext, DayTransitionHook, HookCriticality};

/// Sells container contents around the shop at the end of every day.
///
/// Settlement absorbs its own faults, so this hook never fails. The last
/// report is kept for hosts that surface it after the transition.
pub struct ShippingHook {
    settlement: DailySettlement,
    last_report: Mutex<Option<DailyReport>>,
}

impl ShippingHook {
    pub const NAME: &'static str = "shipping";

    pub fn new(settlement: DailySettlement) -> Self {
        Self {
            settlement,
            last_report: Mutex::new(None),
        }
    }

    /// Takes the report of the most recent run, if any.
    pub fn take_report(&self) -> Option<DailyReport> {
        self.last_report
            .lock()
            .ok()
            .and_then(|mut report| report.take())
    }
}

impl DayTransitionHook for ShippingHook {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn criticality(&self) -> HookCriticality {
        HookCriticality::Important
    }

    fn on_day_end(&self, ctx: &mut DayContext<'_, '_>) -> Result<(), HookError> {
        let report = self.settlement.run(&ctx.env, &mut *ctx.store, &mut *ctx.sink);
        if let Ok(mut last) = self.last_report.lock() {
            *last = Some(report);
        }
        Ok(())
    }
}
