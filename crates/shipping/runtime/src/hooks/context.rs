//! Context handed to day-transition hooks.

use shipping_core::{ContainerStore, SettlementSink, ShippingEnv};

/// Host state for one day transition.
///
/// Read-only oracles come through `env`; containers and bookkeeping are
/// borrowed mutably for the duration of the hook run.
pub struct DayContext<'a, 'h> {
    /// Day number that just ended.
    pub day: u32,
    pub env: ShippingEnv<'a>,
    pub store: &'h mut dyn ContainerStore,
    pub sink: &'h mut dyn SettlementSink,
}

impl<'a, 'h> DayContext<'a, 'h> {
    pub fn new(
        day: u32,
        env: ShippingEnv<'a>,
        store: &'h mut dyn ContainerStore,
        sink: &'h mut dyn SettlementSink,
    ) -> Self {
        Self {
            day,
            env,
            store,
            sink,
        }
    }
}
