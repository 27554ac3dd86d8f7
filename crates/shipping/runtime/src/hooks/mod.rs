//! Day-transition hook system.
//!
//! The host calls [`HookRegistry::run_day_end`] from its "next day" patch.
//! Every registered hook sees the same [`DayContext`] in priority order, and
//! a failing hook is handled according to its [`HookCriticality`].
mod context;
mod registry;
mod shipping;

pub use context::DayContext;
pub use registry::HookRegistry;
pub use shipping::ShippingHook;

use crate::error::HookError;

/// Defines the criticality level of a hook for error handling.
///
/// - Critical hooks must succeed or the day transition reports failure
/// - Important hooks log errors but allow continuation
/// - Optional hooks can fail quietly
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum HookCriticality {
    /// Hook failure stops the remaining hooks and is returned to the host.
    Critical,

    /// Hook failure is logged as an error; later hooks still run.
    ///
    /// This is the default level.
    Important,

    /// Hook failure is logged at debug level only.
    Optional,
}

/// Work performed once when the host ends a day.
///
/// Hooks are sorted by priority (lower values execute first).
pub trait DayTransitionHook: Send + Sync {
    /// Returns a human-readable name for this hook (used in logging).
    fn name(&self) -> &'static str;

    fn priority(&self) -> i32 {
        0
    }

    fn criticality(&self) -> HookCriticality {
        HookCriticality::Important
    }

    fn on_day_end(&self, ctx: &mut DayContext<'_, '_>) -> Result<(), HookError>;
}
