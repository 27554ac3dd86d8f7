//! Hook registry for managing and executing day-transition hooks.

use std::sync::Arc;

use tracing::{debug, error};

use super::{DayContext, DayTransitionHook, HookCriticality, ShippingHook};
use crate::error::HookError;
use crate::shipping::DailySettlement;

/// Registry that runs day-transition hooks in priority order.
pub struct HookRegistry {
    hooks: Arc<[Arc<dyn DayTransitionHook>]>,
}

impl HookRegistry {
    /// Creates a registry; hooks are sorted by priority (lower values first).
    ///
    /// Hooks with equal priority keep their registration order.
    pub fn new(mut hooks: Vec<Arc<dyn DayTransitionHook>>) -> Self {
        hooks.sort_by_key(|h| h.priority());
        Self {
            hooks: hooks.into(),
        }
    }

    /// Creates a registry holding only the shipping hook.
    pub fn with_shipping(settlement: DailySettlement) -> Self {
        Self::new(vec![
            Arc::new(ShippingHook::new(settlement)) as Arc<dyn DayTransitionHook>,
        ])
    }

    /// Runs every hook for the day that just ended.
    ///
    /// # Error Handling
    ///
    /// - `Critical`: Returns the error immediately; later hooks do not run
    /// - `Important`: Logs error and continues to next hook (default)
    /// - `Optional`: Logs at debug level and continues
    pub fn run_day_end(&self, ctx: &mut DayContext<'_, '_>) -> Result<(), HookError> {
        debug!(target: "shipping::hooks", day = ctx.day, hooks = self.len(), "Running day-end hooks");

        for hook in self.hooks.iter() {
            if let Err(e) = hook.on_day_end(ctx) {
                self.handle_hook_error(hook.as_ref(), e)?;
            }
        }

        Ok(())
    }

    /// Returns the number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Returns an iterator over hook names and priorities (for debugging).
    pub fn hooks(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.hooks.iter().map(|h| (h.name(), h.priority()))
    }

    /// Handles hook execution errors based on criticality level.
    ///
    /// Returns Ok(()) for Important/Optional hooks, Err for Critical hooks.
    fn handle_hook_error(
        &self,
        hook: &dyn DayTransitionHook,
        error: HookError,
    ) -> Result<(), HookError> {
        let criticality = hook.criticality();
        match criticality {
            HookCriticality::Critical => {
                error!(
                    target: "shipping::hooks",
                    hook = hook.name(),
                    criticality = %criticality,
                    error = %error,
                    "Critical hook failed, aborting day transition"
                );
                return Err(error);
            }
            HookCriticality::Important => error!(
                target: "shipping::hooks",
                hook = hook.name(),
                criticality = %criticality,
                error = %error,
                "Hook failed, continuing"
            ),
            HookCriticality::Optional => debug!(
                target: "shipping::hooks",
                hook = hook.name(),
                criticality = %criticality,
                error = %error,
                "Optional hook failed"
            ),
        }

        Ok(())
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::with_shipping(DailySettlement::default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use shipping_core::Env;

    use super::*;
    use crate::oracle::{ContainerStoreImpl, LedgerRecorder};

    struct ScriptedHook {
        name: &'static str,
        priority: i32,
        criticality: HookCriticality,
        fails: bool,
        calls: Arc<Mutex<Vec<&'static str>>>,
    }

    impl ScriptedHook {
        fn new(
            name: &'static str,
            priority: i32,
            criticality: HookCriticality,
            fails: bool,
            calls: &Arc<Mutex<Vec<&'static str>>>,
        ) -> Arc<dyn DayTransitionHook> {
            Arc::new(Self {
                name,
                priority,
                criticality,
                fails,
                calls: Arc::clone(calls),
            })
        }
    }

    impl DayTransitionHook for ScriptedHook {
        fn name(&self) -> &'static str {
            self.name
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn criticality(&self) -> HookCriticality {
            self.criticality
        }

        fn on_day_end(&self, _ctx: &mut DayContext<'_, '_>) -> Result<(), HookError> {
            self.calls.lock().unwrap().push(self.name);
            if self.fails {
                Err(HookError::failed(self.name, "scripted failure"))
            } else {
                Ok(())
            }
        }
    }

    fn run(registry: &HookRegistry) -> Result<(), HookError> {
        let mut store = ContainerStoreImpl::new();
        let mut sink = LedgerRecorder::new();
        let mut ctx = DayContext::new(1, Env::empty(), &mut store, &mut sink);
        registry.run_day_end(&mut ctx)
    }

    #[test]
    fn hooks_run_in_priority_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let registry = HookRegistry::new(vec![
            ScriptedHook::new("late", 10, HookCriticality::Important, false, &calls),
            ScriptedHook::new("early", -10, HookCriticality::Important, false, &calls),
            ScriptedHook::new("middle", 0, HookCriticality::Important, false, &calls),
        ]);

        run(&registry).unwrap();

        assert_eq!(*calls.lock().unwrap(), vec!["early", "middle", "late"]);
    }

    #[test]
    fn important_and_optional_failures_continue() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let registry = HookRegistry::new(vec![
            ScriptedHook::new("important", 0, HookCriticality::Important, true, &calls),
            ScriptedHook::new("optional", 1, HookCriticality::Optional, true, &calls),
            ScriptedHook::new("after", 2, HookCriticality::Important, false, &calls),
        ]);

        assert!(run(&registry).is_ok());
        assert_eq!(*calls.lock().unwrap(), vec!["important", "optional", "after"]);
    }

    #[test]
    fn critical_failure_stops_the_transition() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let registry = HookRegistry::new(vec![
            ScriptedHook::new("critical", 0, HookCriticality::Critical, true, &calls),
            ScriptedHook::new("after", 1, HookCriticality::Important, false, &calls),
        ]);

        let error = run(&registry).unwrap_err();

        assert_eq!(error, HookError::failed("critical", "scripted failure"));
        assert_eq!(*calls.lock().unwrap(), vec!["critical"]);
    }

    #[test]
    fn default_registry_holds_the_shipping_hook() {
        let registry = HookRegistry::default();
        assert_eq!(registry.hooks().collect::<Vec<_>>(), vec![(ShippingHook::NAME, 0)]);
    }
}
