//! Runtime orchestration for end-of-day shipping.
//!
//! This crate wires the deterministic rules in `shipping-core` to host state:
//! - [`shipping`] runs one day's settlement and reports what happened
//! - [`boundary`] isolates container faults from one another
//! - [`hooks`] is the day-transition entry point the host patch calls
//! - [`oracle`] provides in-memory host state built from `shipping-content` files
//! - [`config`] and [`logging`] read settings and install the subscriber
pub mod boundary;
pub mod config;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod oracle;
pub mod shipping;

pub use boundary::{BestEffort, UnitOutcome};
pub use config::{LoggingConfig, RuntimeConfig, ShippingSettings};
pub use error::{HookError, Result, RuntimeError};
pub use hooks::{DayContext, DayTransitionHook, HookCriticality, HookRegistry, ShippingHook};
pub use logging::{LoggingGuard, default_log_dir, init_logging};
pub use oracle::{
    CommerceOracleImpl, ContainerStoreImpl, GridWorld, ItemOracleImpl, LedgerRecorder,
    OracleManager, SessionOracleImpl,
};
pub use shipping::{ContainerReport, DailyReport, DailySettlement, SkipReason};
