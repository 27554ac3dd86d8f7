//! Runtime wrappers around host state consumed by the shipping core.
//!
//! These implementations expose `shipping-core` oracle traits and bundle the
//! read-only ones into an [`OracleManager`] so the runtime can build
//! [`shipping_core::ShippingEnv`] snapshots on demand. Mutable host state
//! (containers, bookkeeping) lives in [`ContainerStoreImpl`] and
//! [`LedgerRecorder`] and is handed to settlement separately.
mod containers;
mod host;
mod items;
mod ledger;
mod world;

use std::sync::Arc;

use shipping_content::WorldLayout;
use shipping_core::{Env, ItemInfo, ShippingEnv};

pub use containers::ContainerStoreImpl;
pub use host::{CommerceOracleImpl, SessionOracleImpl};
pub use items::ItemOracleImpl;
pub use ledger::LedgerRecorder;
pub use world::GridWorld;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) world: Arc<GridWorld>,
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) commerce: Arc<CommerceOracleImpl>,
    pub(crate) session: Arc<SessionOracleImpl>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        world: Arc<GridWorld>,
        items: Arc<ItemOracleImpl>,
        commerce: Arc<CommerceOracleImpl>,
        session: Arc<SessionOracleImpl>,
    ) -> Self {
        Self {
            world,
            items,
            commerce,
            session,
        }
    }

    /// Builds every read-only oracle from loaded content.
    pub fn from_content(
        layout: &WorldLayout,
        items: Vec<ItemInfo>,
        commerce_level: u32,
        session: SessionOracleImpl,
    ) -> Self {
        Self::new(
            Arc::new(GridWorld::from_layout(layout)),
            Arc::new(ItemOracleImpl::from_items(items)),
            Arc::new(CommerceOracleImpl::new(commerce_level)),
            Arc::new(session),
        )
    }

    /// Converts oracle manager into ShippingEnv for shipping-core
    pub fn as_shipping_env(&self) -> ShippingEnv<'_> {
        Env::with_all(
            self.world.as_ref(),
            self.items.as_ref(),
            self.commerce.as_ref(),
            self.session.as_ref(),
        )
        .into_shipping_env()
    }

    pub fn world(&self) -> &GridWorld {
        &self.world
    }
}
