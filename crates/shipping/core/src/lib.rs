//! Deterministic shipping rules shared by the runtime and offline tools.
//!
//! `shipping-core` finds the shop building on the host's tile map, resolves
//! its rotation-aware footprint, walks the containers around it, and settles
//! each container's contents into currency. Host state is reached only through
//! the collaborator traits in [`env`]; nothing here logs or performs I/O.
pub mod config;
pub mod denylist;
pub mod env;
pub mod error;
pub mod footprint;
pub mod scan;
pub mod settlement;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{CurrencyPolicy, SettlementRules, ShippingConfig};
pub use denylist::{Denylist, DenylistParse};
pub use env::{
    CommerceOracle, ContainerStore, Env, ItemFlags, ItemInfo, ItemOracle, OracleError, SaleTask,
    SessionOracle, SettlementSink, ShippingEnv, WorldOracle,
};
pub use error::{ErrorSeverity, ShippingError};
pub use footprint::{footprint_at, resolve_footprint};
pub use scan::{
    ContainerSite, RegionScan, enumerate_region, find_anchor_by_type_id, find_anchor_or_sentinel,
};
pub use settlement::{Deposit, SaleLedger, SettlementError, commerce_bonus, sale_tasks, settle};
pub use state::{
    Container, ContainerSlot, FootprintSize, ItemTypeId, NpcId, Orientation, Rect, RectTiles,
    TilePos, TileTypeId,
};
