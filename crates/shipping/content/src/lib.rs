//! Data-driven shipping content and loaders.
//!
//! This crate reads the files a host or a test harness hands to the runtime:
//! - Shipping configuration (TOML)
//! - Item catalogs (RON)
//! - World layouts: placed structures, tiles, and containers (RON)
//!
//! All loaders deserialize straight into shipping-core types with serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ItemCatalog, ItemLoader, LayoutLoader, PlacedContainer, PlacedStructure,
    PlacedTile, WorldLayout,
};
