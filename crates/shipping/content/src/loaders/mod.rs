//! Content loaders for reading shipping data from files.

pub mod config;
pub mod item;
pub mod layout;

pub use config::ConfigLoader;
pub use item::{ItemCatalog, ItemLoader};
pub use layout::{LayoutLoader, PlacedContainer, PlacedStructure, PlacedTile, WorldLayout};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
