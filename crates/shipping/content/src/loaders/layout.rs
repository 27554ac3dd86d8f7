//! World layout loader.
//!
//! A layout captures the slice of host world state the shipping run reads:
//! placed structures with their facing, plain tiles, and containers with
//! their contents.

use std::path::Path;

use serde::{Deserialize, Serialize};
use shipping_core::{
    Container, FootprintSize, ItemTypeId, Orientation, ShippingConfig, TilePos, TileTypeId,
};

use crate::loaders::{LoadResult, read_file};

/// World layout structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldLayout {
    #[serde(default = "default_extent")]
    pub extent: u32,
    #[serde(default)]
    pub structures: Vec<PlacedStructure>,
    #[serde(default)]
    pub tiles: Vec<PlacedTile>,
    #[serde(default)]
    pub containers: Vec<PlacedContainer>,
}

fn default_extent() -> u32 {
    ShippingConfig::DEFAULT_MAP_EXTENT
}

/// Multi-tile object registered at its anchor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlacedStructure {
    pub anchor: TilePos,
    pub tile: TileTypeId,
    pub orientation: Orientation,
    pub size: FootprintSize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlacedTile {
    pub position: TilePos,
    pub tile: TileTypeId,
}

/// Container object and its non-empty slots as `(index, item, quantity)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedContainer {
    pub position: TilePos,
    pub tile: TileTypeId,
    #[serde(default)]
    pub contents: Vec<(usize, ItemTypeId, u32)>,
}

impl PlacedContainer {
    /// Builds a full-capacity container; out-of-range indices are dropped.
    pub fn container(&self) -> Container {
        self.contents
            .iter()
            .fold(Container::empty(), |container, &(index, item, quantity)| {
                container.with_slot(index, item, quantity)
            })
    }
}

/// Loader for world layouts from RON files.
pub struct LayoutLoader;

impl LayoutLoader {
    pub fn load(path: &Path) -> LoadResult<WorldLayout> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<WorldLayout> {
        let layout: WorldLayout = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse world layout RON: {}", e))?;

        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use shipping_core::ContainerSlot;

    use super::*;

    #[test]
    fn parses_layout() {
        let layout = LayoutLoader::parse(
            r#"(
                extent: 64,
                structures: [
                    (anchor: (x: 10, z: 10), tile: 8, orientation: west, size: (width: 4, height: 3)),
                ],
                tiles: [(position: (x: 9, z: 9), tile: 210)],
                containers: [
                    (position: (x: 9, z: 10), tile: 55, contents: [(0, 10, 5), (23, 299, 40)]),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(layout.extent, 64);
        assert_eq!(layout.structures[0].orientation, Orientation::West);
        assert_eq!(layout.structures[0].size, FootprintSize::new(4, 3));

        let container = layout.containers[0].container();
        assert_eq!(container.len(), ShippingConfig::CONTAINER_SLOTS);
        assert_eq!(container.slot(0), Some(&ContainerSlot::new(ItemTypeId(10), 5)));
        assert_eq!(container.slot(23), Some(&ContainerSlot::new(ItemTypeId(299), 40)));
    }

    #[test]
    fn sections_are_optional() {
        let layout = LayoutLoader::parse("()").unwrap();
        assert_eq!(layout.extent, ShippingConfig::DEFAULT_MAP_EXTENT);
        assert!(layout.structures.is_empty());
        assert!(layout.containers.is_empty());
    }
}
