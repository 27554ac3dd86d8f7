//! Tile map served through [`shipping_core::WorldOracle`].
use std::collections::HashMap;

use shipping_content::WorldLayout;
use shipping_core::{FootprintSize, Orientation, TilePos, TileTypeId, WorldOracle};

/// WorldOracle implementation over a sparse snapshot of the host tile map.
///
/// In-grid positions never written read as [`TileTypeId::EMPTY`]; only reads
/// outside the grid are absent.
pub struct GridWorld {
    extent: u32,
    tiles: HashMap<TilePos, TileTypeId>,
    orientations: HashMap<TilePos, Orientation>,
    sizes: HashMap<TilePos, FootprintSize>,
}

impl GridWorld {
    pub fn new(extent: u32) -> Self {
        Self {
            extent,
            tiles: HashMap::new(),
            orientations: HashMap::new(),
            sizes: HashMap::new(),
        }
    }

    /// Builds the tile map described by a layout file.
    ///
    /// Container tiles are registered too, so the region scan can see them.
    pub fn from_layout(layout: &WorldLayout) -> Self {
        let mut world = Self::new(layout.extent);
        for structure in &layout.structures {
            world.place_structure(
                structure.anchor,
                structure.tile,
                structure.orientation,
                structure.size,
            );
        }
        for tile in &layout.tiles {
            world.set_tile(tile.position, tile.tile);
        }
        for container in &layout.containers {
            world.set_tile(container.position, container.tile);
        }
        world
    }

    pub fn set_tile(&mut self, position: TilePos, tile: TileTypeId) {
        self.tiles.insert(position, tile);
    }

    /// Registers a multi-tile object at its anchor.
    pub fn place_structure(
        &mut self,
        anchor: TilePos,
        tile: TileTypeId,
        orientation: Orientation,
        size: FootprintSize,
    ) {
        self.tiles.insert(anchor, tile);
        self.orientations.insert(anchor, orientation);
        self.sizes.insert(anchor, size);
    }
}

impl WorldOracle for GridWorld {
    fn extent(&self) -> u32 {
        self.extent
    }

    fn tile_type_at(&self, position: TilePos) -> Option<TileTypeId> {
        if !self.contains(position) {
            return None;
        }
        Some(self.tiles.get(&position).copied().unwrap_or(TileTypeId::EMPTY))
    }

    fn orientation_at(&self, position: TilePos) -> Option<Orientation> {
        self.orientations.get(&position).copied()
    }

    fn object_size_at(&self, position: TilePos) -> Option<FootprintSize> {
        self.sizes.get(&position).copied()
    }
}
