use crate::state::{Container, FootprintSize, Orientation, TilePos, TileTypeId};

/// Read-only view of the host's tile map.
///
/// Positions outside the host's arrays return `None` rather than failing.
pub trait WorldOracle: Send + Sync {
    /// Side length of the square grid the host allocates.
    fn extent(&self) -> u32;

    fn tile_type_at(&self, position: TilePos) -> Option<TileTypeId>;

    /// Facing of the object registered at `position`.
    fn orientation_at(&self, position: TilePos) -> Option<Orientation>;

    /// Unrotated base size of the object registered at `position`.
    fn object_size_at(&self, position: TilePos) -> Option<FootprintSize>;

    fn contains(&self, position: TilePos) -> bool {
        let extent = i64::from(self.extent());
        position.x >= 0
            && position.z >= 0
            && i64::from(position.x) < extent
            && i64::from(position.z) < extent
    }
}

/// Host-owned containers, mutated in place by settlement.
pub trait ContainerStore {
    fn container_mut(&mut self, position: TilePos) -> Option<&mut Container>;

    fn has_container(&self, position: TilePos) -> bool;
}
