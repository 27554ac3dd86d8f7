//! World-facing value types shared by the resolver, scanner, and settlement.
mod container;
mod rect;
mod types;

pub use container::{Container, ContainerSlot};
pub use rect::{FootprintSize, Orientation, Rect, RectTiles};
pub use types::{ItemTypeId, NpcId, TilePos, TileTypeId};
