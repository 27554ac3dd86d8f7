//! Rotation-aware footprint of multi-tile structures.
//!
//! The host registers a building only at its anchor tile; the tiles it covers
//! follow from its base size and facing.

use crate::env::WorldOracle;
use crate::state::{FootprintSize, Orientation, Rect, TilePos};

/// Computes the rectangle an object of `base_size` occupies at `anchor`.
///
/// West and East facings swap width and height. The result always satisfies
/// `end = anchor + size - (1, 1)`; a degenerate size resolves to the anchor alone.
pub fn resolve_footprint(anchor: TilePos, orientation: Orientation, base_size: FootprintSize) -> Rect {
    if base_size.is_degenerate() {
        return Rect::point(anchor);
    }
    Rect::from_anchor(anchor, base_size.oriented(orientation))
}

/// Looks up the object at `anchor` and resolves its footprint.
///
/// Fails soft: when the facing or the size is unavailable the footprint is the
/// 1×1 rectangle at the anchor.
pub fn footprint_at<W>(world: &W, anchor: TilePos) -> Rect
where
    W: WorldOracle + ?Sized,
{
    match (world.orientation_at(anchor), world.object_size_at(anchor)) {
        (Some(orientation), Some(size)) => resolve_footprint(anchor, orientation, size),
        _ => Rect::point(anchor),
    }
}
