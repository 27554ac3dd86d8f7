//! Grid rectangles, facings, and object sizes.

use super::TilePos;

/// Facing of a placed multi-tile object.
///
/// Discriminants match the host's raw rotation codes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum Orientation {
    South = 1,
    West = 2,
    North = 3,
    East = 4,
}

impl Orientation {
    /// Converts a host rotation code into an orientation.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            1 => Some(Self::South),
            2 => Some(Self::West),
            3 => Some(Self::North),
            4 => Some(Self::East),
            _ => None,
        }
    }

    pub const fn raw(self) -> i32 {
        self as i32
    }

    /// West and East facings lay the object's base size out sideways.
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Self::West | Self::East)
    }
}

/// Base size of a placed object in tiles, before rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FootprintSize {
    pub width: u32,
    pub height: u32,
}

impl FootprintSize {
    pub const SINGLE: Self = Self::new(1, 1);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the size as laid out under the given orientation.
    pub const fn oriented(self, orientation: Orientation) -> Self {
        if orientation.swaps_axes() {
            Self::new(self.height, self.width)
        } else {
            self
        }
    }

    /// A zero-width or zero-height object occupies nothing and cannot be resolved.
    pub const fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Inclusive rectangle of tiles, `start..=end` on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub start: TilePos,
    pub end: TilePos,
}

impl Rect {
    pub const fn new(start: TilePos, end: TilePos) -> Self {
        Self { start, end }
    }

    /// The 1×1 rectangle covering exactly `anchor`.
    pub const fn point(anchor: TilePos) -> Self {
        Self::new(anchor, anchor)
    }

    /// Rectangle anchored at `anchor` spanning `size` tiles.
    ///
    /// `end = anchor + size - (1, 1)`. Callers must reject degenerate sizes first.
    pub fn from_anchor(anchor: TilePos, size: FootprintSize) -> Self {
        let dx = i32::try_from(size.width.saturating_sub(1)).unwrap_or(i32::MAX);
        let dz = i32::try_from(size.height.saturating_sub(1)).unwrap_or(i32::MAX);
        Self::new(anchor, anchor.offset(dx, dz))
    }

    /// Grows the rectangle by `margin` tiles on every side.
    pub fn expand(self, margin: u32) -> Self {
        let margin = i32::try_from(margin).unwrap_or(i32::MAX);
        Self::new(
            self.start.offset(-margin, -margin),
            self.end.offset(margin, margin),
        )
    }

    pub fn width(&self) -> u32 {
        (i64::from(self.end.x) - i64::from(self.start.x) + 1).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (i64::from(self.end.z) - i64::from(self.start.z) + 1).max(0) as u32
    }

    pub fn size(&self) -> FootprintSize {
        FootprintSize::new(self.width(), self.height())
    }

    /// Intersects the rectangle with the `extent × extent` grid.
    ///
    /// The result is empty (`end < start`) when nothing overlaps.
    pub fn clamp_to_grid(self, extent: u32) -> Self {
        let last = i32::try_from(extent).unwrap_or(i32::MAX) - 1;
        Self::new(
            TilePos::new(self.start.x.max(0), self.start.z.max(0)),
            TilePos::new(self.end.x.min(last), self.end.z.min(last)),
        )
    }

    /// Iterates every tile in the rectangle, x outer and z inner.
    pub fn tiles(&self) -> RectTiles {
        RectTiles::new(*self)
    }
}

/// Row-major walk over the tiles of a [`Rect`].
#[derive(Clone, Debug)]
pub struct RectTiles {
    rect: Rect,
    next: Option<TilePos>,
}

impl RectTiles {
    fn new(rect: Rect) -> Self {
        let next = (rect.start.x <= rect.end.x && rect.start.z <= rect.end.z).then_some(rect.start);
        Self { rect, next }
    }
}

impl Iterator for RectTiles {
    type Item = TilePos;

    fn next(&mut self) -> Option<TilePos> {
        let current = self.next?;
        self.next = if current.z < self.rect.end.z {
            Some(TilePos::new(current.x, current.z + 1))
        } else if current.x < self.rect.end.x {
            Some(TilePos::new(current.x + 1, self.rect.start.z))
        } else {
            None
        };
        Some(current)
    }
}
