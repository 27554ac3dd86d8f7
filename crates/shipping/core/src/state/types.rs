use std::fmt;

/// Discrete grid position expressed in tile coordinates.
///
/// The host world indexes its tile map as `(x, z)`; valid placements never use
/// negative coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePos {
    pub x: i32,
    pub z: i32,
}

impl TilePos {
    pub const ORIGIN: Self = Self { x: 0, z: 0 };

    /// Sentinel the host uses for "no such tile".
    pub const NOT_FOUND: Self = Self { x: -1, z: -1 };

    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Returns true if either coordinate is negative.
    #[inline]
    pub const fn is_not_found(self) -> bool {
        self.x < 0 || self.z < 0
    }

    /// Offsets this position by `(dx, dz)`, saturating at the `i32` bounds.
    pub const fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            z: self.z.saturating_add(dz),
        }
    }
}

impl Default for TilePos {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for TilePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Identifier of the object type registered on a world tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TileTypeId(pub i32);

impl TileTypeId {
    /// Type read back from an in-grid tile nothing was ever placed on.
    pub const EMPTY: Self = Self(-1);
}

impl fmt::Display for TileTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile:{}", self.0)
    }
}

/// Identifier of an item type in the host's item catalog.
///
/// Negative values mark an empty container slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemTypeId(pub i32);

impl ItemTypeId {
    /// Value the host writes into a slot after removing its item.
    pub const EMPTY: Self = Self(-1);

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 < 0
    }
}

impl Default for ItemTypeId {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for ItemTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item:{}", self.0)
    }
}

/// Identifier of a non-player character known to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NpcId(pub u32);

impl fmt::Display for NpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "npc#{}", self.0)
    }
}
