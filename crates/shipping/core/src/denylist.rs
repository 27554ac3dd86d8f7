//! Tile-type denylist parsed from the `exclude_tile_ids` setting.
//!
//! Parsing is pure: rejected tokens are returned to the caller instead of
//! being logged here.

use std::collections::BTreeSet;

use crate::state::TileTypeId;

/// Tile types the region scan never queries for containers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Denylist {
    ids: BTreeSet<TileTypeId>,
}

/// Result of parsing a denylist string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DenylistParse {
    pub denylist: Denylist,
    /// Tokens that were not integers, verbatim.
    pub rejected: Vec<String>,
}

impl DenylistParse {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl Denylist {
    /// Parses a comma separated list of integer tile IDs.
    ///
    /// Surrounding whitespace is accepted. Anything else that is not an `i32`,
    /// including empty tokens, is rejected and the rest of the list is kept.
    pub fn parse(input: &str) -> DenylistParse {
        let mut ids = BTreeSet::new();
        let mut rejected = Vec::new();

        for token in input.split(',') {
            match token.trim().parse::<i32>() {
                Ok(id) => {
                    ids.insert(TileTypeId(id));
                }
                Err(_) => rejected.push(token.to_owned()),
            }
        }

        DenylistParse {
            denylist: Self { ids },
            rejected,
        }
    }

    pub fn contains(&self, id: TileTypeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TileTypeId> + '_ {
        self.ids.iter().copied()
    }
}
