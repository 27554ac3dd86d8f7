//! Minimal [`shipping_core::ItemOracle`] backed by an in-memory map.
use std::collections::HashMap;

use shipping_core::{ItemInfo, ItemOracle, ItemTypeId};

/// ItemOracle implementation with static catalog entries
pub struct ItemOracleImpl {
    definitions: HashMap<ItemTypeId, ItemInfo>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Builds a catalog from loaded entries. Later duplicates replace earlier ones.
    pub fn from_items(items: impl IntoIterator<Item = ItemInfo>) -> Self {
        let mut oracle = Self::new();
        for item in items {
            oracle.add_definition(item);
        }
        oracle
    }

    /// Add a catalog entry
    pub fn add_definition(&mut self, info: ItemInfo) {
        self.definitions.insert(info.id, info);
    }
}

impl Default for ItemOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemOracle for ItemOracleImpl {
    fn item_info(&self, item: ItemTypeId) -> Option<ItemInfo> {
        self.definitions.get(&item).cloned()
    }
}
