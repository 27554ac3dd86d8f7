use bitflags::bitflags;

use crate::env::SaleTask;
use crate::state::ItemTypeId;

/// Read-only view of the host's item catalog.
pub trait ItemOracle: Send + Sync {
    fn item_info(&self, item: ItemTypeId) -> Option<ItemInfo>;
}

bitflags! {
    /// Category flags carried by a catalog entry.
    ///
    /// Flags are independent; an item may be both fish and bug.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ItemFlags: u8 {
        /// One-of-a-kind item that can never be replaced.
        const UNIQUE    = 1 << 0;
        const DEED      = 1 << 1;
        const FRUIT     = 1 << 2;
        const VEGETABLE = 1 << 3;
        const FISH      = 1 << 4;
        const BUG       = 1 << 5;
    }
}

/// Catalog attributes the settlement processor prices with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemInfo {
    pub id: ItemTypeId,
    /// Sale price of one unit.
    pub value: u32,
    pub stackable: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: ItemFlags,
    /// Task credited instead of the category tasks when this item is sold.
    #[cfg_attr(feature = "serde", serde(default))]
    pub task_trigger: Option<SaleTask>,
}

impl ItemInfo {
    pub fn new(id: ItemTypeId, value: u32, stackable: bool) -> Self {
        Self {
            id,
            value,
            stackable,
            flags: ItemFlags::empty(),
            task_trigger: None,
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_task_trigger(mut self, task: SaleTask) -> Self {
        self.task_trigger = Some(task);
        self
    }

    /// Unique and deed items are never sold automatically.
    pub fn is_protected(&self) -> bool {
        self.flags.intersects(ItemFlags::UNIQUE | ItemFlags::DEED)
    }

    /// Units counted for sale from a stored stack of `stored`.
    ///
    /// Unstackable items always sell as exactly one unit whatever the stored
    /// quantity says.
    pub fn sell_quantity(&self, stored: u32) -> u32 {
        if self.stackable { stored } else { 1 }
    }
}
