//! Storage container slots owned by the host world.
//!
//! Defines the fixed-capacity slot layout the settlement processor reads and
//! mutates in place.

use arrayvec::ArrayVec;

use crate::config::ShippingConfig;
use crate::state::ItemTypeId;

/// Container slot holding an item type and its stored quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerSlot {
    pub item: ItemTypeId,
    pub quantity: u32,
}

impl ContainerSlot {
    pub const EMPTY: Self = Self {
        item: ItemTypeId::EMPTY,
        quantity: 0,
    };

    pub const fn new(item: ItemTypeId, quantity: u32) -> Self {
        Self { item, quantity }
    }

    pub const fn is_empty(&self) -> bool {
        self.item.is_empty()
    }

    /// Removes the item from this slot.
    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }
}

impl Default for ContainerSlot {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Slot storage for a single container.
///
/// Hosts normally hand over a full set of [`ShippingConfig::CONTAINER_SLOTS`]
/// slots; a short container is representable so that settlement can report it
/// as a fault instead of reading past the end.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    pub slots: ArrayVec<ContainerSlot, { ShippingConfig::CONTAINER_SLOTS }>,
}

impl Container {
    /// Creates a container with every slot empty.
    pub fn empty() -> Self {
        let mut slots = ArrayVec::new();
        while !slots.is_full() {
            slots.push(ContainerSlot::EMPTY);
        }
        Self { slots }
    }

    /// Creates a container from explicit slots. Excess slots are dropped.
    pub fn from_slots(slots: impl IntoIterator<Item = ContainerSlot>) -> Self {
        Self {
            slots: slots
                .into_iter()
                .take(ShippingConfig::CONTAINER_SLOTS)
                .collect(),
        }
    }

    /// Builder helper placing `quantity` of `item` at `index`.
    ///
    /// Indices past the current length are ignored.
    #[must_use]
    pub fn with_slot(mut self, index: usize, item: ItemTypeId, quantity: u32) -> Self {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = ContainerSlot::new(item, quantity);
        }
        self
    }

    pub fn slot(&self, index: usize) -> Option<&ContainerSlot> {
        self.slots.get(index)
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut ContainerSlot> {
        self.slots.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn all_slots_empty(&self) -> bool {
        self.slots.iter().all(ContainerSlot::is_empty)
    }

    /// Total quantity of `item` across all slots.
    pub fn quantity_of(&self, item: ItemTypeId) -> u64 {
        self.slots
            .iter()
            .filter(|slot| slot.item == item)
            .map(|slot| u64::from(slot.quantity))
            .sum()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::empty()
    }
}
