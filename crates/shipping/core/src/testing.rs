//! In-crate test doubles for the host collaborators.

use std::collections::{BTreeMap, HashMap};

use crate::env::{ContainerStore, ItemInfo, ItemOracle, SaleTask, SettlementSink, WorldOracle};
use crate::state::{Container, FootprintSize, ItemTypeId, NpcId, Orientation, TilePos, TileTypeId};

/// Sparse world grid plus item catalog.
#[derive(Default)]
pub struct Fixture {
    extent: u32,
    tiles: HashMap<TilePos, TileTypeId>,
    orientations: HashMap<TilePos, Orientation>,
    sizes: HashMap<TilePos, FootprintSize>,
    containers: HashMap<TilePos, Container>,
    items: HashMap<ItemTypeId, ItemInfo>,
}

impl Fixture {
    pub fn new(extent: u32) -> Self {
        Self {
            extent,
            ..Self::default()
        }
    }

    /// Every in-grid tile registered as `tile`.
    pub fn filled(extent: u32, tile: TileTypeId) -> Self {
        let mut fixture = Self::new(extent);
        for x in 0..extent as i32 {
            for z in 0..extent as i32 {
                fixture.tiles.insert(TilePos::new(x, z), tile);
            }
        }
        fixture
    }

    pub fn set_tile(&mut self, position: TilePos, tile: TileTypeId) {
        self.tiles.insert(position, tile);
    }

    pub fn place(
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

    pub fn insert_container(&mut self, position: TilePos, container: Container) {
        self.containers.insert(position, container);
    }

    pub fn add_item(&mut self, info: ItemInfo) {
        self.items.insert(info.id, info);
    }
}

impl WorldOracle for Fixture {
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

impl ContainerStore for Fixture {
    fn container_mut(&mut self, position: TilePos) -> Option<&mut Container> {
        self.containers.get_mut(&position)
    }

    fn has_container(&self, position: TilePos) -> bool {
        self.containers.contains_key(&position)
    }
}

impl ItemOracle for Fixture {
    fn item_info(&self, item: ItemTypeId) -> Option<ItemInfo> {
        self.items.get(&item).cloned()
    }
}

/// Sink that remembers every call.
#[derive(Debug, Default)]
pub struct Recorder {
    pub wallet: u64,
    pub tasks: BTreeMap<SaleTask, u64>,
    pub spending: BTreeMap<NpcId, u64>,
    pub day_tally: Vec<(ItemTypeId, u32)>,
    pub todays_money: u64,
}

impl SettlementSink for Recorder {
    fn credit_wallet(&mut self, amount: u32) {
        self.wallet += u64::from(amount);
    }

    fn record_task(&mut self, task: SaleTask, amount: u32) {
        *self.tasks.entry(task).or_default() += u64::from(amount);
    }

    fn record_spending(&mut self, npc: NpcId, amount: u32) {
        *self.spending.entry(npc).or_default() += u64::from(amount);
    }

    fn add_to_day_tally(&mut self, item: ItemTypeId, quantity: u32) {
        self.day_tally.push((item, quantity));
    }

    fn add_to_todays_money(&mut self, amount: u32) {
        self.todays_money += u64::from(amount);
    }
}
