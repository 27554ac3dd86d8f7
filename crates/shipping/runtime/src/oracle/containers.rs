//! Container storage keyed by tile position.
use std::collections::HashMap;

use shipping_content::WorldLayout;
use shipping_core::{Container, ContainerStore, TilePos};

/// ContainerStore implementation holding containers in memory.
#[derive(Debug, Default)]
pub struct ContainerStoreImpl {
    containers: HashMap<TilePos, Container>,
}

impl ContainerStoreImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_layout(layout: &WorldLayout) -> Self {
        let mut store = Self::new();
        for placed in &layout.containers {
            store.insert(placed.position, placed.container());
        }
        store
    }

    /// Places a container, returning the one it replaced.
    pub fn insert(&mut self, position: TilePos, container: Container) -> Option<Container> {
        self.containers.insert(position, container)
    }

    pub fn get(&self, position: TilePos) -> Option<&Container> {
        self.containers.get(&position)
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TilePos, &Container)> + '_ {
        self.containers.iter().map(|(position, container)| (*position, container))
    }
}

impl ContainerStore for ContainerStoreImpl {
    fn container_mut(&mut self, position: TilePos) -> Option<&mut Container> {
        self.containers.get_mut(&position)
    }

    fn has_container(&self, position: TilePos) -> bool {
        self.containers.contains_key(&position)
    }
}
