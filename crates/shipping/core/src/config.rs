use crate::denylist::{Denylist, DenylistParse};
use crate::state::{ItemTypeId, NpcId, TileTypeId};

/// Shipping configuration constants and tunable parameters.
///
/// Every field has a default, so a partial TOML file only overrides what it names.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShippingConfig {
    /// Number of tiles in each direction around the shop to sell container contents from.
    pub search_distance: u32,
    /// Deposit proceeds back into the container as a currency stack instead of the wallet.
    pub currency_as_item: bool,
    /// Comma separated list of tile object IDs excluded from processing, e.g. `210,425,426`.
    pub exclude_tile_ids: String,
    /// Report each day's shipping summary at info level.
    pub show_notifications: bool,
    /// Tile type registered at the anchor of the shop building.
    pub shop_tile_id: TileTypeId,
    /// Item type used as the physical currency stack.
    pub currency_item: ItemTypeId,
    /// Shopkeeper credited with the day's purchases.
    pub shopkeeper: NpcId,
    /// Side length of the square world grid scanned for the shop.
    pub map_extent: u32,
}

impl ShippingConfig {
    // ===== compile-time constants used as type parameters =====
    pub const CONTAINER_SLOTS: usize = 24;

    // ===== pricing =====
    /// Sale bonus granted per commerce level (5%).
    pub const BONUS_PER_LEVEL: f32 = 0.05;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SEARCH_DISTANCE: u32 = 1;
    pub const DEFAULT_CURRENCY_AS_ITEM: bool = true;
    pub const DEFAULT_EXCLUDE_TILE_IDS: &'static str = "210";
    pub const DEFAULT_SHOP_TILE_ID: TileTypeId = TileTypeId(8);
    pub const DEFAULT_CURRENCY_ITEM: ItemTypeId = ItemTypeId(299);
    pub const DEFAULT_SHOPKEEPER: NpcId = NpcId(2);
    pub const DEFAULT_MAP_EXTENT: u32 = 1000;

    pub fn new() -> Self {
        Self {
            search_distance: Self::DEFAULT_SEARCH_DISTANCE,
            currency_as_item: Self::DEFAULT_CURRENCY_AS_ITEM,
            exclude_tile_ids: Self::DEFAULT_EXCLUDE_TILE_IDS.to_owned(),
            show_notifications: false,
            shop_tile_id: Self::DEFAULT_SHOP_TILE_ID,
            currency_item: Self::DEFAULT_CURRENCY_ITEM,
            shopkeeper: Self::DEFAULT_SHOPKEEPER,
            map_extent: Self::DEFAULT_MAP_EXTENT,
        }
    }

    pub fn with_search_distance(mut self, search_distance: u32) -> Self {
        self.search_distance = search_distance;
        self
    }

    pub fn with_currency_as_item(mut self, currency_as_item: bool) -> Self {
        self.currency_as_item = currency_as_item;
        self
    }

    pub fn with_exclude_tile_ids(mut self, exclude_tile_ids: impl Into<String>) -> Self {
        self.exclude_tile_ids = exclude_tile_ids.into();
        self
    }

    /// Parses [`Self::exclude_tile_ids`] into a denylist plus rejected tokens.
    pub fn denylist(&self) -> DenylistParse {
        Denylist::parse(&self.exclude_tile_ids)
    }

    /// Deposit policy selected by [`Self::currency_as_item`].
    pub fn currency_policy(&self) -> CurrencyPolicy {
        if self.currency_as_item {
            CurrencyPolicy::AsItem
        } else {
            CurrencyPolicy::ToWallet
        }
    }

    /// Fixed parameters the settlement processor needs for every container.
    pub fn settlement_rules(&self) -> SettlementRules {
        SettlementRules {
            currency_item: self.currency_item,
            shopkeeper: self.shopkeeper,
            policy: self.currency_policy(),
        }
    }
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Where settlement proceeds are paid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum CurrencyPolicy {
    /// Currency is stacked into the settled container.
    AsItem,
    /// Currency is credited straight to the wallet; no slot receives it.
    ToWallet,
}

/// Per-day constants applied to every settled container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementRules {
    pub currency_item: ItemTypeId,
    pub shopkeeper: NpcId,
    pub policy: CurrencyPolicy,
}

impl SettlementRules {
    pub const fn new(currency_item: ItemTypeId, shopkeeper: NpcId, policy: CurrencyPolicy) -> Self {
        Self {
            currency_item,
            shopkeeper,
            policy,
        }
    }
}

impl Default for SettlementRules {
    fn default() -> Self {
        ShippingConfig::default().settlement_rules()
    }
}
