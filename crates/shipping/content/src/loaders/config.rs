//! Shipping configuration loader.

use std::path::Path;

use shipping_core::ShippingConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for shipping configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<ShippingConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<ShippingConfig> {
        let config: ShippingConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse shipping config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use shipping_core::{CurrencyPolicy, TileTypeId};

    use super::*;

    #[test]
    fn missing_keys_keep_defaults() {
        let config = ConfigLoader::parse("search_distance = 3\n").unwrap();

        assert_eq!(config.search_distance, 3);
        assert!(config.currency_as_item);
        assert_eq!(config.exclude_tile_ids, "210");
        assert_eq!(config.shop_tile_id, ShippingConfig::DEFAULT_SHOP_TILE_ID);
    }

    #[test]
    fn loads_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
search_distance = 2
currency_as_item = false
exclude_tile_ids = "210,425,426"
show_notifications = true
shop_tile_id = 12
"#
        )
        .unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.currency_policy(), CurrencyPolicy::ToWallet);
        assert_eq!(config.shop_tile_id, TileTypeId(12));
        assert_eq!(config.denylist().denylist.len(), 3);
        assert!(config.show_notifications);
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(ConfigLoader::parse("search_distance = \"far\"").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ConfigLoader::load(&dir.path().join("absent.toml")).is_err());
    }
}
