//! Runtime configuration: file, environment overrides, and resolved settings.
use std::env;
use std::path::PathBuf;

use shipping_content::ConfigLoader;
use shipping_core::{Denylist, DenylistParse, SettlementRules, ShippingConfig, TileTypeId};
use tracing::{debug, warn};

use crate::error::{Result, RuntimeError};

/// Logging options for [`crate::init_logging`].
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Directive used when `RUST_LOG` is unset.
    pub filter: String,
    pub log_to_file: bool,
    /// Overrides the platform cache directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
            log_to_file: false,
            log_dir: None,
        }
    }
}

/// Everything the runtime reads once at startup.
#[derive(Clone, Debug, Default)]
pub struct RuntimeConfig {
    pub shipping: ShippingConfig,
    pub logging: LoggingConfig,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Loads `.env` first if present. Environment variables:
    /// - `SHIPPING_CONFIG` - TOML file with [`ShippingConfig`] keys (default: built-in values)
    /// - `SHIPPING_SEARCH_DISTANCE` - Tiles scanned around the shop (default: 1)
    /// - `SHIPPING_CURRENCY_AS_ITEM` - Stack currency into containers (default: true)
    /// - `SHIPPING_EXCLUDE_TILE_IDS` - Comma separated tile ids to skip (default: "210")
    /// - `SHIPPING_SHOW_NOTIFICATIONS` - Log daily summaries at info (default: false)
    /// - `SHIPPING_LOG_FILE` - Also write logs to a file (default: false)
    /// - `SHIPPING_LOG_DIR` - Log directory (default: platform cache dir)
    ///
    /// Variables override values read from the file.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("SHIPPING_CONFIG") {
            let path = PathBuf::from(path);
            config.shipping =
                ConfigLoader::load(&path).map_err(|source| RuntimeError::Content {
                    what: "shipping config",
                    path,
                    source: source.into(),
                })?;
        }

        if let Some(distance) = read_var::<u32, _>(&lookup, "SHIPPING_SEARCH_DISTANCE")? {
            config.shipping.search_distance = distance;
        }
        if let Some(as_item) = read_var::<bool, _>(&lookup, "SHIPPING_CURRENCY_AS_ITEM")? {
            config.shipping.currency_as_item = as_item;
        }
        if let Some(ids) = lookup("SHIPPING_EXCLUDE_TILE_IDS") {
            config.shipping.exclude_tile_ids = ids;
        }
        if let Some(show) = read_var::<bool, _>(&lookup, "SHIPPING_SHOW_NOTIFICATIONS")? {
            config.shipping.show_notifications = show;
        }

        if let Some(enable) = read_var::<bool, _>(&lookup, "SHIPPING_LOG_FILE")? {
            config.logging.log_to_file = enable;
        }
        config.logging.log_dir = lookup("SHIPPING_LOG_DIR").map(PathBuf::from);

        Ok(config)
    }
}

fn read_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| RuntimeError::InvalidEnv { key, value })
}

/// Shipping configuration with its derived values computed once.
#[derive(Clone, Debug)]
pub struct ShippingSettings {
    config: ShippingConfig,
    denylist: Denylist,
    rules: SettlementRules,
}

impl ShippingSettings {
    /// Parses the exclude list and fixes the settlement rules for the session.
    ///
    /// Malformed exclude-list tokens are logged and dropped.
    pub fn resolve(config: ShippingConfig) -> Self {
        let DenylistParse { denylist, rejected } = config.denylist();
        for token in &rejected {
            warn!(
                target: "shipping::config",
                token = %token,
                "Ignoring malformed tile id in exclude list"
            );
        }

        let rules = config.settlement_rules();
        debug!(
            target: "shipping::config",
            search_distance = config.search_distance,
            policy = %rules.policy,
            excluded = denylist.len(),
            "Shipping settings resolved"
        );

        Self {
            config,
            denylist,
            rules,
        }
    }

    pub fn config(&self) -> &ShippingConfig {
        &self.config
    }

    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    pub fn rules(&self) -> &SettlementRules {
        &self.rules
    }

    pub fn search_distance(&self) -> u32 {
        self.config.search_distance
    }

    pub fn shop_tile_id(&self) -> TileTypeId {
        self.config.shop_tile_id
    }

    pub fn show_notifications(&self) -> bool {
        self.config.show_notifications
    }
}

impl Default for ShippingSettings {
    fn default() -> Self {
        Self::resolve(ShippingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use shipping_core::CurrencyPolicy;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn no_variables_keeps_defaults() {
        let config = RuntimeConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.shipping, ShippingConfig::default());
        assert!(!config.logging.log_to_file);
    }

    #[test]
    fn variables_override_file_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "search_distance = 4\ncurrency_as_item = true").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let config = RuntimeConfig::from_lookup(lookup(&[
            ("SHIPPING_CONFIG", path.as_str()),
            ("SHIPPING_CURRENCY_AS_ITEM", "false"),
            ("SHIPPING_EXCLUDE_TILE_IDS", "210, 425"),
        ]))
        .unwrap();

        assert_eq!(config.shipping.search_distance, 4);
        assert_eq!(config.shipping.currency_policy(), CurrencyPolicy::ToWallet);
        assert_eq!(config.shipping.exclude_tile_ids, "210, 425");
    }

    #[test]
    fn unparsable_variable_is_rejected() {
        let error = RuntimeConfig::from_lookup(lookup(&[("SHIPPING_SEARCH_DISTANCE", "far")]))
            .unwrap_err();

        assert!(matches!(
            error,
            RuntimeError::InvalidEnv {
                key: "SHIPPING_SEARCH_DISTANCE",
                ..
            }
        ));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shipping.toml");
        let path = path.to_string_lossy().into_owned();

        let error =
            RuntimeConfig::from_lookup(lookup(&[("SHIPPING_CONFIG", path.as_str())])).unwrap_err();
        assert!(matches!(error, RuntimeError::Content { .. }));
    }

    #[test]
    fn settings_keep_valid_exclude_ids() {
        let settings = ShippingSettings::resolve(
            ShippingConfig::default().with_exclude_tile_ids("210, abc,,425"),
        );

        assert_eq!(settings.denylist().len(), 2);
        assert!(settings.denylist().contains(TileTypeId(210)));
        assert!(settings.denylist().contains(TileTypeId(425)));
    }
}
