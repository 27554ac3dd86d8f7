//! End-of-day shipping run.
//!
//! Finds the shop, resolves its footprint, walks the containers around it, and
//! settles each one under [`BestEffort`]. There is no transaction spanning the
//! containers: a fault abandons one container and the run moves on. Nothing
//! escapes [`DailySettlement::run`]; every way the day can go is described by
//! the returned [`DailyReport`].
use std::fmt;

use shipping_core::{
    ContainerStore, OracleError, Rect, SaleLedger, SettlementError, SettlementSink, ShippingEnv,
    TilePos, TileTypeId, enumerate_region, find_anchor_by_type_id, footprint_at, settle,
};
use tracing::{debug, error, info};

use crate::boundary::{BestEffort, UnitOutcome};
use crate::config::ShippingSettings;

/// Why a day's run did nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// This participant does not own the world.
    NotHost,
    /// No tile carries the shop's type id.
    ShopNotFound,
    /// A collaborator needed to find containers was not wired in.
    OracleUnavailable(OracleError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotHost => write!(f, "not host"),
            Self::ShopNotFound => write!(f, "shop not found"),
            Self::OracleUnavailable(error) => write!(f, "{error}"),
        }
    }
}

/// One container visited by the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerReport {
    pub position: TilePos,
    pub tile_type: TileTypeId,
    pub outcome: UnitOutcome<SaleLedger, SettlementError>,
}

/// Everything a day's shipping run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyReport {
    pub skipped: Option<SkipReason>,
    pub shop: Option<TilePos>,
    pub footprint: Option<Rect>,
    /// Footprint expanded by the search distance and clipped to the grid.
    pub region: Option<Rect>,
    pub containers: Vec<ContainerReport>,
    /// Completed containers folded together.
    pub summary: SaleLedger,
}

impl DailyReport {
    pub fn skipped(reason: SkipReason) -> Self {
        Self {
            skipped: Some(reason),
            ..Self::default()
        }
    }

    pub fn settled(&self) -> usize {
        self.containers
            .iter()
            .filter(|report| report.outcome.is_completed())
            .count()
    }

    pub fn failed(&self) -> usize {
        self.containers.len() - self.settled()
    }

    /// Currency paid out across every completed container.
    pub fn total(&self) -> u32 {
        self.summary.total
    }

    pub fn container(&self, position: TilePos) -> Option<&ContainerReport> {
        self.containers
            .iter()
            .find(|report| report.position == position)
    }
}

/// Daily settlement orchestrator.
#[derive(Debug, Clone, Default)]
pub struct DailySettlement {
    settings: ShippingSettings,
}

impl DailySettlement {
    pub fn new(settings: ShippingSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ShippingSettings {
        &self.settings
    }

    /// Runs one day's shipping against the host.
    ///
    /// Non-host participants and worlds without a shop are no-ops. Missing
    /// item or commerce oracles abandon each container rather than the day.
    pub fn run<S, K>(&self, env: &ShippingEnv<'_>, store: &mut S, sink: &mut K) -> DailyReport
    where
        S: ContainerStore + ?Sized,
        K: SettlementSink + ?Sized,
    {
        let report = self.run_inner(env, store, sink);
        self.announce(&report);
        report
    }

    fn run_inner<S, K>(&self, env: &ShippingEnv<'_>, store: &mut S, sink: &mut K) -> DailyReport
    where
        S: ContainerStore + ?Sized,
        K: SettlementSink + ?Sized,
    {
        let session = match env.session() {
            Ok(session) => session,
            Err(error) => return DailyReport::skipped(SkipReason::OracleUnavailable(error)),
        };
        if !session.is_authoritative_host() {
            return DailyReport::skipped(SkipReason::NotHost);
        }

        let world = match env.world() {
            Ok(world) => world,
            Err(error) => return DailyReport::skipped(SkipReason::OracleUnavailable(error)),
        };
        let Some(shop) = find_anchor_by_type_id(world, self.settings.shop_tile_id()) else {
            return DailyReport::skipped(SkipReason::ShopNotFound);
        };

        let footprint = footprint_at(world, shop);
        let scan = enumerate_region(
            world,
            footprint,
            self.settings.search_distance(),
            self.settings.denylist(),
        );
        let mut report = DailyReport {
            shop: Some(shop),
            footprint: Some(footprint),
            region: Some(scan.region()),
            ..DailyReport::default()
        };

        let rules = self.settings.rules();
        for site in scan {
            let Some(container) = store.container_mut(site.position) else {
                continue;
            };

            let outcome = BestEffort::run(
                format_args!("container at {}", site.position),
                || -> Result<SaleLedger, SettlementError> {
                    let items = env.items()?;
                    let level = env.commerce_level()?;
                    settle(container, items, level, rules, &mut *sink)
                },
            );
            if let UnitOutcome::Completed(ledger) = &outcome {
                report.summary.absorb(ledger);
            }
            report.containers.push(ContainerReport {
                position: site.position,
                tile_type: site.tile_type,
                outcome,
            });
        }

        report
    }

    fn announce(&self, report: &DailyReport) {
        if let Some(reason) = &report.skipped {
            match reason {
                SkipReason::OracleUnavailable(error) => error!(
                    target: "shipping::daily",
                    error = %error,
                    "Shipping skipped"
                ),
                _ => debug!(target: "shipping::daily", reason = %reason, "Shipping skipped"),
            }
            return;
        }

        let shop = report.shop.unwrap_or(TilePos::NOT_FOUND);
        if self.settings.show_notifications() {
            info!(
                target: "shipping::daily",
                shop = %shop,
                settled = report.settled(),
                failed = report.failed(),
                units = report.summary.units_sold,
                total = report.total(),
                "Shipped {} items for {}",
                report.summary.units_sold,
                report.total()
            );
        } else {
            debug!(
                target: "shipping::daily",
                shop = %shop,
                settled = report.settled(),
                failed = report.failed(),
                units = report.summary.units_sold,
                total = report.total(),
                "Shipping finished"
            );
        }
    }
}
