//! Replays one end-of-day shipping run against a world snapshot.
//!
//! Run with: `shipping-replay --layout world.ron --items items.ron`

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use shipping_content::{ItemLoader, LayoutLoader};
use shipping_runtime::{
    ContainerStoreImpl, DailySettlement, DayContext, DayTransitionHook, HookRegistry,
    LedgerRecorder, OracleManager, RuntimeConfig, SessionOracleImpl, ShippingHook,
    ShippingSettings, UnitOutcome, init_logging,
};

/// Replay a shipping run against a world snapshot
#[derive(Parser, Debug)]
#[command(name = "shipping-replay")]
#[command(about = "Run end-of-day shipping on a saved world layout", long_about = None)]
struct Cli {
    /// World layout (RON)
    #[arg(long)]
    layout: PathBuf,

    /// Item catalog (RON)
    #[arg(long)]
    items: PathBuf,

    /// Commerce licence level
    #[arg(long, default_value_t = 0)]
    commerce_level: u32,

    /// Replay as a non-authoritative participant
    #[arg(long)]
    client: bool,

    /// Day number reported to hooks
    #[arg(long, default_value_t = 1)]
    day: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = RuntimeConfig::from_env()?;
    let _guard = init_logging(&config.logging)?;

    let layout = LayoutLoader::load(&cli.layout)
        .with_context(|| format!("Failed to load layout {}", cli.layout.display()))?;
    let items = ItemLoader::load(&cli.items)
        .with_context(|| format!("Failed to load items {}", cli.items.display()))?;

    let session = if cli.client {
        SessionOracleImpl::client()
    } else {
        SessionOracleImpl::host()
    };
    let oracles = OracleManager::from_content(&layout, items, cli.commerce_level, session);
    let mut store = ContainerStoreImpl::from_layout(&layout);
    let mut sink = LedgerRecorder::new();

    let shipping = Arc::new(ShippingHook::new(DailySettlement::new(
        ShippingSettings::resolve(config.shipping),
    )));
    let registry = HookRegistry::new(vec![shipping.clone() as Arc<dyn DayTransitionHook>]);

    let mut ctx = DayContext::new(cli.day, oracles.as_shipping_env(), &mut store, &mut sink);
    registry.run_day_end(&mut ctx)?;

    let Some(report) = shipping.take_report() else {
        anyhow::bail!("shipping hook produced no report");
    };

    if let Some(reason) = &report.skipped {
        println!("Skipped: {reason}");
        return Ok(());
    }

    for container in &report.containers {
        match &container.outcome {
            UnitOutcome::Completed(ledger) => println!(
                "{} sold {} units in {} slots for {} ({} + {} bonus)",
                container.position,
                ledger.units_sold,
                ledger.slots_sold,
                ledger.total,
                ledger.gross,
                ledger.bonus
            ),
            UnitOutcome::Abandoned { error } => {
                println!("{} abandoned: {error}", container.position)
            }
        }
    }
    println!(
        "Settled {}, failed {}, total {}, wallet {}",
        report.settled(),
        report.failed(),
        report.total(),
        sink.wallet
    );

    Ok(())
}
