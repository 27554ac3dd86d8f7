//! Pricing helpers: commerce bonus and task attribution.

use arrayvec::ArrayVec;

use crate::config::ShippingConfig;
use crate::env::{ItemFlags, ItemInfo, SaleTask};

/// Bonus currency earned on `gross` at the given commerce level.
///
/// Computed in single precision and truncated toward zero, exactly as the
/// host game pays it: `trunc(level * 0.05 * gross)`.
pub fn commerce_bonus(commerce_level: u32, gross: u32) -> u32 {
    (commerce_level as f32 * ShippingConfig::BONUS_PER_LEVEL * gross as f32) as u32
}

/// Tasks credited when `info` is sold.
///
/// An item-specific trigger replaces the category tasks entirely. Otherwise
/// fruit takes precedence over vegetable, while fish and bug are checked
/// independently, so an item flagged as both counts toward both tasks.
pub fn sale_tasks(info: &ItemInfo) -> ArrayVec<SaleTask, 3> {
    let mut tasks = ArrayVec::new();

    if let Some(trigger) = info.task_trigger {
        tasks.push(trigger);
        return tasks;
    }

    if info.flags.contains(ItemFlags::FRUIT) {
        tasks.push(SaleTask::SellFruit);
    } else if info.flags.contains(ItemFlags::VEGETABLE) {
        tasks.push(SaleTask::SellCrops);
    }
    if info.flags.contains(ItemFlags::FISH) {
        tasks.push(SaleTask::SellFish);
    }
    if info.flags.contains(ItemFlags::BUG) {
        tasks.push(SaleTask::SellBugs);
    }

    tasks
}
