//! Items, containers, inventories and equipment loadouts.
//!
//! Stackable items merge on the way in: adding units first tops up
//! partial stacks with the same id, then starts new ones. Taking units out
//! of a stacked item always leaves the remainder in as few stacks as
//! possible.

/// Lootable containers.
pub mod container;
/// The player's inventory.
pub mod inventory;
/// Items and stacking rules.
pub mod item;
/// Equipment slots.
pub mod loadout;

pub use container::ItemContainer;
pub use inventory::Inventory;
pub use item::Item;
pub use loadout::{EquipmentLoadout, MAIN_HAND, OFF_HAND};

/// Apply a signed change to a gold amount that cannot go below zero.
fn adjust_gold(gold: u64, amount: i64) -> u64 {
    if amount >= 0 {
        gold.saturating_add(amount.unsigned_abs())
    } else {
        gold.saturating_sub(amount.unsigned_abs())
    }
}
