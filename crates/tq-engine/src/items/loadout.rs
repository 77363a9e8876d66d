//! Named equipment slots.

use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};
use crate::items::item::Item;

/// Slot every loadout has.
pub const MAIN_HAND: &str = "main_hand";
/// Slot every loadout has.
pub const OFF_HAND: &str = "off_hand";

fn is_reserved(slot: &str) -> bool {
    slot == MAIN_HAND || slot == OFF_HAND
}

fn clean_slot(name: &str) -> String {
    name.trim().to_lowercase()
}

/// The items a creature is wearing, one per slot.
///
/// Slot names are trimmed and lowercased. `main_hand` and `off_hand` are
/// always present.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentLoadout {
    slots: BTreeMap<String, Option<Item>>,
}

impl Default for EquipmentLoadout {
    fn default() -> Self {
        let slots = [MAIN_HAND, OFF_HAND]
            .into_iter()
            .map(|slot| (slot.to_string(), None))
            .collect();
        Self { slots }
    }
}

impl EquipmentLoadout {
    /// A loadout with the two hands plus the given slots. Repeated names are
    /// merged.
    pub fn new(slot_names: &[&str]) -> EngineResult<Self> {
        let mut loadout = Self::default();
        for name in slot_names {
            let slot = clean_slot(name);
            if slot.is_empty() {
                return Err(EngineError::BlankSlot);
            }
            if is_reserved(&slot) {
                return Err(EngineError::ReservedSlot(slot));
            }
            loadout.slots.insert(slot, None);
        }
        Ok(loadout)
    }

    /// Add an empty slot.
    pub fn create_slot(&mut self, name: &str) -> EngineResult<()> {
        let slot = clean_slot(name);
        if slot.is_empty() {
            return Err(EngineError::BlankSlot);
        }
        if self.slots.contains_key(&slot) {
            return Err(EngineError::DuplicateSlot(slot));
        }
        self.slots.insert(slot, None);
        Ok(())
    }

    /// Remove a slot, returning whatever was equipped in it.
    pub fn remove_slot(&mut self, name: &str) -> EngineResult<Option<Item>> {
        let slot = clean_slot(name);
        if is_reserved(&slot) {
            return Err(EngineError::ReservedSlot(slot));
        }
        self.slots
            .remove(&slot)
            .ok_or(EngineError::UnknownSlot(slot))
    }

    /// Put an item in its slot. Returns the item it replaced.
    pub fn equip(&mut self, item: Item) -> EngineResult<Option<Item>> {
        let Some(slot) = item.slot().map(str::to_string) else {
            return Err(EngineError::NotEquippable(item.id().to_string()));
        };
        match self.slots.get_mut(&slot) {
            Some(current) => Ok(current.replace(item)),
            None => Err(EngineError::UnknownSlot(slot)),
        }
    }

    /// Empty a slot. Unknown slots are ignored.
    pub fn unequip(&mut self, name: &str) -> Option<Item> {
        self.slots
            .get_mut(&clean_slot(name))
            .and_then(Option::take)
    }

    /// The item in a slot, if the slot exists and is filled.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.slots.get(&clean_slot(name)).and_then(Option::as_ref)
    }

    /// True if the slot is empty or does not exist.
    pub fn slot_empty(&self, name: &str) -> bool {
        self.item(name).is_none()
    }

    /// Whether a slot with this name exists.
    pub fn has_slot(&self, name: &str) -> bool {
        self.slots.contains_key(&clean_slot(name))
    }

    /// Slot names in sorted order.
    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Every equipped item with its slot.
    pub fn equipped(&self) -> impl Iterator<Item = (&str, &Item)> {
        self.slots
            .iter()
            .filter_map(|(slot, item)| item.as_ref().map(|item| (slot.as_str(), item)))
    }
}
