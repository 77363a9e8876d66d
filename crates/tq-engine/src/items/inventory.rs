//! What the player carries.

use crate::error::{EngineError, EngineResult};
use crate::items::adjust_gold;
use crate::items::item::{self, Item};
use crate::items::loadout::EquipmentLoadout;

/// Stored items, equipped items and gold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    storage: Vec<Item>,
    loadout: EquipmentLoadout,
    gold: u64,
}

impl Inventory {
    /// An empty inventory wearing nothing in the given loadout.
    pub fn new(loadout: EquipmentLoadout) -> Self {
        Self {
            storage: Vec::new(),
            loadout,
            gold: 0,
        }
    }

    /// Items in storage, oldest first.
    pub fn storage(&self) -> &[Item] {
        &self.storage
    }

    /// Every stored stack or copy of one item.
    pub fn all_stacks(&self, id: &str) -> Vec<&Item> {
        self.storage.iter().filter(|item| item.id() == id).collect()
    }

    /// Units of an item in storage.
    pub fn count(&self, id: &str) -> u32 {
        item::count(&self.storage, id)
    }

    /// Store an item, filling partial stacks before starting a new one.
    pub fn add_to_storage(&mut self, item: Item) {
        item::store(&mut self.storage, item);
    }

    /// Take up to `amount` units of an item out of storage.
    pub fn remove_from_storage(&mut self, id: &str, amount: u32) -> EngineResult<Vec<Item>> {
        item::take(&mut self.storage, id, amount)
    }

    /// Gold carried.
    pub fn gold(&self) -> u64 {
        self.gold
    }

    /// Add or remove gold, stopping at 0.
    pub fn change_gold(&mut self, amount: i64) {
        self.gold = adjust_gold(self.gold, amount);
    }

    /// Add gold taken from elsewhere.
    pub fn receive_gold(&mut self, amount: u64) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// The equipment slots.
    pub fn loadout(&self) -> &EquipmentLoadout {
        &self.loadout
    }

    /// The equipment slots, mutably.
    pub fn loadout_mut(&mut self) -> &mut EquipmentLoadout {
        &mut self.loadout
    }

    /// Equip one stored unit of an item. Whatever it replaces goes to storage.
    pub fn equip_from_storage(&mut self, id: &str) -> EngineResult<()> {
        let stored = self
            .storage
            .iter()
            .find(|item| item.id() == id)
            .ok_or_else(|| EngineError::ItemNotFound(id.to_string()))?;
        match stored.slot() {
            None => return Err(EngineError::NotEquippable(id.to_string())),
            Some(slot) if !self.loadout.has_slot(slot) => {
                return Err(EngineError::UnknownSlot(slot.to_string()));
            }
            Some(_) => {}
        }

        for item in item::take(&mut self.storage, id, 1)? {
            if let Some(previous) = self.loadout.equip(item)? {
                self.add_to_storage(previous);
            }
        }
        Ok(())
    }

    /// Move the item in a slot to storage. Returns false if the slot was empty.
    pub fn unequip_to_storage(&mut self, slot: &str) -> bool {
        match self.loadout.unequip(slot) {
            Some(item) => {
                self.add_to_storage(item);
                true
            }
            None => false,
        }
    }

    /// Weight of everything stored and worn.
    pub fn total_weight(&self) -> f64 {
        let stored: f64 = self.storage.iter().map(Item::total_weight).sum();
        let worn: f64 = self.loadout.equipped().map(|(_, item)| item.total_weight()).sum();
        stored + worn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::loadout::MAIN_HAND;

    fn potions(size: u32) -> Item {
        Item::new("potion", "Healing Potion")
            .unwrap()
            .stackable(5)
            .with_stack_size(size)
            .with_weight(0.5)
    }

    fn sword(id: &str) -> Item {
        Item::new(id, id)
            .unwrap()
            .equippable_in(MAIN_HAND)
            .with_weight(3.0)
    }

    #[test]
    fn storage_stacks_items() {
        let mut inventory = Inventory::default();
        inventory.add_to_storage(potions(4));
        inventory.add_to_storage(potions(3));
        inventory.add_to_storage(sword("blade"));
        let potion_stacks: Vec<u32> = inventory
            .all_stacks("potion")
            .iter()
            .map(|item| item.stack_size())
            .collect();
        assert_eq!(potion_stacks, vec![5, 2]);
        assert_eq!(inventory.count("potion"), 7);
        assert_eq!(inventory.storage().len(), 3);
    }

    #[test]
    fn remove_from_storage() {
        let mut inventory = Inventory::default();
        inventory.add_to_storage(potions(5));
        let taken = inventory.remove_from_storage("potion", 2).unwrap();
        assert_eq!(taken[0].stack_size(), 2);
        assert_eq!(inventory.count("potion"), 3);
        assert!(inventory.remove_from_storage("rope", 1).is_err());
    }

    #[test]
    fn gold_floor() {
        let mut inventory = Inventory::default();
        inventory.change_gold(20);
        inventory.change_gold(-25);
        assert_eq!(inventory.gold(), 0);
        inventory.receive_gold(u64::MAX);
        inventory.receive_gold(1);
        assert_eq!(inventory.gold(), u64::MAX);
    }

    #[test]
    fn equip_swaps_with_storage() {
        let mut inventory = Inventory::default();
        inventory.add_to_storage(sword("dagger"));
        inventory.add_to_storage(sword("sabre"));
        inventory.equip_from_storage("dagger").unwrap();
        inventory.equip_from_storage("sabre").unwrap();
        assert_eq!(inventory.loadout().item(MAIN_HAND).unwrap().id(), "sabre");
        assert_eq!(inventory.count("dagger"), 1);
        assert_eq!(inventory.count("sabre"), 0);

        assert!(inventory.unequip_to_storage(MAIN_HAND));
        assert!(!inventory.unequip_to_storage(MAIN_HAND));
        assert_eq!(inventory.count("sabre"), 1);
    }

    #[test]
    fn equip_failures_leave_storage_alone() {
        let mut inventory = Inventory::default();
        inventory.add_to_storage(potions(2));
        inventory.add_to_storage(Item::new("helm", "Helm").unwrap().equippable_in("head"));
        assert!(matches!(
            inventory.equip_from_storage("potion"),
            Err(EngineError::NotEquippable(_))
        ));
        assert!(matches!(
            inventory.equip_from_storage("helm"),
            Err(EngineError::UnknownSlot(_))
        ));
        assert!(matches!(
            inventory.equip_from_storage("axe"),
            Err(EngineError::ItemNotFound(_))
        ));
        assert_eq!(inventory.count("potion"), 2);
        assert_eq!(inventory.count("helm"), 1);

        inventory.loadout_mut().create_slot("head").unwrap();
        inventory.equip_from_storage("helm").unwrap();
        assert_eq!(inventory.count("helm"), 0);
    }

    #[test]
    fn weight_includes_worn_items() {
        let mut inventory = Inventory::new(EquipmentLoadout::default());
        inventory.add_to_storage(potions(4));
        inventory.add_to_storage(sword("blade"));
        inventory.equip_from_storage("blade").unwrap();
        assert!((inventory.total_weight() - 5.0).abs() < 1e-9);
    }
}
