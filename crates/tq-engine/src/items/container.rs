//! Chests, barrels, corpses: anything holding items and gold.

use crate::error::{EngineError, EngineResult};
use crate::items::adjust_gold;
use crate::items::item::{self, Item};

/// A lootable container.
///
/// Gold never drops below zero and the lock difficulty never below one.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemContainer {
    id: String,
    display_name: String,
    locked: bool,
    can_lockpick: bool,
    lock_difficulty: u32,
    items: Vec<Item>,
    gold: u64,
}

fn floored_difficulty(difficulty: i64) -> u32 {
    u32::try_from(difficulty.max(1)).unwrap_or(u32::MAX)
}

impl ItemContainer {
    /// An empty, unlocked container that can be lockpicked.
    pub fn new(id: &str, display_name: &str) -> EngineResult<Self> {
        let id = id.trim();
        if id.is_empty() {
            return Err(EngineError::BlankItemField("id"));
        }
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(EngineError::BlankItemField("display name"));
        }
        Ok(Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            locked: false,
            can_lockpick: true,
            lock_difficulty: 1,
            items: Vec::new(),
            gold: 0,
        })
    }

    /// Lock the container with the given difficulty.
    pub fn locked_with(mut self, difficulty: i64) -> Self {
        self.locked = true;
        self.lock_difficulty = floored_difficulty(difficulty);
        self
    }

    /// Start with this much gold.
    pub fn with_gold(mut self, gold: i64) -> Self {
        self.set_gold(gold);
        self
    }

    /// Start with this item inside.
    pub fn with_item(mut self, item: Item) -> Self {
        self.add_item(item);
        self
    }

    /// Identifier of the container.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name shown to the player.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Lock the container.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Unlock the container.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Whether the container is locked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether the lock can be picked.
    pub fn can_lockpick(&self) -> bool {
        self.can_lockpick
    }

    /// Allow or forbid lockpicking.
    pub fn set_can_lockpick(&mut self, can_lockpick: bool) {
        self.can_lockpick = can_lockpick;
    }

    /// Difficulty of the lock, at least 1.
    pub fn lock_difficulty(&self) -> u32 {
        self.lock_difficulty
    }

    /// Set the lock difficulty; anything below 1 becomes 1.
    pub fn set_lock_difficulty(&mut self, difficulty: i64) {
        self.lock_difficulty = floored_difficulty(difficulty);
    }

    /// Gold inside.
    pub fn gold(&self) -> u64 {
        self.gold
    }

    /// Set the gold; negative amounts become 0.
    pub fn set_gold(&mut self, gold: i64) {
        self.gold = adjust_gold(0, gold);
    }

    /// Add (or with a negative amount, remove) gold, stopping at 0.
    pub fn add_gold(&mut self, amount: i64) {
        self.gold = adjust_gold(self.gold, amount);
    }

    /// Items inside, in the order they were put in.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Units of an item inside.
    pub fn count(&self, id: &str) -> u32 {
        item::count(&self.items, id)
    }

    /// True when there is neither gold nor any item inside.
    pub fn is_empty(&self) -> bool {
        self.gold == 0 && self.items.is_empty()
    }

    /// Put an item in, merging it into existing stacks where possible.
    pub fn add_item(&mut self, item: Item) {
        item::store(&mut self.items, item);
    }

    /// Take up to `amount` units of an item out.
    pub fn remove_item(&mut self, id: &str, amount: u32) -> EngineResult<Vec<Item>> {
        item::take(&mut self.items, id, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chest() -> ItemContainer {
        ItemContainer::new("chest", "Old Chest").unwrap()
    }

    fn coins(size: u32) -> Item {
        Item::new("coin", "Silver Coin")
            .unwrap()
            .stackable(10)
            .with_stack_size(size)
    }

    #[test]
    fn new_container_is_empty_and_open() {
        let chest = chest();
        assert!(chest.is_empty());
        assert!(!chest.is_locked());
        assert!(chest.can_lockpick());
        assert_eq!(chest.lock_difficulty(), 1);
        assert!(ItemContainer::new("", "Chest").is_err());
    }

    #[test]
    fn gold_never_goes_negative() {
        let mut chest = chest().with_gold(-5);
        assert_eq!(chest.gold(), 0);
        chest.add_gold(30);
        chest.add_gold(-50);
        assert_eq!(chest.gold(), 0);
        chest.set_gold(12);
        chest.add_gold(-2);
        assert_eq!(chest.gold(), 10);
        assert!(!chest.is_empty());
    }

    #[test]
    fn lock_difficulty_floor() {
        let mut chest = chest().locked_with(-3);
        assert!(chest.is_locked());
        assert_eq!(chest.lock_difficulty(), 1);
        chest.set_lock_difficulty(7);
        assert_eq!(chest.lock_difficulty(), 7);
        chest.set_lock_difficulty(0);
        assert_eq!(chest.lock_difficulty(), 1);
        chest.unlock();
        assert!(!chest.is_locked());
        chest.lock();
        chest.set_can_lockpick(false);
        assert!(chest.is_locked() && !chest.can_lockpick());
    }

    #[test]
    fn items_merge_into_stacks() {
        let mut chest = chest().with_item(coins(6));
        chest.add_item(coins(7));
        let sizes: Vec<u32> = chest.items().iter().map(Item::stack_size).collect();
        assert_eq!(sizes, vec![10, 3]);
        assert_eq!(chest.count("coin"), 13);
    }

    #[test]
    fn remove_puts_back_the_rest() {
        let mut chest = chest().with_item(coins(10)).with_item(coins(5));
        let taken = chest.remove_item("coin", 4).unwrap();
        assert_eq!(taken.len(), 1);
        assert_eq!(taken[0].stack_size(), 4);
        assert_eq!(chest.count("coin"), 11);
        assert!(chest.remove_item("gem", 1).is_err());
    }
}
