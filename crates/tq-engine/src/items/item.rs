//! Items and item stacks.

use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stack {
    size: u32,
    max: u32,
}

/// Something a player can carry, store, or equip.
///
/// Stackable items carry a stack size between 1 and their maximum; every
/// other item counts as a single unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: String,
    display_name: String,
    stack: Option<Stack>,
    slot: Option<String>,
    weight: f64,
    quest_item: bool,
    base_worth: u64,
}

impl Item {
    /// A single, non-stackable item. Both fields are trimmed and must not be blank.
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
            stack: None,
            slot: None,
            weight: 0.0,
            quest_item: false,
            base_worth: 0,
        })
    }

    /// Make the item stackable up to `max_stack_size` (at least 1), starting
    /// with a stack of one.
    pub fn stackable(mut self, max_stack_size: u32) -> Self {
        self.stack = Some(Stack {
            size: 1,
            max: max_stack_size.max(1),
        });
        self
    }

    /// Set the stack size, clamped to `1..=max`. No effect on single items.
    pub fn with_stack_size(mut self, size: u32) -> Self {
        if let Some(stack) = &mut self.stack {
            stack.size = size.clamp(1, stack.max);
        }
        self
    }

    /// Make the item equippable in the named slot.
    pub fn equippable_in(mut self, slot: &str) -> Self {
        self.slot = Some(slot.trim().to_lowercase());
        self
    }

    /// Set the weight of one unit.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight.max(0.0);
        self
    }

    /// Mark the item as needed for a quest.
    pub fn quest_item(mut self) -> Self {
        self.quest_item = true;
        self
    }

    /// Set the worth of one unit.
    pub fn with_base_worth(mut self, base_worth: u64) -> Self {
        self.base_worth = base_worth;
        self
    }

    /// Identifier shared by every copy and stack of this item.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name shown to the player.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Display name followed by the stack size when more than one.
    pub fn display_name_with_stack(&self) -> String {
        match self.stack {
            Some(stack) if stack.size > 1 => format!("{} ({})", self.display_name, stack.size),
            _ => self.display_name.clone(),
        }
    }

    /// Whether copies merge into stacks.
    pub fn is_stackable(&self) -> bool {
        self.stack.is_some()
    }

    /// Units in this stack; 1 for single items.
    pub fn stack_size(&self) -> u32 {
        self.stack.map_or(1, |stack| stack.size)
    }

    /// Largest allowed stack; 1 for single items.
    pub fn max_stack_size(&self) -> u32 {
        self.stack.map_or(1, |stack| stack.max)
    }

    /// Slot the item is worn in, if any.
    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    /// Whether the item has a slot.
    pub fn is_equippable(&self) -> bool {
        self.slot.is_some()
    }

    /// Weight of one unit.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Weight of the whole stack.
    pub fn total_weight(&self) -> f64 {
        self.weight * f64::from(self.stack_size())
    }

    /// Whether the item is needed for a quest.
    pub fn is_quest_item(&self) -> bool {
        self.quest_item
    }

    /// Worth of one unit.
    pub fn base_worth(&self) -> u64 {
        self.base_worth
    }

    /// Move up to `amount` units onto this stack. Returns what did not fit.
    pub fn add_to_stack(&mut self, amount: u32) -> u32 {
        match &mut self.stack {
            Some(stack) => {
                let moved = amount.min(stack.max - stack.size);
                stack.size += moved;
                amount - moved
            }
            None => amount,
        }
    }

    /// Copies of this item holding `units` in total, each stack at most full.
    pub(crate) fn split_into_stacks(&self, units: u32) -> Vec<Item> {
        let max = self.max_stack_size();
        let mut stacks = Vec::new();
        let mut remaining = units;
        while remaining > 0 {
            let size = remaining.min(max);
            let mut copy = self.clone();
            if let Some(stack) = &mut copy.stack {
                stack.size = size;
            }
            stacks.push(copy);
            remaining -= size;
        }
        stacks
    }
}

/// Units of `id` across every item and stack in `items`.
pub(crate) fn count(items: &[Item], id: &str) -> u32 {
    items
        .iter()
        .filter(|item| item.id == id)
        .fold(0u32, |total, item| total.saturating_add(item.stack_size()))
}

/// Add an item, topping up existing stacks of the same id before starting a
/// new one.
pub(crate) fn store(items: &mut Vec<Item>, item: Item) {
    if !item.is_stackable() {
        items.push(item);
        return;
    }
    let mut outstanding = item.stack_size();
    for stack in items
        .iter_mut()
        .filter(|stack| stack.id == item.id && stack.is_stackable())
    {
        if outstanding == 0 {
            break;
        }
        outstanding = stack.add_to_stack(outstanding);
    }
    items.extend(item.split_into_stacks(outstanding));
}

/// Remove up to `amount` units of `id` and return them. Single items are
/// taken one unit per item, oldest first; stacks are merged and the rest is
/// put back.
pub(crate) fn take(items: &mut Vec<Item>, id: &str, amount: u32) -> EngineResult<Vec<Item>> {
    let available = count(items, id);
    let Some(template) = items.iter().find(|item| item.id == id).cloned() else {
        return Err(EngineError::ItemNotFound(id.to_string()));
    };
    let wanted = amount.min(available);

    if !template.is_stackable() {
        let mut taken = Vec::new();
        let mut kept = Vec::with_capacity(items.len());
        for item in items.drain(..) {
            if item.id == id && taken.len() < wanted as usize {
                taken.push(item);
            } else {
                kept.push(item);
            }
        }
        *items = kept;
        return Ok(taken);
    }

    items.retain(|item| item.id != id);
    items.extend(template.split_into_stacks(available - wanted));
    Ok(template.split_into_stacks(wanted))
}
