//! Game state shared by every context on the stack.

use tq_core::{LocationKey, LocationTree};

use crate::items::Inventory;

/// Everything a running game owns.
///
/// Contexts never keep their own copy of the world; they read it from here
/// whenever they build a view, so edits show up on the next transition.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The world map.
    pub world: LocationTree,
    /// Where the player currently stands. Not checked against `world`.
    pub player_current_location: LocationKey,
    /// What the player carries.
    pub player_inventory: Inventory,
}

impl GameState {
    /// Create a game state with the player at the given location, carrying
    /// nothing.
    pub fn new(world: LocationTree, player_current_location: LocationKey) -> Self {
        Self {
            world,
            player_current_location,
            player_inventory: Inventory::default(),
        }
    }

    /// Replace the player's inventory.
    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.player_inventory = inventory;
        self
    }

    /// Display name of the player's location, if it exists in the world.
    pub fn current_location_name(&self) -> Option<&str> {
        self.world
            .location_display_name(&self.player_current_location)
            .ok()
    }
}
