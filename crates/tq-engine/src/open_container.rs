//! The screen for looting an open container.

use tracing::{debug, info};

use crate::context::{Context, Flow};
use crate::error::{EngineError, EngineResult};
use crate::items::ItemContainer;
use crate::menu::ChoiceMenu;
use crate::state::GameState;

/// What choosing a line in an open container does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerAction {
    /// Move all the gold to the player.
    TakeGold,
    /// Move every unit of one item to the player's storage.
    TakeItem(String),
}

/// Lists a container's gold and items; each choice moves them to the
/// player's inventory and the list is rebuilt.
#[derive(Debug, Clone)]
pub struct OpenContainerContext {
    container: ItemContainer,
}

impl OpenContainerContext {
    /// Open a container. Locked containers stay shut.
    pub fn new(container: ItemContainer) -> EngineResult<Self> {
        if container.is_locked() {
            return Err(EngineError::ContainerLocked(
                container.display_name().to_string(),
            ));
        }
        Ok(Self { container })
    }

    /// The container in its current state.
    pub fn container(&self) -> &ItemContainer {
        &self.container
    }

    /// Close the screen and hand the container back.
    pub fn into_container(self) -> ItemContainer {
        self.container
    }
}

impl Context for OpenContainerContext {
    type Action = ContainerAction;

    fn entry_text(&self, _state: &GameState) -> String {
        if self.container.is_empty() {
            format!("The {} is empty.", self.container.display_name())
        } else {
            format!(
                "These are the items in the {}. Select an item to store it in your inventory.",
                self.container.display_name()
            )
        }
    }

    /// Gold comes first, then one line per item id in the order the items
    /// went in. Ids sharing a display name are told apart by their id.
    fn fill_choices(
        &self,
        _state: &GameState,
        menu: &mut ChoiceMenu<ContainerAction>,
    ) -> EngineResult<()> {
        if self.container.gold() > 0 {
            menu.add(
                ContainerAction::TakeGold,
                &format!("Gold: ({})", self.container.gold()),
            )?;
        }
        let mut listed: Vec<&str> = Vec::new();
        for item in self.container.items() {
            if listed.contains(&item.id()) {
                continue;
            }
            listed.push(item.id());
            let units = self.container.count(item.id());
            let mut label = if units > 1 {
                format!("{} ({units})", item.display_name())
            } else {
                item.display_name().to_string()
            };
            if menu.has_label(&label) {
                label = format!("{label} [{}]", item.id());
            }
            menu.add(ContainerAction::TakeItem(item.id().to_string()), &label)?;
        }
        Ok(())
    }

    fn apply(&mut self, action: &ContainerAction, state: &mut GameState) -> EngineResult<Flow> {
        match action {
            ContainerAction::TakeGold => {
                let gold = self.container.gold();
                self.container.set_gold(0);
                state.player_inventory.receive_gold(gold);
                info!(container = self.container.id(), gold, "took gold");
            }
            ContainerAction::TakeItem(id) => {
                let units = self.container.count(id);
                for item in self.container.remove_item(id, units)? {
                    state.player_inventory.add_to_storage(item);
                }
                debug!(container = self.container.id(), item = %id, units, "took item");
            }
        }
        Ok(Flow::Continue)
    }
}
