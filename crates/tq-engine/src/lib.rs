//! Game engine for TextQuest.
//!
//! Screens are [`Context`]s: each one prints an entry text and a numbered
//! [`ChoiceMenu`], and [`context::run`] feeds it one line of player input at
//! a time. The [`MapContext`] lets the player travel across the world's
//! region → locality → location hierarchy, and the [`OpenContainerContext`]
//! moves loot into the player's [`Inventory`]. [`Roll`] covers dice.

/// Configuration for the context loop.
pub mod config;
/// The context trait and its input loop.
pub mod context;
/// Error types for the engine.
pub mod error;
/// Items, containers, inventories and loadouts.
pub mod items;
/// World, regional and local travel maps.
pub mod map;
/// Choice menus.
pub mod menu;
/// The open-container screen.
pub mod open_container;
/// Text popups.
pub mod popup;
/// Dice rolls.
pub mod roll;
/// Shared game state.
pub mod state;

pub use config::LoopConfig;
pub use context::{Context, Flow, Outcome, run};
pub use error::{EngineError, EngineResult};
pub use items::{EquipmentLoadout, Inventory, Item, ItemContainer};
pub use map::{MapAction, MapContext, MapEntry, MapLevel, MapTarget, MapView};
pub use menu::{ChoiceMenu, Selection};
pub use open_container::{ContainerAction, OpenContainerContext};
pub use popup::Popup;
pub use roll::{Advantage, Roll};
pub use state::GameState;
