//! Error types for the engine.

use thiserror::Error;
use tq_core::WorldError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while building menus or running a context.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A choice letter is not a single ASCII letter.
    #[error("invalid choice letter {0:?}: must be exactly one letter")]
    InvalidChoiceLetter(char),

    /// A choice letter is already taken in this menu.
    #[error("choice letter '{0}' is taken")]
    DuplicateChoiceLetter(char),

    /// A choice label is blank.
    #[error("choice label cannot be blank")]
    BlankChoiceLabel,

    /// A choice label is already used in this menu.
    #[error("choice label \"{0}\" is already taken")]
    DuplicateChoiceLabel(String),

    /// Dice notation that is not `NdS`, `NdS+B` or `NdS-B`.
    #[error("invalid roll \"{0}\": expected dice notation such as 2d6+1")]
    InvalidRoll(String),

    /// An item id or display name is blank.
    #[error("item {0} cannot be blank")]
    BlankItemField(&'static str),

    /// No item with this id is stored where it was looked for.
    #[error("no item \"{0}\" here")]
    ItemNotFound(String),

    /// The item has no equipment slot.
    #[error("item \"{0}\" cannot be equipped")]
    NotEquippable(String),

    /// `main_hand` and `off_hand` always exist and cannot be created or removed.
    #[error("slot \"{0}\" is reserved")]
    ReservedSlot(String),

    /// A slot with this name already exists.
    #[error("slot \"{0}\" already exists")]
    DuplicateSlot(String),

    /// No slot with this name exists.
    #[error("slot \"{0}\" does not exist")]
    UnknownSlot(String),

    /// A slot name is blank.
    #[error("slot name cannot be blank")]
    BlankSlot,

    /// A locked container cannot be opened.
    #[error("the {0} is locked")]
    ContainerLocked(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The location tree rejected a query or edit.
    #[error(transparent)]
    World(#[from] WorldError),
}
