/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when building, editing, or querying a location tree.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A name segment is blank or contains the reserved `_` delimiter.
    #[error("invalid name \"{segment}\": {reason}")]
    InvalidSegment {
        /// The offending input, as given.
        segment: String,
        /// Why the segment was rejected.
        reason: &'static str,
    },

    /// A display name is blank after trimming.
    #[error("display name cannot be blank")]
    BlankDisplayName,

    /// `world` was used where a region name is expected.
    #[error("\"{0}\" is reserved and cannot name a region")]
    ReservedName(String),

    /// A key has the wrong number of segments for the operation.
    #[error("invalid key \"{key}\": expected a {expected} key")]
    InvalidKey {
        /// The key as given.
        key: String,
        /// The kind of key the operation needs.
        expected: &'static str,
    },

    /// An entity with the same full key already exists.
    #[error("\"{0}\" already exists")]
    DuplicateKey(String),

    /// A display name collides with a sibling's display name.
    #[error("display name \"{display_name}\" is already used {scope}")]
    DuplicateDisplayName {
        /// The rejected display name.
        display_name: String,
        /// Where the collision happened, e.g. `in region eastmarch`.
        scope: String,
    },

    /// A mutation referenced a key that is not in the tree.
    #[error("unknown key \"{0}\"")]
    UnknownKey(String),

    /// Removing the entity would leave its parent (or the world) empty.
    #[error("cannot remove \"{0}\": it is the last of its kind")]
    LastOfKind(String),

    /// The location is the active entrypoint of its locality.
    #[error("cannot remove \"{0}\": it is the entrypoint of its locality")]
    EntrypointRemoval(String),

    /// The candidate entrypoint does not belong to the locality.
    #[error("location \"{location}\" is not inside locality \"{locality}\"")]
    NotInLocality {
        /// The candidate location key.
        location: String,
        /// The locality key.
        locality: String,
    },

    /// A world document has no region or a region without localities.
    #[error("world document is incomplete: {0}")]
    EmptyDocument(String),

    /// A query referenced a key that is not in the tree.
    #[error("not found: {0}")]
    NotFound(String),

    /// The world document could not be (de)serialized.
    #[error("world document JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WorldError {
    /// Returns true for structural violations raised by constructors and mutations.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::NotFound(_) | Self::Json(_))
    }

    /// Returns true when a query was given a key that does not exist.
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
