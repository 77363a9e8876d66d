//! Core types for TextQuest: the world's location hierarchy.
//!
//! A world is split into regions, regions into localities (towns, keeps,
//! forests), and localities into the individual locations a player can stand
//! in. Every location is addressed by a global key of up to three segments
//! joined with `_`, e.g. `eastmarch_bridgefort_gates`. The [`LocationTree`]
//! owns that hierarchy and refuses any edit that would break it; a
//! [`WorldDocument`] is its serializable snapshot.

/// Serializable world documents and tree import/export.
pub mod document;
/// Error types used throughout the crate.
pub mod error;
/// Validated hierarchy keys.
pub mod key;
/// The location tree itself.
pub mod tree;

/// Re-export document types.
pub use document::{
    LocalityDocument, LocationDocument, LocationsDocument, RegionDocument, WorldDocument,
};
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export key types.
pub use key::{Key, LocalityKey, LocationKey, RegionKey, Segment};
/// Re-export tree types.
pub use tree::{Locality, Location, LocationTree, Region};
