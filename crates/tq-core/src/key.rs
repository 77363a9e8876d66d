use std::fmt;
use std::str::FromStr;

use crate::error::{WorldError, WorldResult};

/// Separator between hierarchy segments in a global key.
pub const DELIMITER: char = '_';

/// Pseudo-key of the aggregate world view. Never a region name.
pub const WORLD: &str = "world";

/// One validated name segment: trimmed, non-blank, no `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment(String);

impl Segment {
    /// Trim and validate a raw name.
    pub fn new(raw: &str) -> WorldResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(WorldError::InvalidSegment {
                segment: raw.to_string(),
                reason: "names cannot be blank",
            });
        }
        if trimmed.contains(DELIMITER) {
            return Err(WorldError::InvalidSegment {
                segment: raw.to_string(),
                reason: "names cannot contain underscores",
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The segment text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key of a region: `region`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionKey(Segment);

impl RegionKey {
    /// Build a region key, rejecting the reserved `world` name.
    pub fn new(name: &str) -> WorldResult<Self> {
        Self::from_segment(Segment::new(name)?)
    }

    fn from_segment(segment: Segment) -> WorldResult<Self> {
        if segment.as_str() == WORLD {
            return Err(WorldError::ReservedName(WORLD.to_string()));
        }
        Ok(Self(segment))
    }

    /// The region's short name.
    pub fn name(&self) -> &Segment {
        &self.0
    }

    /// Key of a locality inside this region.
    pub fn locality(&self, name: &str) -> WorldResult<LocalityKey> {
        Ok(LocalityKey {
            region: self.clone(),
            name: Segment::new(name)?,
        })
    }
}

/// Key of a locality: `region_locality`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalityKey {
    region: RegionKey,
    name: Segment,
}

impl LocalityKey {
    /// Build a locality key from its two segments.
    pub fn new(region: &str, locality: &str) -> WorldResult<Self> {
        RegionKey::new(region)?.locality(locality)
    }

    /// The parent region.
    pub fn region(&self) -> &RegionKey {
        &self.region
    }

    /// The locality's short name, without the region prefix.
    pub fn name(&self) -> &Segment {
        &self.name
    }

    /// Key of a location inside this locality.
    pub fn location(&self, name: &str) -> WorldResult<LocationKey> {
        Ok(LocationKey {
            locality: self.clone(),
            name: Segment::new(name)?,
        })
    }
}

/// Key of a lowest-level location: `region_locality_location`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationKey {
    locality: LocalityKey,
    name: Segment,
}

impl LocationKey {
    /// Build a location key from its three segments.
    pub fn new(region: &str, locality: &str, location: &str) -> WorldResult<Self> {
        LocalityKey::new(region, locality)?.location(location)
    }

    /// The parent locality.
    pub fn locality(&self) -> &LocalityKey {
        &self.locality
    }

    /// The grandparent region.
    pub fn region(&self) -> &RegionKey {
        self.locality.region()
    }

    /// The location's short name, without region or locality prefix.
    pub fn name(&self) -> &Segment {
        &self.name
    }
}

/// Any key of the hierarchy, including the `world` pseudo-key.
///
/// Parsing dispatches on the number of `_`-separated segments:
/// one for a region, two for a locality, three for a location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// The aggregate world.
    World,
    /// A region.
    Region(RegionKey),
    /// A locality within a region.
    Locality(LocalityKey),
    /// A location within a locality.
    Location(LocationKey),
}

impl Key {
    /// Human-readable name of the key's level.
    pub fn level_name(&self) -> &'static str {
        match self {
            Self::World => "world",
            Self::Region(_) => "region",
            Self::Locality(_) => "locality",
            Self::Location(_) => "location",
        }
    }
}

impl FromStr for Key {
    type Err = WorldError;

    fn from_str(s: &str) -> WorldResult<Self> {
        let trimmed = s.trim();
        if trimmed == WORLD {
            return Ok(Self::World);
        }
        let parts: Vec<&str> = trimmed.split(DELIMITER).collect();
        match parts.as_slice() {
            [region] => Ok(Self::Region(RegionKey::new(region)?)),
            [region, locality] => Ok(Self::Locality(LocalityKey::new(region, locality)?)),
            [region, locality, location] => Ok(Self::Location(LocationKey::new(
                region, locality, location,
            )?)),
            _ => Err(WorldError::InvalidKey {
                key: s.to_string(),
                expected: "region, locality or location",
            }),
        }
    }
}

impl FromStr for RegionKey {
    type Err = WorldError;

    fn from_str(s: &str) -> WorldResult<Self> {
        match s.parse::<Key>()? {
            Key::Region(key) => Ok(key),
            Key::World => Err(WorldError::ReservedName(WORLD.to_string())),
            _ => Err(WorldError::InvalidKey {
                key: s.to_string(),
                expected: "region",
            }),
        }
    }
}

impl FromStr for LocalityKey {
    type Err = WorldError;

    fn from_str(s: &str) -> WorldResult<Self> {
        match s.parse::<Key>() {
            Ok(Key::Locality(key)) => Ok(key),
            Err(e @ (WorldError::InvalidSegment { .. } | WorldError::ReservedName(_))) => Err(e),
            _ => Err(WorldError::InvalidKey {
                key: s.to_string(),
                expected: "locality",
            }),
        }
    }
}

impl FromStr for LocationKey {
    type Err = WorldError;

    fn from_str(s: &str) -> WorldResult<Self> {
        match s.parse::<Key>() {
            Ok(Key::Location(key)) => Ok(key),
            Err(e @ (WorldError::InvalidSegment { .. } | WorldError::ReservedName(_))) => Err(e),
            _ => Err(WorldError::InvalidKey {
                key: s.to_string(),
                expected: "location",
            }),
        }
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LocalityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DELIMITER}{}", self.region, self.name)
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DELIMITER}{}", self.locality, self.name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::World => f.write_str(WORLD),
            Self::Region(key) => key.fmt(f),
            Self::Locality(key) => key.fmt(f),
            Self::Location(key) => key.fmt(f),
        }
    }
}
