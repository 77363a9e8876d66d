use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::error::{WorldError, WorldResult};
use crate::key::{Key, LocalityKey, LocationKey, RegionKey};

/// A top-level division of the world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Name shown to players. Unique among all regions.
    pub display_name: String,
}

/// A named area within a region, e.g. a town.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locality {
    /// Name shown to players. Unique within the parent region.
    pub display_name: String,
    /// Where travelers arrive when entering the locality.
    pub entrypoint: LocationKey,
    /// Cached display name of `entrypoint`.
    pub entrypoint_display_name: String,
}

/// A single visitable place within a locality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Name shown to players. Unique within the parent locality.
    pub display_name: String,
}

/// The region → locality → location hierarchy of a game world.
///
/// The tree always holds at least one region, every region at least one
/// locality, and every locality at least its entrypoint location. Every
/// mutation validates first and only then writes, so a failed call leaves
/// the tree untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationTree {
    world_display_name: String,
    regions: BTreeMap<RegionKey, Region>,
    localities: BTreeMap<LocalityKey, Locality>,
    locations: BTreeMap<LocationKey, Location>,
}

/// Trim a display name and reject it if nothing is left.
fn clean_display_name(raw: &str) -> WorldResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(WorldError::BlankDisplayName);
    }
    Ok(trimmed.to_string())
}

impl LocationTree {
    /// Create a world holding a single region, locality and location.
    ///
    /// The location becomes the locality's entrypoint and is where a new
    /// player starts.
    pub fn new(
        world_display_name: &str,
        first_region_name: &str,
        first_region_display_name: &str,
        first_locality_name: &str,
        first_locality_display_name: &str,
        first_location_name: &str,
        first_location_display_name: &str,
    ) -> WorldResult<Self> {
        let world_display_name = clean_display_name(world_display_name)?;
        let region = RegionKey::new(first_region_name)?;
        let locality = region.locality(first_locality_name)?;
        let location = locality.location(first_location_name)?;
        let region_display_name = clean_display_name(first_region_display_name)?;
        let locality_display_name = clean_display_name(first_locality_display_name)?;
        let location_display_name = clean_display_name(first_location_display_name)?;

        let mut tree = Self {
            world_display_name,
            regions: BTreeMap::new(),
            localities: BTreeMap::new(),
            locations: BTreeMap::new(),
        };
        tree.regions.insert(
            region,
            Region {
                display_name: region_display_name,
            },
        );
        tree.insert_locality(locality, locality_display_name, location, location_display_name);
        Ok(tree)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The world's display name.
    pub fn world_display_name(&self) -> &str {
        &self.world_display_name
    }

    /// Short names of all regions.
    pub fn region_names(&self) -> BTreeSet<String> {
        self.regions.keys().map(ToString::to_string).collect()
    }

    /// `(region, display_name)` pairs. Callers must not rely on the order.
    pub fn regions(&self) -> Vec<(&RegionKey, &str)> {
        self.regions
            .iter()
            .map(|(key, region)| (key, region.display_name.as_str()))
            .collect()
    }

    /// Every locality keyed by its full key.
    pub fn localities(&self) -> &BTreeMap<LocalityKey, Locality> {
        &self.localities
    }

    /// Full keys of all localities.
    pub fn locality_keys(&self) -> BTreeSet<String> {
        self.localities.keys().map(ToString::to_string).collect()
    }

    /// `(location, display_name)` pairs. Callers must not rely on the order.
    pub fn lowest_level_locations(&self) -> Vec<(&LocationKey, &str)> {
        self.locations
            .iter()
            .map(|(key, location)| (key, location.display_name.as_str()))
            .collect()
    }

    /// Display name of a region.
    pub fn region_display_name(&self, region: &RegionKey) -> WorldResult<&str> {
        self.regions
            .get(region)
            .map(|r| r.display_name.as_str())
            .ok_or_else(|| WorldError::NotFound(format!("region {region}")))
    }

    /// A single locality record.
    pub fn locality(&self, locality: &LocalityKey) -> WorldResult<&Locality> {
        self.localities
            .get(locality)
            .ok_or_else(|| WorldError::NotFound(format!("locality {locality}")))
    }

    /// Display name of a lowest-level location.
    pub fn location_display_name(&self, location: &LocationKey) -> WorldResult<&str> {
        self.locations
            .get(location)
            .map(|l| l.display_name.as_str())
            .ok_or_else(|| WorldError::NotFound(format!("location {location}")))
    }

    /// Display name of anything in the hierarchy, including the world.
    pub fn display_name(&self, key: &Key) -> WorldResult<&str> {
        match key {
            Key::World => Ok(&self.world_display_name),
            Key::Region(region) => self.region_display_name(region),
            Key::Locality(locality) => self.locality(locality).map(|l| l.display_name.as_str()),
            Key::Location(location) => self.location_display_name(location),
        }
    }

    /// Localities of one region.
    pub fn localities_in(&self, region: &RegionKey) -> WorldResult<Vec<(&LocalityKey, &Locality)>> {
        if !self.regions.contains_key(region) {
            return Err(WorldError::NotFound(format!("region {region}")));
        }
        Ok(self
            .localities
            .iter()
            .filter(|(key, _)| key.region() == region)
            .collect())
    }

    /// Locations of one locality.
    pub fn locations_in(
        &self,
        locality: &LocalityKey,
    ) -> WorldResult<Vec<(&LocationKey, &Location)>> {
        if !self.localities.contains_key(locality) {
            return Err(WorldError::NotFound(format!("locality {locality}")));
        }
        Ok(self
            .locations
            .iter()
            .filter(|(key, _)| key.locality() == locality)
            .collect())
    }

    /// Whether the key names something in this tree. `World` always does.
    pub fn contains(&self, key: &Key) -> bool {
        match key {
            Key::World => true,
            Key::Region(region) => self.regions.contains_key(region),
            Key::Locality(locality) => self.localities.contains_key(locality),
            Key::Location(location) => self.locations.contains_key(location),
        }
    }

    /// Number of regions.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Number of localities across all regions.
    pub fn locality_count(&self) -> usize {
        self.localities.len()
    }

    /// Number of locations across all localities.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    // -----------------------------------------------------------------------
    // Additions
    // -----------------------------------------------------------------------

    /// Add a region together with its first locality and that locality's
    /// entrypoint.
    pub fn add_region(
        &mut self,
        region_name: &str,
        region_display_name: &str,
        first_locality_name: &str,
        first_locality_display_name: &str,
        first_locality_entrypoint_name: &str,
        first_locality_entrypoint_display_name: &str,
    ) -> WorldResult<()> {
        let region = RegionKey::new(region_name)?;
        let locality = region.locality(first_locality_name)?;
        let entrypoint = locality.location(first_locality_entrypoint_name)?;
        let region_display_name = clean_display_name(region_display_name)?;
        let locality_display_name = clean_display_name(first_locality_display_name)?;
        let entrypoint_display_name = clean_display_name(first_locality_entrypoint_display_name)?;

        if self.regions.contains_key(&region) {
            return Err(WorldError::DuplicateKey(region.to_string()));
        }
        self.check_region_display_name(&region_display_name, None)?;

        debug!(region = %region, "adding region");
        self.regions.insert(
            region,
            Region {
                display_name: region_display_name,
            },
        );
        self.insert_locality(
            locality,
            locality_display_name,
            entrypoint,
            entrypoint_display_name,
        );
        Ok(())
    }

    /// Add a locality to an existing region, with its entrypoint location.
    pub fn add_locality(
        &mut self,
        locality: &LocalityKey,
        locality_display_name: &str,
        entrypoint_name: &str,
        entrypoint_display_name: &str,
    ) -> WorldResult<()> {
        let entrypoint = locality.location(entrypoint_name)?;
        let locality_display_name = clean_display_name(locality_display_name)?;
        let entrypoint_display_name = clean_display_name(entrypoint_display_name)?;

        if !self.regions.contains_key(locality.region()) {
            return Err(WorldError::UnknownKey(locality.region().to_string()));
        }
        if self.localities.contains_key(locality) {
            return Err(WorldError::DuplicateKey(locality.to_string()));
        }
        self.check_locality_display_name(locality, &locality_display_name)?;

        debug!(locality = %locality, "adding locality");
        self.insert_locality(
            locality.clone(),
            locality_display_name,
            entrypoint,
            entrypoint_display_name,
        );
        Ok(())
    }

    /// Add a location to an existing locality.
    pub fn add_lowest_level_location(
        &mut self,
        location: &LocationKey,
        display_name: &str,
    ) -> WorldResult<()> {
        let display_name = clean_display_name(display_name)?;

        if !self.regions.contains_key(location.region()) {
            return Err(WorldError::UnknownKey(location.region().to_string()));
        }
        if !self.localities.contains_key(location.locality()) {
            return Err(WorldError::UnknownKey(location.locality().to_string()));
        }
        if self.locations.contains_key(location) {
            return Err(WorldError::DuplicateKey(location.to_string()));
        }
        self.check_location_display_name(location, &display_name)?;

        debug!(location = %location, "adding location");
        self.locations
            .insert(location.clone(), Location { display_name });
        Ok(())
    }

    fn insert_locality(
        &mut self,
        locality: LocalityKey,
        display_name: String,
        entrypoint: LocationKey,
        entrypoint_display_name: String,
    ) {
        self.locations.insert(
            entrypoint.clone(),
            Location {
                display_name: entrypoint_display_name.clone(),
            },
        );
        self.localities.insert(
            locality,
            Locality {
                display_name,
                entrypoint,
                entrypoint_display_name,
            },
        );
    }

    // -----------------------------------------------------------------------
    // Removals
    // -----------------------------------------------------------------------

    /// Remove a region and everything inside it.
    pub fn remove_region(&mut self, region: &RegionKey) -> WorldResult<()> {
        if !self.regions.contains_key(region) {
            return Err(WorldError::UnknownKey(region.to_string()));
        }
        if self.regions.len() == 1 {
            return Err(WorldError::LastOfKind(region.to_string()));
        }

        debug!(region = %region, "removing region");
        self.regions.remove(region);
        self.localities.retain(|key, _| key.region() != region);
        self.locations.retain(|key, _| key.region() != region);
        Ok(())
    }

    /// Remove a locality and all of its locations.
    pub fn remove_locality(&mut self, locality: &LocalityKey) -> WorldResult<()> {
        if !self.localities.contains_key(locality) {
            return Err(WorldError::UnknownKey(locality.to_string()));
        }
        let siblings = self
            .localities
            .keys()
            .filter(|key| key.region() == locality.region())
            .count();
        if siblings == 1 {
            return Err(WorldError::LastOfKind(locality.to_string()));
        }

        debug!(locality = %locality, "removing locality");
        self.localities.remove(locality);
        self.locations.retain(|key, _| key.locality() != locality);
        Ok(())
    }

    /// Remove a location. The active entrypoint of a locality cannot be removed.
    pub fn remove_lowest_level_location(&mut self, location: &LocationKey) -> WorldResult<()> {
        if !self.locations.contains_key(location) {
            return Err(WorldError::UnknownKey(location.to_string()));
        }
        let is_entrypoint = self
            .localities
            .get(location.locality())
            .is_some_and(|locality| &locality.entrypoint == location);
        if is_entrypoint {
            return Err(WorldError::EntrypointRemoval(location.to_string()));
        }

        debug!(location = %location, "removing location");
        self.locations.remove(location);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Edits
    // -----------------------------------------------------------------------

    /// Rename the world, a region, a locality, or a location.
    ///
    /// Uniqueness is enforced in the same scope as on creation. Renaming an
    /// entrypoint also refreshes its locality's cached entrypoint name.
    pub fn change_display_name(&mut self, key: &Key, new_display_name: &str) -> WorldResult<()> {
        let new_display_name = clean_display_name(new_display_name)?;
        match key {
            Key::World => {
                self.world_display_name = new_display_name;
            }
            Key::Region(region) => {
                if !self.regions.contains_key(region) {
                    return Err(WorldError::UnknownKey(region.to_string()));
                }
                self.check_region_display_name(&new_display_name, Some(region))?;
                if let Some(record) = self.regions.get_mut(region) {
                    record.display_name = new_display_name;
                }
            }
            Key::Locality(locality) => {
                if !self.localities.contains_key(locality) {
                    return Err(WorldError::UnknownKey(locality.to_string()));
                }
                self.check_locality_display_name(locality, &new_display_name)?;
                if let Some(record) = self.localities.get_mut(locality) {
                    record.display_name = new_display_name;
                }
            }
            Key::Location(location) => {
                if !self.locations.contains_key(location) {
                    return Err(WorldError::UnknownKey(location.to_string()));
                }
                self.check_location_display_name(location, &new_display_name)?;
                if let Some(parent) = self.localities.get_mut(location.locality()) {
                    if &parent.entrypoint == location {
                        parent.entrypoint_display_name = new_display_name.clone();
                    }
                }
                if let Some(record) = self.locations.get_mut(location) {
                    record.display_name = new_display_name;
                }
            }
        }
        debug!(key = %key, "renamed");
        Ok(())
    }

    /// Point a locality's entrypoint at another of its locations.
    pub fn change_locality_entrypoint(
        &mut self,
        locality: &LocalityKey,
        new_entrypoint: &LocationKey,
    ) -> WorldResult<()> {
        if !self.localities.contains_key(locality) {
            return Err(WorldError::UnknownKey(locality.to_string()));
        }
        let display_name = match self.locations.get(new_entrypoint) {
            Some(location) if new_entrypoint.locality() == locality => {
                location.display_name.clone()
            }
            _ => {
                return Err(WorldError::NotInLocality {
                    location: new_entrypoint.to_string(),
                    locality: locality.to_string(),
                });
            }
        };

        if let Some(record) = self.localities.get_mut(locality) {
            record.entrypoint = new_entrypoint.clone();
            record.entrypoint_display_name = display_name;
        }
        debug!(locality = %locality, entrypoint = %new_entrypoint, "changed entrypoint");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Uniqueness checks
    // -----------------------------------------------------------------------

    fn check_region_display_name(
        &self,
        display_name: &str,
        except: Option<&RegionKey>,
    ) -> WorldResult<()> {
        let taken = self
            .regions
            .iter()
            .any(|(key, r)| Some(key) != except && r.display_name == display_name);
        if taken {
            return Err(WorldError::DuplicateDisplayName {
                display_name: display_name.to_string(),
                scope: "among regions".to_string(),
            });
        }
        Ok(())
    }

    /// `locality` itself is skipped, so a rename to the current name passes.
    fn check_locality_display_name(
        &self,
        locality: &LocalityKey,
        display_name: &str,
    ) -> WorldResult<()> {
        let taken = self.localities.iter().any(|(key, l)| {
            key != locality && key.region() == locality.region() && l.display_name == display_name
        });
        if taken {
            return Err(WorldError::DuplicateDisplayName {
                display_name: display_name.to_string(),
                scope: format!("in region {}", locality.region()),
            });
        }
        Ok(())
    }

    fn check_location_display_name(
        &self,
        location: &LocationKey,
        display_name: &str,
    ) -> WorldResult<()> {
        let taken = self.locations.iter().any(|(key, l)| {
            key != location
                && key.locality() == location.locality()
                && l.display_name == display_name
        });
        if taken {
            return Err(WorldError::DuplicateDisplayName {
                display_name: display_name.to_string(),
                scope: format!("in locality {}", location.locality()),
            });
        }
        Ok(())
    }
}
