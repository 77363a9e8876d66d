//! Serializable snapshot of a [`LocationTree`].
//!
//! The document is the only format other components persist, so its field
//! names are fixed. Keys inside `regions`, `localities` and
//! `other_locations` are short names without their parents' prefixes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{WorldError, WorldResult};
use crate::key::{LocalityKey, RegionKey};
use crate::tree::LocationTree;

/// The whole world map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldDocument {
    /// Display name of the world.
    pub world_name: String,
    /// Regions by short name.
    pub regions: BTreeMap<String, RegionDocument>,
}

/// One region and its localities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDocument {
    /// Display name of the region.
    pub display_name: String,
    /// Localities by short name.
    pub localities: BTreeMap<String, LocalityDocument>,
}

/// One locality and its locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalityDocument {
    /// Display name of the locality.
    pub display_name: String,
    /// The locality's locations.
    pub locations: LocationsDocument,
}

/// The locations of a locality, entrypoint listed separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationsDocument {
    /// Short name of the entrypoint location.
    pub entrypoint: String,
    /// Display name of the entrypoint location.
    pub entrypoint_display_name: String,
    /// Every location except the entrypoint.
    pub other_locations: BTreeMap<String, LocationDocument>,
}

/// A single non-entrypoint location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDocument {
    /// Display name of the location.
    pub display_name: String,
}

impl WorldDocument {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> WorldResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document from JSON. The result is not validated until it is
    /// turned into a tree with [`LocationTree::from_document`].
    pub fn from_json(json: &str) -> WorldResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl LocationTree {
    /// Snapshot the whole tree.
    pub fn export_world_map(&self) -> WorldDocument {
        let mut regions = BTreeMap::new();
        for (region, display_name) in self.regions() {
            let localities = self
                .localities()
                .iter()
                .filter(|(key, _)| key.region() == region)
                .map(|(key, locality)| {
                    let other_locations = self
                        .lowest_level_locations()
                        .into_iter()
                        .filter(|(loc, _)| loc.locality() == key && **loc != locality.entrypoint)
                        .map(|(loc, name)| {
                            (
                                loc.name().to_string(),
                                LocationDocument {
                                    display_name: name.to_string(),
                                },
                            )
                        })
                        .collect();
                    (
                        key.name().to_string(),
                        LocalityDocument {
                            display_name: locality.display_name.clone(),
                            locations: LocationsDocument {
                                entrypoint: locality.entrypoint.name().to_string(),
                                entrypoint_display_name: locality.entrypoint_display_name.clone(),
                                other_locations,
                            },
                        },
                    )
                })
                .collect();
            regions.insert(
                region.name().to_string(),
                RegionDocument {
                    display_name: display_name.to_string(),
                    localities,
                },
            );
        }
        WorldDocument {
            world_name: self.world_display_name().to_string(),
            regions,
        }
    }

    /// Rebuild a tree from a document.
    ///
    /// The lexicographically first region, its first locality and that
    /// locality's entrypoint seed the tree; everything else is replayed
    /// through the regular `add_*` operations, so a malformed document fails
    /// with the same errors as the equivalent edits would.
    pub fn from_document(document: &WorldDocument) -> WorldResult<Self> {
        let mut regions = document.regions.iter();
        let (first_region_name, first_region) = regions
            .next()
            .ok_or_else(|| WorldError::EmptyDocument("no regions".to_string()))?;
        let mut first_localities = first_region.localities.iter();
        let (first_locality_name, first_locality) = first_localities.next().ok_or_else(|| {
            WorldError::EmptyDocument(format!("region {first_region_name} has no localities"))
        })?;

        let mut tree = LocationTree::new(
            &document.world_name,
            first_region_name,
            &first_region.display_name,
            first_locality_name,
            &first_locality.display_name,
            &first_locality.locations.entrypoint,
            &first_locality.locations.entrypoint_display_name,
        )?;
        let region = RegionKey::new(first_region_name)?;
        let locality = region.locality(first_locality_name)?;
        tree.add_other_locations(&locality, &first_locality.locations)?;

        for (name, doc) in first_localities {
            tree.add_locality_document(&region, name, doc)?;
        }

        for (region_name, region_doc) in regions {
            let mut localities = region_doc.localities.iter();
            let (locality_name, locality_doc) = localities.next().ok_or_else(|| {
                WorldError::EmptyDocument(format!("region {region_name} has no localities"))
            })?;
            tree.add_region(
                region_name,
                &region_doc.display_name,
                locality_name,
                &locality_doc.display_name,
                &locality_doc.locations.entrypoint,
                &locality_doc.locations.entrypoint_display_name,
            )?;
            let region = RegionKey::new(region_name)?;
            tree.add_other_locations(&region.locality(locality_name)?, &locality_doc.locations)?;
            for (name, doc) in localities {
                tree.add_locality_document(&region, name, doc)?;
            }
        }

        debug!(
            regions = tree.region_count(),
            localities = tree.locality_count(),
            locations = tree.location_count(),
            "imported world document"
        );
        Ok(tree)
    }

    fn add_locality_document(
        &mut self,
        region: &RegionKey,
        name: &str,
        doc: &LocalityDocument,
    ) -> WorldResult<()> {
        let locality = region.locality(name)?;
        self.add_locality(
            &locality,
            &doc.display_name,
            &doc.locations.entrypoint,
            &doc.locations.entrypoint_display_name,
        )?;
        self.add_other_locations(&locality, &doc.locations)
    }

    fn add_other_locations(
        &mut self,
        locality: &LocalityKey,
        locations: &LocationsDocument,
    ) -> WorldResult<()> {
        for (name, location) in &locations.other_locations {
            self.add_lowest_level_location(&locality.location(name)?, &location.display_name)?;
        }
        Ok(())
    }
}
