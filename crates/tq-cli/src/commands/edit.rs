use std::path::Path;

use clap::Subcommand;
use std::str::FromStr;

use tq_core::{Key, LocalityKey, LocationKey, LocationTree, WorldError};

#[derive(Subcommand)]
pub enum EditOp {
    /// Add a region with its first locality and entrypoint
    AddRegion {
        /// Region as name:Display Name
        region: String,
        /// First locality as name:Display Name
        locality: String,
        /// Entrypoint as name:Display Name
        entrypoint: String,
    },

    /// Add a locality with its entrypoint to an existing region
    AddLocality {
        /// Locality key, e.g. eastmarch_woodshire
        key: String,
        /// Display name of the locality
        display_name: String,
        /// Entrypoint as name:Display Name
        entrypoint: String,
    },

    /// Add a location to an existing locality
    AddLocation {
        /// Location key, e.g. eastmarch_woodshire_mill
        key: String,
        /// Display name of the location
        display_name: String,
    },

    /// Remove a region, locality or location
    Remove {
        /// Key of the thing to remove
        key: String,
    },

    /// Change a display name (`world` renames the world)
    Rename {
        /// Key of the thing to rename
        key: String,
        /// New display name
        display_name: String,
    },

    /// Point a locality's entrypoint at another of its locations
    SetEntrypoint {
        /// Locality key
        locality: String,
        /// Location key of the new entrypoint
        location: String,
    },
}

pub fn run(path: &Path, op: EditOp) -> Result<(), String> {
    let mut tree = super::load_world(path)?;

    let summary = match op {
        EditOp::AddRegion {
            region,
            locality,
            entrypoint,
        } => {
            let (region_name, region_display) = super::split_named(&region)?;
            let (locality_name, locality_display) = super::split_named(&locality)?;
            let (entry_name, entry_display) = super::split_named(&entrypoint)?;
            tree.add_region(
                region_name,
                region_display,
                locality_name,
                locality_display,
                entry_name,
                entry_display,
            )
            .map_err(|e| e.to_string())?;
            format!("Added region {region_name}")
        }
        EditOp::AddLocality {
            key,
            display_name,
            entrypoint,
        } => {
            let locality: LocalityKey = parse_key(&key)?;
            let (entry_name, entry_display) = super::split_named(&entrypoint)?;
            tree.add_locality(&locality, &display_name, entry_name, entry_display)
                .map_err(|e| e.to_string())?;
            format!("Added locality {locality}")
        }
        EditOp::AddLocation { key, display_name } => {
            let location: LocationKey = parse_key(&key)?;
            tree.add_lowest_level_location(&location, &display_name)
                .map_err(|e| e.to_string())?;
            format!("Added location {location}")
        }
        EditOp::Remove { key } => {
            let key: Key = parse_key(&key)?;
            remove(&mut tree, &key)?;
            format!("Removed {} {key}", key.level_name())
        }
        EditOp::Rename { key, display_name } => {
            let key: Key = parse_key(&key)?;
            tree.change_display_name(&key, &display_name)
                .map_err(|e| e.to_string())?;
            format!("Renamed {key} to \"{}\"", display_name.trim())
        }
        EditOp::SetEntrypoint { locality, location } => {
            let locality: LocalityKey = parse_key(&locality)?;
            let location: LocationKey = parse_key(&location)?;
            tree.change_locality_entrypoint(&locality, &location)
                .map_err(|e| e.to_string())?;
            format!("Entrypoint of {locality} is now {location}")
        }
    };

    super::save_world(&tree, path)?;
    println!("  {summary}");
    Ok(())
}

fn parse_key<K: FromStr<Err = WorldError>>(raw: &str) -> Result<K, String> {
    raw.parse::<K>().map_err(|e| e.to_string())
}

fn remove(tree: &mut LocationTree, key: &Key) -> Result<(), String> {
    let result = match key {
        Key::World => return Err("the world cannot be removed".into()),
        Key::Region(region) => tree.remove_region(region),
        Key::Locality(locality) => tree.remove_locality(locality),
        Key::Location(location) => tree.remove_lowest_level_location(location),
    };
    result.map_err(|e| e.to_string())
}
