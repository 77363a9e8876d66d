use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use tq_core::{Key, LocationKey, LocationTree};

pub fn run(path: &Path, within: Option<&str>) -> Result<(), String> {
    let tree = super::load_world(path)?;

    let scope = match within {
        Some(raw) => raw.parse::<Key>().map_err(|e| e.to_string())?,
        None => Key::World,
    };
    let keys = locations_within(&tree, &scope)?;

    if keys.is_empty() {
        println!("  No locations found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Location", "Locality", "Region"]);

    for key in &keys {
        let location = tree
            .location_display_name(key)
            .map_err(|e| e.to_string())?;
        let locality = tree.locality(key.locality()).map_err(|e| e.to_string())?;
        let region = tree
            .region_display_name(key.region())
            .map_err(|e| e.to_string())?;
        let location = if &locality.entrypoint == key {
            format!("{location} (entrypoint)")
        } else {
            location.to_string()
        };
        table.add_row(vec![
            key.to_string(),
            location,
            locality.display_name.clone(),
            region.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} locations in {}", keys.len(), scope_name(&tree, &scope)?);

    Ok(())
}

fn locations_within(tree: &LocationTree, scope: &Key) -> Result<Vec<LocationKey>, String> {
    let keys = match scope {
        Key::World => tree
            .lowest_level_locations()
            .into_iter()
            .map(|(key, _)| key.clone())
            .collect(),
        Key::Region(region) => {
            let mut keys = Vec::new();
            for (locality, _) in tree.localities_in(region).map_err(|e| e.to_string())? {
                let locations = tree.locations_in(locality).map_err(|e| e.to_string())?;
                keys.extend(locations.into_iter().map(|(key, _)| key.clone()));
            }
            keys
        }
        Key::Locality(locality) => tree
            .locations_in(locality)
            .map_err(|e| e.to_string())?
            .into_iter()
            .map(|(key, _)| key.clone())
            .collect(),
        Key::Location(location) => {
            return Err(format!(
                "{location} is a location; --within takes a region or locality"
            ));
        }
    };
    Ok(keys)
}

fn scope_name<'a>(tree: &'a LocationTree, scope: &Key) -> Result<&'a str, String> {
    tree.display_name(scope).map_err(|e| e.to_string())
}
