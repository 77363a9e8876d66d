use std::path::Path;

use tq_core::LocationTree;

pub fn run(
    path: &Path,
    world: &str,
    region: &str,
    locality: &str,
    location: &str,
    force: bool,
) -> Result<(), String> {
    if path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }

    let (region_name, region_display) = super::split_named(region)?;
    let (locality_name, locality_display) = super::split_named(locality)?;
    let (location_name, location_display) = super::split_named(location)?;

    let tree = LocationTree::new(
        world,
        region_name,
        region_display,
        locality_name,
        locality_display,
        location_name,
        location_display,
    )
    .map_err(|e| e.to_string())?;

    super::save_world(&tree, path)?;

    println!("  Created world '{}' in {}", tree.world_display_name(), path.display());
    Ok(())
}
