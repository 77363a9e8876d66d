use std::path::Path;

use colored::Colorize;

pub fn run(path: &Path) -> Result<(), String> {
    let tree = super::load_world(path)?;

    println!(
        "  {} All checks passed for '{}'.",
        "ok".green().bold(),
        tree.world_display_name()
    );
    println!(
        "  {} regions, {} localities, {} locations",
        tree.region_count(),
        tree.locality_count(),
        tree.location_count()
    );

    Ok(())
}
