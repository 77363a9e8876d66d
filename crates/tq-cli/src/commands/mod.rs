pub mod check;
pub mod edit;
pub mod export;
pub mod list;
pub mod new;
pub mod roll;
pub mod travel;

use std::path::Path;

use tq_core::{LocationTree, WorldDocument};
use tracing::info;

/// Read a world file and rebuild its location tree.
fn load_world(path: &Path) -> Result<LocationTree, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let document = WorldDocument::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?;
    let tree = LocationTree::from_document(&document)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    info!(path = %path.display(), locations = tree.location_count(), "loaded world");
    Ok(tree)
}

/// Serialize a location tree and write it to `path`.
fn save_world(tree: &LocationTree, path: &Path) -> Result<(), String> {
    let json = world_json(tree)?;
    std::fs::write(path, json).map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
    info!(path = %path.display(), "saved world");
    Ok(())
}

fn world_json(tree: &LocationTree) -> Result<String, String> {
    let mut json = tree
        .export_world_map()
        .to_json()
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    json.push('\n');
    Ok(json)
}

/// Split a `name:Display Name` argument.
fn split_named(arg: &str) -> Result<(&str, &str), String> {
    arg.split_once(':')
        .ok_or_else(|| format!("expected name:Display Name, got \"{arg}\""))
}
