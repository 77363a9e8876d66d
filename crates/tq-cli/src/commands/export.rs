use std::path::Path;

pub fn run(path: &Path, output: Option<&Path>) -> Result<(), String> {
    let tree = super::load_world(path)?;
    let content = super::world_json(&tree)?;

    if let Some(out) = output {
        std::fs::write(out, &content)
            .map_err(|e| format!("cannot write to {}: {e}", out.display()))?;
        println!("  Exported to {}", out.display());
    } else {
        print!("{content}");
    }

    Ok(())
}
