use std::io::{self, Write};
use std::path::Path;

use tq_core::{Key, LocationKey, LocationTree};
use tq_engine::{GameState, LoopConfig, MapContext, Outcome};

pub fn run(path: &Path, at: Option<&str>) -> Result<(), String> {
    let tree = super::load_world(path)?;
    let start = start_location(&tree, at)?;
    let mut state = GameState::new(tree, start);

    let config = LoopConfig::default();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    loop {
        let mut map = MapContext::for_player(&state).map_err(|e| e.to_string())?;
        let outcome = tq_engine::run(&mut map, &mut state, &mut input, &mut output, &config)
            .map_err(|e| e.to_string())?;
        if outcome == Outcome::Back {
            break;
        }
        writeln!(
            output,
            "You arrive at {}.\n",
            state.current_location_name().unwrap_or("an unknown place")
        )
        .map_err(|e| e.to_string())?;
    }

    writeln!(
        output,
        "\n  Stopped at {} ({})",
        state.current_location_name().unwrap_or("an unknown place"),
        state.player_current_location
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}

/// The location given with `--at`, or the entrypoint of the first locality.
fn start_location(tree: &LocationTree, at: Option<&str>) -> Result<LocationKey, String> {
    match at {
        Some(raw) => {
            let key = raw.parse::<LocationKey>().map_err(|e| e.to_string())?;
            if !tree.contains(&Key::Location(key.clone())) {
                return Err(format!("unknown location {key}"));
            }
            Ok(key)
        }
        None => tree
            .localities()
            .values()
            .next()
            .map(|locality| locality.entrypoint.clone())
            .ok_or_else(|| "world has no localities".to_string()),
    }
}
