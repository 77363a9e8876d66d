//! World, regional and local maps the player travels with.
//!
//! A [`MapContext`] shows one [`MapView`] at a time. Regional and local
//! entries are travel targets that move the player and close the map; world
//! entries swap the view for that region's map. Views are always rebuilt
//! from the [`LocationTree`] in the game state, never cached.

use std::collections::BTreeMap;

use tracing::{debug, info};
use tq_core::{LocalityKey, LocationKey, LocationTree, RegionKey, WorldResult};

use crate::context::{Context, Flow};
use crate::error::EngineResult;
use crate::menu::ChoiceMenu;
use crate::state::GameState;

const REGION_MAP_LABEL: &str = "Region map";
const WORLD_MAP_LABEL: &str = "World map";
const FIXED_LABELS: [&str; 2] = [REGION_MAP_LABEL, WORLD_MAP_LABEL];

/// Which slice of the hierarchy a map shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapLevel {
    /// All regions.
    World,
    /// The localities of one region.
    Regional(RegionKey),
    /// The locations of one locality.
    Local(LocalityKey),
}

/// What a map entry points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapTarget {
    /// A region whose map opens when chosen.
    Region(RegionKey),
    /// A location the player travels to when chosen.
    Location(LocationKey),
}

/// One line on a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    /// Name shown for the entry.
    pub display_name: String,
    /// Where choosing the entry leads.
    pub target: MapTarget,
}

/// Everything needed to show one map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapView {
    /// Name of the area the map covers.
    pub domain_display_name: String,
    /// Which slice of the hierarchy is shown.
    pub level: MapLevel,
    /// Entries keyed by their choice number, starting at 1.
    pub entries: BTreeMap<usize, MapEntry>,
    /// Where the player stood when the map was opened.
    pub player_current_location: LocationKey,
}

fn numbered(entries: impl IntoIterator<Item = MapEntry>) -> BTreeMap<usize, MapEntry> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| (i + 1, entry))
        .collect()
}

impl MapView {
    /// Map of every region.
    pub fn world(tree: &LocationTree, player: &LocationKey) -> Self {
        let entries = tree.regions().into_iter().map(|(region, display_name)| MapEntry {
            display_name: display_name.to_string(),
            target: MapTarget::Region(region.clone()),
        });
        Self {
            domain_display_name: tree.world_display_name().to_string(),
            level: MapLevel::World,
            entries: numbered(entries),
            player_current_location: player.clone(),
        }
    }

    /// Map of one region. Each locality is listed under its own name and
    /// leads to its entrypoint.
    pub fn regional(
        tree: &LocationTree,
        region: &RegionKey,
        player: &LocationKey,
    ) -> WorldResult<Self> {
        let domain_display_name = tree.region_display_name(region)?.to_string();
        let entries = tree
            .localities_in(region)?
            .into_iter()
            .map(|(_, locality)| MapEntry {
                display_name: locality.display_name.clone(),
                target: MapTarget::Location(locality.entrypoint.clone()),
            });
        Ok(Self {
            domain_display_name,
            level: MapLevel::Regional(region.clone()),
            entries: numbered(entries),
            player_current_location: player.clone(),
        })
    }

    /// Map of one locality: its entrypoint first, then the other locations.
    pub fn local(
        tree: &LocationTree,
        locality: &LocalityKey,
        player: &LocationKey,
    ) -> WorldResult<Self> {
        let record = tree.locality(locality)?;
        let entrypoint = MapEntry {
            display_name: record.entrypoint_display_name.clone(),
            target: MapTarget::Location(record.entrypoint.clone()),
        };
        let others = tree
            .locations_in(locality)?
            .into_iter()
            .filter(|(key, _)| **key != record.entrypoint)
            .map(|(key, location)| MapEntry {
                display_name: location.display_name.clone(),
                target: MapTarget::Location(key.clone()),
            });
        Ok(Self {
            domain_display_name: record.display_name.clone(),
            level: MapLevel::Local(locality.clone()),
            entries: numbered(std::iter::once(entrypoint).chain(others)),
            player_current_location: player.clone(),
        })
    }

    /// Local map of wherever the player stands.
    pub fn for_player(tree: &LocationTree, player: &LocationKey) -> WorldResult<Self> {
        Self::local(tree, player.locality(), player)
    }

    /// The region this map lies in; `None` for the world map.
    pub fn region(&self) -> Option<&RegionKey> {
        match &self.level {
            MapLevel::World => None,
            MapLevel::Regional(region) => Some(region),
            MapLevel::Local(locality) => Some(locality.region()),
        }
    }

    /// Heading printed above the entries.
    pub fn entry_text(&self) -> String {
        match self.level {
            MapLevel::World => format!("Regions in {}", self.domain_display_name),
            MapLevel::Regional(_) | MapLevel::Local(_) => {
                format!("Locations in {}", self.domain_display_name)
            }
        }
    }
}

/// What choosing a map entry does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapAction {
    /// Move the player and close the map.
    Travel(LocationKey),
    /// Show a region's map.
    OpenRegion(RegionKey),
    /// Show the world map.
    OpenWorld,
}

/// The map screen.
#[derive(Debug, Clone)]
pub struct MapContext {
    view: MapView,
}

impl MapContext {
    /// Open a map on the given view.
    pub fn new(view: MapView) -> Self {
        Self { view }
    }

    /// Open the local map around the player.
    pub fn for_player(state: &GameState) -> WorldResult<Self> {
        MapView::for_player(&state.world, &state.player_current_location).map(Self::new)
    }

    /// The view currently shown.
    pub fn view(&self) -> &MapView {
        &self.view
    }
}

impl Context for MapContext {
    type Action = MapAction;

    fn entry_text(&self, _state: &GameState) -> String {
        self.view.entry_text()
    }

    /// An entry named like one of the fixed choices is shown with its key
    /// appended.
    fn fill_choices(&self, _state: &GameState, menu: &mut ChoiceMenu<MapAction>) -> EngineResult<()> {
        for entry in self.view.entries.values() {
            let (action, key) = match &entry.target {
                MapTarget::Region(region) => {
                    (MapAction::OpenRegion(region.clone()), region.to_string())
                }
                MapTarget::Location(location) => {
                    (MapAction::Travel(location.clone()), location.to_string())
                }
            };
            let name = entry.display_name.as_str();
            if menu.has_label(name) || FIXED_LABELS.contains(&name.trim()) {
                menu.add(action, &format!("{name} ({key})"))?;
            } else {
                menu.add(action, name)?;
            }
        }
        if let MapLevel::Local(locality) = &self.view.level {
            menu.add_lettered(
                'r',
                MapAction::OpenRegion(locality.region().clone()),
                REGION_MAP_LABEL,
            )?;
        }
        if self.view.level != MapLevel::World {
            menu.add_lettered('w', MapAction::OpenWorld, WORLD_MAP_LABEL)?;
        }
        Ok(())
    }

    fn apply(&mut self, action: &MapAction, state: &mut GameState) -> EngineResult<Flow> {
        match action {
            MapAction::Travel(location) => {
                info!(from = %state.player_current_location, to = %location, "travel");
                state.player_current_location = location.clone();
                self.view.player_current_location = location.clone();
                Ok(Flow::Exit)
            }
            MapAction::OpenRegion(region) => {
                debug!(region = %region, "opening regional map");
                self.view =
                    MapView::regional(&state.world, region, &state.player_current_location)?;
                Ok(Flow::Continue)
            }
            MapAction::OpenWorld => {
                debug!("opening world map");
                self.view = MapView::world(&state.world, &state.player_current_location);
                Ok(Flow::Continue)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoopConfig;
    use crate::context::{Outcome, run};
    use std::io::Cursor;

    fn state() -> GameState {
        let mut world = LocationTree::new(
            "Mundus",
            "eastmarch",
            "Eastmarch",
            "bridgefort",
            "Bridgefort",
            "gates",
            "Bridgefort Gates",
        )
        .unwrap();
        world
            .add_lowest_level_location(&"eastmarch_bridgefort_keep".parse().unwrap(), "Keep")
            .unwrap();
        world
            .add_locality(
                &"eastmarch_woodshire".parse().unwrap(),
                "Woodshire",
                "fields",
                "Woodshire Fields",
            )
            .unwrap();
        world
            .add_region("westmarch", "Westmarch", "skirge", "Skirge", "square", "Town Square")
            .unwrap();
        GameState::new(world, "eastmarch_bridgefort_gates".parse().unwrap())
    }

    fn travel(state: &mut GameState, script: &str) -> (Outcome, String) {
        let mut map = MapContext::for_player(state).unwrap();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = run(&mut map, state, &mut input, &mut output, &LoopConfig::default()).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    fn names(view: &MapView) -> Vec<&str> {
        view.entries.values().map(|e| e.display_name.as_str()).collect()
    }

    #[test]
    fn world_view_lists_regions() {
        let state = state();
        let view = MapView::world(&state.world, &state.player_current_location);
        assert_eq!(view.level, MapLevel::World);
        assert_eq!(view.region(), None);
        assert_eq!(view.entry_text(), "Regions in Mundus");
        let mut regions = names(&view);
        regions.sort();
        assert_eq!(regions, vec!["Eastmarch", "Westmarch"]);
    }

    #[test]
    fn regional_view_targets_entrypoints() {
        let state = state();
        let region: RegionKey = "eastmarch".parse().unwrap();
        let view = MapView::regional(&state.world, &region, &state.player_current_location).unwrap();
        assert_eq!(view.entry_text(), "Locations in Eastmarch");
        assert_eq!(view.region(), Some(&region));
        let targets: Vec<String> = view
            .entries
            .values()
            .map(|e| match &e.target {
                MapTarget::Location(key) => key.to_string(),
                MapTarget::Region(key) => key.to_string(),
            })
            .collect();
        assert_eq!(
            targets,
            vec!["eastmarch_bridgefort_gates", "eastmarch_woodshire_fields"]
        );
        assert_eq!(names(&view), vec!["Bridgefort", "Woodshire"]);
    }

    #[test]
    fn regional_view_of_unknown_region_is_a_lookup_error() {
        let state = state();
        let err = MapView::regional(
            &state.world,
            &"northmarch".parse().unwrap(),
            &state.player_current_location,
        )
        .unwrap_err();
        assert!(err.is_lookup());
    }

    #[test]
    fn local_view_puts_entrypoint_first() {
        let state = state();
        let view = MapView::for_player(&state.world, &state.player_current_location).unwrap();
        assert_eq!(
            view.level,
            MapLevel::Local("eastmarch_bridgefort".parse().unwrap())
        );
        assert_eq!(names(&view), vec!["Bridgefort Gates", "Keep"]);
        assert_eq!(view.entry_text(), "Locations in Bridgefort");
    }

    #[test]
    fn local_map_screen() {
        let mut state = state();
        let (_, output) = travel(&mut state, "");
        insta::assert_snapshot!(output, @r"
        Locations in Bridgefort

        1. Bridgefort Gates
        2. Keep
        r. Region map
        w. World map
        b. Back
        ");
    }

    #[test]
    fn local_travel_moves_player() {
        let mut state = state();
        let (outcome, _) = travel(&mut state, "2\n");
        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(
            state.player_current_location.to_string(),
            "eastmarch_bridgefort_keep"
        );
    }

    #[test]
    fn padded_numbers_are_not_recognized() {
        let mut state = state();
        let (outcome, output) = travel(&mut state, "+2\n02\n");
        assert_eq!(outcome, Outcome::Back);
        assert_eq!(output.matches("Input not recognized.").count(), 2);
        assert_eq!(
            state.player_current_location.to_string(),
            "eastmarch_bridgefort_gates"
        );
    }

    #[test]
    fn entries_named_like_fixed_choices_stay_reachable() {
        let mut state = state();
        let world = &mut state.world;
        world
            .add_lowest_level_location(&"eastmarch_bridgefort_back".parse().unwrap(), "Back")
            .unwrap();
        world
            .add_lowest_level_location(&"eastmarch_bridgefort_atlas".parse().unwrap(), "World map")
            .unwrap();
        let (outcome, output) = travel(&mut state, "1\n");
        assert_eq!(outcome, Outcome::Completed);
        assert!(output.contains("2. World map (eastmarch_bridgefort_atlas)"));
        assert!(output.contains("3. Back (eastmarch_bridgefort_back)"));
        assert!(output.contains("w. World map\n"));

        travel(&mut state, "3\n");
        assert_eq!(
            state.player_current_location.to_string(),
            "eastmarch_bridgefort_back"
        );
    }

    #[test]
    fn back_keeps_player_in_place() {
        let mut state = state();
        let (outcome, _) = travel(&mut state, "r\nb\n");
        assert_eq!(outcome, Outcome::Back);
        assert_eq!(
            state.player_current_location.to_string(),
            "eastmarch_bridgefort_gates"
        );
    }

    #[test]
    fn region_map_then_travel() {
        let mut state = state();
        let (outcome, output) = travel(&mut state, "r\n2\n");
        assert_eq!(outcome, Outcome::Completed);
        assert!(output.contains("Locations in Eastmarch"));
        assert_eq!(
            state.player_current_location.to_string(),
            "eastmarch_woodshire_fields"
        );
    }

    #[test]
    fn world_map_drills_into_region() {
        let mut state = state();
        // World map lists Eastmarch then Westmarch.
        let (outcome, output) = travel(&mut state, "w\n2\n1\n");
        assert_eq!(outcome, Outcome::Completed);
        assert!(output.contains("Regions in Mundus"));
        assert!(output.contains("Locations in Westmarch"));
        assert_eq!(
            state.player_current_location.to_string(),
            "westmarch_skirge_square"
        );
    }

    #[test]
    fn world_map_offers_no_region_or_world_choice() {
        let state = state();
        let map = MapContext::new(MapView::world(&state.world, &state.player_current_location));
        let mut menu = ChoiceMenu::new(&[('b', "Back")]).unwrap();
        map.fill_choices(&state, &mut menu).unwrap();
        let tokens: Vec<String> = menu.options().into_iter().map(|(t, _)| t).collect();
        assert_eq!(tokens, vec!["1", "2", "b"]);
    }

    #[test]
    fn regional_map_offers_world_but_not_region() {
        let state = state();
        let view = MapView::regional(
            &state.world,
            &"westmarch".parse().unwrap(),
            &state.player_current_location,
        )
        .unwrap();
        let map = MapContext::new(view);
        let mut menu = ChoiceMenu::new(&[('b', "Back")]).unwrap();
        map.fill_choices(&state, &mut menu).unwrap();
        let tokens: Vec<String> = menu.options().into_iter().map(|(t, _)| t).collect();
        assert_eq!(tokens, vec!["1", "w", "b"]);
    }

    #[test]
    fn views_reflect_edits_between_transitions() {
        let mut state = state();
        let mut map = MapContext::for_player(&state).unwrap();
        state
            .world
            .add_region("northmarch", "Northmarch", "holt", "Holt", "gate", "Holt Gate")
            .unwrap();
        let flow = map.apply(&MapAction::OpenWorld, &mut state).unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(map.view().entries.len(), 3);
        assert_eq!(map.view().player_current_location, state.player_current_location);
    }

    #[test]
    fn opening_a_removed_region_propagates_the_error() {
        let mut state = state();
        let mut map = MapContext::new(MapView::world(&state.world, &state.player_current_location));
        state
            .world
            .remove_region(&"westmarch".parse().unwrap())
            .unwrap();
        let result = map.apply(&MapAction::OpenRegion("westmarch".parse().unwrap()), &mut state);
        assert!(result.is_err());
    }
}
