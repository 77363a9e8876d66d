//! Integration tests for the tq CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory with a small two-region world.
fn test_world() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("world.json");
    fs::write(
        &path,
        r#"{
  "world_name": "Mundus",
  "regions": {
    "eastmarch": {
      "display_name": "Eastmarch",
      "localities": {
        "bridgefort": {
          "display_name": "Bridgefort",
          "locations": {
            "entrypoint": "gates",
            "entrypoint_display_name": "Bridgefort Gates",
            "other_locations": {
              "keep": { "display_name": "Keep" }
            }
          }
        },
        "woodshire": {
          "display_name": "Woodshire",
          "locations": {
            "entrypoint": "fields",
            "entrypoint_display_name": "Woodshire Fields",
            "other_locations": {}
          }
        }
      }
    },
    "westmarch": {
      "display_name": "Westmarch",
      "localities": {
        "skirge": {
          "display_name": "Skirge",
          "locations": {
            "entrypoint": "square",
            "entrypoint_display_name": "Town Square",
            "other_locations": {}
          }
        }
      }
    }
  }
}
"#,
    )
    .unwrap();
    (dir, path)
}

fn tq() -> Command {
    Command::cargo_bin("tq").unwrap()
}

// -- new --

#[test]
fn new_creates_world_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fresh.json");

    tq().arg("new")
        .arg(&path)
        .args(["--world", "Mundus"])
        .args(["--region", "eastmarch:Eastmarch"])
        .args(["--locality", "bridgefort:Bridgefort"])
        .args(["--location", "gates:Bridgefort Gates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created world 'Mundus'"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"world_name\": \"Mundus\""));
    assert!(content.contains("\"entrypoint\": \"gates\""));
}

#[test]
fn new_refuses_to_overwrite() {
    let (_dir, path) = test_world();
    tq().arg("new")
        .arg(&path)
        .args(["--world", "Other"])
        .args(["--region", "a:A"])
        .args(["--locality", "b:B"])
        .args(["--location", "c:C"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn new_rejects_world_as_region_name() {
    let dir = TempDir::new().unwrap();
    tq().arg("new")
        .arg(dir.path().join("w.json"))
        .args(["--world", "Mundus"])
        .args(["--region", "world:World"])
        .args(["--locality", "b:B"])
        .args(["--location", "c:C"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved"));
}

// -- check --

#[test]
fn check_valid_world() {
    let (_dir, path) = test_world();
    tq().arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"))
        .stdout(predicate::str::contains("2 regions, 3 localities, 4 locations"));
}

#[test]
fn check_rejects_duplicate_display_names() {
    let (_dir, path) = test_world();
    let content = fs::read_to_string(&path)
        .unwrap()
        .replace("\"display_name\": \"Westmarch\"", "\"display_name\": \"Eastmarch\"");
    fs::write(&path, content).unwrap();

    tq().arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Eastmarch"));
}

#[test]
fn check_missing_file() {
    tq().args(["check", "/nonexistent/world.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// -- list --

#[test]
fn list_all_locations() {
    let (_dir, path) = test_world();
    tq().arg("list")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("eastmarch_bridgefort_keep"))
        .stdout(predicate::str::contains("Town Square"))
        .stdout(predicate::str::contains("4 locations in Mundus"));
}

#[test]
fn list_within_region() {
    let (_dir, path) = test_world();
    tq().arg("list")
        .arg(&path)
        .args(["--within", "eastmarch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Woodshire Fields"))
        .stdout(predicate::str::contains("Town Square").not())
        .stdout(predicate::str::contains("3 locations in Eastmarch"));
}

#[test]
fn list_within_unknown_locality() {
    let (_dir, path) = test_world();
    tq().arg("list")
        .arg(&path)
        .args(["--within", "eastmarch_nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

// -- edit --

#[test]
fn edit_add_location_and_rename() {
    let (_dir, path) = test_world();
    tq().arg("edit")
        .arg(&path)
        .args(["add-location", "eastmarch_woodshire_mill", "Old Mill"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added location eastmarch_woodshire_mill"));

    tq().arg("edit")
        .arg(&path)
        .args(["rename", "eastmarch_bridgefort_gates", "North Gate"])
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("Old Mill"));
    assert!(content.contains("\"entrypoint_display_name\": \"North Gate\""));
}

#[test]
fn edit_set_entrypoint_then_remove_old_one() {
    let (_dir, path) = test_world();
    tq().arg("edit")
        .arg(&path)
        .args(["remove", "eastmarch_bridgefort_gates"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("entrypoint"));

    tq().arg("edit")
        .arg(&path)
        .args(["set-entrypoint", "eastmarch_bridgefort", "eastmarch_bridgefort_keep"])
        .assert()
        .success();

    tq().arg("edit")
        .arg(&path)
        .args(["remove", "eastmarch_bridgefort_gates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed location"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"entrypoint\": \"keep\""));
    assert!(!content.contains("Bridgefort Gates"));
}

#[test]
fn edit_remove_region_cascades() {
    let (_dir, path) = test_world();
    tq().arg("edit")
        .arg(&path)
        .args(["remove", "westmarch"])
        .assert()
        .success();

    tq().arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 regions, 2 localities, 3 locations"));
}

#[test]
fn edit_cannot_remove_last_region() {
    let (_dir, path) = test_world();
    tq().arg("edit").arg(&path).args(["remove", "westmarch"]).assert().success();
    tq().arg("edit")
        .arg(&path)
        .args(["remove", "eastmarch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("last of its kind"));
}

#[test]
fn edit_add_region() {
    let (_dir, path) = test_world();
    tq().arg("edit")
        .arg(&path)
        .args(["add-region", "northreach:Northreach", "frosthold:Frosthold", "hall:Great Hall"])
        .assert()
        .success();

    tq().arg("list")
        .arg(&path)
        .args(["--within", "northreach_frosthold"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Great Hall (entrypoint)"));
}

// -- export --

#[test]
fn export_to_file() {
    let (dir, path) = test_world();
    let out = dir.path().join("out.json");
    tq().arg("export")
        .arg(&path)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("\"world_name\": \"Mundus\""));
    assert!(content.contains("\"keep\""));
}

#[test]
fn export_to_stdout() {
    let (_dir, path) = test_world();
    tq().arg("export")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"other_locations\""));
}

// -- travel --

#[test]
fn travel_within_locality() {
    let (_dir, path) = test_world();
    tq().arg("travel")
        .arg(&path)
        .write_stdin("2\nb\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Locations in Bridgefort"))
        .stdout(predicate::str::contains("1. Bridgefort Gates"))
        .stdout(predicate::str::contains("You arrive at Keep."))
        .stdout(predicate::str::contains("Stopped at Keep (eastmarch_bridgefort_keep)"));
}

#[test]
fn travel_across_regions() {
    let (_dir, path) = test_world();
    tq().arg("travel")
        .arg(&path)
        .write_stdin("w\n2\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Regions in Mundus"))
        .stdout(predicate::str::contains("Locations in Westmarch"))
        .stdout(predicate::str::contains("Stopped at Town Square (westmarch_skirge_square)"));
}

#[test]
fn travel_reports_unrecognized_input() {
    let (_dir, path) = test_world();
    tq().arg("travel")
        .arg(&path)
        .args(["--at", "westmarch_skirge_square"])
        .write_stdin("9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input not recognized."))
        .stdout(predicate::str::contains("Stopped at Town Square"));
}

#[test]
fn travel_unknown_start() {
    let (_dir, path) = test_world();
    tq().arg("travel")
        .arg(&path)
        .args(["--at", "eastmarch_bridgefort_cellar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown location"));
}

// -- roll --

#[test]
fn roll_with_seed_is_repeatable() {
    let first = tq()
        .args(["roll", "3d6+2", "--seed", "42", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolling 3d6+2"))
        .get_output()
        .stdout
        .clone();
    let second = tq()
        .args(["roll", "3d6+2", "--seed", "42", "-n", "5"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(first, second);
}

#[test]
fn roll_with_advantage() {
    tq().args(["roll", "d20", "--advantage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1d20 with advantage"));
}

#[test]
fn roll_invalid_notation() {
    tq().args(["roll", "twenty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid roll"));
}
