//! Integration tests for the vigil CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vigil() -> Command {
    Command::cargo_bin("vigil").unwrap()
}

#[test]
fn roll_threshold_is_deterministic_with_seed() {
    let first = vigil()
        .args(["roll", "2d6 1d8", "--threshold", "4", "--seed", "7"])
        .assert()
        .success();
    let output = String::from_utf8(first.get_output().stdout.clone()).unwrap();

    vigil()
        .args(["roll", "2d6 1d8", "--threshold", "4", "--seed", "7"])
        .assert()
        .success()
        .stdout(output);
}

#[test]
fn roll_prints_pool_and_target() {
    vigil()
        .args(["roll", "3d6", "--threshold", "3", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3d6 vs 3"));
}

#[test]
fn roll_highest_mode() {
    vigil()
        .args(["roll", "2d10", "--highest", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2d10:"))
        .stdout(predicate::str::contains("highest"));
}

#[test]
fn roll_empty_pool_is_a_user_error() {
    vigil()
        .args(["roll", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn roll_bad_spec_fails() {
    vigil()
        .args(["roll", "2x6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pool spec"));
}

#[test]
fn initiative_demo_orders_everyone() {
    vigil()
        .args(["initiative", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mara"))
        .stdout(predicate::str::contains("Grask"))
        .stdout(predicate::str::contains("Initiative"));
}

#[test]
fn initiative_team_mode_uses_buckets() {
    vigil()
        .args(["initiative", "--team", "--mode", "pc_vs_npc", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2.00"))
        .stdout(predicate::str::contains("1.00"));
}

#[test]
fn initiative_rejects_unknown_mode() {
    vigil()
        .args(["initiative", "--mode", "chaos"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown ordering mode"));
}

#[test]
fn initiative_loads_an_encounter_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("encounter.json");
    fs::write(
        &path,
        r#"{
  "settings": { "manual_threshold": 3 },
  "participants": [
    { "name": "Kara", "player_controlled": true, "pool": { "counts": { "d8": 2 } } },
    { "name": "Thug", "disposition": "hostile", "pool": { "counts": { "d6": 2 } } }
  ]
}"#,
    )
    .unwrap();

    vigil()
        .args(["initiative", "--file", path.to_str().unwrap(), "--seed", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kara"))
        .stdout(predicate::str::contains("Thug"));
}

#[test]
fn initiative_rejects_a_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "not json").unwrap();

    vigil()
        .args(["initiative", "--file", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid encounter file"));
}

#[test]
fn conditions_list_shows_the_catalog() {
    vigil()
        .args(["conditions", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stunned"))
        .stdout(predicate::str::contains("Off Balance"));
}

#[test]
fn conditions_show_normalizes_the_lookup() {
    vigil()
        .args(["conditions", "show", "Off Balance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("offbalance"));
}

#[test]
fn conditions_show_unknown_id_fails() {
    vigil()
        .args(["conditions", "show", "petrified"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown condition"));
}
