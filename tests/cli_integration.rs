//! Integration tests for the Footy CLI
//!
//! The first half exercises the library through its storage API using
//! temporary databases; the second half drives the compiled binary with
//! assert_cmd against the same kind of throwaway database.

use std::path::Path;

use assert_cmd::Command;
use footy_cli::error::Error;
use footy_cli::storage::{Color, Database};
use predicates::prelude::*;
use tempfile::tempdir;

// =============================================================================
// Test Helpers
// =============================================================================

/// Creates a test database in a temporary directory.
/// Returns the Database instance and the temp directory (which must be kept alive).
fn create_test_db() -> (Database, tempfile::TempDir) {
    let dir = tempdir().expect("Failed to create temp directory");
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).expect("Failed to open test database");
    (db, dir)
}

/// Builds a footy command pointed at the given database file.
fn footy(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("footy").expect("Failed to find footy binary");
    cmd.arg("--db").arg(db_path);
    cmd
}

// =============================================================================
// Library Tests
// =============================================================================

#[test]
fn test_full_player_lifecycle() {
    let (mut db, _dir) = create_test_db();

    let player = db.add_player("Lionel Messi").expect("Failed to add player");
    let team = db.add_team("Barcelona").expect("Failed to add team");

    db.add_player_to_team(player.id, team.id)
        .expect("Failed to join team");
    db.add_stat(player.id, 2, 1).expect("Failed to add stat");
    db.add_stat(player.id, 1, 0).expect("Failed to add stat");
    db.add_boot_color(player.id, "White")
        .expect("Failed to add boot color");

    let detail = db.player_detail(player.id).expect("Failed to get detail");
    assert_eq!(detail.total_goals, 3, "Totals should sum over stat rows");
    assert_eq!(detail.total_assists, 1);
    assert_eq!(detail.boot_color, Some(Color::White));
    assert_eq!(detail.teams, vec!["Barcelona"]);

    let roster = db.team_roster(team.id).expect("Failed to get roster");
    assert_eq!(roster.players, vec!["Lionel Messi"]);

    db.delete_player(player.id).expect("Failed to delete player");
    assert!(db.get_player(player.id).unwrap().is_none());
    assert!(
        db.team_roster(team.id).unwrap().players.is_empty(),
        "Deleted player should vanish from the roster"
    );
}

#[test]
fn test_top_scorers_across_players() {
    let (mut db, _dir) = create_test_db();

    let a = db.add_player("Player A").unwrap();
    let b = db.add_player("Player B").unwrap();
    let c = db.add_player("Player C").unwrap();
    db.add_stat(a.id, 5, 0).unwrap();
    db.add_stat(b.id, 3, 0).unwrap();
    db.add_stat(c.id, 9, 0).unwrap();

    let scorers = db.top_scorers(3).expect("Failed to get top scorers");
    let totals: Vec<i64> = scorers.iter().map(|s| s.total_goals).collect();
    assert_eq!(totals, vec![9, 5, 3]);
}

#[test]
fn test_membership_round_trip_and_conflicts() {
    let (mut db, _dir) = create_test_db();

    let player = db.add_player("Lionel Messi").unwrap();
    let team = db.add_team("Barcelona").unwrap();

    db.add_player_to_team(player.id, team.id).unwrap();
    assert!(matches!(
        db.add_player_to_team(player.id, team.id),
        Err(Error::Conflict(_))
    ));

    db.remove_player_from_team(player.id, team.id).unwrap();
    assert!(matches!(
        db.remove_player_from_team(player.id, team.id),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn test_created_records_round_trip_exactly() {
    let (mut db, _dir) = create_test_db();

    let player = db.add_player("Lionel Messi").unwrap();
    let team = db.add_team("Barcelona").unwrap();
    let (_, stat) = db.add_stat(player.id, 7, 4).unwrap();
    let (_, boot) = db.add_boot_color(player.id, "Gold").unwrap();

    let p = db.get_player(player.id).unwrap().unwrap();
    assert_eq!(p.name, "Lionel Messi");

    let t = db.get_team(team.id).unwrap().unwrap();
    assert_eq!(t.name, "Barcelona");

    let s = db.get_stat(stat.id).unwrap().unwrap();
    assert_eq!((s.goals, s.assists, s.player_id), (7, 4, player.id));

    let b = db.get_boot_color(boot.id).unwrap().unwrap();
    assert_eq!(b.color, Color::Gold);
    assert_eq!(b.player_id, player.id);
}

// =============================================================================
// Binary Tests
// =============================================================================

#[test]
fn test_cli_add_player() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("footy.db");

    footy(&db_path)
        .args(["add-player", "Lionel Messi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added player"))
        .stdout(predicate::str::contains("Lionel Messi"));
}

#[test]
fn test_cli_duplicate_player_conflicts() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("footy.db");

    footy(&db_path)
        .args(["add-player", "Lionel Messi"])
        .assert()
        .success();

    footy(&db_path)
        .args(["add-player", "Lionel Messi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_cli_blank_name_rejected() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("footy.db");

    footy(&db_path)
        .args(["add-player", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name must be a non-empty string"));
}

#[test]
fn test_cli_invalid_boot_color_rejected() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("footy.db");

    footy(&db_path)
        .args(["add-player", "Lionel Messi"])
        .assert()
        .success();

    footy(&db_path)
        .args(["add-boot-color", "1", "Green"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Color must be one of"));
}

#[test]
fn test_cli_player_detail_totals() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("footy.db");

    footy(&db_path)
        .args(["add-player", "Lionel Messi"])
        .assert()
        .success();
    footy(&db_path).args(["add-stat", "1", "2", "1"]).assert().success();
    footy(&db_path).args(["add-stat", "1", "1", "0"]).assert().success();

    footy(&db_path)
        .args(["player", "1", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_goals\": 3"))
        .stdout(predicate::str::contains("\"total_assists\": 1"));
}

#[test]
fn test_cli_top_scorers_order() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("footy.db");

    for (name, goals) in [("Player A", "5"), ("Player B", "3"), ("Player C", "9")] {
        footy(&db_path).args(["add-player", name]).assert().success();
        let id = match name {
            "Player A" => "1",
            "Player B" => "2",
            _ => "3",
        };
        footy(&db_path)
            .args(["add-stat", id, goals, "0"])
            .assert()
            .success();
    }

    let output = footy(&db_path)
        .args(["top-scorers"])
        .output()
        .expect("Failed to run top-scorers");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("Output should be UTF-8");
    let pos_c = stdout.find("Player C").expect("Player C should be listed");
    let pos_a = stdout.find("Player A").expect("Player A should be listed");
    let pos_b = stdout.find("Player B").expect("Player B should be listed");
    assert!(pos_c < pos_a, "9 goals should rank above 5");
    assert!(pos_a < pos_b, "5 goals should rank above 3");
}

#[test]
fn test_cli_delete_player_force() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("footy.db");

    footy(&db_path)
        .args(["add-player", "Lionel Messi"])
        .assert()
        .success();

    footy(&db_path)
        .args(["delete", "player", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted player"));

    footy(&db_path)
        .args(["player", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_team_roster_join_and_leave() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("footy.db");

    footy(&db_path)
        .args(["add-player", "Lionel Messi"])
        .assert()
        .success();
    footy(&db_path)
        .args(["add-team", "Barcelona"])
        .assert()
        .success();
    footy(&db_path).args(["join", "1", "1"]).assert().success();

    footy(&db_path)
        .args(["team", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lionel Messi"));

    footy(&db_path).args(["leave", "1", "1"]).assert().success();

    footy(&db_path)
        .args(["team", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No players on the roster"));
}

#[test]
fn test_cli_sql_query() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("footy.db");

    footy(&db_path)
        .args(["add-player", "Lionel Messi"])
        .assert()
        .success();

    footy(&db_path)
        .args(["sql", "SELECT name FROM players"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lionel Messi"));
}

#[test]
fn test_cli_status_counts() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("footy.db");

    footy(&db_path)
        .args(["add-player", "Lionel Messi"])
        .assert()
        .success();

    footy(&db_path)
        .args(["status", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"players\": 1"));
}
