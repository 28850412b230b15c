use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use serial_test::serial;
use std::process::Command;

/// Helper to create a Command for the `spark` binary with a temporary state
/// root and no live weather key.
fn spark_cmd(state_dir: &assert_fs::TempDir) -> Command {
  let mut cmd = Command::cargo_bin("spark").expect("binary exists");
  cmd.env("SPARK_STATE_ROOT", state_dir.path());
  cmd.env_remove("SPARK_WEATHER_API_KEY");
  cmd
}

#[test]
#[serial]
fn test_list_and_show() {
  let temp = assert_fs::TempDir::new().unwrap();

  spark_cmd(&temp)
    .args(["list"])
    .assert()
    .success()
    .stdout(contains("Golden Gate Park Picnic").and(contains("20 idea(s)")));

  spark_cmd(&temp)
    .args(["list", "budget"])
    .assert()
    .success()
    .stdout(contains("8 idea(s)"));

  // unknown category falls back to the full catalog
  spark_cmd(&temp)
    .args(["list", "nonsense"])
    .assert()
    .success()
    .stdout(contains("20 idea(s)"));

  spark_cmd(&temp)
    .args(["show", "3"])
    .assert()
    .success()
    .stdout(contains("Twin Peaks Sunset View"));

  spark_cmd(&temp)
    .args(["show", "999"])
    .assert()
    .success()
    .stdout(contains("No date idea with id"));

  temp.close().unwrap();
}

#[test]
#[serial]
fn test_save_rate_flow() {
  let temp = assert_fs::TempDir::new().unwrap();

  spark_cmd(&temp)
    .args(["save", "3"])
    .assert()
    .success()
    .stdout(contains("Saved date idea"));

  spark_cmd(&temp)
    .args(["saved"])
    .assert()
    .success()
    .stdout(contains("Twin Peaks Sunset View").and(contains("1 saved idea(s)")));

  spark_cmd(&temp).args(["rate", "3", "5"]).assert().success().stdout(contains("Rated"));

  // out of range ratings are rejected
  spark_cmd(&temp)
    .args(["rate", "3", "9"])
    .assert()
    .failure()
    .stderr(contains("between 1 and 5"));

  spark_cmd(&temp)
    .args(["unsave", "3"])
    .assert()
    .success()
    .stdout(contains("Removed date idea"));

  spark_cmd(&temp).args(["saved"]).assert().success().stdout(contains("No saved date ideas"));

  temp.close().unwrap();
}

#[test]
#[serial]
fn test_search_filters() {
  let temp = assert_fs::TempDir::new().unwrap();

  spark_cmd(&temp)
    .args(["search", "picnic"])
    .assert()
    .success()
    .stdout(contains("Golden Gate Park Picnic").and(contains("1 match(es)")));

  spark_cmd(&temp)
    .args(["search", "--price", "$$$"])
    .assert()
    .success()
    .stdout(contains("Top of the Mark").and(contains("1 match(es)")));

  spark_cmd(&temp)
    .args(["search", "--location", "north beach"])
    .assert()
    .success()
    .stdout(contains("2 match(es)"));

  spark_cmd(&temp)
    .args(["search", "zzz-no-such-idea"])
    .assert()
    .success()
    .stdout(contains("No matches"));

  temp.close().unwrap();
}

#[test]
#[serial]
fn test_settings_flow() {
  let temp = assert_fs::TempDir::new().unwrap();

  spark_cmd(&temp)
    .args(["settings", "theme", "midnight"])
    .assert()
    .success()
    .stdout(contains("Theme set to"));

  spark_cmd(&temp)
    .args(["settings", "show"])
    .assert()
    .success()
    .stdout(contains("midnight"));

  spark_cmd(&temp)
    .args(["settings", "flag", "premium", "true"])
    .assert()
    .success()
    .stdout(contains("premium"));

  spark_cmd(&temp)
    .args(["settings", "flag", "warp-drive", "true"])
    .assert()
    .failure()
    .stderr(contains("Unknown experimental flag"));

  temp.close().unwrap();
}

#[test]
#[serial]
fn test_weather_falls_back_for_unknown_place() {
  let temp = assert_fs::TempDir::new().unwrap();

  spark_cmd(&temp)
    .args(["weather", "Atlantis"])
    .assert()
    .success()
    .stdout(contains("clear sky"));

  spark_cmd(&temp)
    .args(["weather", "Berkeley"])
    .assert()
    .success()
    .stdout(contains("light mist"));

  temp.close().unwrap();
}

#[test]
#[serial]
fn test_today_is_stable_within_a_day() {
  let temp = assert_fs::TempDir::new().unwrap();

  let first = spark_cmd(&temp).args(["today"]).output().unwrap();
  let second = spark_cmd(&temp).args(["today"]).output().unwrap();
  assert!(first.status.success());
  assert_eq!(first.stdout, second.stdout);

  temp.close().unwrap();
}

#[test]
#[serial]
fn test_reset_requires_force() {
  let temp = assert_fs::TempDir::new().unwrap();

  spark_cmd(&temp).args(["save", "1"]).assert().success();

  spark_cmd(&temp)
    .args(["reset"])
    .assert()
    .success()
    .stdout(contains("--force"));

  // not confirmed, so the saved list survives
  spark_cmd(&temp).args(["saved"]).assert().success().stdout(contains("1 saved idea(s)"));

  spark_cmd(&temp)
    .args(["reset", "--force"])
    .assert()
    .success()
    .stdout(contains("reset"));

  spark_cmd(&temp).args(["saved"]).assert().success().stdout(contains("No saved date ideas"));

  temp.close().unwrap();
}

#[test]
#[serial]
fn test_login_logout() {
  let temp = assert_fs::TempDir::new().unwrap();

  spark_cmd(&temp)
    .args(["login", "sam@example.com", "--name", "Sam"])
    .assert()
    .success()
    .stdout(contains("Signed in as"));

  spark_cmd(&temp).args(["whoami"]).assert().success().stdout(contains("Sam"));

  spark_cmd(&temp).args(["logout"]).assert().success().stdout(contains("Signed out"));

  spark_cmd(&temp).args(["whoami"]).assert().success().stdout(contains("Not signed in"));

  temp.close().unwrap();
}
