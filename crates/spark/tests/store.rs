use anyhow::Result;
use serial_test::serial;
use spark::auth::AuthStore;
use spark::idea::PriceTier;
use spark::persist::{get_state_root, FileRepository, MemoryRepository, StateRepository};
use spark::search::FiltersUpdate;
use spark::settings::{SettingsUpdate, Theme};
use spark::store::{AppState, AppStore};
use std::env;
use std::fs;
use tempfile::TempDir;

fn memory_store() -> (MemoryRepository, AppStore) {
  let repo = MemoryRepository::new();
  let store = AppStore::open(Box::new(repo.clone()));
  (repo, store)
}

#[cfg(test)]
mod app_store_tests {
  use super::*;

  #[test]
  fn test_save_then_is_saved() {
    let (_repo, mut store) = memory_store();

    assert!(!store.is_saved("7"));
    store.save_idea("7");
    assert!(store.is_saved("7"));
  }

  #[test]
  fn test_save_is_idempotent() {
    let (_repo, mut store) = memory_store();

    store.save_idea("7");
    let size = store.state().saved_date_ideas.len();
    store.save_idea("7");
    assert_eq!(store.state().saved_date_ideas.len(), size);
  }

  #[test]
  fn test_unsave_non_saved_is_noop() {
    let (_repo, mut store) = memory_store();

    store.save_idea("1");
    let before = store.state().clone();
    store.unsave_idea("99");
    assert_eq!(store.state(), &before);
  }

  #[test]
  fn test_unsave_removes_membership() {
    let (_repo, mut store) = memory_store();

    store.save_idea("4");
    store.unsave_idea("4");
    assert!(!store.is_saved("4"));
  }

  #[test]
  fn test_rate_and_overwrite() -> Result<()> {
    let (_repo, mut store) = memory_store();

    store.rate_idea("3", 4)?;
    assert_eq!(store.rating("3"), Some(4));

    // last write wins
    store.rate_idea("3", 2)?;
    assert_eq!(store.rating("3"), Some(2));
    Ok(())
  }

  #[test]
  fn test_rate_rejects_out_of_range() {
    let (_repo, mut store) = memory_store();

    for bad in [0u8, 6, 200] {
      let result = store.rate_idea("3", bad);
      assert!(result.is_err());
      assert!(result.unwrap_err().to_string().contains("between 1 and 5"));
    }

    // rejected ratings leave no partial mutation behind
    assert_eq!(store.rating("3"), None);
  }

  #[test]
  fn test_unrated_is_absent() {
    let (_repo, store) = memory_store();
    assert_eq!(store.rating("nope"), None);
  }

  #[test]
  fn test_every_mutation_writes_through() -> Result<()> {
    let (repo, mut store) = memory_store();

    store.save_idea("2");
    assert_eq!(repo.app_snapshot().as_ref(), Some(store.state()));

    store.rate_idea("2", 5)?;
    assert_eq!(repo.app_snapshot().as_ref(), Some(store.state()));

    store.set_theme(Theme::Ocean);
    assert_eq!(repo.app_snapshot().as_ref(), Some(store.state()));
    Ok(())
  }

  #[test]
  fn test_write_failure_keeps_memory_authoritative() {
    let (repo, mut store) = memory_store();

    store.save_idea("1");
    repo.fail_writes(true);
    store.save_idea("2");

    // memory moved forward, the durable copy did not
    assert!(store.is_saved("2"));
    let snapshot = repo.app_snapshot().unwrap();
    assert!(!snapshot.saved_date_ideas.contains("2"));
  }

  #[test]
  fn test_update_filters_persists_defaults() {
    let (repo, mut store) = memory_store();

    store.update_filters(FiltersUpdate {
      price: Some(vec![PriceTier::Budget]),
      ..Default::default()
    });

    assert_eq!(store.filters().price, vec![PriceTier::Budget]);
    assert_eq!(repo.app_snapshot().unwrap().search_filters.price, vec![PriceTier::Budget]);
  }

  #[test]
  fn test_update_settings_shallow_merge() {
    let (_repo, mut store) = memory_store();

    store.update_settings(SettingsUpdate { notifications: Some(false), ..Default::default() });
    assert!(!store.settings().notifications);
    assert_eq!(store.settings().theme, Theme::System);
  }

  #[test]
  fn test_open_restores_persisted_snapshot() -> Result<()> {
    let repo = MemoryRepository::new();
    {
      let mut store = AppStore::open(Box::new(repo.clone()));
      store.save_idea("11");
      store.rate_idea("11", 5)?;
    }

    let reopened = AppStore::open(Box::new(repo));
    assert!(reopened.is_saved("11"));
    assert_eq!(reopened.rating("11"), Some(5));
    Ok(())
  }

  #[test]
  fn test_clear_resets_everything() -> Result<()> {
    let (repo, mut store) = memory_store();

    store.save_idea("1");
    store.rate_idea("1", 3)?;
    store.set_theme(Theme::Neon);

    store.clear();
    assert_eq!(store.state(), &AppState::default());
    assert!(repo.app_snapshot().is_none());
    Ok(())
  }
}

#[cfg(test)]
mod file_repository_tests {
  use super::*;

  fn setup_temp_state_root() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    env::set_var("SPARK_STATE_ROOT", temp_dir.path());
    temp_dir
  }

  #[test]
  #[serial]
  fn test_state_root_env_override() -> Result<()> {
    let temp = setup_temp_state_root();
    let root = get_state_root()?;
    assert_eq!(root, temp.path());
    Ok(())
  }

  #[test]
  #[serial]
  fn test_state_survives_reopen() -> Result<()> {
    let _temp = setup_temp_state_root();

    {
      let mut store = AppStore::open(Box::new(FileRepository::new()?));
      store.save_idea("5");
      store.rate_idea("5", 4)?;
      store.set_theme(Theme::Coffee);
    }

    let store = AppStore::open(Box::new(FileRepository::new()?));
    assert!(store.is_saved("5"));
    assert_eq!(store.rating("5"), Some(4));
    assert_eq!(store.settings().theme, Theme::Coffee);
    Ok(())
  }

  #[test]
  #[serial]
  fn test_corrupt_snapshot_falls_back_to_defaults() -> Result<()> {
    let temp = setup_temp_state_root();

    fs::create_dir_all(temp.path())?;
    fs::write(temp.path().join("app-state.json"), "{ not json")?;

    let store = AppStore::open(Box::new(FileRepository::new()?));
    assert_eq!(store.state(), &AppState::default());
    Ok(())
  }

  #[test]
  #[serial]
  fn test_clear_removes_snapshot_files() -> Result<()> {
    let temp = setup_temp_state_root();

    let mut store = AppStore::open(Box::new(FileRepository::new()?));
    store.save_idea("9");
    assert!(temp.path().join("app-state.json").exists());

    store.clear();
    assert!(!temp.path().join("app-state.json").exists());
    Ok(())
  }

  #[test]
  #[serial]
  fn test_auth_session_round_trip() -> Result<()> {
    let temp = setup_temp_state_root();

    {
      let mut auth = AuthStore::open(Box::new(FileRepository::new()?));
      auth.login("sam@example.com", Some("Sam"));
    }
    assert!(temp.path().join("auth-state.json").exists());

    let mut auth = AuthStore::open(Box::new(FileRepository::new()?));
    let user = auth.current_user().expect("session restored").clone();
    assert_eq!(user.email.as_deref(), Some("sam@example.com"));
    assert_eq!(user.display_name.as_deref(), Some("Sam"));

    auth.logout();
    let auth = AuthStore::open(Box::new(FileRepository::new()?));
    assert!(auth.current_user().is_none());
    Ok(())
  }

  #[test]
  #[serial]
  fn test_repository_trait_blob_round_trip() -> Result<()> {
    let _temp = setup_temp_state_root();
    let repo = FileRepository::new()?;

    assert!(repo.load_app()?.is_none());

    let mut state = AppState::default();
    state.saved_date_ideas.insert("13".to_string());
    repo.save_app(&state)?;

    let loaded = repo.load_app()?.expect("snapshot saved");
    assert_eq!(loaded, state);
    Ok(())
  }
}
