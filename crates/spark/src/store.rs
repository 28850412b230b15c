use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::warn;

use crate::persist::StateRepository;
use crate::search::{FiltersUpdate, SearchFilters};
use crate::settings::{AppSettings, SettingsUpdate, Theme};

/// The persisted app snapshot: saved ids, ratings, default search filters,
/// and settings, serialized with the `app-state` blob's key names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
  pub saved_date_ideas: HashSet<String>,
  pub date_ratings: HashMap<String, u8>,
  pub search_filters: SearchFilters,
  pub settings: AppSettings,
}

/// In-memory store over the app snapshot with write-through persistence.
///
/// Every mutation updates memory synchronously, then persists the full
/// snapshot best-effort; a failed write is logged and never rolls the
/// in-memory state back.
pub struct AppStore {
  state: AppState,
  repo: Box<dyn StateRepository>,
}

impl AppStore {
  /// Load the persisted snapshot, falling back to defaults when there is
  /// none or it cannot be read
  pub fn open(repo: Box<dyn StateRepository>) -> Self {
    let state = match repo.load_app() {
      Ok(Some(state)) => state,
      Ok(None) => AppState::default(),
      Err(e) => {
        warn!("Could not load app state, starting fresh: {e:#}");
        AppState::default()
      }
    };
    Self { state, repo }
  }

  pub fn state(&self) -> &AppState {
    &self.state
  }

  /// Mark an idea as saved. Saving an already-saved id is a no-op.
  pub fn save_idea(&mut self, id: &str) {
    self.state.saved_date_ideas.insert(id.to_string());
    self.persist();
  }

  /// Remove an idea from the saved list. Unsaving a non-saved id is a no-op.
  pub fn unsave_idea(&mut self, id: &str) {
    self.state.saved_date_ideas.remove(id);
    self.persist();
  }

  pub fn is_saved(&self, id: &str) -> bool {
    self.state.saved_date_ideas.contains(id)
  }

  pub fn saved_ids(&self) -> impl Iterator<Item = &str> {
    self.state.saved_date_ideas.iter().map(|id| id.as_str())
  }

  /// Rate an idea from 1 to 5 stars, overwriting any prior rating
  pub fn rate_idea(&mut self, id: &str, stars: u8) -> Result<()> {
    if !(1..=5).contains(&stars) {
      return Err(anyhow!("Rating must be between 1 and 5, got {stars}"));
    }
    self.state.date_ratings.insert(id.to_string(), stars);
    self.persist();
    Ok(())
  }

  /// The stored rating, or `None` for unrated ideas
  pub fn rating(&self, id: &str) -> Option<u8> {
    self.state.date_ratings.get(id).copied()
  }

  pub fn filters(&self) -> &SearchFilters {
    &self.state.search_filters
  }

  /// Merge a partial filter update into the persisted default filters
  pub fn update_filters(&mut self, update: FiltersUpdate) {
    self.state.search_filters.apply(update);
    self.persist();
  }

  pub fn settings(&self) -> &AppSettings {
    &self.state.settings
  }

  /// Merge a partial settings update; see [`AppSettings::apply`] for the
  /// nested-record replace semantics
  pub fn update_settings(&mut self, update: SettingsUpdate) {
    self.state.settings.apply(update);
    self.persist();
  }

  pub fn set_theme(&mut self, theme: Theme) {
    self.state.settings.theme = theme;
    self.persist();
  }

  /// Reset saved ideas, ratings, filters, and settings to defaults and drop
  /// the persisted snapshots
  pub fn clear(&mut self) {
    self.state = AppState::default();
    if let Err(e) = self.repo.clear() {
      warn!("Could not clear persisted state: {e:#}");
    }
  }

  fn persist(&self) {
    if let Err(e) = self.repo.save_app(&self.state) {
      warn!("Could not persist app state: {e:#}");
    }
  }
}
