use serde::{Deserialize, Serialize};

use crate::idea::{DateIdea, Duration, PriceTier};

/// What the user is filtering the catalog by.
///
/// An empty selection on any dimension means that dimension is a
/// pass-through, not "match nothing".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
  pub query: String,
  pub location: String,
  pub price: Vec<PriceTier>,
  pub duration: Vec<Duration>,
  pub vibes: Vec<String>,
  pub map_view: bool,
}

impl Default for SearchFilters {
  fn default() -> Self {
    Self {
      query: String::new(),
      location: String::new(),
      price: Vec::new(),
      duration: Vec::new(),
      vibes: Vec::new(),
      map_view: false,
    }
  }
}

impl SearchFilters {
  /// True when every dimension passes everything through
  pub fn is_unfiltered(&self) -> bool {
    self.query.is_empty()
      && self.location.is_empty()
      && self.price.is_empty()
      && self.duration.is_empty()
      && self.vibes.is_empty()
  }

  /// Shallow-merge a partial update; fields left as `None` keep their value
  pub fn apply(&mut self, update: FiltersUpdate) {
    if let Some(query) = update.query {
      self.query = query;
    }
    if let Some(location) = update.location {
      self.location = location;
    }
    if let Some(price) = update.price {
      self.price = price;
    }
    if let Some(duration) = update.duration {
      self.duration = duration;
    }
    if let Some(vibes) = update.vibes {
      self.vibes = vibes;
    }
    if let Some(map_view) = update.map_view {
      self.map_view = map_view;
    }
  }
}

/// Partial update for [`SearchFilters`]
#[derive(Debug, Clone, Default)]
pub struct FiltersUpdate {
  pub query: Option<String>,
  pub location: Option<String>,
  pub price: Option<Vec<PriceTier>>,
  pub duration: Option<Vec<Duration>>,
  pub vibes: Option<Vec<String>>,
  pub map_view: Option<bool>,
}

/// Reduce the catalog against a set of filters.
///
/// Pure and deterministic: dimensions AND together, selections within a
/// dimension OR together, and the output preserves catalog order.
pub fn filter_ideas<'a>(ideas: &'a [DateIdea], filters: &SearchFilters) -> Vec<&'a DateIdea> {
  let mut filtered: Vec<&DateIdea> = ideas.iter().collect();

  if !filters.query.is_empty() {
    let query = filters.query.to_lowercase();
    filtered.retain(|idea| {
      idea.title.to_lowercase().contains(&query)
        || idea.description.to_lowercase().contains(&query)
        || idea.location.to_lowercase().contains(&query)
    });
  }

  if !filters.location.is_empty() {
    let location = filters.location.to_lowercase();
    filtered.retain(|idea| idea.location.to_lowercase().contains(&location));
  }

  if !filters.price.is_empty() {
    filtered.retain(|idea| filters.price.contains(&idea.price));
  }

  if !filters.duration.is_empty() {
    filtered.retain(|idea| filters.duration.contains(&idea.duration));
  }

  if !filters.vibes.is_empty() {
    filtered.retain(|idea| idea.vibes.iter().any(|vibe| filters.vibes.contains(vibe)));
  }

  filtered
}
