use anyhow::Result;
use colored::*;

use crate::auth::AuthStore;
use crate::catalog::Catalog;
use crate::idea::{DateIdea, VIBE_OPTIONS};
use crate::search::{filter_ideas, FiltersUpdate, SearchFilters};
use crate::settings::{Language, Theme};
use crate::store::AppStore;
use crate::weather::{self, WeatherProvider};

/// List a category of ideas, or the full catalog
pub fn list_ideas(
  catalog: &Catalog,
  store: &AppStore,
  category: Option<&str>,
  verbose: bool,
) -> Result<()> {
  let ideas = match category {
    Some(key) => catalog.category(key),
    None => catalog.all().iter().collect(),
  };

  for idea in &ideas {
    display_card(idea, store, verbose);
  }
  println!("{} idea(s)", ideas.len().to_string().bold());
  Ok(())
}

/// Show one idea in full
pub fn show_idea(catalog: &Catalog, store: &AppStore, id: &str) -> Result<()> {
  match catalog.get(id) {
    Some(idea) => display_card(idea, store, true),
    None => println!("{} No date idea with id {}", "!".yellow(), id.yellow()),
  }
  Ok(())
}

/// The deterministic pick for today's date
pub fn today(catalog: &Catalog, store: &AppStore) -> Result<()> {
  let today = chrono::Local::now().date_naive();
  match catalog.idea_of_the_day(today) {
    Some(idea) => {
      println!("{}", "Date idea of the day".magenta().bold());
      display_card(idea, store, true);
    }
    None => println!("The catalog is empty."),
  }
  Ok(())
}

/// A fresh random pick on every call
pub fn surprise(catalog: &Catalog, store: &AppStore) -> Result<()> {
  match catalog.random() {
    Some(idea) => {
      println!("{}", "Surprise!".magenta().bold());
      display_card(idea, store, true);
    }
    None => println!("The catalog is empty."),
  }
  Ok(())
}

/// Add an idea to the saved list
pub fn save_idea(catalog: &Catalog, store: &mut AppStore, id: &str) -> Result<()> {
  if catalog.get(id).is_none() {
    println!("{} Id {} is not in the catalog; saving it anyway", "!".yellow(), id.yellow());
  }
  store.save_idea(id);
  println!("{} Saved date idea {}", "✓".green(), id.cyan());
  Ok(())
}

/// Drop an idea from the saved list
pub fn unsave_idea(store: &mut AppStore, id: &str) -> Result<()> {
  store.unsave_idea(id);
  println!("{} Removed date idea {} from saved", "✓".green(), id.cyan());
  Ok(())
}

/// List saved ideas in catalog order; dangling saved ids have no card
pub fn list_saved(catalog: &Catalog, store: &AppStore) -> Result<()> {
  let saved: Vec<&DateIdea> =
    catalog.all().iter().filter(|idea| store.is_saved(&idea.id)).collect();

  if saved.is_empty() {
    println!("No saved date ideas yet. Try {}.", "spark save <id>".cyan());
    return Ok(());
  }

  for idea in &saved {
    display_card(idea, store, false);
  }
  println!("{} saved idea(s)", saved.len().to_string().bold());
  Ok(())
}

/// Rate an idea from 1 to 5 stars
pub fn rate_idea(catalog: &Catalog, store: &mut AppStore, id: &str, stars: u8) -> Result<()> {
  store.rate_idea(id, stars)?;
  let title = catalog.get(id).map(|idea| idea.title.as_str()).unwrap_or(id);
  println!("{} Rated {} {}", "✓".green(), title.cyan(), star_bar(stars).yellow());
  Ok(())
}

/// Filter the catalog. The CLI arguments overlay the persisted default
/// filters for this run only, unless `apply` persists them.
pub fn search_ideas(
  catalog: &Catalog,
  store: &mut AppStore,
  update: FiltersUpdate,
  apply: bool,
) -> Result<()> {
  let mut filters = store.filters().clone();
  filters.apply(update.clone());

  for vibe in &filters.vibes {
    if !VIBE_OPTIONS.contains(&vibe.as_str()) {
      println!(
        "{} {} is not a known vibe (options: {})",
        "!".yellow(),
        vibe.yellow(),
        VIBE_OPTIONS.join(", ")
      );
    }
  }

  let results = filter_ideas(catalog.all(), &filters);
  display_active_filters(&filters);

  if results.is_empty() {
    println!("No matches. Try adjusting your search or filters.");
  } else {
    for idea in &results {
      display_card(idea, store, false);
    }
    println!("{} match(es)", results.len().to_string().bold());
  }

  if apply {
    store.update_filters(update);
    println!("{} Filters saved as your defaults", "✓".green());
  }
  Ok(())
}

/// One weather card for a place, with date-idea advice
pub async fn weather_report(provider: &dyn WeatherProvider, location: &str) -> Result<()> {
  let condition = provider.fetch(location).await;

  println!(
    "{} {} — {} ({})",
    weather::emoji(&condition.main),
    location.cyan().bold(),
    condition.main,
    condition.description
  );
  println!(
    "   {}°C · humidity {}% · wind {} m/s",
    condition.temp, condition.humidity, condition.wind_speed
  );
  println!("   {}", weather::recommendation(&condition));
  println!("   Good fits: {}", weather::suitable_ideas(&condition).join(", "));
  Ok(())
}

/// Print the current settings snapshot
pub fn show_settings(store: &AppStore) -> Result<()> {
  let settings = store.settings();

  println!("{}", "Settings".bold());
  println!("  theme: {}", settings.theme.to_string().cyan());
  println!("  notifications: {}", settings.notifications);
  println!("  language: {}", settings.language.code());
  println!(
    "  accessibility: font {:?}, high contrast {}",
    settings.accessibility.font_size, settings.accessibility.high_contrast
  );
  println!(
    "  safety: alerts {}, location sharing {}",
    settings.safety.safety_alerts, settings.safety.location_sharing
  );
  println!(
    "  data: auto-sync {}, offline {}",
    settings.data_management.auto_sync, settings.data_management.offline_mode
  );
  println!("  experimental:");
  for (name, enabled) in settings.experimental.entries() {
    let marker = if enabled { "on".green() } else { "off".dimmed() };
    println!("    {name}: {marker}");
  }
  Ok(())
}

pub fn set_theme(store: &mut AppStore, theme: Theme) -> Result<()> {
  store.set_theme(theme);
  println!("{} Theme set to {}", "✓".green(), theme.to_string().cyan());
  Ok(())
}

pub fn set_language(store: &mut AppStore, language: Language) -> Result<()> {
  store.update_settings(crate::settings::SettingsUpdate {
    language: Some(language),
    ..Default::default()
  });
  println!("{} Language set to {}", "✓".green(), language.code().cyan());
  Ok(())
}

pub fn set_notifications(store: &mut AppStore, enabled: bool) -> Result<()> {
  store.update_settings(crate::settings::SettingsUpdate {
    notifications: Some(enabled),
    ..Default::default()
  });
  println!("{} Notifications {}", "✓".green(), if enabled { "enabled" } else { "disabled" });
  Ok(())
}

/// Toggle an experimental flag. Nested sub-records merge by replacement, so
/// the current flags are copied forward before the one flag changes.
pub fn set_flag(store: &mut AppStore, name: &str, enabled: bool) -> Result<()> {
  let mut flags = store.settings().experimental.clone();
  flags.set(name, enabled)?;
  store.update_settings(crate::settings::SettingsUpdate {
    experimental: Some(flags),
    ..Default::default()
  });
  println!("{} Flag {} {}", "✓".green(), name.cyan(), if enabled { "on" } else { "off" });
  Ok(())
}

pub fn login(auth: &mut AuthStore, email: &str, name: Option<&str>) -> Result<()> {
  let user = auth.login(email, name);
  println!(
    "{} Signed in as {} ({})",
    "✓".green(),
    user.display_name.as_deref().unwrap_or("anonymous").cyan(),
    user.email.as_deref().unwrap_or("-")
  );
  Ok(())
}

pub fn logout(auth: &mut AuthStore) -> Result<()> {
  auth.logout();
  println!("{} Signed out", "✓".green());
  Ok(())
}

pub fn whoami(auth: &AuthStore) -> Result<()> {
  match auth.current_user() {
    Some(user) => {
      println!("{} ({})", user.display_name.as_deref().unwrap_or("anonymous").cyan(), user.uid);
    }
    None => println!("Not signed in."),
  }
  Ok(())
}

/// Reset saved ideas, ratings, filters, and settings. Irreversible, so it
/// requires --force.
pub fn reset(store: &mut AppStore, force: bool) -> Result<()> {
  if !force {
    println!(
      "{} This clears saved ideas, ratings, and settings. Re-run with {} to confirm.",
      "!".yellow(),
      "--force".bold()
    );
    return Ok(());
  }

  store.clear();
  println!("{} All app data has been reset", "✓".green());
  Ok(())
}

fn star_bar(stars: u8) -> String {
  let filled = "★".repeat(stars as usize);
  let empty = "☆".repeat(5usize.saturating_sub(stars as usize));
  format!("{filled}{empty}")
}

fn display_active_filters(filters: &SearchFilters) {
  if filters.is_unfiltered() {
    return;
  }

  let mut parts = Vec::new();
  if !filters.query.is_empty() {
    parts.push(format!("query \"{}\"", filters.query));
  }
  if !filters.location.is_empty() {
    parts.push(format!("location \"{}\"", filters.location));
  }
  if !filters.price.is_empty() {
    let tiers: Vec<&str> = filters.price.iter().map(|p| p.symbol()).collect();
    parts.push(format!("price {}", tiers.join("/")));
  }
  if !filters.duration.is_empty() {
    let buckets: Vec<&str> = filters.duration.iter().map(|d| d.label()).collect();
    parts.push(format!("duration {}", buckets.join("/")));
  }
  if !filters.vibes.is_empty() {
    parts.push(format!("vibes {}", filters.vibes.join("/")));
  }
  println!("Filters: {}", parts.join(", ").dimmed());
}

/// Render one idea card
fn display_card(idea: &DateIdea, store: &AppStore, verbose: bool) {
  let saved_marker = if store.is_saved(&idea.id) { " ♥".red().to_string() } else { String::new() };

  println!(
    "{} {}{}",
    format!("[{}]", idea.id).dimmed(),
    idea.title.yellow().bold(),
    saved_marker
  );
  println!("   {}", idea.location.cyan());
  println!("   {} · {} · {}", idea.price, idea.duration, idea.vibes.join(", "));

  if let Some(stars) = store.rating(&idea.id) {
    println!("   {}", star_bar(stars).yellow());
  }

  if verbose {
    for line in wrap_text(&idea.description, 80) {
      println!("   {line}");
    }
    println!("   suits: {}", idea.weather_suitability.join(", ").dimmed());
    if let Some(link) = &idea.external_link {
      println!("   {}", link.blue().underline());
    }
  }
  println!();
}

/// Wrap text to fit within a specified width
fn wrap_text(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();

  for paragraph in text.split('\n') {
    if paragraph.trim().is_empty() {
      lines.push(String::new());
      continue;
    }

    let words: Vec<&str> = paragraph.split_whitespace().collect();
    let mut current_line = String::new();

    for word in words {
      if current_line.is_empty() {
        current_line = word.to_string();
      } else if current_line.len() + 1 + word.len() <= width {
        current_line.push(' ');
        current_line.push_str(word);
      } else {
        lines.push(current_line);
        current_line = word.to_string();
      }
    }

    if !current_line.is_empty() {
      lines.push(current_line);
    }
  }

  lines
}
