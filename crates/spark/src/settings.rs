use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color theme selection. `System` is a sentinel resolved at display time
/// against the host light/dark preference; everything else is an explicit
/// palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  Light,
  Dark,
  System,
  Sunset,
  Midnight,
  Neon,
  Forest,
  Ocean,
  Coffee,
}

impl Theme {
  pub const ALL: &'static [Theme] = &[
    Theme::Light,
    Theme::Dark,
    Theme::System,
    Theme::Sunset,
    Theme::Midnight,
    Theme::Neon,
    Theme::Forest,
    Theme::Ocean,
    Theme::Coffee,
  ];

  pub fn name(&self) -> &'static str {
    match self {
      Theme::Light => "light",
      Theme::Dark => "dark",
      Theme::System => "system",
      Theme::Sunset => "sunset",
      Theme::Midnight => "midnight",
      Theme::Neon => "neon",
      Theme::Forest => "forest",
      Theme::Ocean => "ocean",
      Theme::Coffee => "coffee",
    }
  }

  /// Resolve to the active palette name, mapping `system` onto the host
  /// preference
  pub fn resolve(&self, system_dark: bool) -> &'static str {
    match self {
      Theme::System if system_dark => "dark",
      Theme::System => "light",
      other => other.name(),
    }
  }
}

impl fmt::Display for Theme {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for Theme {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Theme::ALL
      .iter()
      .find(|theme| theme.name() == s.to_lowercase())
      .copied()
      .ok_or_else(|| anyhow!("Unknown theme: {s}"))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
  #[serde(rename = "en")]
  English,
  #[serde(rename = "es")]
  Spanish,
}

impl Language {
  pub fn code(&self) -> &'static str {
    match self {
      Language::English => "en",
      Language::Spanish => "es",
    }
  }
}

impl FromStr for Language {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "en" | "english" => Ok(Language::English),
      "es" | "spanish" => Ok(Language::Spanish),
      other => Err(anyhow!("Unknown language: {other} (expected en or es)")),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
  Small,
  Medium,
  Large,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilitySettings {
  pub font_size: FontSize,
  pub high_contrast: bool,
}

impl Default for AccessibilitySettings {
  fn default() -> Self {
    Self { font_size: FontSize::Medium, high_contrast: false }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SafetySettings {
  pub safety_alerts: bool,
  pub location_sharing: bool,
  pub emergency_contacts: Vec<String>,
}

impl Default for SafetySettings {
  fn default() -> Self {
    Self { safety_alerts: true, location_sharing: false, emergency_contacts: Vec::new() }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataManagementSettings {
  pub auto_sync: bool,
  pub offline_mode: bool,
}

impl Default for DataManagementSettings {
  fn default() -> Self {
    Self { auto_sync: true, offline_mode: false }
  }
}

/// Independently toggleable experimental features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperimentalFlags {
  pub animated_reactions: bool,
  pub ai_assistant: bool,
  pub achievements: bool,
  pub personality_test: bool,
  pub premium: bool,
  pub debug_mode: bool,
}

impl Default for ExperimentalFlags {
  fn default() -> Self {
    Self {
      animated_reactions: true,
      ai_assistant: true,
      achievements: true,
      personality_test: true,
      premium: false,
      debug_mode: false,
    }
  }
}

impl ExperimentalFlags {
  /// Flip one flag by name
  pub fn set(&mut self, name: &str, enabled: bool) -> anyhow::Result<()> {
    match name.to_lowercase().replace('_', "-").as_str() {
      "animated-reactions" => self.animated_reactions = enabled,
      "ai-assistant" => self.ai_assistant = enabled,
      "achievements" => self.achievements = enabled,
      "personality-test" => self.personality_test = enabled,
      "premium" => self.premium = enabled,
      "debug-mode" => self.debug_mode = enabled,
      other => return Err(anyhow!("Unknown experimental flag: {other}")),
    }
    Ok(())
  }

  pub fn entries(&self) -> Vec<(&'static str, bool)> {
    vec![
      ("animated-reactions", self.animated_reactions),
      ("ai-assistant", self.ai_assistant),
      ("achievements", self.achievements),
      ("personality-test", self.personality_test),
      ("premium", self.premium),
      ("debug-mode", self.debug_mode),
    ]
  }
}

/// User-configurable settings, persisted as one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
  pub theme: Theme,
  pub notifications: bool,
  pub language: Language,
  pub accessibility: AccessibilitySettings,
  pub safety: SafetySettings,
  pub data_management: DataManagementSettings,
  pub experimental: ExperimentalFlags,
}

impl Default for AppSettings {
  fn default() -> Self {
    Self {
      theme: Theme::System,
      notifications: true,
      language: Language::English,
      accessibility: AccessibilitySettings::default(),
      safety: SafetySettings::default(),
      data_management: DataManagementSettings::default(),
      experimental: ExperimentalFlags::default(),
    }
  }
}

impl AppSettings {
  /// Shallow-merge a partial update at the top level only.
  ///
  /// Supplying a nested sub-record (such as `accessibility` or
  /// `experimental`) replaces that sub-record wholesale; a caller that wants
  /// to change one nested field must pass the full sub-record with the rest
  /// of its fields carried over. Callers depend on the replace semantics, so
  /// this asymmetry is part of the contract.
  pub fn apply(&mut self, update: SettingsUpdate) {
    if let Some(theme) = update.theme {
      self.theme = theme;
    }
    if let Some(notifications) = update.notifications {
      self.notifications = notifications;
    }
    if let Some(language) = update.language {
      self.language = language;
    }
    if let Some(accessibility) = update.accessibility {
      self.accessibility = accessibility;
    }
    if let Some(safety) = update.safety {
      self.safety = safety;
    }
    if let Some(data_management) = update.data_management {
      self.data_management = data_management;
    }
    if let Some(experimental) = update.experimental {
      self.experimental = experimental;
    }
  }
}

/// Partial update for [`AppSettings`]
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
  pub theme: Option<Theme>,
  pub notifications: Option<bool>,
  pub language: Option<Language>,
  pub accessibility: Option<AccessibilitySettings>,
  pub safety: Option<SafetySettings>,
  pub data_management: Option<DataManagementSettings>,
  pub experimental: Option<ExperimentalFlags>,
}
