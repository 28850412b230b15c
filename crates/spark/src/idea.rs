use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vibe tags offered by the search filters
pub const VIBE_OPTIONS: &[&str] = &[
  "Romantic",
  "Adventurous",
  "Relaxing",
  "Cultural",
  "Foodie",
  "Outdoorsy",
  "Creative",
  "Educational",
  "Sporty",
  "Luxurious",
];

/// Symbolic price level of a date idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceTier {
  #[serde(rename = "$")]
  Budget,
  #[serde(rename = "$$")]
  Moderate,
  #[serde(rename = "$$$")]
  Pricey,
  #[serde(rename = "$$$$")]
  Splurge,
}

impl PriceTier {
  pub fn symbol(&self) -> &'static str {
    match self {
      PriceTier::Budget => "$",
      PriceTier::Moderate => "$$",
      PriceTier::Pricey => "$$$",
      PriceTier::Splurge => "$$$$",
    }
  }
}

impl fmt::Display for PriceTier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl FromStr for PriceTier {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "$" | "budget" => Ok(PriceTier::Budget),
      "$$" | "moderate" => Ok(PriceTier::Moderate),
      "$$$" | "pricey" => Ok(PriceTier::Pricey),
      "$$$$" | "splurge" => Ok(PriceTier::Splurge),
      other => Err(anyhow!("Unknown price tier: {other} (expected $, $$, $$$ or $$$$)")),
    }
  }
}

/// How long a date idea takes, bucketed into the labels the filter UI offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Duration {
  #[serde(rename = "< 1 hour")]
  UnderOneHour,
  #[serde(rename = "1-2 hours")]
  OneToTwoHours,
  #[serde(rename = "2-4 hours")]
  TwoToFourHours,
  #[serde(rename = "Half day")]
  HalfDay,
  #[serde(rename = "Full day")]
  FullDay,
}

impl Duration {
  pub fn label(&self) -> &'static str {
    match self {
      Duration::UnderOneHour => "< 1 hour",
      Duration::OneToTwoHours => "1-2 hours",
      Duration::TwoToFourHours => "2-4 hours",
      Duration::HalfDay => "Half day",
      Duration::FullDay => "Full day",
    }
  }
}

impl fmt::Display for Duration {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.label())
  }
}

impl FromStr for Duration {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "< 1 hour" | "quick" => Ok(Duration::UnderOneHour),
      "1-2 hours" | "short" => Ok(Duration::OneToTwoHours),
      "2-4 hours" | "medium" => Ok(Duration::TwoToFourHours),
      "half day" | "half-day" => Ok(Duration::HalfDay),
      "full day" | "full-day" => Ok(Duration::FullDay),
      other => Err(anyhow!(
        "Unknown duration: {other} (expected '< 1 hour', '1-2 hours', '2-4 hours', 'Half day' or 'Full day')"
      )),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
  pub latitude: f64,
  pub longitude: f64,
}

/// A single catalog record. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateIdea {
  pub id: String,
  pub title: String,
  pub description: String,
  pub location: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub coordinates: Option<Coordinates>,
  pub price: PriceTier,
  pub duration: Duration,
  pub vibes: Vec<String>,
  pub weather_suitability: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub external_link: Option<String>,
}

impl DateIdea {
  pub fn has_vibe(&self, vibe: &str) -> bool {
    self.vibes.iter().any(|v| v == vibe)
  }

  pub fn suits_weather(&self, tag: &str) -> bool {
    self.weather_suitability.iter().any(|t| t == tag)
  }
}
