use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

const LOOKUP_TIMEOUT_SECS: u64 = 10;

/// One weather observation for a place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherCondition {
  pub main: String,
  pub description: String,
  pub temp: f64,
  pub humidity: u32,
  pub wind_speed: f64,
  pub icon: String,
}

impl WeatherCondition {
  /// Returned for any failed or unrecognized lookup. Deterministic so a
  /// caller can render something sensible without special-casing failure.
  pub fn fallback() -> Self {
    Self {
      main: "Clear".to_string(),
      description: "clear sky".to_string(),
      temp: 22.0,
      humidity: 60,
      wind_speed: 5.0,
      icon: "01d".to_string(),
    }
  }
}

/// Boundary for weather lookups. Infallible from the caller's perspective:
/// network errors, bad responses, and unknown places all resolve to the
/// fallback record. No retries, no caching.
#[async_trait]
pub trait WeatherProvider {
  async fn fetch(&self, location: &str) -> WeatherCondition;
}

/// Offline lookup table for a handful of Bay Area places. This is the
/// default provider.
pub struct StaticWeather;

#[async_trait]
impl WeatherProvider for StaticWeather {
  async fn fetch(&self, location: &str) -> WeatherCondition {
    let entry = |main: &str, description: &str, temp: f64, humidity: u32, wind_speed: f64, icon: &str| {
      WeatherCondition {
        main: main.to_string(),
        description: description.to_string(),
        temp,
        humidity,
        wind_speed,
        icon: icon.to_string(),
      }
    };

    match location {
      "San Francisco" => entry("Clouds", "scattered clouds", 18.0, 75, 8.0, "03d"),
      "Oakland" => entry("Clear", "clear sky", 20.0, 65, 6.0, "01d"),
      "Berkeley" => entry("Mist", "light mist", 17.0, 80, 4.0, "50d"),
      "Sausalito" => entry("Clouds", "broken clouds", 16.0, 85, 10.0, "04d"),
      "Palo Alto" => entry("Clear", "clear sky", 23.0, 55, 3.0, "01d"),
      _ => WeatherCondition::fallback(),
    }
  }
}

/// Live lookup against the OpenWeatherMap current-weather endpoint
pub struct OpenWeather {
  client: reqwest::Client,
  api_key: String,
}

#[derive(Deserialize)]
struct ApiWeather {
  main: String,
  description: String,
  icon: String,
}

#[derive(Deserialize)]
struct ApiMain {
  temp: f64,
  humidity: u32,
}

#[derive(Deserialize)]
struct ApiWind {
  speed: f64,
}

#[derive(Deserialize)]
struct ApiResponse {
  weather: Vec<ApiWeather>,
  main: ApiMain,
  wind: ApiWind,
}

impl OpenWeather {
  pub fn new(api_key: String) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(std::time::Duration::from_secs(LOOKUP_TIMEOUT_SECS))
      .build()?;
    Ok(Self { client, api_key })
  }

  async fn lookup(&self, location: &str) -> Result<WeatherCondition> {
    let response = self
      .client
      .get("https://api.openweathermap.org/data/2.5/weather")
      .query(&[("q", location), ("appid", &self.api_key), ("units", "metric")])
      .send()
      .await?
      .error_for_status()?
      .json::<ApiResponse>()
      .await?;

    let weather = response
      .weather
      .into_iter()
      .next()
      .ok_or_else(|| anyhow::anyhow!("Weather payload had no condition entry"))?;

    Ok(WeatherCondition {
      main: weather.main,
      description: weather.description,
      temp: response.main.temp,
      humidity: response.main.humidity,
      wind_speed: response.wind.speed,
      icon: weather.icon,
    })
  }
}

#[async_trait]
impl WeatherProvider for OpenWeather {
  async fn fetch(&self, location: &str) -> WeatherCondition {
    match self.lookup(location).await {
      Ok(condition) => condition,
      Err(e) => {
        debug!("Weather lookup for {location} failed: {e:#}");
        WeatherCondition::fallback()
      }
    }
  }
}

/// Pick the active provider: live HTTP when an API key is configured,
/// the static table otherwise.
pub fn provider_from_env() -> Result<Box<dyn WeatherProvider + Send + Sync>> {
  match std::env::var("SPARK_WEATHER_API_KEY") {
    Ok(key) if !key.is_empty() => Ok(Box::new(OpenWeather::new(key)?)),
    _ => Ok(Box::new(StaticWeather)),
  }
}

/// Emoji for a condition label
pub fn emoji(condition: &str) -> &'static str {
  match condition.to_lowercase().as_str() {
    "clear" => "☀️",
    "clouds" => "☁️",
    "rain" => "🌧️",
    "drizzle" => "🌦️",
    "thunderstorm" => "⛈️",
    "snow" => "❄️",
    "mist" | "fog" => "🌫️",
    _ => "🌤️",
  }
}

/// One-line advice for the current conditions
pub fn recommendation(weather: &WeatherCondition) -> &'static str {
  match weather.main.as_str() {
    "Clear" if weather.temp > 20.0 => "Perfect weather for outdoor activities!",
    "Clear" => "Nice day, but bring a light jacket.",
    "Clouds" => "Partly cloudy, good for most outdoor activities.",
    "Rain" | "Drizzle" => "Rainy day, consider indoor activities.",
    "Thunderstorm" => "Stormy weather, best to stay indoors.",
    "Snow" => "Snowy day, perfect for winter activities.",
    _ => "Check the weather before heading out.",
  }
}

/// Date idea themes that fit the current conditions
pub fn suitable_ideas(weather: &WeatherCondition) -> Vec<&'static str> {
  match weather.main.as_str() {
    "Clear" if weather.temp > 20.0 => vec!["Picnic", "Beach", "Hiking", "Outdoor Dining"],
    "Clear" => vec!["Park Walk", "Outdoor Cafe", "Botanical Garden", "Farmers Market"],
    "Clouds" => vec!["Museum", "Shopping", "Brewery Tour", "Scenic Drive"],
    "Rain" | "Drizzle" => {
      vec!["Movie Theater", "Indoor Restaurant", "Art Gallery", "Cooking Class"]
    }
    "Thunderstorm" => vec!["Stay In Movie", "Board Games", "Indoor Restaurant", "Spa Day"],
    "Snow" => vec!["Ice Skating", "Hot Chocolate Cafe", "Ski Resort", "Cozy Cabin"],
    _ => vec!["Museum", "Indoor Restaurant", "Shopping", "Cafe Hopping"],
  }
}
