use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;

use crate::idea::{Coordinates, DateIdea, Duration, PriceTier};

/// The fixed, ordered list of date ideas the app ships with.
///
/// Loaded once at startup and never mutated; saved ids and ratings reference
/// records here by id only, so a dangling reference is not an error.
pub struct Catalog {
  ideas: Vec<DateIdea>,
}

impl Catalog {
  /// The built-in San Francisco catalog
  pub fn builtin() -> Self {
    Self { ideas: builtin_ideas() }
  }

  /// Build a catalog from an explicit list (used by tests)
  pub fn from_ideas(ideas: Vec<DateIdea>) -> Self {
    Self { ideas }
  }

  /// All ideas in insertion order
  pub fn all(&self) -> &[DateIdea] {
    &self.ideas
  }

  pub fn len(&self) -> usize {
    self.ideas.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ideas.is_empty()
  }

  /// Look up a single idea by id
  pub fn get(&self, id: &str) -> Option<&DateIdea> {
    self.ideas.iter().find(|idea| idea.id == id)
  }

  /// Deterministic pick for a calendar date.
  ///
  /// Same date always yields the same record for a given catalog size. The
  /// month term is zero-based, matching the original seed formula.
  pub fn idea_of_the_day(&self, date: NaiveDate) -> Option<&DateIdea> {
    if self.ideas.is_empty() {
      return None;
    }
    let seed = date.day() as usize + date.month0() as usize * 31;
    Some(&self.ideas[seed % self.ideas.len()])
  }

  /// Uniformly random pick; reshuffles on every call
  pub fn random(&self) -> Option<&DateIdea> {
    self.ideas.choose(&mut rand::thread_rng())
  }

  /// Named derived subsets. An unknown key falls back to the full catalog.
  pub fn category(&self, key: &str) -> Vec<&DateIdea> {
    match key.to_lowercase().as_str() {
      "featured" => self.ideas.iter().take(10).collect(),
      "outdoor" => {
        self.ideas.iter().filter(|i| i.suits_weather("Sunny") || i.suits_weather("Any")).collect()
      }
      "romantic" => self.ideas.iter().filter(|i| i.has_vibe("Romantic")).collect(),
      "adventure" => self.ideas.iter().filter(|i| i.has_vibe("Adventurous")).collect(),
      "budget" => self.ideas.iter().filter(|i| i.price == PriceTier::Budget).collect(),
      _ => self.ideas.iter().collect(),
    }
  }
}

#[allow(clippy::too_many_arguments)]
fn idea(
  id: &str,
  title: &str,
  description: &str,
  location: &str,
  price: PriceTier,
  duration: Duration,
  vibes: &[&str],
  weather: &[&str],
  link: &str,
  latitude: f64,
  longitude: f64,
) -> DateIdea {
  DateIdea {
    id: id.to_string(),
    title: title.to_string(),
    description: description.to_string(),
    location: location.to_string(),
    coordinates: Some(Coordinates { latitude, longitude }),
    price,
    duration,
    vibes: vibes.iter().map(|v| v.to_string()).collect(),
    weather_suitability: weather.iter().map(|w| w.to_string()).collect(),
    external_link: Some(link.to_string()),
  }
}

fn builtin_ideas() -> Vec<DateIdea> {
  use Duration::{OneToTwoHours, TwoToFourHours};
  use PriceTier::{Budget, Moderate, Pricey};

  vec![
    idea(
      "1",
      "Golden Gate Park Picnic",
      "Enjoy a romantic picnic in the beautiful Golden Gate Park. Bring a blanket, some snacks, and enjoy the serene surroundings.",
      "Golden Gate Park, San Francisco",
      Budget,
      TwoToFourHours,
      &["Romantic", "Chill"],
      &["Sunny", "Cloudy"],
      "https://goldengatepark.com",
      37.7694,
      -122.4862,
    ),
    idea(
      "2",
      "Exploratorium After Dark",
      "Experience the Exploratorium at night with adults-only access. Enjoy interactive exhibits, special programs, and cocktails.",
      "Pier 15, San Francisco",
      Moderate,
      TwoToFourHours,
      &["Creative", "Adventurous"],
      &["Any", "Rainy", "Snowy"],
      "https://www.exploratorium.edu/visit/calendar/after-dark",
      37.8017,
      -122.3973,
    ),
    idea(
      "3",
      "Twin Peaks Sunset View",
      "Hike up to Twin Peaks for a breathtaking panoramic view of San Francisco. Perfect for sunset watching and romantic moments.",
      "Twin Peaks, San Francisco",
      Budget,
      OneToTwoHours,
      &["Romantic", "Chill"],
      &["Sunny", "Cloudy"],
      "https://sfrecpark.org/Facilities/Facility/Details/Twin-Peaks-384",
      37.7544,
      -122.4477,
    ),
    idea(
      "4",
      "Ferry Building Farmers Market",
      "Explore the famous Ferry Building Farmers Market together. Sample local foods, pick up fresh ingredients, and enjoy the waterfront.",
      "Ferry Building, San Francisco",
      Moderate,
      TwoToFourHours,
      &["Creative", "Chill"],
      &["Sunny", "Cloudy"],
      "https://www.ferrybuildingmarketplace.com",
      37.7955,
      -122.3937,
    ),
    idea(
      "5",
      "Lands End Coastal Trail",
      "Hike the scenic Lands End Trail with stunning views of the Golden Gate Bridge and the Pacific Ocean. Perfect for nature lovers.",
      "Lands End, San Francisco",
      Budget,
      TwoToFourHours,
      &["Adventurous", "Chill"],
      &["Sunny", "Cloudy"],
      "https://www.nps.gov/goga/planyourvisit/landsend.htm",
      37.7825,
      -122.5055,
    ),
    idea(
      "6",
      "Emporium Arcade Bar",
      "Challenge each other to classic arcade games while enjoying craft beers at this nostalgic arcade bar.",
      "Divisadero St, San Francisco",
      Moderate,
      TwoToFourHours,
      &["Funny", "Adventurous"],
      &["Any", "Rainy", "Snowy"],
      "https://www.emporiumsf.com",
      37.7765,
      -122.4389,
    ),
    idea(
      "7",
      "San Francisco Botanical Garden",
      "Wander through beautiful gardens and exotic plant collections in Golden Gate Park. A peaceful escape in the city.",
      "Golden Gate Park, San Francisco",
      Budget,
      TwoToFourHours,
      &["Romantic", "Chill"],
      &["Sunny", "Cloudy"],
      "https://www.sfbg.org",
      37.7677,
      -122.4702,
    ),
    idea(
      "8",
      "Creativity Explored Art Workshop",
      "Take a pottery or art class together at this nonprofit art studio that supports artists with developmental disabilities.",
      "Mission District, San Francisco",
      Moderate,
      TwoToFourHours,
      &["Creative", "Romantic"],
      &["Any", "Rainy", "Snowy"],
      "https://www.creativityexplored.org",
      37.7599,
      -122.4148,
    ),
    idea(
      "9",
      "Anchor Brewing Company Tour",
      "Tour San Francisco's historic Anchor Brewing Company and sample their craft beers in the tasting room.",
      "Potrero Hill, San Francisco",
      Moderate,
      TwoToFourHours,
      &["Chill", "Adventurous"],
      &["Any", "Rainy", "Snowy"],
      "https://www.anchorbrewing.com",
      37.7634,
      -122.4001,
    ),
    idea(
      "10",
      "Presidio Night Stargazing",
      "Head to the Presidio for stargazing with less light pollution than downtown. Bring a blanket and hot drinks.",
      "Presidio, San Francisco",
      Budget,
      OneToTwoHours,
      &["Romantic", "Chill"],
      &["Clear", "Any"],
      "https://www.presidio.gov",
      37.7989,
      -122.4662,
    ),
    idea(
      "11",
      "Ferry Plaza Farmers Market",
      "Browse local produce, crafts, and food stalls at this famous farmers market. Pick up ingredients for a meal to cook together later.",
      "Embarcadero, San Francisco",
      Moderate,
      OneToTwoHours,
      &["Chill", "Creative"],
      &["Sunny", "Cloudy"],
      "https://cuesa.org/markets/ferry-plaza-farmers-market",
      37.7955,
      -122.3937,
    ),
    idea(
      "12",
      "Palace of Fine Arts Stroll",
      "Walk around the beautiful Palace of Fine Arts and its lagoon. A perfect spot for romantic photos and quiet conversation.",
      "Marina District, San Francisco",
      Budget,
      OneToTwoHours,
      &["Romantic", "Chill"],
      &["Sunny", "Cloudy"],
      "https://palaceoffinearts.org",
      37.8029,
      -122.4484,
    ),
    idea(
      "13",
      "Kayaking in McCovey Cove",
      "Rent kayaks and paddle around McCovey Cove by Oracle Park. If you're lucky, you might catch a home run ball during a Giants game!",
      "Mission Bay, San Francisco",
      Moderate,
      TwoToFourHours,
      &["Adventurous", "Romantic"],
      &["Sunny", "Cloudy"],
      "https://cityseakayak.com",
      37.7786,
      -122.3893,
    ),
    idea(
      "14",
      "Paint and Sip at Pinot's Palette",
      "Enjoy wine while following an instructor to create your own paintings. No experience necessary!",
      "Fisherman's Wharf, San Francisco",
      Moderate,
      TwoToFourHours,
      &["Creative", "Romantic"],
      &["Any", "Rainy", "Snowy"],
      "https://www.pinotspalette.com/fishermanswharf",
      37.8080,
      -122.4177,
    ),
    idea(
      "15",
      "Cobb's Comedy Club",
      "Laugh together at a stand-up comedy show at this famous San Francisco comedy venue.",
      "North Beach, San Francisco",
      Moderate,
      TwoToFourHours,
      &["Funny", "Chill"],
      &["Any", "Rainy", "Snowy"],
      "https://www.cobbscomedy.com",
      37.7991,
      -122.4184,
    ),
    idea(
      "16",
      "Bi-Rite Creamery Ice Cream Tour",
      "Visit the famous Bi-Rite Creamery and sample their artisanal ice cream flavors. Then walk to nearby Dolores Park to enjoy your treats.",
      "Mission District, San Francisco",
      Budget,
      OneToTwoHours,
      &["Funny", "Chill"],
      &["Sunny", "Any"],
      "https://biritemarket.com/creamery",
      37.7614,
      -122.4256,
    ),
    idea(
      "17",
      "Mission Rock Climbing Gym",
      "Challenge yourselves with indoor climbing walls at this popular San Francisco climbing gym. Great for beginners and experienced climbers alike.",
      "Dogpatch, San Francisco",
      Moderate,
      TwoToFourHours,
      &["Adventurous", "Funny"],
      &["Any", "Rainy", "Snowy"],
      "https://touchstoneclimbing.com/mission-cliffs",
      37.7594,
      -122.4066,
    ),
    idea(
      "18",
      "City Lights Bookstore Date",
      "Browse books together at this historic San Francisco bookstore, then discuss your finds at a nearby cafe in North Beach.",
      "North Beach, San Francisco",
      Budget,
      TwoToFourHours,
      &["Chill", "Creative"],
      &["Any", "Rainy", "Snowy"],
      "https://citylights.com",
      37.7979,
      -122.4037,
    ),
    idea(
      "19",
      "Top of the Mark Sunset Cocktails",
      "Enjoy cocktails with a 360-degree view of San Francisco at this iconic rooftop bar in the Mark Hopkins Hotel.",
      "Nob Hill, San Francisco",
      Pricey,
      TwoToFourHours,
      &["Romantic", "Chill"],
      &["Any", "Cloudy"],
      "https://www.topofthemark.com",
      37.7924,
      -122.4102,
    ),
    idea(
      "20",
      "Salsa Dancing at El Rio",
      "Learn salsa dancing together at this popular Mission District venue that hosts regular dance nights.",
      "Mission District, San Francisco",
      Moderate,
      TwoToFourHours,
      &["Romantic", "Adventurous"],
      &["Any", "Rainy", "Snowy"],
      "https://www.elriosf.com",
      37.7467,
      -122.4211,
    ),
  ]
}
