use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spark::auth::AuthStore;
use spark::catalog::Catalog;
use spark::commands;
use spark::idea::{Duration, PriceTier};
use spark::persist::FileRepository;
use spark::search::FiltersUpdate;
use spark::settings::{Language, Theme};
use spark::store::AppStore;
use spark::weather;

#[derive(Parser)]
#[command(name = "spark")]
#[command(
  about = "Spark - Date Idea Discovery\nFind, save, and rate local date ideas from your terminal"
)]
#[command(version)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

/// Search filter arguments shared with the persisted default filters
#[derive(Args)]
struct SearchArgs {
  /// Restrict to locations containing this text
  #[arg(short, long)]
  location: Option<String>,
  /// Price tiers to include ($ to $$$$), repeatable
  #[arg(short, long)]
  price: Vec<PriceTier>,
  /// Duration buckets to include, repeatable
  #[arg(short, long)]
  duration: Vec<Duration>,
  /// Vibe tags to include, repeatable
  #[arg(short = 'b', long)]
  vibe: Vec<String>,
  /// Persist these filters as your defaults
  #[arg(long)]
  apply: bool,
}

#[derive(Subcommand)]
enum Commands {
  /// List date ideas, optionally from one category
  List {
    /// Category: featured, outdoor, romantic, adventure, or budget
    category: Option<String>,
    /// Show descriptions and links
    #[arg(short, long)]
    verbose: bool,
  },
  /// Show a single date idea in full
  Show {
    /// Id of the date idea
    id: String,
  },
  /// The date idea of the day (same pick all day)
  Today,
  /// A random date idea
  Surprise,
  /// Save a date idea for later
  Save {
    /// Id of the date idea
    id: String,
  },
  /// Remove a date idea from your saved list
  Unsave {
    /// Id of the date idea
    id: String,
  },
  /// List your saved date ideas
  Saved,
  /// Rate a date idea from 1 to 5 stars
  Rate {
    /// Id of the date idea
    id: String,
    /// Stars, 1 to 5
    stars: u8,
  },
  /// Search and filter the catalog
  Search {
    #[command(flatten)]
    options: SearchArgs,
    /// Free-text query across title, description, and location
    terms: Vec<String>,
  },
  /// Current weather and date-idea advice for a place
  Weather {
    /// Place name
    #[arg(default_value = "San Francisco")]
    location: String,
  },
  /// View or change settings
  Settings {
    #[command(subcommand)]
    action: SettingsAction,
  },
  /// Sign in with a mock account
  Login {
    /// Email address
    email: String,
    /// Display name
    #[arg(short, long)]
    name: Option<String>,
  },
  /// Sign out
  Logout,
  /// Show the signed-in user
  Whoami,
  /// Clear all app data
  Reset {
    /// Skip confirmation
    #[arg(short, long)]
    force: bool,
  },
}

#[derive(Subcommand)]
enum SettingsAction {
  /// Print the current settings
  Show,
  /// Set the color theme
  Theme {
    /// One of: light, dark, system, sunset, midnight, neon, forest, ocean, coffee
    theme: Theme,
  },
  /// Set the language (en or es)
  Language { language: Language },
  /// Enable or disable notifications
  Notifications {
    /// true or false
    #[arg(action = clap::ArgAction::Set)]
    enabled: bool,
  },
  /// Toggle an experimental feature flag
  Flag {
    /// Flag name, e.g. achievements or debug-mode
    name: String,
    /// true or false
    #[arg(action = clap::ArgAction::Set)]
    enabled: bool,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  let catalog = Catalog::builtin();
  let mut store = AppStore::open(Box::new(FileRepository::new()?));

  match cli.command {
    Commands::List { category, verbose } => {
      commands::list_ideas(&catalog, &store, category.as_deref(), verbose)?;
    }
    Commands::Show { id } => {
      commands::show_idea(&catalog, &store, &id)?;
    }
    Commands::Today => {
      commands::today(&catalog, &store)?;
    }
    Commands::Surprise => {
      commands::surprise(&catalog, &store)?;
    }
    Commands::Save { id } => {
      commands::save_idea(&catalog, &mut store, &id)?;
    }
    Commands::Unsave { id } => {
      commands::unsave_idea(&mut store, &id)?;
    }
    Commands::Saved => {
      commands::list_saved(&catalog, &store)?;
    }
    Commands::Rate { id, stars } => {
      commands::rate_idea(&catalog, &mut store, &id, stars)?;
    }
    Commands::Search { options, terms } => {
      let update = FiltersUpdate {
        query: if terms.is_empty() { None } else { Some(terms.join(" ")) },
        location: options.location,
        price: if options.price.is_empty() { None } else { Some(options.price) },
        duration: if options.duration.is_empty() { None } else { Some(options.duration) },
        vibes: if options.vibe.is_empty() { None } else { Some(options.vibe) },
        map_view: None,
      };
      commands::search_ideas(&catalog, &mut store, update, options.apply)?;
    }
    Commands::Weather { location } => {
      let provider = weather::provider_from_env()?;
      commands::weather_report(provider.as_ref(), &location).await?;
    }
    Commands::Settings { action } => match action {
      SettingsAction::Show => commands::show_settings(&store)?,
      SettingsAction::Theme { theme } => commands::set_theme(&mut store, theme)?,
      SettingsAction::Language { language } => commands::set_language(&mut store, language)?,
      SettingsAction::Notifications { enabled } => {
        commands::set_notifications(&mut store, enabled)?;
      }
      SettingsAction::Flag { name, enabled } => commands::set_flag(&mut store, &name, enabled)?,
    },
    Commands::Login { email, name } => {
      let mut auth = AuthStore::open(Box::new(FileRepository::new()?));
      commands::login(&mut auth, &email, name.as_deref())?;
    }
    Commands::Logout => {
      let mut auth = AuthStore::open(Box::new(FileRepository::new()?));
      commands::logout(&mut auth)?;
    }
    Commands::Whoami => {
      let auth = AuthStore::open(Box::new(FileRepository::new()?));
      commands::whoami(&auth)?;
    }
    Commands::Reset { force } => {
      commands::reset(&mut store, force)?;
    }
  }

  Ok(())
}
