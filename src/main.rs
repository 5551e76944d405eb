use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

use fridge2table::{AppConfig, AppError, Fridge2Table, SearchError, Session, SortMode, ViewOptions};

mod output;

/// Find recipes that use all of the ingredients you already have.
#[derive(Parser)]
#[command(name = "fridge2table", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory for favorites and preferences (default: platform data directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(clap::Args)]
struct ViewArgs {
    /// Sort order: default, name-az, name-za, time-asc, time-desc
    #[arg(short, long, default_value = "default")]
    sort: SortMode,

    /// Only show quick meals (20 minutes or less)
    #[arg(short, long)]
    quick: bool,

    /// Only show saved favorites
    #[arg(short, long)]
    favorites: bool,

    /// Output results as JSON
    #[arg(long)]
    json: bool,
}

impl ViewArgs {
    fn options(&self) -> ViewOptions {
        ViewOptions {
            sort: self.sort,
            quick_only: self.quick,
            favorites_only: self.favorites,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search recipes that use every listed ingredient
    Search {
        /// Comma-separated ingredients, e.g. "chicken, rice"
        ingredients: String,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Search with a random combination of ingredients
    Random {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show the full recipe for an ID
    Detail {
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Save or unsave a recipe
    Favorite { id: String },

    /// List saved recipe IDs
    Favorites,

    /// Show or change eye comfort (high contrast) mode
    Contrast {
        #[arg(value_enum)]
        action: Option<ContrastAction>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ContrastAction {
    On,
    Off,
    Toggle,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, AppError> {
    let config = AppConfig::load()?;
    debug!("{:?}", config);

    let mut builder = Fridge2Table::builder().config(config);
    if let Some(dir) = cli.data_dir {
        builder = builder.data_dir(dir);
    }
    let session = builder.build()?;

    match cli.command {
        Commands::Search { ingredients, view } => {
            session.set_options(view.options());
            let result = session.submit_search(&ingredients).await;
            Ok(print_results(&session, &view, result.err()))
        }
        Commands::Random { view } => {
            session.set_options(view.options());
            let (suggestion, result) = session.random_search().await;
            if !view.json {
                println!("Trying: {}", suggestion);
            }
            Ok(print_results(&session, &view, result.err()))
        }
        Commands::Detail { id, json } => {
            let detail = session.open_detail(&id).await?;
            if json {
                println!("{}", output::format_detail_json(&detail));
            } else {
                println!("{}", output::format_detail(&detail, session.is_favorite(&id)));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Favorite { id } => {
            if session.toggle_favorite(&id) {
                println!("★ Saved {} to favorites", id);
            } else {
                println!("☆ Removed {} from favorites", id);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Favorites => {
            let ids = session.favorite_ids();
            if ids.is_empty() {
                println!("No favorites saved yet.");
            }
            for id in ids {
                println!("{}", id);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Contrast { action } => {
            let enabled = match action {
                Some(ContrastAction::On) => {
                    session.set_contrast_mode(true);
                    true
                }
                Some(ContrastAction::Off) => {
                    session.set_contrast_mode(false);
                    false
                }
                Some(ContrastAction::Toggle) => session.toggle_contrast_mode(),
                None => session.contrast_mode(),
            };
            println!(
                "Eye comfort mode is {}",
                if enabled { "on" } else { "off" }
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Print status and results; input and network errors exit non-zero
fn print_results(session: &Session, view: &ViewArgs, error: Option<SearchError>) -> ExitCode {
    let content = session.visible();
    let summary = session.summary();

    if view.json {
        println!("{}", output::format_results_json(&content, &summary));
    } else {
        println!("{}", output::format_status(&session.status()));
        println!();
        println!(
            "{}",
            output::format_results(&content, &summary, |id| session.is_favorite(id))
        );
    }

    match error {
        None => ExitCode::SUCCESS,
        Some(e) => {
            debug!("{}", e);
            match e {
                SearchError::EmptyQuery => ExitCode::from(2),
                SearchError::Network { .. } => ExitCode::FAILURE,
            }
        }
    }
}
