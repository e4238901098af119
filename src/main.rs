use anyhow::Result;
use clap::{Parser, Subcommand};
use pantry::cli::{FavoritesCommand, GenerateArgs, IngredientsCommand, SuggestArgs};

/// pantry - cook with what you have
#[derive(Parser)]
#[command(name = "pantry")]
#[command(about = "Recipe suggestions from the ingredients you have", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank catalog recipes against your ingredients
    Suggest(SuggestArgs),
    /// Make up a new recipe from your ingredients
    Generate(GenerateArgs),
    /// Manage the saved ingredient list
    #[command(subcommand)]
    Ingredients(IngredientsCommand),
    /// Manage favorite recipes
    #[command(subcommand)]
    Favorites(FavoritesCommand),
    /// Print one catalog recipe
    Show { id: String },
    /// Create the state database and run migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = pantry::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    pantry::observability::init_observability(
        &config.observability.log_level,
        config.observability.json,
    )?;

    match cli.command {
        Commands::Suggest(args) => pantry::cli::suggest(&config, args).await,
        Commands::Generate(args) => pantry::cli::generate(&config, args).await,
        Commands::Ingredients(command) => pantry::cli::ingredients(&config, command).await,
        Commands::Favorites(command) => pantry::cli::favorites(&config, command).await,
        Commands::Show { id } => pantry::cli::show(&config, id).await,
        Commands::Migrate => pantry::cli::migrate(&config).await,
    }
}
