use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod categories;
mod search;

#[derive(Debug, Parser)]
#[command(name = "nearby")]
#[command(about = "Search OpenStreetMap for places near a coordinate")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for places of a category around a latitude/longitude.
    Search {
        /// Latitude of the search center, in decimal degrees.
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude of the search center, in decimal degrees.
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Search radius in meters (configured default when omitted).
        #[arg(long)]
        radius: Option<u32>,
        /// Amenity tag to search for, e.g. restaurant, cafe, pharmacy.
        #[arg(long)]
        category: Option<String>,
        /// Emit records as a JSON array instead of text lines.
        #[arg(long)]
        json: bool,
    },
    /// List the place-category catalog.
    Categories,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = nearby_core::load_app_config()?;

    match cli.command {
        Commands::Search {
            lat,
            lon,
            radius,
            category,
            json,
        } => search::run_search(&config, lat, lon, radius, category, json).await,
        Commands::Categories => {
            categories::run_categories();
            Ok(())
        }
    }
}
