use clap::{Parser, Subcommand};

use brandsight_scraper::SiteClient;
use brandsight_structurer::{Structurer, StructurerConfig};

#[derive(Debug, Parser)]
#[command(name = "brandsight-cli")]
#[command(about = "Brandsight command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Ingest one storefront and its suggested competitors.
    Ingest {
        /// Base address of the storefront, e.g. https://shop.example.com
        site_url: String,
    },
    /// List persisted brands.
    Brands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = brandsight_core::load_app_config()?;

    let pool_config = brandsight_db::PoolConfig::from_app_config(&config);
    let pool = brandsight_db::connect_pool(&config.database_url, pool_config).await?;
    brandsight_db::run_migrations(&pool).await?;

    match cli.command {
        Commands::Ingest { site_url } => {
            let site = SiteClient::new(config.scraper_timeout_secs, &config.scraper_user_agent)?;
            let structurer = Structurer::new(StructurerConfig {
                endpoint: config.structurer_endpoint.clone(),
                api_key: config.structurer_api_key.clone(),
                model: config.structurer_model.clone(),
                timeout_secs: config.structurer_timeout_secs,
            })?;

            let outcome =
                brandsight_pipeline::ingest_brand(&pool, &site, &structurer, &site_url).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Commands::Brands => {
            let brands = brandsight_db::list_brands(&pool).await?;
            if brands.is_empty() {
                println!("no brands ingested yet");
            }
            for brand in brands {
                println!("{:<6} {:<24} {}", brand.id, brand.name, brand.site_url);
            }
        }
    }

    Ok(())
}
