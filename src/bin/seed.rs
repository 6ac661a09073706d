use archive_vault::config::ServerConfig;
use archive_vault::infrastructure::{database, seed};
use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Populate an empty catalog with the fixed sample dataset.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Store to seed (default: DATABASE_URL, else archive.db next to the executable)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,archive_vault=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = ServerConfig::from_env();
    if let Some(url) = args.database_url {
        config.database_url = url;
    }

    info!("🔌 Connecting to database...");
    let db = database::setup_database(&config).await?;

    let result = seed::seed_sample_data(&db).await;
    db.close().await?;

    match result {
        Ok(seed::SeedOutcome::AlreadyInitialized { existing }) => {
            info!("Database already initialized ({} rows).", existing);
        }
        Ok(seed::SeedOutcome::Seeded { images, documents }) => {
            info!(
                "Database initialized and populated with {} images and {} documents.",
                images, documents
            );
        }
        Err(e) => {
            error!("❌ Seeding failed: {}", e);
            return Err(e);
        }
    }

    Ok(())
}
