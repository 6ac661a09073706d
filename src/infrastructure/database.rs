use crate::config::ServerConfig;
use crate::entities::media_items;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use std::time::Duration;
use tracing::info;

pub async fn setup_database(config: &ServerConfig) -> anyhow::Result<DatabaseConnection> {
    info!("📂 Database: {}", config.database_url);

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(30))
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt).await?;

    info!("✅ Database connected successfully");

    run_migrations(&db).await?;

    Ok(db)
}

/// Creates the catalog table and its indexes when absent. Existing rows are never
/// touched; there is no column migration path.
pub async fn run_migrations(db: &DatabaseConnection) -> anyhow::Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    info!("🔄 Ensuring catalog schema...");

    let table = schema
        .create_table_from_entity(media_items::Entity)
        .if_not_exists()
        .to_owned();
    db.execute(builder.build(&table)).await?;
    info!("   - Table 'media_items' checked/created");

    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_media_items_file_name ON media_items(file_name)",
        "CREATE INDEX IF NOT EXISTS idx_media_items_type_created ON media_items(file_type, created_at)",
    ];

    for stmt in indexes {
        db.execute(sea_orm::Statement::from_string(builder, stmt.to_owned()))
            .await?;
        tracing::debug!("   - Executed: {}", stmt);
    }

    Ok(())
}
