use dotenvy::dotenv;
use student_portal::{api, config, core, errors::Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load the application configuration (env + config.toml seeds)
    let app_config = config::load_app_configuration()?;

    // 4. Open the database and make sure the tables exist
    let database = config::database::create_connection(&app_config.database_url)
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to open database: {e}"))?;
    config::database::create_tables(&database).await?;

    // 5. Seed the configured accounts (existing usernames are untouched)
    core::user::seed_initial_users(&database, &app_config.users)
        .await
        .inspect_err(|e| error!("Failed to seed users: {e}"))?;

    // 6. Serve the API
    api::start_server(&app_config, database).await
}
