use anyhow::Context;
use axum::Router;
use storage::Database;
use tokio::net::TcpListener;

use crate::{app, config::Config, telemetry};

/// The two independent read services. Each runs as its own process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Finalist,
    Staff,
}

impl Service {
    pub fn name(self) -> &'static str {
        match self {
            Self::Finalist => "finalist",
            Self::Staff => "staff",
        }
    }

    pub fn default_listen_addr(self) -> &'static str {
        match self {
            Self::Finalist => "127.0.0.1:8000",
            Self::Staff => "127.0.0.1:8080",
        }
    }

    pub fn router(self, db: Database) -> Router {
        match self {
            Self::Finalist => app::finalist_app(db),
            Self::Staff => app::staff_app(db),
        }
    }
}

/// Loads config, connects, and serves until the process is killed. Any
/// startup failure is returned to `main` and ends the process.
pub async fn run(service: Service) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    tracing::info!("Starting {} service", service.name());

    let config = Config::from_env(service.default_listen_addr())
        .context("Failed to load configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!("Connecting to database at: {}", config.database.target());
    let db = Database::connect(&config.database)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    let local_addr = listener.local_addr()?;
    tracing::info!("Starting server at http://{}", local_addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", local_addr);

    axum::serve(listener, service.router(db)).await?;

    Ok(())
}
