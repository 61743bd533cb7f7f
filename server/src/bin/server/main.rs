use std::sync::Arc;

use anyhow::Context;
use auth::Authenticator;
use caduceus_server::config::Config;
use caduceus_server::config::StorageBackend;
use caduceus_server::inbound::http::router::create_router;
use caduceus_server::inbound::http::router::AppState;
use caduceus_server::outbound::repositories::InMemoryProjectRepository;
use caduceus_server::outbound::repositories::InMemoryTeamRepository;
use caduceus_server::outbound::repositories::InMemoryUserRepository;
use caduceus_server::outbound::repositories::PostgresProjectRepository;
use caduceus_server::outbound::repositories::PostgresTeamRepository;
use caduceus_server::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "caduceus_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "caduceus-server",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;
    let token_ttl = config.jwt.ttl()?;

    tracing::info!(
        http_port = config.server.http_port,
        storage = ?config.storage,
        token_ttl = %token_ttl,
        cookie_secure = config.cookie.secure,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        token_ttl,
    ));

    let state = match config.storage {
        StorageBackend::Postgres => {
            let database = config
                .database
                .as_ref()
                .context("database section is required for postgres storage")?;

            let pg_pool = PgPoolOptions::new()
                .max_connections(database.max_connections)
                .connect(&database.url)
                .await?;
            tracing::info!(
                max_connections = database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            AppState::new(
                Arc::new(PostgresUserRepository::new(pg_pool.clone())),
                Arc::new(PostgresTeamRepository::new(pg_pool.clone())),
                Arc::new(PostgresProjectRepository::new(pg_pool)),
                authenticator,
                config.cookie.clone(),
            )
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            AppState::new(
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryTeamRepository::new()),
                Arc::new(InMemoryProjectRepository::new()),
                authenticator,
                config.cookie.clone(),
            )
        }
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(state, &config.cors);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
