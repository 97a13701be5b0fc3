use std::sync::Arc;

use auth::Authenticator;
use rental_service::config::Config;
use rental_service::domain::owner::service::OwnerService;
use rental_service::domain::tenant::service::TenantService;
use rental_service::inbound::http::router::create_router;
use rental_service::outbound::repositories::PostgresOwnerRepository;
use rental_service::outbound::repositories::PostgresTenantRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rental_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "rental-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // Secret material (salt, signing key) is deliberately absent here
    tracing::info!(
        http_port = config.server.http_port,
        token_issuer = %config.auth.issuer,
        token_audience = %config.auth.audience,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.auth.salt.as_bytes(),
        config.auth.secret_key.as_bytes(),
        config.auth.issuer.as_str(),
        config.auth.audience.as_str(),
    ));

    let owner_repository = Arc::new(PostgresOwnerRepository::new(pg_pool.clone()));
    let tenant_repository = Arc::new(PostgresTenantRepository::new(pg_pool));

    let owner_service = Arc::new(OwnerService::new(
        owner_repository,
        Arc::clone(&authenticator),
    ));
    let tenant_service = Arc::new(TenantService::new(tenant_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(owner_service, tenant_service, authenticator);
    axum::serve(http_listener, application).await?;

    Ok(())
}
