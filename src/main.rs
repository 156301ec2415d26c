use skillogue_discovery::application::{
    ports::security::AccessTokenVerifier, services::ApplicationServices,
};
use skillogue_discovery::config::AppConfig;
use skillogue_discovery::domain::{
    passion::PassionRepository, profile::ProfileSearchGateway, search::SavedSearchRepository,
};
use skillogue_discovery::infrastructure::{
    database,
    repositories::{
        PostgresPassionRepository, PostgresProfileSearchGateway, PostgresSavedSearchRepository,
    },
    security::access_token::Hs256AccessTokenVerifier,
};
use skillogue_discovery::presentation::http::{
    routes::build_router_with_rate_limiter, state::HttpState,
};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;

    let search_gateway: Arc<dyn ProfileSearchGateway> =
        Arc::new(PostgresProfileSearchGateway::new(pool.clone()));
    let passion_repo: Arc<dyn PassionRepository> =
        Arc::new(PostgresPassionRepository::new(pool.clone()));
    let saved_search_repo: Arc<dyn SavedSearchRepository> =
        Arc::new(PostgresSavedSearchRepository::new(pool));

    let token_verifier: Arc<dyn AccessTokenVerifier> = Arc::new(Hs256AccessTokenVerifier::new(
        config.access_token_secret(),
    )?);

    let services = Arc::new(ApplicationServices::new(
        search_gateway,
        passion_repo,
        saved_search_repo,
        token_verifier,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router_with_rate_limiter(state, config.rate_limit_enabled());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        rate_limit = config.rate_limit_enabled(),
        "listening on {address}"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
