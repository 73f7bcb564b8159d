use medlog::server::{
    config::Config, error::Error, model::app::AppState, router, startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&config).await?;

    let app = router::app(AppState::from(db), session);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
