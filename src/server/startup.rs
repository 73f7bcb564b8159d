use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;

use crate::server::{config::Config, error::Error};

const SESSION_POOL_SIZE: usize = 6;

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::{ClientLike, Config as RedisConfig, Pool};

    let pool = Pool::new(
        RedisConfig::from_url(&config.valkey_url)?,
        None,
        None,
        None,
        SESSION_POOL_SIZE,
    )?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Debug builds are served over plain http
    let session = SessionManagerLayer::new(session_store)
        .with_secure(!cfg!(debug_assertions))
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            config.session_expiry_days,
        )));

    tracing::info!(
        "Connected to session store, sessions expire after {} days of inactivity",
        config.session_expiry_days
    );

    Ok(session)
}
