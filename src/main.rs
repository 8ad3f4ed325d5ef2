use std::{sync::Arc, time::Duration};

use moviweb::{AppState, config::Config, data::DataManager, db, omdb::OmdbClient, router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,moviweb=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    std::fs::create_dir_all(&config.data_dir)?;

    let http = reqwest::Client::builder()
        .user_agent("moviweb/0.1")
        .timeout(Duration::from_secs(config.omdb_timeout_secs))
        .build()?;

    let db = db::connect_and_migrate(&config.database_url).await?;

    let omdb = Arc::new(OmdbClient::new(
        http,
        config.omdb_api_key.clone(),
        config.omdb_base_url.clone(),
        config.omdb_rps,
    ));

    let data = DataManager::new(db, omdb);

    let state = Arc::new(AppState { config: config.clone(), data });

    let app = router(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
