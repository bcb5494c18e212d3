use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use timelog::shared::infrastructure::state_store::StateStore;
use timelog::shared::infrastructure::state_store::json_file::JsonFileStore;
use timelog::shell::config::Config;
use timelog::shell::http::router;
use timelog::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    tracing::info!(
        addr = %config.addr,
        data_file = %config.data_file.display(),
        "starting timelog"
    );

    let store: Arc<dyn StateStore> = Arc::new(JsonFileStore::new(config.data_file));
    let app = router(AppState { store });

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
