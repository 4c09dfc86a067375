use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use userload::{Config, UserStore, app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userload=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let store = UserStore::connect(&config.database_url).await?;

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(store)).await?;
    Ok(())
}
