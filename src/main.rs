use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use lychee_admin::config::Config;
use lychee_admin::handlers::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lychee_admin=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();
    let addr = config.addr();
    tracing::info!(%addr, api_base = %config.api_base(), "starting admin gateway");

    let app = handlers::router(AppState::new(config))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
