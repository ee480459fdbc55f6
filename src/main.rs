use std::{env, net::SocketAddr, sync::Arc};

use tracing_subscriber::EnvFilter;

use crate::app::{envy::Envy, util::reqwest::build_client};

mod app;
mod generations;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub client: reqwest::Client,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("recraft_proxy=info,tower_http=info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    if envy.recraft_api_key().is_none() {
        tracing::warn!("RECRAFT_API_KEY is not set, generation requests will fail");
    }

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    let client = match build_client(envy.request_timeout()) {
        Ok(client) => client,
        Err(e) => panic!("failed to build http client: {}", e),
    };

    tracing::info!(
        convert_images = envy.convert_images(),
        upstream = envy.recraft_api_url(),
        "configuration loaded"
    );

    let state = AppState {
        envy: Arc::new(envy),
        client,
    };

    // app
    let app = app::router::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(%e, "server error");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(%e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(%e, "failed to listen for sigterm");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutting down");
}
