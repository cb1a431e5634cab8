/*
 * Responsibility
 * - Config読み込み → 依存生成 (store / id codec / cookie key) → Router 組み立て
 * - Middleware の適用 (session/owner は web::routes 側、HTTP 共通 layer はここ)
 * - method override で包んで axum::serve() で起動
 */
use std::{panic, process, sync::Arc};

use anyhow::Result;
use axum::{Router, ServiceExt, extract::Request, response::Redirect, routing::get};
use axum_extra::extract::cookie::Key;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::{AppEnv, Config, ConfigError},
    middleware::{self, method_override::App},
    repos::{MemoryStore, PgStore, Store},
    services::id_codec::IdCodec,
    state::AppState,
    web::{self, handlers::health::health},
};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,post_board=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // development: crash the whole process so we notice immediately
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting post board in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = build_app(state, config.app_env);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn build_state(config: &Config) -> Result<AppState> {
    let store: Arc<dyn Store> = match &config.database_url {
        Some(url) => Arc::new(PgStore::connect(url, config.database_max_connections).await?),
        None => {
            tracing::warn!("DATABASE_URL is not set; data lives in memory only");
            Arc::new(MemoryStore::new())
        }
    };
    tracing::info!(backend = store.backend_name(), "store ready");

    let id_codec = IdCodec::new(config.sqids_min_length, &config.sqids_alphabet)?;

    let cookie_key = match &config.session_secret {
        Some(secret) => {
            Key::try_from(secret.as_bytes()).map_err(|_| ConfigError::Invalid("SESSION_SECRET"))?
        }
        None => {
            tracing::warn!("SESSION_SECRET is not set; sessions end when the process exits");
            Key::generate()
        }
    };

    Ok(AppState::new(store, id_codec, cookie_key))
}

/// The whole HTTP application: routes, HTTP middleware and the method override.
pub fn build_app(state: AppState, app_env: AppEnv) -> App {
    middleware::method_override::apply(build_router(state, app_env))
}

fn build_router(state: AppState, app_env: AppEnv) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/", get(|| async { Redirect::to("/posts") }))
        .merge(web::routes(state.clone()));

    if !app_env.is_production() {
        router = router.merge(web::session_routes());
    }

    let router = router.with_state(state);
    let router = middleware::security_headers::apply(router);
    middleware::http::apply(router)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutdown signal received");
}
