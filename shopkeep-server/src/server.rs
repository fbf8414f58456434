use std::{
    net::SocketAddr,
    sync::{Arc, OnceLock},
    time::Duration,
};

use axum::{
    Extension, Router,
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
    routing::get,
    serve,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use shared::config::server::{Config, LogFormat};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{EnvFilter, fmt};

use crate::{
    app_state::AppState,
    auth::session::{MemorySessionStore, SessionError, SessionStore},
    routes::{self, openapi::openapi_routes},
    services::{store::DataStore, whatsapp::WhatsAppNotifier},
};

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

pub(crate) fn metrics_handle() -> PrometheusHandle {
    PROMETHEUS_HANDLE
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

async fn metrics_endpoint(Extension(handle): Extension<PrometheusHandle>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; version=0.0.4"),
        )],
        handle.render(),
    )
}

/// Initializes the tracing subscriber for logging using the provided configuration.
pub fn initialize_tracing(config: &Config) -> String {
    let env_filter = build_env_filter(config);

    let fmt_builder = fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false);

    if matches!(config.log_format, LogFormat::Json) {
        fmt_builder.json().with_ansi(false).init();
    } else {
        fmt_builder.with_ansi(true).init();
    }

    config.log_level.clone()
}

fn build_env_filter(config: &Config) -> EnvFilter {
    let default_level = config
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::INFO);

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy()
    })
}

/// Creates the application state from the resolved configuration.
///
/// Seeds the in-memory session store with the configured accounts and wires
/// the WhatsApp notifier from whatever credentials are present.
///
/// # Errors
/// Returns an error if the seed account passwords cannot be hashed.
pub fn create_app_state(config: Arc<Config>) -> Result<Arc<AppState>, SessionError> {
    let sessions: Arc<dyn SessionStore> =
        Arc::new(MemorySessionStore::from_config(&config.session)?);
    let reminders = Arc::new(WhatsAppNotifier::from_config(&config.whatsapp));

    Ok(Arc::new(AppState {
        config,
        sessions,
        records: Arc::new(DataStore::new()),
        reminders,
    }))
}

/// Creates the CORS layer for the application.
///
/// The dashboard is served from the same origin as the API, so any-origin
/// with credentials disabled is enough here.
pub fn create_cors_layer() -> CorsLayer {
    use http::Method;

    let methods = vec![Method::GET, Method::POST, Method::OPTIONS];

    CorsLayer::new()
        .allow_methods(AllowMethods::list(methods))
        .allow_headers(AllowHeaders::any())
        .allow_origin(AllowOrigin::any())
        .max_age(Duration::from_secs(3600))
}

/// Creates the API router with all route modules.
pub fn create_api_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .merge(routes::auth::create_router_auth(state.clone()))
        .merge(routes::theme::create_router_theme())
        .merge(routes::records::create_router_records(state))
}

/// Creates the static file service for serving the dashboard build.
///
/// Unknown paths fall back to `index.html` so client-side routes deep-link.
pub fn create_static_service<S>(static_dir: std::path::PathBuf) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    use axum::routing::get_service;
    use tower_http::services::{ServeDir, ServeFile};

    let index_path = static_dir.join("index.html");

    Router::new().fallback_service(
        ServeDir::new(static_dir)
            .append_index_html_on_directories(true)
            .fallback(get_service(ServeFile::new(index_path))),
    )
}

/// Creates the main application router with all middleware and routes.
pub fn create_app_router(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let api_router = create_api_router(state.clone());
    let static_files_service = create_static_service(state.config.frontend_path.clone());

    Router::new()
        .nest("/api", api_router)
        .merge(routes::health::create_health_router())
        .route("/metrics", get(metrics_endpoint))
        .merge(openapi_routes())
        .merge(static_files_service)
        .layer(Extension(metrics_handle))
        .layer(create_cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Creates the graceful shutdown signal handler.
pub async fn create_shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    info!("Shutting down...");
}

/// Starts the backend server and binds it to the configured port.
///
/// # Errors
/// Returns an error if the server fails to start.
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    initialize_tracing(&config);
    info!("Starting server...");

    if let Err(problems) = config.validate() {
        for problem in &problems {
            warn!("config: {problem}");
        }
    }

    let metrics_handle = metrics_handle();
    let config = Arc::new(config);

    let state = create_app_state(config.clone())
        .map_err(|err| -> Box<dyn std::error::Error> { Box::new(err) })?;

    let app = create_app_router(state, metrics_handle.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    let shutdown_signal = create_shutdown_signal();

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    Ok(())
}
