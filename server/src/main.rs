mod config;
mod routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    if !config.static_dir.is_dir() {
        tracing::warn!(static_dir = %config.static_dir.display(), "static directory missing; every asset will 404");
    }

    let addr = config.socket_addr();
    let app = routes::app(&config);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, static_dir = %config.static_dir.display(), "compass-site listening");
    axum::serve(listener, app).await.expect("server failed");
}
