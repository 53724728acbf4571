use pitchside_api::api::{self, AppState};
use pitchside_api::config::AppConfig;
use pitchside_api::infrastructure::JsonFileStore;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        tracing::error!("{}", e);
        std::process::exit(1);
    });

    let store = JsonFileStore::new(&config.data_dir);
    if !store.root().is_dir() {
        tracing::warn!(
            "Data directory {} does not exist; every data request will fail",
            store.root().display()
        );
    }
    tracing::info!("Serving data from {}", store.root().display());

    // Build router
    let app = api::router(AppState::from_store(store));

    // Start server
    let addr = config.socket_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
