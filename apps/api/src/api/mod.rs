// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod response;
pub mod state;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{competitions, fixtures, health, lineups, standings};
pub use state::AppState;

/// Builds the full HTTP router
///
/// ```text
/// GET /health
/// GET /api/v1/statistics/competitions
/// GET /api/v1/statistics/competitions/search?q=
/// GET /api/v1/statistics/competitions/standings?competitionId=&seasonId=
/// GET /api/v1/statistics/competitions/matches?competitionId=&seasonId=
/// GET /api/v1/statistics/competitions/matches/:competition_id/:season_id/:match_id
/// GET /api/v1/statistics/competitions/lineup?matchId=
/// GET /api/v1/statistics/competitions/:competition_id/:season_id
/// ```
pub fn router(state: AppState) -> Router {
    let competition_routes = Router::new()
        .route("/", get(competitions::list_competitions))
        .route("/search", get(competitions::search_competitions))
        .route("/standings", get(standings::get_standings))
        .route("/matches", get(fixtures::list_matches))
        .route(
            "/matches/:competition_id/:season_id/:match_id",
            get(fixtures::get_match),
        )
        .route("/lineup", get(lineups::get_lineup))
        .route(
            "/:competition_id/:season_id",
            get(competitions::get_competition),
        );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1/statistics/competitions", competition_routes)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
