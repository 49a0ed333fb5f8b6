use crate::AppState;
use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod countries;
pub mod votes;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/paises/top10", get(countries::get_top_countries))
        .route("/paises/buscar", get(countries::search_countries))
        .route("/paises/avaliar", post(votes::register_vote))
        .route("/paises/avaliacoes", get(votes::list_votes))
        .route(
            "/health",
            get(|| async {
                (
                    StatusCode::OK,
                    Json(serde_json::json!({ "status": "healthy" })),
                )
            }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
