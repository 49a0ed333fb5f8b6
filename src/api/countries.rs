use crate::error::ApiError;
use crate::models::country::{CountryRecord, CountrySummary};
use crate::services::country::CountryError;
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{error, warn};

#[derive(serde::Deserialize)]
pub struct SearchQueryParams {
    pub nome: Option<String>,
}

/// Provider failures are answered with an empty list, never an error status.
pub async fn get_top_countries(State(app_state): State<AppState>) -> Json<Vec<CountrySummary>> {
    match app_state
        .country_service
        .top_by_population(app_state.config.top_countries_limit)
        .await
    {
        Ok(countries) => Json(countries),
        Err(e) => {
            warn!("Failed to fetch most populous countries: {}", e);
            Json(Vec::new())
        }
    }
}

pub async fn search_countries(
    State(app_state): State<AppState>,
    Query(params): Query<SearchQueryParams>,
) -> Result<Json<Vec<CountryRecord>>, ApiError> {
    let nome = match params.nome.as_deref() {
        Some(nome) if !nome.is_empty() => nome,
        _ => {
            return Err(ApiError::Validation(
                "O parâmetro 'nome' é obrigatório.".to_string(),
            ))
        }
    };

    match app_state.country_service.search_by_name(nome).await {
        Ok(countries) => Ok(Json(countries)),
        Err(CountryError::NotFound(_)) => Err(ApiError::NotFound(format!(
            "Nenhum país encontrado com o nome '{}'.",
            nome
        ))),
        Err(e) => {
            error!("Failed to search countries by name '{}': {}", nome, e);
            Err(ApiError::Upstream)
        }
    }
}
