use crate::error::ApiError;
use crate::models::response::{FirstVoteRegistered, VoteRegistered};
use crate::models::vote::{VoteKind, VoteOutcome, VotePayload, VoteTally};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

const MISSING_FIELDS: &str = "Os campos 'nome_pais' e 'tipo_avaliacao' são obrigatórios.";
const INVALID_KIND: &str = "O valor para 'tipo_avaliacao' deve ser 'positiva' ou 'negativa'.";

/// Checks the payload before anything touches the store.
pub fn validate_vote(payload: VotePayload) -> Result<(String, VoteKind), ApiError> {
    let (nome_pais, tipo_avaliacao) = match (payload.nome_pais, payload.tipo_avaliacao) {
        (Some(nome), Some(tipo)) if !nome.is_empty() && !tipo.is_empty() => (nome, tipo),
        _ => return Err(ApiError::Validation(MISSING_FIELDS.to_string())),
    };

    let kind = tipo_avaliacao
        .parse::<VoteKind>()
        .map_err(|_| ApiError::Validation(INVALID_KIND.to_string()))?;

    Ok((nome_pais, kind))
}

pub async fn register_vote(
    State(app_state): State<AppState>,
    payload: Result<Json<VotePayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload.map_err(|e| {
        debug!("Rejected vote body: {}", e);
        ApiError::Validation(MISSING_FIELDS.to_string())
    })?;
    let (nome_pais, kind) = validate_vote(payload)?;

    let outcome = app_state
        .db_service
        .record_vote(&nome_pais, kind)
        .await
        .map_err(|e| {
            error!("Failed to record vote for '{}': {}", nome_pais, e);
            ApiError::Store
        })?;

    let response = match outcome {
        VoteOutcome::Incremented { count } => (
            StatusCode::OK,
            Json(VoteRegistered {
                mensagem: format!("Voto {} para {} registrado com sucesso.", kind, nome_pais),
                contagem_atualizada: count,
            }),
        )
            .into_response(),
        VoteOutcome::Created(record) => (
            StatusCode::CREATED,
            Json(FirstVoteRegistered {
                mensagem: format!(
                    "Primeiro voto {} para {} registrado com sucesso.",
                    kind, nome_pais
                ),
                novo_registro: record,
            }),
        )
            .into_response(),
    };

    Ok(response)
}

pub async fn list_votes(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<VoteTally>>, ApiError> {
    app_state.db_service.list_votes().await.map(Json).map_err(|e| {
        error!("Failed to list votes: {}", e);
        ApiError::Store
    })
}
