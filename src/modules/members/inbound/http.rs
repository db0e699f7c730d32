use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::members::core::member::NewMember;
use crate::modules::members::core::service::JoinError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct JoinMemberBody {
    pub name: String,
}

#[derive(Serialize)]
pub struct JoinMemberResponse {
    pub id: i64,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub async fn join(
    State(state): State<AppState>,
    body: Result<Json<JoinMemberBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.service.join(NewMember::new(body.name)).await {
        Ok(id) => (StatusCode::CREATED, Json(JoinMemberResponse { id })).into_response(),
        Err(err @ JoinError::DuplicateName(_)) => (
            StatusCode::CONFLICT,
            Json(ErrorBody {
                error: err.to_string(),
            }),
        )
            .into_response(),
        Err(JoinError::Store(err)) => {
            tracing::error!(error = %err, "join failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.service.find_one(id).await {
        Ok(Some(member)) => Json(member).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => {
            tracing::error!(error = %err, "member lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn list_members(State(state): State<AppState>) -> impl IntoResponse {
    match state.service.find_members().await {
        Ok(members) => Json(members).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "member listing failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
