use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use nanoid::nanoid;
use std::sync::Arc;

use crate::agents::{self, AgentSpec};
use crate::data_models::Corpus;
use crate::tools::{self, ToolStatus};

use super::AppState;
use super::models::{SearchRequest, SearchResponse, SessionView, ToolRequest, ToolResponse};

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let result = state
        .dispatcher
        .dispatch(request.query.trim(), request.corpus)
        .await;

    Json(SearchResponse {
        corpus: request.corpus,
        result,
    })
}

pub async fn tool_handler(
    State(state): State<Arc<AppState>>,
    Path(tool): Path<String>,
    Json(request): Json<ToolRequest>,
) -> Result<Json<ToolResponse>, (StatusCode, String)> {
    let corpus = tool
        .parse::<Corpus>()
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;

    let session_id = request.session_id.unwrap_or_else(|| nanoid!());

    let result = tools::answer(&state.dispatcher, corpus, &request.queries).await;
    let session = state
        .sessions
        .record(&session_id, &request.queries, result);

    tracing::info!(%corpus, %session_id, "tool call completed");

    Ok(Json(ToolResponse {
        status: ToolStatus::SUCCESS.status.to_string(),
        session_id,
        result: session.result,
    }))
}

pub async fn session_handler(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionView>, (StatusCode, String)> {
    let session = state
        .sessions
        .get(&session_id)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                format!("Unknown session: {}", session_id),
            )
        })?;

    Ok(Json(SessionView {
        session_id,
        state: session,
    }))
}

pub async fn agents_handler() -> Json<Vec<AgentSpec>> {
    Json(agents::roster())
}
