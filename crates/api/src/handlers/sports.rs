use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::response::ListEventsResponse;
use crate::services::sports::ListEventsRequest;
use crate::state::AppState;

/// POST /v1/list-events
pub async fn list_events(
    State(state): State<AppState>,
    payload: Result<Json<ListEventsRequest>, JsonRejection>,
) -> AppResult<Json<ListEventsResponse>> {
    let Json(request) = payload?;
    let response = state.sports.list_events(request).await?;
    Ok(Json(response))
}
