//! Handlers for the race catalog.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use paddock_core::types::DbId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::{GetRaceResponse, ListRacesResponse};
use crate::services::racing::ListRacesRequest;
use crate::state::AppState;

/// Query parameters for `GET /v1/race`.
#[derive(Debug, Deserialize)]
pub struct GetRaceParams {
    pub id: DbId,
}

/// POST /v1/list-races
pub async fn list_races(
    State(state): State<AppState>,
    payload: Result<Json<ListRacesRequest>, JsonRejection>,
) -> AppResult<Json<ListRacesResponse>> {
    let Json(request) = payload?;
    let response = state.racing.list_races(request).await?;
    Ok(Json(response))
}

/// GET /v1/race?id={id}
///
/// Unknown ids answer `{"race": null}` with 200.
pub async fn get_race_by_query(
    State(state): State<AppState>,
    params: Result<Query<GetRaceParams>, QueryRejection>,
) -> AppResult<Json<GetRaceResponse>> {
    let Query(params) = params?;
    let response = state.racing.get_race(params.id).await?;
    Ok(Json(response))
}

/// GET /v1/races/{id}
pub async fn get_race(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<GetRaceResponse>> {
    let Path(id) = id?;
    let response = state.racing.get_race(id).await?;
    Ok(Json(response))
}
