use axum::routing::{get, post};
use axum::Router;

use crate::handlers::racing;
use crate::state::AppState;

/// Race catalog routes, mounted under `/v1`.
///
/// ```text
/// POST /list-races    -> list_races
/// GET  /race          -> get_race_by_query
/// GET  /races/{id}    -> get_race
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list-races", post(racing::list_races))
        .route("/race", get(racing::get_race_by_query))
        .route("/races/{id}", get(racing::get_race))
}
