use axum::routing::post;
use axum::Router;

use crate::handlers::sports;
use crate::state::AppState;

/// Sports event routes, mounted under `/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/list-events", post(sports::list_events))
}
