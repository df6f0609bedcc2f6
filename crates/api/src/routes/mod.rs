pub mod health;
pub mod racing;
pub mod sports;

use axum::Router;

use crate::state::AppState;

/// Build the `/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /list-races         list races (POST)
/// /race?id={id}       get race by query parameter
/// /races/{id}         get race by path
///
/// /list-events        list sports events (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(racing::router())
        .merge(sports::router())
}
