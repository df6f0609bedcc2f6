use std::sync::Arc;

use crate::services::{RacingService, SportsService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything is behind an `Arc` or already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: paddock_db::DbPool,
    pub racing: Arc<RacingService>,
    pub sports: Arc<SportsService>,
}
