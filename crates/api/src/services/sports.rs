use std::sync::Arc;

use paddock_core::error::CoreError;
use paddock_core::filter::{ListFilter, SortSpec, Visibility};
use paddock_core::types::DbId;
use paddock_db::error::QueryError;
use paddock_db::repositories::EventRepo;
use serde::Deserialize;

use crate::response::ListEventsResponse;

/// Body of `POST /v1/list-events`. Events have no meeting grouping.
#[derive(Debug, Default, Deserialize)]
pub struct ListEventsRequest {
    #[serde(default)]
    pub filter: Option<ListEventsRequestFilter>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListEventsRequestFilter {
    pub id: Option<DbId>,
    pub visible: Option<bool>,
    #[serde(default)]
    pub any_visibility: bool,
    pub column: Option<String>,
    pub order_by: Option<String>,
}

impl ListEventsRequestFilter {
    pub fn into_filter(self) -> Result<ListFilter, CoreError> {
        let visibility = Visibility::from_request(self.visible, self.any_visibility)?;
        let sort = SortSpec::from_parts(self.column.as_deref(), self.order_by.as_deref())?;

        Ok(ListFilter::new()
            .with_id(self.id)
            .with_visibility(visibility)
            .with_sort(sort))
    }
}

pub struct SportsService {
    repo: Arc<EventRepo>,
}

impl SportsService {
    pub fn new(repo: Arc<EventRepo>) -> Self {
        Self { repo }
    }

    pub fn is_ready(&self) -> bool {
        self.repo.is_ready()
    }

    pub async fn list_events(
        &self,
        request: ListEventsRequest,
    ) -> Result<ListEventsResponse, QueryError> {
        let filter = request.filter.unwrap_or_default().into_filter()?;
        let events = self.repo.list(&filter).await?;
        Ok(ListEventsResponse { events })
    }
}
