use std::sync::Arc;

use paddock_core::error::CoreError;
use paddock_core::filter::{ListFilter, SortSpec, Visibility};
use paddock_core::types::DbId;
use paddock_db::error::QueryError;
use paddock_db::repositories::RaceRepo;
use serde::Deserialize;

use crate::response::{GetRaceResponse, ListRacesResponse};

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Body of `POST /v1/list-races`. A missing `filter` is an empty filter.
#[derive(Debug, Default, Deserialize)]
pub struct ListRacesRequest {
    #[serde(default)]
    pub filter: Option<ListRacesRequestFilter>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListRacesRequestFilter {
    pub id: Option<DbId>,
    pub visible: Option<bool>,
    #[serde(default)]
    pub any_visibility: bool,
    pub meeting_ids: Option<Vec<DbId>>,
    /// Sort column; only honoured together with `order_by`.
    pub column: Option<String>,
    /// `asc` or `desc`.
    pub order_by: Option<String>,
}

impl ListRacesRequestFilter {
    pub fn into_filter(self) -> Result<ListFilter, CoreError> {
        let visibility = Visibility::from_request(self.visible, self.any_visibility)?;
        let sort = SortSpec::from_parts(self.column.as_deref(), self.order_by.as_deref())?;

        Ok(ListFilter::new()
            .with_id(self.id)
            .with_visibility(visibility)
            .with_group_ids(self.meeting_ids)
            .with_sort(sort))
    }
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

pub struct RacingService {
    repo: Arc<RaceRepo>,
}

impl RacingService {
    pub fn new(repo: Arc<RaceRepo>) -> Self {
        Self { repo }
    }

    pub fn is_ready(&self) -> bool {
        self.repo.is_ready()
    }

    pub async fn list_races(
        &self,
        request: ListRacesRequest,
    ) -> Result<ListRacesResponse, QueryError> {
        let filter = request.filter.unwrap_or_default().into_filter()?;
        let races = self.repo.list(&filter).await?;
        Ok(ListRacesResponse { races })
    }

    pub async fn get_race(&self, id: DbId) -> Result<GetRaceResponse, QueryError> {
        let race = self.repo.get(id).await?;
        Ok(GetRaceResponse { race })
    }
}

#[cfg(test)]
mod tests {
    use paddock_core::filter::SortDirection;

    use super::*;

    fn parse(body: &str) -> ListRacesRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn missing_filter_is_empty_filter() {
        let filter = parse("{}").filter.unwrap_or_default().into_filter().unwrap();
        assert_eq!(filter, ListFilter::new());
    }

    #[test]
    fn full_request_maps_every_field() {
        let request = parse(
            r#"{"filter": {"id": 7, "visible": true, "meeting_ids": [3, 8],
                "column": "advertised_start_time", "order_by": "DESC"}}"#,
        );
        let filter = request.filter.unwrap().into_filter().unwrap();

        assert_eq!(filter.id, Some(7));
        assert_eq!(filter.visibility, Visibility::Only(true));
        assert_eq!(filter.group_ids, Some(vec![3, 8]));
        assert_eq!(
            filter.sort,
            Some(SortSpec::new("advertised_start_time", SortDirection::Desc))
        );
    }

    #[test]
    fn any_visibility_flag() {
        let request = parse(r#"{"filter": {"any_visibility": true}}"#);
        let filter = request.filter.unwrap().into_filter().unwrap();
        assert_eq!(filter.visibility, Visibility::Any);
    }

    #[test]
    fn contradictory_visibility_is_rejected() {
        let request = parse(r#"{"filter": {"visible": true, "any_visibility": true}}"#);
        assert!(request.filter.unwrap().into_filter().is_err());
    }

    #[test]
    fn empty_meeting_ids_are_kept() {
        let request = parse(r#"{"filter": {"meeting_ids": []}}"#);
        let filter = request.filter.unwrap().into_filter().unwrap();
        assert_eq!(filter.group_ids, Some(vec![]));
    }
}
