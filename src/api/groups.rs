//! Group endpoints

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::{debug, info};

use crate::api::state::AppState;
use crate::api::types::extract::empty_as_none;
use crate::api::types::{ApiError, GroupResponse, Path, Query};
use crate::domain::GroupQuery;

/// Query string of `GET /groups/query`. `member` may be repeated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupQueryParams {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub gid: Option<i32>,
    #[serde(default)]
    pub member: Vec<String>,
}

impl From<GroupQueryParams> for GroupQuery {
    fn from(params: GroupQueryParams) -> Self {
        Self {
            name: params.name,
            gid: params.gid,
            members: (!params.member.is_empty()).then_some(params.member),
        }
    }
}

/// GET /groups
pub async fn list_groups(
    State(state): State<AppState>,
) -> Result<Json<Vec<GroupResponse>>, ApiError> {
    debug!("Listing all groups");

    let groups = state
        .group_service
        .all_groups()
        .await
        .map_err(ApiError::from)?;

    info!(count = groups.len(), "Listed groups");
    Ok(Json(groups.iter().map(GroupResponse::from).collect()))
}

/// GET /groups/query
pub async fn query_groups(
    State(state): State<AppState>,
    Query(params): Query<GroupQueryParams>,
) -> Result<Json<Vec<GroupResponse>>, ApiError> {
    let query = GroupQuery::from(params);
    debug!(?query, "Querying groups");

    if query.is_empty() {
        return Err(ApiError::bad_request(
            "At least one query parameter is required on the group query endpoint",
        )
        .with_code("missing_parameters"));
    }

    let groups = state
        .group_service
        .query_groups(&query)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(groups.iter().map(GroupResponse::from).collect()))
}

/// GET /groups/{gid}
pub async fn get_group(
    State(state): State<AppState>,
    Path(gid): Path<i32>,
) -> Result<Json<GroupResponse>, ApiError> {
    debug!(gid = gid, "Getting group");

    let group = state
        .group_service
        .group_by_id(gid)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(GroupResponse::from(&group)))
}
