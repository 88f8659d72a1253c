//! User endpoints

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::{debug, info};

use crate::api::state::AppState;
use crate::api::types::extract::empty_as_none;
use crate::api::types::{ApiError, GroupResponse, Path, Query, UserResponse};
use crate::domain::UserQuery;

/// Query string of `GET /users/query`. An empty `uid=` or `gid=` counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserQueryParams {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub uid: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub gid: Option<i32>,
    pub comment: Option<String>,
    pub home: Option<String>,
    pub shell: Option<String>,
}

impl From<UserQueryParams> for UserQuery {
    fn from(params: UserQueryParams) -> Self {
        Self {
            name: params.name,
            uid: params.uid,
            gid: params.gid,
            comment: params.comment,
            home: params.home,
            shell: params.shell,
        }
    }
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    debug!("Listing all users");

    let users = state.user_service.all_users().await.map_err(ApiError::from)?;

    info!(count = users.len(), "Listed users");
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// GET /users/query
///
/// Every supplied parameter must match. A request without any parameter is
/// rejected rather than treated as "list everything".
pub async fn query_users(
    State(state): State<AppState>,
    Query(params): Query<UserQueryParams>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let query = UserQuery::from(params);
    debug!(?query, "Querying users");

    if query.is_empty() {
        return Err(ApiError::bad_request(
            "At least one query parameter is required on the user query endpoint",
        )
        .with_code("missing_parameters"));
    }

    let users = state
        .user_service
        .query_users(&query)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// GET /users/{uid}
pub async fn get_user(
    State(state): State<AppState>,
    Path(uid): Path<i32>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(uid = uid, "Getting user");

    let user = state
        .user_service
        .user_by_id(uid)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UserResponse::from(&user)))
}

/// GET /users/{uid}/groups
pub async fn get_user_groups(
    State(state): State<AppState>,
    Path(uid): Path<i32>,
) -> Result<Json<Vec<GroupResponse>>, ApiError> {
    debug!(uid = uid, "Getting groups of user");

    let groups = state
        .user_service
        .groups_of_user(uid)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(groups.iter().map(GroupResponse::from).collect()))
}
