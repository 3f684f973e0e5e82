//! User CRUD endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, CreateUserApiRequest, EventResponse, Json, ListEventsResponse, ListUsersResponse,
    UpdateUserApiRequest, UserResponse,
};
use crate::domain::user::UserId;
use crate::domain::DomainError;

// A non-positive id can never name a row, so the lookup paths treat it
// as an absent record rather than a malformed request.
fn parse_user_id(id: i64) -> Option<UserId> {
    UserId::new(id).ok()
}

// Absent records are reported as a bare human-readable message; only the
// absence of the main payload is contractual, not the wording.
fn user_not_found() -> Response {
    (StatusCode::NOT_FOUND, Json("user not found!")).into_response()
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<ListUsersResponse>, ApiError> {
    debug!("Listing all users");

    let users = state.user_service.list().await.map_err(ApiError::from)?;

    let user_responses: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    let total = user_responses.len();

    Ok(Json(ListUsersResponse {
        users: user_responses,
        total,
    }))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(email = %request.email, "Creating user");

    let user = state
        .user_service
        .create(request.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UserResponse::from(&user)))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    debug!(id, "Fetching user");

    let Some(user_id) = parse_user_id(id) else {
        return Ok(user_not_found());
    };

    match state.user_service.get(user_id).await {
        Ok(user) => Ok(Json(UserResponse::from(&user)).into_response()),
        Err(DomainError::NotFound { .. }) => Ok(user_not_found()),
        Err(e) => Err(e.into()),
    }
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateUserApiRequest>,
) -> Result<Response, ApiError> {
    debug!(id, "Updating user");

    let Some(user_id) = parse_user_id(id) else {
        return Ok(user_not_found());
    };

    match state.user_service.update(user_id, request.into()).await {
        Ok(user) => Ok(Json(UserResponse::from(&user)).into_response()),
        Err(DomainError::NotFound { .. }) => Ok(user_not_found()),
        Err(e) => Err(e.into()),
    }
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    debug!(id, "Deleting user");

    let Some(user_id) = parse_user_id(id) else {
        return Ok(user_not_found());
    };

    match state.user_service.delete(user_id).await {
        // Last-known values confirm what was removed
        Ok(user) => Ok(Json(UserResponse::from(&user)).into_response()),
        Err(DomainError::NotFound { .. }) => Ok(user_not_found()),
        Err(e) => Err(e.into()),
    }
}

/// GET /users/{id}/events
pub async fn list_user_events(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ListEventsResponse>, ApiError> {
    debug!(id, "Listing events for user");

    // No record, no events
    let Some(user_id) = parse_user_id(id) else {
        return Ok(Json(ListEventsResponse {
            events: vec![],
            total: 0,
        }));
    };

    let events = state
        .user_service
        .events_for_user(user_id)
        .await
        .map_err(ApiError::from)?;

    let event_responses: Vec<EventResponse> = events.iter().map(EventResponse::from).collect();
    let total = event_responses.len();

    Ok(Json(ListEventsResponse {
        events: event_responses,
        total,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::event::InMemoryEventRepository;
    use crate::infrastructure::user::{Argon2Hasher, InMemoryUserRepository, UserService};
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState::new(Arc::new(UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryEventRepository::new()),
            Arc::new(Argon2Hasher::new()),
        )))
    }

    #[test]
    fn test_parse_user_id_only_accepts_positive() {
        assert!(parse_user_id(1).is_some());
        assert!(parse_user_id(0).is_none());
        assert!(parse_user_id(-3).is_none());
    }

    #[test]
    fn test_user_not_found_response() {
        let response = user_not_found();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_user_non_positive_id_is_not_found() {
        // Id 0 can never name a row; it answers like any other absent record
        let response = get_user(State(test_state()), Path(0)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = get_user(State(test_state()), Path(-1)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_user_non_positive_id_is_not_found() {
        let response = update_user(
            State(test_state()),
            Path(0),
            Json(UpdateUserApiRequest::default()),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_user_non_positive_id_is_not_found() {
        let response = delete_user(State(test_state()), Path(0)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_user_events_non_positive_id_is_empty() {
        let Json(body) = list_user_events(State(test_state()), Path(0)).await.unwrap();
        assert!(body.events.is_empty());
        assert_eq!(body.total, 0);
    }
}
