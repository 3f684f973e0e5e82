//! Credential verification endpoint
//!
//! Confirms a presented email/password pair against the stored hash. No
//! session or token is issued.

use axum::{extract::State, routing::post, Router};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, UserResponse};

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Verify credentials
///
/// POST /auth/login
///
/// Returns the user record on success, 401 on unknown email or wrong
/// password.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(email = %request.email, "Verifying credentials");

    let user = state
        .user_service
        .verify_credentials(&request.email, &request.password)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::unauthorized("invalid email or password"))?;

    Ok(Json(UserResponse::from(&user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_deserialization() {
        let json = r#"{"email": "ada@example.com", "password": "longenough1"}"#;

        let request: LoginRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.password, "longenough1");
    }

    #[test]
    fn test_login_request_defaults_missing_fields() {
        // Empty fields fail validation downstream rather than at decode time
        let request: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(request.email.is_empty());
        assert!(request.password.is_empty());
    }
}
