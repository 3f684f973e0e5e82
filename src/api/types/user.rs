//! Wire types for the user endpoints
//!
//! Fields are mapped explicitly between the wire shape and the domain
//! entity; the entity itself never appears on the wire.

use serde::{Deserialize, Serialize};

use crate::domain::event::Event;
use crate::domain::user::{User, UserDraft};
use crate::infrastructure::user::UpdateUserRequest;

/// Request body for POST /users
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserApiRequest {
    /// Ignored if supplied; the store assigns ids
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub verified: bool,
}

impl From<CreateUserApiRequest> for UserDraft {
    fn from(request: CreateUserApiRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
            phone_number: request.phone_number,
            email: request.email,
            password: request.password,
            verified: request.verified,
        }
    }
}

/// Request body for PUT /users/{id}; absent fields keep their stored values
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserApiRequest {
    pub name: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub verified: Option<bool>,
}

impl From<UpdateUserApiRequest> for UpdateUserRequest {
    fn from(request: UpdateUserApiRequest) -> Self {
        Self {
            name: request.name,
            phone_number: request.phone_number,
            email: request.email,
            password: request.password,
            verified: request.verified,
        }
    }
}

/// User record on the wire
///
/// `password` carries the stored hash, never a plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub email: String,
    pub password: String,
    pub verified: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().as_i64(),
            name: user.name().to_string(),
            phone_number: user.phone_number().to_string(),
            email: user.email().to_string(),
            password: user.password_hash().to_string(),
            verified: user.verified(),
            created_at: user.created_at().to_rfc3339(),
            updated_at: user.updated_at().to_rfc3339(),
        }
    }
}

/// GET /users response
#[derive(Debug, Clone, Serialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserResponse>,
    pub total: usize,
}

/// Event record on the wire
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: i64,
    #[serde(rename = "ownerId")]
    pub owner_id: i64,
    pub title: String,
    pub location: String,
    #[serde(rename = "startsAt")]
    pub starts_at: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id(),
            owner_id: event.owner_id().as_i64(),
            title: event.title().to_string(),
            location: event.location().to_string(),
            starts_at: event.starts_at().to_rfc3339(),
            created_at: event.created_at().to_rfc3339(),
            updated_at: event.updated_at().to_rfc3339(),
        }
    }
}

/// GET /users/{id}/events response
#[derive(Debug, Clone, Serialize)]
pub struct ListEventsResponse {
    pub events: Vec<EventResponse>,
    pub total: usize,
}
