//! Wire types for the HTTP API

pub mod error;
pub mod json;
pub mod user;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use user::{
    CreateUserApiRequest, EventResponse, ListEventsResponse, ListUsersResponse,
    UpdateUserApiRequest, UserResponse,
};
