//! Application state for shared services

use std::sync::Arc;

use crate::domain::event::{Event, EventRepository};
use crate::domain::user::{User, UserDraft, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::{PasswordHasher, UpdateUserRequest, UserService};

/// Application state containing shared services using dynamic dispatch
///
/// Services are injected at construction; nothing reaches for ambient
/// globals.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
}

impl AppState {
    /// Create new application state with the provided services
    pub fn new(user_service: Arc<dyn UserServiceTrait>) -> Self {
        Self { user_service }
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn get(&self, id: UserId) -> Result<User, DomainError>;
    async fn create(&self, draft: UserDraft) -> Result<User, DomainError>;
    async fn update(&self, id: UserId, request: UpdateUserRequest) -> Result<User, DomainError>;
    async fn delete(&self, id: UserId) -> Result<User, DomainError>;
    async fn events_for_user(&self, id: UserId) -> Result<Vec<Event>, DomainError>;
    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError>;
}

#[async_trait::async_trait]
impl<R, E, H> UserServiceTrait for UserService<R, E, H>
where
    R: UserRepository + 'static,
    E: EventRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        UserService::list(self).await
    }

    async fn get(&self, id: UserId) -> Result<User, DomainError> {
        UserService::get(self, id).await
    }

    async fn create(&self, draft: UserDraft) -> Result<User, DomainError> {
        UserService::create(self, draft).await
    }

    async fn update(&self, id: UserId, request: UpdateUserRequest) -> Result<User, DomainError> {
        UserService::update(self, id, request).await
    }

    async fn delete(&self, id: UserId) -> Result<User, DomainError> {
        UserService::delete(self, id).await
    }

    async fn events_for_user(&self, id: UserId) -> Result<Vec<Event>, DomainError> {
        UserService::events_for_user(self, id).await
    }

    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        UserService::verify_credentials(self, email, password).await
    }
}
