//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Implementations own durability and the uniqueness of email and phone
/// number. Ids are assigned by the store on create.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by id
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Get a user by email (for login)
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user and return the stored record with its assigned id
    async fn create(&self, new_user: NewUser) -> Result<User, DomainError>;

    /// Re-persist an existing user
    async fn update(&self, user: &User) -> Result<User, DomainError>;

    /// Delete a user, returning whether a row was removed
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;

    /// List all users in insertion order
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Check whether a user with the given id exists
    async fn exists(&self, id: UserId) -> Result<bool, DomainError> {
        Ok(self.get(id).await?.is_some())
    }
}
