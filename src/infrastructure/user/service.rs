//! User service - CRUD orchestration over the user store
//!
//! Every mutating operation on an existing record runs an existence check
//! first; the sanitize -> validate -> hash pipeline runs before any write
//! that carries a plaintext password.

use std::sync::Arc;

use crate::domain::event::{Event, EventRepository};
use crate::domain::user::{
    sanitize_draft, validate_draft, NewUser, User, UserDraft, UserId, UserRepository,
    ValidationAction,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Partial update payload; absent fields keep their stored values
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    /// Plaintext; re-hashed before persistence when supplied
    pub password: Option<String>,
    pub verified: Option<bool>,
}

/// User service for account management and credential verification
#[derive(Debug)]
pub struct UserService<R: UserRepository, E: EventRepository, H: PasswordHasher> {
    repository: Arc<R>,
    event_repository: Arc<E>,
    hasher: Arc<H>,
}

impl<R: UserRepository, E: EventRepository, H: PasswordHasher> UserService<R, E, H> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, event_repository: Arc<E>, hasher: Arc<H>) -> Self {
        Self {
            repository,
            event_repository,
            hasher,
        }
    }

    /// List all users in store order
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }

    /// Get a user by id, or NotFound
    pub async fn get(&self, id: UserId) -> Result<User, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))
    }

    /// Check whether a user with the given id exists
    pub async fn exists(&self, id: UserId) -> Result<bool, DomainError> {
        self.repository.exists(id).await
    }

    /// Create a new user from a raw draft
    ///
    /// Pipeline: sanitize -> validate -> hash -> persist. A store failure
    /// (uniqueness, connectivity) is terminal for the request.
    pub async fn create(&self, draft: UserDraft) -> Result<User, DomainError> {
        let mut draft = draft;
        sanitize_draft(&mut draft);
        validate_draft(&draft, ValidationAction::Create)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let password_hash = self.hasher.hash(&draft.password)?;

        let new_user = NewUser {
            name: draft.name,
            phone_number: draft.phone_number,
            email: draft.email,
            password_hash,
            verified: draft.verified,
        };

        self.repository.create(new_user).await
    }

    /// Update an existing user, merging supplied fields over the stored row
    ///
    /// The password is re-hashed only when a new plaintext was supplied; the
    /// stored hash is never hashed a second time.
    pub async fn update(&self, id: UserId, request: UpdateUserRequest) -> Result<User, DomainError> {
        // Existence check guards the mutation
        let mut current = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        let mut draft = UserDraft {
            id: 0,
            name: request.name.unwrap_or_else(|| current.name().to_string()),
            phone_number: request
                .phone_number
                .unwrap_or_else(|| current.phone_number().to_string()),
            email: request.email.unwrap_or_else(|| current.email().to_string()),
            // Presence check passes on the stored hash when no new plaintext
            // was supplied; sanitize leaves passwords untouched
            password: request
                .password
                .clone()
                .unwrap_or_else(|| current.password_hash().to_string()),
            verified: request.verified.unwrap_or_else(|| current.verified()),
        };

        sanitize_draft(&mut draft);
        validate_draft(&draft, ValidationAction::Update)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        current.set_name(draft.name);
        current.set_phone_number(draft.phone_number);
        current.set_email(draft.email);

        if let Some(password) = request.password {
            let password_hash = self.hasher.hash(&password)?;
            current.set_password_hash(password_hash);
        }

        if let Some(verified) = request.verified {
            current.set_verified(verified);
        }

        self.repository.update(&current).await
    }

    /// Delete a user, returning the removed record's last-known values
    pub async fn delete(&self, id: UserId) -> Result<User, DomainError> {
        // Existence check doubles as the confirmation payload fetch
        let user = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        self.repository.delete(id).await?;

        Ok(user)
    }

    /// Events owned by the given user id
    ///
    /// An unknown id yields an empty list; the lookup is read-only and has
    /// no existence guard.
    pub async fn events_for_user(&self, id: UserId) -> Result<Vec<Event>, DomainError> {
        self.event_repository.find_by_owner(id).await
    }

    /// Verify a presented email/password pair against the stored hash
    ///
    /// Returns the user on success, None on unknown email or wrong password.
    /// No session or token is issued.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let mut draft = UserDraft {
            email: email.to_string(),
            password: password.to_string(),
            ..UserDraft::default()
        };

        sanitize_draft(&mut draft);
        validate_draft(&draft, ValidationAction::Login)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let user = match self.repository.get_by_email(&draft.email).await? {
            Some(u) => u,
            None => return Ok(None),
        };

        if !self.hasher.verify(password, user.password_hash()) {
            return Ok(None);
        }

        Ok(Some(user))
    }
}
