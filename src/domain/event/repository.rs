//! Event repository trait - association query surface

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Event, NewEvent};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Repository trait for event storage
///
/// The core only needs the ownership association; event CRUD beyond create
/// belongs to the event collaborator.
#[async_trait]
pub trait EventRepository: Send + Sync + Debug {
    /// Events owned by the given user, insertion order
    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Event>, DomainError>;

    /// Persist a new event and return the stored record with its assigned id
    async fn create(&self, new_event: NewEvent) -> Result<Event, DomainError>;

    /// List all events in insertion order
    async fn list(&self) -> Result<Vec<Event>, DomainError>;
}
