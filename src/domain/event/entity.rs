//! Event entity - collaborator whose lifecycle is owned elsewhere
//!
//! Only the association to its owning user is exercised here.

use chrono::{DateTime, Utc};

use crate::domain::user::UserId;

/// A new event ready to be persisted (id assigned by the store)
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub owner_id: UserId,
    pub title: String,
    pub location: String,
    pub starts_at: DateTime<Utc>,
}

/// Stored event record
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    id: i64,
    owner_id: UserId,
    title: String,
    location: String,
    starts_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Event {
    /// Create an event from a persisted new-event record and its assigned id
    pub fn from_new(id: i64, new_event: NewEvent) -> Self {
        let now = Utc::now();

        Self {
            id,
            owner_id: new_event.owner_id,
            title: new_event.title,
            location: new_event.location,
            starts_at: new_event.starts_at,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild an event from stored column values
    pub fn restore(
        id: i64,
        owner_id: UserId,
        title: impl Into<String>,
        location: impl Into<String>,
        starts_at: DateTime<Utc>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            title: title.into(),
            location: location.into(),
            starts_at,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
