//! In-memory event repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::event::{Event, EventRepository, NewEvent};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// In-memory implementation of EventRepository
#[derive(Debug)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<BTreeMap<i64, Event>>>,
    next_id: AtomicI64,
}

impl InMemoryEventRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Event>, DomainError> {
        let events = self.events.read().await;

        Ok(events
            .values()
            .filter(|e| e.owner_id() == owner_id)
            .cloned()
            .collect())
    }

    async fn create(&self, new_event: NewEvent) -> Result<Event, DomainError> {
        let mut events = self.events.write().await;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let event = Event::from_new(id, new_event);
        events.insert(id, event.clone());

        Ok(event)
    }

    async fn list(&self) -> Result<Vec<Event>, DomainError> {
        let events = self.events.read().await;
        Ok(events.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn new_event(owner: UserId, title: &str) -> NewEvent {
        NewEvent {
            owner_id: owner,
            title: title.to_string(),
            location: "Montreal".to_string(),
            starts_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_find_by_owner_filters_by_owner_id() {
        let repo = InMemoryEventRepository::new();
        let ada = UserId::new(1).unwrap();
        let grace = UserId::new(2).unwrap();

        repo.create(new_event(ada, "RustConf")).await.unwrap();
        repo.create(new_event(grace, "Curry On")).await.unwrap();
        repo.create(new_event(ada, "FOSDEM")).await.unwrap();

        let ada_events = repo.find_by_owner(ada).await.unwrap();
        assert_eq!(ada_events.len(), 2);
        assert!(ada_events.iter().all(|e| e.owner_id() == ada));

        let titles: Vec<&str> = ada_events.iter().map(|e| e.title()).collect();
        assert_eq!(titles, vec!["RustConf", "FOSDEM"]);
    }

    #[tokio::test]
    async fn test_find_by_owner_unknown_owner_is_empty() {
        let repo = InMemoryEventRepository::new();
        let nobody = UserId::new(999).unwrap();

        let events = repo.find_by_owner(nobody).await.unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryEventRepository::new();
        let owner = UserId::new(1).unwrap();

        let first = repo.create(new_event(owner, "A")).await.unwrap();
        let second = repo.create(new_event(owner, "B")).await.unwrap();

        assert!(second.id() > first.id());
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }
}
