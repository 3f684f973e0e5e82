//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// Ids are assigned from a monotonically increasing sequence; the BTreeMap
/// keyed by id therefore iterates in insertion order. Email and phone
/// uniqueness are enforced through secondary indexes, mirroring the unique
/// constraints the PostgreSQL backend declares.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<i64, User>>>,
    /// email -> user id
    email_index: Arc<RwLock<HashMap<String, i64>>>,
    /// phone number -> user id
    phone_index: Arc<RwLock<HashMap<String, i64>>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            email_index: Arc::new(RwLock::new(HashMap::new())),
            phone_index: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id.as_i64()).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let email_index = self.email_index.read().await;

        if let Some(user_id) = email_index.get(email) {
            let users = self.users.read().await;
            return Ok(users.get(user_id).cloned());
        }

        Ok(None)
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let mut email_index = self.email_index.write().await;
        let mut phone_index = self.phone_index.write().await;

        if email_index.contains_key(&new_user.email) {
            return Err(DomainError::conflict(format!(
                "Email '{}' already registered",
                new_user.email
            )));
        }

        if phone_index.contains_key(&new_user.phone_number) {
            return Err(DomainError::conflict(format!(
                "Phone number '{}' already registered",
                new_user.phone_number
            )));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user_id = UserId::new(id)
            .map_err(|e| DomainError::internal(format!("Bad generated id: {}", e)))?;

        email_index.insert(new_user.email.clone(), id);
        phone_index.insert(new_user.phone_number.clone(), id);

        let user = User::from_new(user_id, new_user);
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let mut email_index = self.email_index.write().await;
        let mut phone_index = self.phone_index.write().await;

        let id = user.id().as_i64();

        let old_user = users
            .get(&id)
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?
            .clone();

        // Re-index email if it changed, rejecting a takeover of another row's
        if old_user.email() != user.email() {
            if email_index.contains_key(user.email()) {
                return Err(DomainError::conflict(format!(
                    "Email '{}' already registered",
                    user.email()
                )));
            }
            email_index.remove(old_user.email());
            email_index.insert(user.email().to_string(), id);
        }

        if old_user.phone_number() != user.phone_number() {
            if phone_index.contains_key(user.phone_number()) {
                return Err(DomainError::conflict(format!(
                    "Phone number '{}' already registered",
                    user.phone_number()
                )));
            }
            phone_index.remove(old_user.phone_number());
            phone_index.insert(user.phone_number().to_string(), id);
        }

        users.insert(id, user.clone());

        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        let mut email_index = self.email_index.write().await;
        let mut phone_index = self.phone_index.write().await;

        if let Some(user) = users.remove(&id.as_i64()) {
            email_index.remove(user.email());
            phone_index.remove(user.phone_number());
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str, phone: &str) -> NewUser {
        NewUser {
            name: "Test".to_string(),
            phone_number: phone.to_string(),
            email: email.to_string(),
            password_hash: "hashed_password".to_string(),
            verified: false,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryUserRepository::new();

        let created = repo
            .create(new_user("ada@example.com", "+1-555-0100"))
            .await
            .unwrap();
        assert!(created.id().as_i64() > 0);

        let retrieved = repo.get(created.id()).await.unwrap();
        assert_eq!(retrieved, Some(created));
    }

    #[tokio::test]
    async fn test_get_by_email() {
        let repo = InMemoryUserRepository::new();
        let created = repo
            .create(new_user("ada@example.com", "+1-555-0100"))
            .await
            .unwrap();

        let retrieved = repo.get_by_email("ada@example.com").await.unwrap();
        assert_eq!(retrieved.map(|u| u.id()), Some(created.id()));

        let not_found = repo.get_by_email("nobody@example.com").await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("dup@example.com", "+1-555-0100"))
            .await
            .unwrap();

        let result = repo.create(new_user("dup@example.com", "+1-555-0101")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_duplicate_phone_number() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("a@example.com", "+1-555-0100"))
            .await
            .unwrap();

        let result = repo.create(new_user("b@example.com", "+1-555-0100")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update_reindexes_email() {
        let repo = InMemoryUserRepository::new();
        let mut user = repo
            .create(new_user("old@example.com", "+1-555-0100"))
            .await
            .unwrap();

        user.set_email("new@example.com");
        repo.update(&user).await.unwrap();

        assert!(repo.get_by_email("old@example.com").await.unwrap().is_none());
        assert!(repo.get_by_email("new@example.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_email_conflict() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("taken@example.com", "+1-555-0100"))
            .await
            .unwrap();
        let mut second = repo
            .create(new_user("free@example.com", "+1-555-0101"))
            .await
            .unwrap();

        second.set_email("taken@example.com");

        let result = repo.update(&second).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = InMemoryUserRepository::new();
        let ghost = User::from_new(
            UserId::new(999).unwrap(),
            new_user("ghost@example.com", "+1-555-0100"),
        );

        let result = repo.update(&ghost).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_removes_row_and_indexes() {
        let repo = InMemoryUserRepository::new();
        let user = repo
            .create(new_user("ada@example.com", "+1-555-0100"))
            .await
            .unwrap();

        assert!(repo.delete(user.id()).await.unwrap());
        assert!(repo.get(user.id()).await.unwrap().is_none());
        assert!(repo.get_by_email("ada@example.com").await.unwrap().is_none());

        // Second delete is a no-op
        assert!(!repo.delete(user.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryUserRepository::new();

        let first = repo
            .create(new_user("a@example.com", "+1-555-0001"))
            .await
            .unwrap();
        let second = repo
            .create(new_user("b@example.com", "+1-555-0002"))
            .await
            .unwrap();
        let third = repo
            .create(new_user("c@example.com", "+1-555-0003"))
            .await
            .unwrap();

        let all = repo.list().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|u| u.id().as_i64()).collect();
        assert_eq!(
            ids,
            vec![first.id().as_i64(), second.id().as_i64(), third.id().as_i64()]
        );
    }

    #[tokio::test]
    async fn test_id_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();
        let first = repo
            .create(new_user("a@example.com", "+1-555-0001"))
            .await
            .unwrap();
        repo.delete(first.id()).await.unwrap();

        let second = repo
            .create(new_user("b@example.com", "+1-555-0002"))
            .await
            .unwrap();
        assert!(second.id().as_i64() > first.id().as_i64());
    }
}
