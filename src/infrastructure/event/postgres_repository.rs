//! PostgreSQL event repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::event::{Event, EventRepository, NewEvent};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// PostgreSQL implementation of EventRepository
#[derive(Debug, Clone)]
pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Event>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, title, location, starts_at, created_at, updated_at
            FROM events
            WHERE owner_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to query events by owner: {}", e)))?;

        rows.iter().map(row_to_event).collect()
    }

    async fn create(&self, new_event: NewEvent) -> Result<Event, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO events (owner_id, title, location, starts_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id, owner_id, title, location, starts_at, created_at, updated_at
            "#,
        )
        .bind(new_event.owner_id.as_i64())
        .bind(&new_event.title)
        .bind(&new_event.location)
        .bind(new_event.starts_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create event: {}", e)))?;

        row_to_event(&row)
    }

    async fn list(&self) -> Result<Vec<Event>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, title, location, starts_at, created_at, updated_at
            FROM events
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list events: {}", e)))?;

        rows.iter().map(row_to_event).collect()
    }
}

fn row_to_event(row: &sqlx::postgres::PgRow) -> Result<Event, DomainError> {
    let id: i64 = row.get("id");
    let owner_id: i64 = row.get("owner_id");
    let title: String = row.get("title");
    let location: String = row.get("location");
    let starts_at: chrono::DateTime<chrono::Utc> = row.get("starts_at");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    let owner = UserId::new(owner_id)
        .map_err(|e| DomainError::storage(format!("Invalid owner id in database: {}", e)))?;

    Ok(Event::restore(
        id, owner, title, location, starts_at, created_at, updated_at,
    ))
}
