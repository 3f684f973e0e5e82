//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository
///
/// Uniqueness of email and phone number is enforced by unique indexes;
/// constraint violations surface as Conflict.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, phone_number, email, password_hash, verified,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, phone_number, email, password_hash, verified,
                   created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user by email: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (name, phone_number, email, password_hash, verified,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            RETURNING id, name, phone_number, email, password_hash, verified,
                      created_at, updated_at
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.phone_number)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(new_user.verified)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &new_user.email, &new_user.phone_number))?;

        row_to_user(&row)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = $2, phone_number = $3, email = $4, password_hash = $5,
                verified = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(user.id().as_i64())
        .bind(user.name())
        .bind(user.phone_number())
        .bind(user.email())
        .bind(user.password_hash())
        .bind(user.verified())
        .bind(user.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, user.email(), user.phone_number()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "User '{}' not found",
                user.id()
            )));
        }

        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, phone_number, email, password_hash, verified,
                   created_at, updated_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        let mut users = Vec::with_capacity(rows.len());

        for row in rows {
            users.push(row_to_user(&row)?);
        }

        Ok(users)
    }
}

// Names of the unique indexes the users migration declares
const EMAIL_CONSTRAINT: &str = "idx_users_email";
const PHONE_CONSTRAINT: &str = "idx_users_phone_number";

fn map_unique_violation(e: sqlx::Error, email: &str, phone_number: &str) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        match db_err.constraint() {
            Some(EMAIL_CONSTRAINT) => {
                return DomainError::conflict(format!("Email '{}' already registered", email));
            }
            Some(PHONE_CONSTRAINT) => {
                return DomainError::conflict(format!(
                    "Phone number '{}' already registered",
                    phone_number
                ));
            }
            _ => {}
        }
    }

    DomainError::storage(format!("Failed to persist user: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::migrations::storage_migrations;

    #[test]
    fn test_non_constraint_error_maps_to_storage() {
        let err = map_unique_violation(sqlx::Error::RowNotFound, "a@example.com", "+1-555-0100");
        assert!(matches!(err, DomainError::Storage { .. }));
    }

    #[test]
    fn test_constraint_names_match_schema_indexes() {
        // The mapping keys off the index names the users migration declares
        let users_migration = &storage_migrations()[0];

        assert!(users_migration.up.contains(EMAIL_CONSTRAINT));
        assert!(users_migration.up.contains(PHONE_CONSTRAINT));
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let id: i64 = row.get("id");
    let name: String = row.get("name");
    let phone_number: String = row.get("phone_number");
    let email: String = row.get("email");
    let password_hash: String = row.get("password_hash");
    let verified: bool = row.get("verified");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    let user_id = UserId::new(id)
        .map_err(|e| DomainError::storage(format!("Invalid user id in database: {}", e)))?;

    Ok(User::restore(
        user_id,
        name,
        phone_number,
        email,
        password_hash,
        verified,
        created_at,
        updated_at,
    ))
}
