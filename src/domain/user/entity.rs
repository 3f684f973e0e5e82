//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_user_id, UserValidationError};

/// User identifier - positive integer assigned by the store
///
/// Zero is the "unset" marker on incoming payloads and is never a valid id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Create a new UserId after validation
    pub fn new(id: i64) -> Result<Self, UserValidationError> {
        validate_user_id(id)?;
        Ok(Self(id))
    }

    /// Get the inner integer value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw user payload as decoded from a request body, before the
/// sanitize/validate/hash pipeline has run
///
/// `password` holds the presented plaintext; it never reaches the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    /// Client-supplied id; cleared to zero by sanitize
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub password: String,
    pub verified: bool,
}

/// A validated, sanitized user ready to be persisted as a new row
///
/// Carries the password hash, never the plaintext. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub password_hash: String,
    pub verified: bool,
}

/// Stored user record
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Store-assigned identifier, immutable after creation
    id: UserId,
    /// Display name
    name: String,
    /// Phone number, unique across all records
    phone_number: String,
    /// Email address, unique across all records
    email: String,
    /// Argon2 password hash - never plaintext
    password_hash: String,
    /// Whether the account has been verified
    verified: bool,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a user from a persisted new-user record and its assigned id
    pub fn from_new(id: UserId, new_user: NewUser) -> Self {
        let now = Utc::now();

        Self {
            id,
            name: new_user.name,
            phone_number: new_user.phone_number,
            email: new_user.email,
            password_hash: new_user.password_hash,
            verified: new_user.verified,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a user from stored column values
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: UserId,
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        verified: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            verified,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn verified(&self) -> bool {
        self.verified
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) {
        self.phone_number = phone_number.into();
        self.touch();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.touch();
    }

    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
        self.touch();
    }

    pub fn set_verified(&mut self, verified: bool) {
        self.verified = verified;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(id: i64, email: &str) -> User {
        let user_id = UserId::new(id).unwrap();
        User::from_new(
            user_id,
            NewUser {
                name: "Ada".to_string(),
                phone_number: "+1-555-0100".to_string(),
                email: email.to_string(),
                password_hash: "hashed_password".to_string(),
                verified: false,
            },
        )
    }

    #[test]
    fn test_user_id_valid() {
        let id = UserId::new(42).unwrap();
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_user_id_rejects_zero_and_negative() {
        assert!(UserId::new(0).is_err());
        assert!(UserId::new(-1).is_err());
    }

    #[test]
    fn test_user_id_serde_round_trip() {
        let id = UserId::new(7).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");

        let back: UserId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<UserId>("0").is_err());
    }

    #[test]
    fn test_user_creation() {
        let user = create_test_user(1, "ada@example.com");

        assert_eq!(user.id().as_i64(), 1);
        assert_eq!(user.name(), "Ada");
        assert_eq!(user.phone_number(), "+1-555-0100");
        assert_eq!(user.email(), "ada@example.com");
        assert_eq!(user.password_hash(), "hashed_password");
        assert!(!user.verified());
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[test]
    fn test_user_mutators_touch_updated_at() {
        let mut user = create_test_user(1, "ada@example.com");
        let original_updated = user.updated_at();

        // Small delay to ensure timestamp differs
        std::thread::sleep(std::time::Duration::from_millis(10));

        user.set_password_hash("new_hash");
        assert_eq!(user.password_hash(), "new_hash");
        assert!(user.updated_at() > original_updated);
        assert_eq!(user.created_at(), original_updated.min(user.created_at()));
    }

    #[test]
    fn test_user_set_verified() {
        let mut user = create_test_user(1, "ada@example.com");
        assert!(!user.verified());

        user.set_verified(true);
        assert!(user.verified());
    }

    #[test]
    fn test_user_restore() {
        let now = Utc::now();
        let user = User::restore(
            UserId::new(3).unwrap(),
            "Grace",
            "+1-555-0101",
            "grace@example.com",
            "hash",
            true,
            now,
            now,
        );

        assert_eq!(user.id().as_i64(), 3);
        assert_eq!(user.name(), "Grace");
        assert!(user.verified());
        assert_eq!(user.created_at(), now);
    }

    #[test]
    fn test_draft_defaults() {
        let draft = UserDraft::default();
        assert_eq!(draft.id, 0);
        assert!(!draft.verified);
        assert!(draft.name.is_empty());
    }
}
