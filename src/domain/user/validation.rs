//! User validation rules per operation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::entity::UserDraft;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("name is required")]
    EmptyName,

    #[error("phone number is required")]
    EmptyPhoneNumber,

    #[error("password is required")]
    EmptyPassword,

    #[error("email is required")]
    EmptyEmail,

    #[error("password is too short. Minimum length is {0} characters")]
    PasswordTooShort(usize),

    #[error("email is invalid")]
    InvalidEmail,

    #[error("user id must be a positive integer, got {0}")]
    InvalidId(i64),
}

const MIN_PASSWORD_LENGTH: usize = 8;

/// Operation the validation rules are selected for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationAction {
    /// Sign-up of a new account
    Create,
    /// Mutation of an existing account
    Update,
    /// Credential verification
    Login,
}

// local-part@domain with at least one dot in the domain
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex must compile")
});

/// Check that a string is a syntactically well-formed email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a store-assigned user id (positive, non-zero)
pub fn validate_user_id(id: i64) -> Result<(), UserValidationError> {
    if id <= 0 {
        return Err(UserValidationError::InvalidId(id));
    }

    Ok(())
}

/// Validate a draft for the given operation
///
/// First-failure-wins: fields are checked in a fixed order and the first
/// violation is returned. No store access happens here.
pub fn validate_draft(
    draft: &UserDraft,
    action: ValidationAction,
) -> Result<(), UserValidationError> {
    match action {
        ValidationAction::Create => validate_for_create(draft),
        ValidationAction::Update => validate_for_update(draft),
        ValidationAction::Login => validate_for_login(draft),
    }
}

fn validate_for_create(draft: &UserDraft) -> Result<(), UserValidationError> {
    if draft.name.is_empty() {
        return Err(UserValidationError::EmptyName);
    }
    if draft.phone_number.is_empty() {
        return Err(UserValidationError::EmptyPhoneNumber);
    }
    if draft.password.is_empty() {
        return Err(UserValidationError::EmptyPassword);
    }
    if draft.password.len() < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }
    if draft.email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }
    if !is_valid_email(&draft.email) {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

fn validate_for_update(draft: &UserDraft) -> Result<(), UserValidationError> {
    if draft.name.is_empty() {
        return Err(UserValidationError::EmptyName);
    }
    if draft.phone_number.is_empty() {
        return Err(UserValidationError::EmptyPhoneNumber);
    }
    if draft.password.is_empty() {
        return Err(UserValidationError::EmptyPassword);
    }
    if draft.email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }
    if !is_valid_email(&draft.email) {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

fn validate_for_login(draft: &UserDraft) -> Result<(), UserValidationError> {
    if draft.password.is_empty() {
        return Err(UserValidationError::EmptyPassword);
    }
    if draft.email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }
    if !is_valid_email(&draft.email) {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}
