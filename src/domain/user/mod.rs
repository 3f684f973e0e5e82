//! User domain
//!
//! Entity types, the sanitize/validate pipeline, and the repository trait
//! for registered users.

mod entity;
mod repository;
mod sanitize;
mod validation;

pub use entity::{NewUser, User, UserDraft, UserId};
pub use repository::UserRepository;
pub use sanitize::{escape_markup, sanitize_draft};
pub use validation::{
    is_valid_email, validate_draft, validate_user_id, UserValidationError, ValidationAction,
};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
