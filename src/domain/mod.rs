//! Domain layer - Core business logic and entities

pub mod error;
pub mod event;
pub mod user;

pub use error::DomainError;
pub use event::{Event, EventRepository, NewEvent};
pub use user::{
    is_valid_email, sanitize_draft, validate_draft, NewUser, User, UserDraft, UserId,
    UserRepository, UserValidationError, ValidationAction,
};
