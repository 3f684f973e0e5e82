//! Event domain - ownership association to users

mod entity;
mod repository;

pub use entity::{Event, NewEvent};
pub use repository::EventRepository;
