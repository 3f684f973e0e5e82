//! Event infrastructure module

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresEventRepository;
pub use repository::InMemoryEventRepository;
