//! Storage infrastructure - schema migrations

pub mod migrations;

pub use migrations::{run_storage_migrations, Migration, PostgresMigrator};
