//! Infrastructure layer - External service implementations

pub mod event;
pub mod logging;
pub mod storage;
pub mod user;
