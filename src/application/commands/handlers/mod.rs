//! Command Handlers

mod setup_handlers;

pub use setup_handlers::{SetupDatabaseHandler, SetupDatabaseResponse};
