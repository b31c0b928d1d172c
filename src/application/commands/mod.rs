//! Application layer - commands (writes)

mod setup_commands;
pub mod handlers;

pub use handlers::{SetupDatabaseHandler, SetupDatabaseResponse};
pub use setup_commands::SetupDatabase;
