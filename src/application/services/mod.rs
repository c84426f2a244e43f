//! Application services - Command execution and reply relaying

pub mod command_service;
pub mod relay_service;

pub use command_service::CommandService;
pub use relay_service::{CommandRelay, HandleOutcome};
