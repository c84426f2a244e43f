//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: Command handlers and the relay that drives them
//! - Errors: Validation, delivery, and configuration errors

pub mod errors;
pub mod services;
