//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Delivery: Outbound reply posting
//! - Adapters: Inbound HTTP surface

pub mod config;
pub mod delivery;
pub mod adapters;
