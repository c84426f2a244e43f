//! Domain layer - Core relay types
//!
//! This layer contains:
//! - Entities: Inbound requests, command names, reply payloads
//! - Traits: Abstractions for infrastructure (Delivery)

pub mod entities;
pub mod traits;
