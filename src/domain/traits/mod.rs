//! Domain traits - Abstractions for infrastructure implementations

pub mod delivery;

pub use delivery::{Delivery, DeliveryTarget};
