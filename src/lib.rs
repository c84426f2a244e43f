//! Slash-command relay: validates chat platform callbacks, runs the matching
//! command and posts the reply back to the callback URL.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::errors::{ConfigError, DeliveryError, RelayError, RelayServerError};
pub use application::services::{CommandRelay, CommandService, HandleOutcome};
pub use domain::entities::{Block, CommandName, InboundRequest, ParamValue, ReplyPayload};
pub use domain::traits::{Delivery, DeliveryTarget};
pub use infrastructure::config::Config;
pub use infrastructure::delivery::HttpDelivery;
