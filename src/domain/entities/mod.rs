//! Domain entities - Core relay objects with no transport dependencies

pub mod command;
pub mod payload;
pub mod request;

pub use command::CommandName;
pub use payload::{Block, ReplyPayload, ResponseType, TextKind, TextObject};
pub use request::{InboundRequest, ParamValue};
