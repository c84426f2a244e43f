//! Command relay - validates a callback, runs its command, posts the reply

use std::sync::Arc;

use tokio::runtime::Handle;

use crate::application::errors::RelayError;
use crate::domain::entities::{CommandName, InboundRequest, ReplyPayload};
use crate::domain::traits::{Delivery, DeliveryTarget};

use super::command_service::CommandService;

/// What the HTTP layer should answer to the original caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleOutcome {
    /// 200 with an empty body
    Accepted,
    /// 400 with the error's message as body
    Rejected(RelayError),
}

impl HandleOutcome {
    pub fn status_code(&self) -> u16 {
        match self {
            HandleOutcome::Accepted => 200,
            HandleOutcome::Rejected(_) => 400,
        }
    }

    pub fn body(&self) -> String {
        match self {
            HandleOutcome::Accepted => String::new(),
            HandleOutcome::Rejected(err) => err.to_string(),
        }
    }
}

/// Entry point the HTTP layer plugs into.
///
/// Holds no per-request state, so a single instance is shared by every
/// request handler.
pub struct CommandRelay {
    commands: CommandService,
    delivery: Arc<dyn Delivery>,
}

impl CommandRelay {
    pub fn new(delivery: Arc<dyn Delivery>) -> Self {
        Self {
            commands: CommandService::new(),
            delivery,
        }
    }

    /// Handle one decoded callback.
    ///
    /// The reply delivery is spawned onto the current Tokio runtime and never
    /// awaited here. Without a runtime the delivery is skipped and logged.
    pub fn handle(&self, request: &InboundRequest) -> HandleOutcome {
        match self.process(request) {
            Ok(command) => {
                tracing::info!("{} accepted", command);
                HandleOutcome::Accepted
            }
            Err(err) => {
                tracing::debug!("Rejected callback: {}", err);
                HandleOutcome::Rejected(err)
            }
        }
    }

    fn process(&self, request: &InboundRequest) -> Result<CommandName, RelayError> {
        let command = CommandName::from_token(request.required("command")?)?;
        let reply = self.commands.execute(command, request)?;
        self.forward(request, reply)?;
        Ok(command)
    }

    /// Hand a reply to the delivery backend. `None` delivers nothing.
    fn forward(
        &self,
        request: &InboundRequest,
        reply: Option<ReplyPayload>,
    ) -> Result<(), RelayError> {
        let Some(payload) = reply else {
            return Ok(());
        };

        let target = DeliveryTarget::new(request.required("response_url")?);
        let host = target.host();

        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!("No async runtime, dropping reply for {}", host);
            return Ok(());
        };

        let delivery = Arc::clone(&self.delivery);
        runtime.spawn(async move {
            match delivery.deliver(target, payload).await {
                Ok(()) => tracing::debug!("Delivered reply to {}", host),
                Err(e) => tracing::warn!("Failed to deliver reply to {}: {}", host, e),
            }
        });

        Ok(())
    }
}
