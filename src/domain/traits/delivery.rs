use async_trait::async_trait;

use crate::application::errors::DeliveryError;
use crate::domain::entities::ReplyPayload;

/// Callback URL a reply is posted to, used for exactly one delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryTarget(String);

impl DeliveryTarget {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Host part of the URL, safe to log. The full URL is a one-shot
    /// credential and stays out of logs.
    pub fn host(&self) -> String {
        reqwest::Url::parse(&self.0)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| "<invalid url>".to_string())
    }
}

/// Delivery trait - abstraction for posting replies out-of-band
#[async_trait]
pub trait Delivery: Send + Sync {
    /// Post a reply to its callback URL, once
    async fn deliver(
        &self,
        target: DeliveryTarget,
        payload: ReplyPayload,
    ) -> Result<(), DeliveryError>;
}
