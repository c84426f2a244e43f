//! HTTP delivery of replies to callback URLs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::application::errors::DeliveryError;
use crate::domain::entities::ReplyPayload;
use crate::domain::traits::{Delivery, DeliveryTarget};

/// Most bytes of a rejected callback's body kept for the error
pub const MAX_ERROR_BODY: usize = 1024;

/// Posts replies with a shared client and a fixed per-request timeout
pub struct HttpDelivery {
    client: Client,
}

impl HttpDelivery {
    pub fn new(timeout: Duration) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Delivery for HttpDelivery {
    async fn deliver(
        &self,
        target: DeliveryTarget,
        payload: ReplyPayload,
    ) -> Result<(), DeliveryError> {
        let body = payload.to_json()?;

        let response = self
            .client
            .post(target.as_str())
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DeliveryError::Timeout(e.to_string())
                } else {
                    DeliveryError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body: read_capped(response, MAX_ERROR_BODY).await,
            });
        }

        Ok(())
    }
}

/// Read at most `limit` bytes of the body; the rest is dropped with the response
async fn read_capped(mut response: Response, limit: usize) -> String {
    let mut buf = Vec::new();
    while buf.len() < limit {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                let take = chunk.len().min(limit - buf.len());
                buf.extend_from_slice(&chunk[..take]);
            }
            _ => break,
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
