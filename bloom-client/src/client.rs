//! Store client - network communication
//!
//! One outbound request per operation, no retries. The endpoint is a
//! spreadsheet web app: verbs travel in the `action` query parameter,
//! create/update bodies are JSON sent as `text/plain`, and delete is a
//! plain GET carrying the target id.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::Client;
use shared::{Order, PaidUpdate};

/// HTTP client for the remote order store
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Client,
    base_url: String,
}

impl StoreClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Store endpoint URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all orders from the store
    ///
    /// An empty array is a valid response. Rows are parsed with the lenient
    /// rules in [`shared::models::order`]; a body that is not a JSON array
    /// at all is an [`ClientError::InvalidResponse`].
    pub async fn list(&self) -> ClientResult<Vec<Order>> {
        let response = self.client.get(&self.base_url).send().await?;
        let body = Self::success_body(response).await?;
        serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(format!("expected order array: {}", e)))
    }

    /// Dispatch a newly created order to the store
    ///
    /// The response body is not parsed; any success status counts as
    /// "request dispatched".
    pub async fn create(&self, order: &Order) -> ClientResult<()> {
        let body = serde_json::to_string(order)?;
        let response = self
            .client
            .post(&self.base_url)
            .query(&[("action", "create")])
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?;
        Self::success_body(response).await?;
        tracing::debug!(id = %order.id, "create dispatched");
        Ok(())
    }

    /// Dispatch a paid-flag change to the store
    pub async fn set_paid(&self, update: &PaidUpdate) -> ClientResult<()> {
        let body = serde_json::to_string(update)?;
        let response = self
            .client
            .post(&self.base_url)
            .query(&[("action", "update")])
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?;
        Self::success_body(response).await?;
        tracing::debug!(id = %update.id, is_paid = update.is_paid, "update dispatched");
        Ok(())
    }

    /// Dispatch an order deletion to the store
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("action", "delete"), ("id", id)])
            .send()
            .await?;
        Self::success_body(response).await?;
        tracing::debug!(id = %id, "delete dispatched");
        Ok(())
    }

    async fn success_body(response: reqwest::Response) -> ClientResult<String> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
