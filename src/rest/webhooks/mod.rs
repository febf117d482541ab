//! Webhook registration endpoints.
//!
//! These endpoints answer without the usual envelope. The response
//! normalizer wraps their bodies; failures the server reports inside the bare
//! payload are detected here.

mod types;

pub use types::Webhook;

use serde_json::Value;

use crate::error::TaurosError;
use crate::rest::TaurosRestClient;
use crate::rest::endpoints::v2;
use crate::rest::request::{ApiVersion, RequestSpec};
use types::{CreatedWebhook, WebhookList, payload_error};

impl TaurosRestClient {
    /// Send a webhook request and surface errors hidden in the bare payload.
    async fn webhook_request(&self, spec: &RequestSpec) -> Result<Value, TaurosError> {
        let payload: Value = self.request(spec).await?;
        match payload_error(&payload) {
            Some(api_error) => {
                if api_error.is_security_related() {
                    tracing::warn!(path = %spec.path, error = %api_error, "Webhook request rejected");
                }
                Err(TaurosError::Api(api_error))
            }
            None => Ok(payload),
        }
    }

    /// Get all registered webhooks.
    pub async fn get_webhooks(&self) -> Result<Vec<Webhook>, TaurosError> {
        let spec = RequestSpec::get(ApiVersion::V2, v2::WEBHOOKS).authenticated();
        let payload = self.webhook_request(&spec).await?;
        let list: WebhookList = serde_json::from_value(payload)?;
        Ok(list.results)
    }

    /// Register a webhook. Returns the identifier assigned by the server.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use tauros_api_client::rest::TaurosRestClient;
    /// use tauros_api_client::rest::webhooks::Webhook;
    /// use tauros_api_client::auth::EnvCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(EnvCredentials::from_env()?);
    ///     let client = TaurosRestClient::builder().credentials(credentials).build()?;
    ///
    ///     let webhook = Webhook::new("fills", "https://example.com/tauros")
    ///         .with_authorization("X-Token", "shared-secret");
    ///     let id = client.create_webhook(&webhook).await?;
    ///     println!("Registered webhook {id}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_webhook(&self, webhook: &Webhook) -> Result<i64, TaurosError> {
        let spec = RequestSpec::post(ApiVersion::V2, v2::WEBHOOKS)
            .authenticated()
            .with_json(webhook)?;
        let payload = self.webhook_request(&spec).await?;
        let created: CreatedWebhook = serde_json::from_value(payload)?;
        Ok(created.id)
    }

    /// Delete one webhook.
    pub async fn delete_webhook(&self, webhook_id: i64) -> Result<(), TaurosError> {
        let path = format!("{}/{}", v2::WEBHOOKS, webhook_id);
        let spec = RequestSpec::delete(ApiVersion::V2, path).authenticated();
        self.webhook_request(&spec).await?;
        Ok(())
    }

    /// Delete all registered webhooks, one after the other.
    ///
    /// Stops at the first failure. Returns the number of webhooks deleted.
    pub async fn delete_webhooks(&self) -> Result<usize, TaurosError> {
        let webhooks = self.get_webhooks().await?;
        let mut deleted = 0;
        for webhook in &webhooks {
            let Some(webhook_id) = webhook.id else {
                continue;
            };
            self.delete_webhook(webhook_id).await?;
            deleted += 1;
        }
        Ok(deleted)
    }
}
