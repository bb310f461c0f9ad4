use std::sync::Arc;

use anyhow::anyhow;
use formsend_models::contact::{ContactMessage, MessageId};
use formsend_store_contracts::{MessageStore, MessageStoreError};
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use crate::http::HttpClient;

pub mod http;

/// Document-store client speaking the hosted backend's REST API. The backend
/// assigns both the document id and the submission timestamp on write.
#[derive(Debug, Clone)]
pub struct RestMessageStore {
    config: RestMessageStoreConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct RestMessageStoreConfig {
    pub endpoint: Arc<Url>,
    pub collection: String,
    pub api_key: Option<String>,
}

impl RestMessageStore {
    pub fn new(config: RestMessageStoreConfig) -> Self {
        Self {
            config,
            client: HttpClient::default(),
        }
    }
}

impl MessageStore for RestMessageStore {
    async fn add(&self, message: &ContactMessage) -> Result<MessageId, MessageStoreError> {
        let url = self
            .config
            .endpoint
            .join(&format!(
                "v1/collections/{}/documents",
                self.config.collection
            ))
            .map_err(anyhow::Error::from)?;

        let mut request = self.client.post(url).json(message);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &body));
        }

        let CreatedDocument { id } = response.json().await.map_err(anyhow::Error::from)?;
        tracing::debug!(%id, collection = self.config.collection, "document created");

        id.try_into()
            .map_err(|err| anyhow!("Backend returned an invalid document id: {err}").into())
    }
}

#[derive(Debug, Deserialize)]
struct CreatedDocument {
    id: String,
}

fn classify_transport_error(err: reqwest::Error) -> MessageStoreError {
    if err.is_connect() || err.is_timeout() {
        MessageStoreError::Unavailable
    } else {
        MessageStoreError::Other(err.into())
    }
}

fn classify_status(status: StatusCode, body: &str) -> MessageStoreError {
    match status {
        StatusCode::UNAUTHORIZED => MessageStoreError::Unauthenticated,
        StatusCode::FORBIDDEN => MessageStoreError::PermissionDenied,
        StatusCode::SERVICE_UNAVAILABLE => MessageStoreError::Unavailable,
        _ if body.trim().is_empty() => MessageStoreError::Other(anyhow!("{status}")),
        _ => MessageStoreError::Other(anyhow!("{}", body.trim())),
    }
}
