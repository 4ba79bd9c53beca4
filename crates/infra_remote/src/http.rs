//! The shared HTTP client

use std::sync::RwLock;
use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use core_kernel::{InvoiceId, PortError};
use domain_config::TemplateKind;

use crate::config::RemoteConfig;

/// Shared request plumbing for the collaborator adapters
///
/// Holds the session's bearer token; `set_token` after login and
/// `clear_token` on logout. Requests without a token simply omit the
/// Authorization header and let the collaborator reject them.
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    timeout_ms: u64,
    token: RwLock<Option<String>>,
}

impl HttpClient {
    pub fn new(config: &RemoteConfig) -> Result<Self, PortError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| PortError::Internal {
                message: "failed to build HTTP client".to_string(),
                source: Some(Box::new(err)),
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_ms: config.timeout_secs * 1000,
            token: RwLock::new(None),
        })
    }

    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.into());
        }
    }

    pub fn clear_token(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }

    /// The derived PDF endpoint for an invoice under a given template
    pub fn pdf_url(&self, id: &InvoiceId, template: TemplateKind) -> String {
        format!(
            "{}/invoices/{}/pdf?template={}",
            self.base_url,
            id,
            template.wire_name()
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token.read() {
            Ok(slot) => match slot.as_deref() {
                Some(token) => request.bearer_auth(token),
                None => request,
            },
            Err(_) => request,
        }
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<Response, PortError> {
        debug!(path, "collaborator request");
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|err| map_transport(err, path, self.timeout_ms))?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(map_status(status, path))
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T, PortError> {
        response.json().await.map_err(|err| PortError::Internal {
            message: format!("undecodable response from {path}"),
            source: Some(Box::new(err)),
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, PortError> {
        let response = self.send(self.client.get(self.url(path)), path).await?;
        Self::decode(response, path).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, PortError> {
        let response = self
            .send(self.client.post(self.url(path)).json(body), path)
            .await?;
        Self::decode(response, path).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, PortError> {
        let response = self
            .send(self.client.put(self.url(path)).json(body), path)
            .await?;
        Self::decode(response, path).await
    }

    /// PUT whose response body, if any, is ignored
    pub(crate) async fn put_ignored<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), PortError> {
        self.send(self.client.put(self.url(path)).json(body), path)
            .await?;
        Ok(())
    }

    /// DELETE with no response body; 204 is the expected success
    pub(crate) async fn delete(&self, path: &str) -> Result<(), PortError> {
        self.send(self.client.delete(self.url(path)), path).await?;
        Ok(())
    }
}

fn map_status(status: StatusCode, path: &str) -> PortError {
    match status {
        StatusCode::NOT_FOUND => PortError::not_found("record", path),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            PortError::unauthorized(format!("{path} returned {status}"))
        }
        StatusCode::TOO_MANY_REQUESTS => PortError::ServiceUnavailable {
            service: path.to_string(),
        },
        status if status.is_server_error() => PortError::ServiceUnavailable {
            service: path.to_string(),
        },
        StatusCode::UNPROCESSABLE_ENTITY | StatusCode::BAD_REQUEST => {
            PortError::validation(format!("{path} returned {status}"))
        }
        status => PortError::internal(format!("{path} returned {status}")),
    }
}

fn map_transport(err: reqwest::Error, path: &str, timeout_ms: u64) -> PortError {
    if err.is_timeout() {
        PortError::Timeout {
            operation: path.to_string(),
            duration_ms: timeout_ms,
        }
    } else {
        PortError::Connection {
            message: format!("request to {path} failed"),
            source: Some(Box::new(err)),
        }
    }
}
