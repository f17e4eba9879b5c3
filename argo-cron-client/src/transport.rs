//! HTTP transport for the cron workflow service.
//!
//! [`Transport`] is the seam between the typed service wrapper and the wire.
//! [`HttpTransport`] talks JSON to the Argo server's gRPC-gateway endpoints
//! under `/api/v1/cron-workflows`.

use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::models::{
    CreateCronWorkflowRequest, CronWorkflow, CronWorkflowList, CronWorkflowResumeRequest,
    CronWorkflowSuspendRequest, RawResponse,
};
use crate::runtime;
use async_trait::async_trait;
use reqwest::{Client as HttpClient, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Remote operations of the cron workflow service.
///
/// Each method maps to exactly one API call. Implementations report failures
/// as [`ClientError`] and never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// `POST /api/v1/cron-workflows/{namespace}`
    async fn create_cron_workflow(
        &self,
        namespace: &str,
        request: &CreateCronWorkflowRequest,
    ) -> Result<CronWorkflow>;

    /// `DELETE /api/v1/cron-workflows/{namespace}/{name}`
    async fn delete_cron_workflow(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<RawResponse<Value>>;

    /// `PUT /api/v1/cron-workflows/{namespace}/{name}/suspend`
    async fn suspend_cron_workflow(
        &self,
        namespace: &str,
        name: &str,
        request: &CronWorkflowSuspendRequest,
    ) -> Result<RawResponse<Value>>;

    /// `PUT /api/v1/cron-workflows/{namespace}/{name}/resume`
    async fn resume_cron_workflow(
        &self,
        namespace: &str,
        name: &str,
        request: &CronWorkflowResumeRequest,
    ) -> Result<RawResponse<Value>>;

    /// `GET /api/v1/cron-workflows/{namespace}/{name}`
    async fn get_cron_workflow(&self, namespace: &str, name: &str) -> Result<CronWorkflow>;

    /// `GET /api/v1/cron-workflows/{namespace}`
    async fn list_cron_workflows(
        &self,
        namespace: &str,
        label_selector: Option<&str>,
    ) -> Result<CronWorkflowList>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Base URL of the Argo server.
    base_url: String,
    /// HTTP client.
    http: HttpClient,
    /// Bearer token; empty means no `Authorization` header.
    token: String,
}

impl HttpTransport {
    /// Build a transport from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s) or the HTTP client
    /// cannot be created.
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = config.base_url();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(format!(
                "URL must start with http:// or https://, got: {}",
                base_url
            )));
        }

        let http = HttpClient::builder()
            .timeout(config.timeout())
            .danger_accept_invalid_certs(!config.verify_ssl())
            .build()?;

        Ok(Self {
            base_url,
            http,
            token: config.token().to_string(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path.
    fn url(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/api/v1/{}", self.base_url, path)
    }

    /// Add authentication headers to a request.
    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        if self.token.is_empty() {
            builder
        } else {
            builder.header("Authorization", format!("Bearer {}", self.token))
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        self.with_auth(builder)
            .send()
            .await
            .map_err(ClientError::Http)
    }

    /// Decode a successful response, or turn a failed one into an API error.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let raw = self.handle_raw(response).await?;
        serde_json::from_value(raw.body).map_err(ClientError::Deserialize)
    }

    /// Pass a successful response through as body, status and headers.
    async fn handle_raw(&self, response: Response) -> Result<RawResponse<Value>> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(ClientError::Http)?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Argo server returned an error");
            return Err(api_error(status.as_u16(), body));
        }

        let body = if body.trim().is_empty() {
            Value::Object(Default::default())
        } else {
            serde_json::from_str(&body)?
        };

        Ok(RawResponse {
            body,
            status: status.as_u16(),
            headers,
        })
    }
}

/// Build an API error from a non-success body.
fn api_error(status: u16, body: String) -> ClientError {
    let payload = runtime::Error::from_body(&body);
    let message = payload
        .as_ref()
        .and_then(|p| p.summary())
        .map(str::to_string)
        .unwrap_or(body);

    ClientError::Api {
        status,
        message,
        payload,
    }
}

fn cron_workflow_path(namespace: &str, name: &str) -> String {
    format!("cron-workflows/{}/{}", namespace, name)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn create_cron_workflow(
        &self,
        namespace: &str,
        request: &CreateCronWorkflowRequest,
    ) -> Result<CronWorkflow> {
        let url = self.url(&format!("cron-workflows/{}", namespace));
        tracing::debug!(%url, "POST create cron workflow");

        let response = self.send(self.http.post(&url).json(request)).await?;
        self.handle_response(response).await
    }

    async fn delete_cron_workflow(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<RawResponse<Value>> {
        let url = self.url(&cron_workflow_path(namespace, name));
        tracing::debug!(%url, "DELETE cron workflow");

        let response = self.send(self.http.delete(&url)).await?;
        self.handle_raw(response).await
    }

    async fn suspend_cron_workflow(
        &self,
        namespace: &str,
        name: &str,
        request: &CronWorkflowSuspendRequest,
    ) -> Result<RawResponse<Value>> {
        let url = self.url(&format!("{}/suspend", cron_workflow_path(namespace, name)));
        tracing::debug!(%url, "PUT suspend cron workflow");

        let response = self.send(self.http.put(&url).json(request)).await?;
        self.handle_raw(response).await
    }

    async fn resume_cron_workflow(
        &self,
        namespace: &str,
        name: &str,
        request: &CronWorkflowResumeRequest,
    ) -> Result<RawResponse<Value>> {
        let url = self.url(&format!("{}/resume", cron_workflow_path(namespace, name)));
        tracing::debug!(%url, "PUT resume cron workflow");

        let response = self.send(self.http.put(&url).json(request)).await?;
        self.handle_raw(response).await
    }

    async fn get_cron_workflow(&self, namespace: &str, name: &str) -> Result<CronWorkflow> {
        let url = self.url(&cron_workflow_path(namespace, name));
        tracing::debug!(%url, "GET cron workflow");

        let response = self.send(self.http.get(&url)).await?;
        self.handle_response(response).await
    }

    async fn list_cron_workflows(
        &self,
        namespace: &str,
        label_selector: Option<&str>,
    ) -> Result<CronWorkflowList> {
        let mut url = self.url(&format!("cron-workflows/{}", namespace));
        if let Some(selector) = label_selector {
            url.push_str(&format!(
                "?listOptions.labelSelector={}",
                urlencoding::encode(selector)
            ));
        }
        tracing::debug!(%url, "GET cron workflows");

        let response = self.send(self.http.get(&url)).await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(host: &str) -> HttpTransport {
        HttpTransport::new(&Config::new("argo.example.com", "t").with_host(host)).unwrap()
    }

    #[test]
    fn test_default_base_url_is_https_domain() {
        let transport = HttpTransport::new(&Config::new("argo.example.com", "t")).unwrap();
        assert_eq!(transport.base_url(), "https://argo.example.com");
    }

    #[test]
    fn test_invalid_host() {
        let result = HttpTransport::new(&Config::new("argo.example.com", "t").with_host("argo:2746"));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_url_building() {
        let transport = transport("http://localhost:2746");
        assert_eq!(
            transport.url("cron-workflows/prod"),
            "http://localhost:2746/api/v1/cron-workflows/prod"
        );
        assert_eq!(
            transport.url("/cron-workflows/prod"),
            "http://localhost:2746/api/v1/cron-workflows/prod"
        );
    }

    #[test]
    fn test_url_building_with_trailing_slash() {
        let transport = transport("http://localhost:2746/");
        assert_eq!(
            transport.url(&cron_workflow_path("prod", "nightly")),
            "http://localhost:2746/api/v1/cron-workflows/prod/nightly"
        );
    }

    #[test]
    fn test_api_error_prefers_gateway_message() {
        let err = api_error(404, r#"{"code":5,"message":"not found"}"#.to_string());
        match err {
            ClientError::Api {
                status,
                message,
                payload,
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
                assert_eq!(payload.and_then(|p| p.code), Some(5));
            }
            other => panic!("Expected API error, got {:?}", other),
        }
    }

    #[test]
    fn test_api_error_keeps_plain_body() {
        let err = api_error(502, "Bad Gateway".to_string());
        match err {
            ClientError::Api {
                message, payload, ..
            } => {
                assert_eq!(message, "Bad Gateway");
                assert!(payload.is_none());
            }
            other => panic!("Expected API error, got {:?}", other),
        }
    }
}
