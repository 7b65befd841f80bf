use async_trait::async_trait;
use reqwest::{multipart, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

use super::types::{AnalysisRequest, EducationalTips, ErrorPayload, HealthStatus, TextBody, UrlBody};
use crate::config::{BackendConfig, RequestConfig};
use crate::error::{BackendError, BackendResult};

/// Message used when a failed response carries no usable error payload.
pub const DEFAULT_API_ERROR: &str = "An error occurred during analysis.";

/// The external analysis service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Run one analysis and return the raw response body.
    async fn analyze(&self, request: AnalysisRequest) -> BackendResult<Value>;

    /// Probe the service.
    async fn health(&self) -> BackendResult<HealthStatus>;

    /// Fetch the general guidance served by the service.
    async fn educational_tips(&self) -> BackendResult<EducationalTips>;
}

/// HTTP client for the analysis service. Each call is attempted once.
#[derive(Clone)]
pub struct AnalysisClient {
    client: Client,
    base_url: String,
    request_config: RequestConfig,
}

impl AnalysisClient {
    pub fn new(config: &BackendConfig, request_config: RequestConfig) -> BackendResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(request_config.timeout_ms))
            .build()
            .map_err(BackendError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_config,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn build(&self, request: &AnalysisRequest) -> BackendResult<RequestBuilder> {
        let builder = self.client.post(self.url(request.path()));
        Ok(match request {
            AnalysisRequest::Text(text) => builder.json(&TextBody { text }),
            AnalysisRequest::Url(url) => builder.json(&UrlBody { url }),
            AnalysisRequest::Image(image) => {
                let part = multipart::Part::bytes(image.bytes.clone())
                    .file_name(image.filename.clone())
                    .mime_str(&image.content_type)?;
                builder.multipart(multipart::Form::new().part("image", part))
            }
        })
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> BackendResult<T> {
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                BackendError::Timeout {
                    timeout_ms: self.request_config.timeout_ms,
                }
            } else if e.is_connect() {
                BackendError::Unavailable {
                    message: e.to_string(),
                }
            } else {
                BackendError::Http(e)
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorPayload>(&body)
                .ok()
                .and_then(|payload| payload.error)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| DEFAULT_API_ERROR.to_string());
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse {
                message: format!("Failed to parse response: {}", e),
            })
    }
}

#[async_trait]
impl AnalysisBackend for AnalysisClient {
    async fn analyze(&self, request: AnalysisRequest) -> BackendResult<Value> {
        let kind = request.kind();
        debug!(kind, path = request.path(), "Calling analysis service");

        let start = Instant::now();
        let result = match self.build(&request) {
            Ok(builder) => self.execute::<Value>(builder).await,
            Err(e) => Err(e),
        };
        let latency_ms = start.elapsed().as_millis();

        match &result {
            Ok(_) => info!(kind, latency_ms, "Analysis succeeded"),
            Err(e) => error!(kind, error = %e, latency_ms, "Analysis failed"),
        }
        result
    }

    async fn health(&self) -> BackendResult<HealthStatus> {
        self.execute(self.client.get(self.url("/api/health"))).await
    }

    async fn educational_tips(&self) -> BackendResult<EducationalTips> {
        self.execute(self.client.get(self.url("/api/educational/tips")))
            .await
    }
}
