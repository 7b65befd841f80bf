use serde::{Deserialize, Serialize};

/// Uploaded image bytes with their metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub filename: String,
    /// MIME type as reported by the caller, e.g. `image/png`.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    pub fn new(filename: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Size of the payload in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// One analysis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    Text(String),
    Url(String),
    Image(ImagePayload),
}

impl AnalysisRequest {
    /// Endpoint path relative to the backend base URL.
    pub fn path(&self) -> &'static str {
        match self {
            AnalysisRequest::Text(_) => "/api/analyze/text",
            AnalysisRequest::Url(_) => "/api/analyze/url",
            AnalysisRequest::Image(_) => "/api/analyze/image",
        }
    }

    /// Short kind name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisRequest::Text(_) => "text",
            AnalysisRequest::Url(_) => "url",
            AnalysisRequest::Image(_) => "image",
        }
    }
}

/// JSON body of a text analysis call.
#[derive(Debug, Clone, Serialize)]
pub struct TextBody<'a> {
    pub text: &'a str,
}

/// JSON body of a URL analysis call.
#[derive(Debug, Clone, Serialize)]
pub struct UrlBody<'a> {
    pub url: &'a str,
}

/// Error payload the backend sends with non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// Response of the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// General guidance served independently of any analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationalTips {
    #[serde(default)]
    pub general_tips: Vec<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub verification_steps: Vec<String>,
}
