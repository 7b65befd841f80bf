//! Checks applied to user input before it leaves the process.

use reqwest::Url;

use super::types::{AnalysisRequest, ImagePayload};
use crate::config::InputLimits;
use crate::error::{InputError, InputResult};

/// Validates and normalizes analysis input against configured limits.
#[derive(Debug, Clone)]
pub struct InputValidator {
    limits: InputLimits,
}

impl InputValidator {
    pub fn new(limits: InputLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &InputLimits {
        &self.limits
    }

    /// Trimmed text, at most `max_text_chars` characters.
    pub fn text(&self, text: &str) -> InputResult<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyText);
        }
        let length = trimmed.chars().count();
        if length > self.limits.max_text_chars {
            return Err(InputError::TextTooLong {
                length,
                max: self.limits.max_text_chars,
            });
        }
        Ok(trimmed.to_string())
    }

    /// Trimmed URL that parses as an absolute URL.
    pub fn url(&self, url: &str) -> InputResult<String> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyUrl);
        }
        Url::parse(trimmed).map_err(|_| InputError::InvalidUrl {
            url: trimmed.to_string(),
        })?;
        Ok(trimmed.to_string())
    }

    pub fn image(&self, image: Option<ImagePayload>) -> InputResult<ImagePayload> {
        let image = image.ok_or(InputError::MissingImage)?;
        if image.size() > self.limits.max_image_bytes {
            return Err(InputError::ImageTooLarge {
                size: image.size(),
                max: self.limits.max_image_bytes,
            });
        }
        if !image.content_type.starts_with("image/") {
            return Err(InputError::NotAnImage {
                content_type: image.content_type,
            });
        }
        Ok(image)
    }

    /// Validate a whole request, returning its normalized form.
    pub fn request(&self, request: AnalysisRequest) -> InputResult<AnalysisRequest> {
        match request {
            AnalysisRequest::Text(text) => self.text(&text).map(AnalysisRequest::Text),
            AnalysisRequest::Url(url) => self.url(&url).map(AnalysisRequest::Url),
            AnalysisRequest::Image(image) => self.image(Some(image)).map(AnalysisRequest::Image),
        }
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new(InputLimits::default())
    }
}
