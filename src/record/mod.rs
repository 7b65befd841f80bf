//! Analysis records and their normalization.
//!
//! This module provides:
//! - [`AnalysisRecord`]: optional-field schema of the backend's risk analysis
//! - [`AnalysisEnvelope`]: the full backend response, advanced record included
//! - [`normalize`]: the one place where missing fields become defaults

mod envelope;
pub(crate) mod lenient;
mod normalize;
mod types;

pub use envelope::*;
pub use normalize::*;
pub use types::*;

use std::path::Path;

use crate::error::RecordError;

/// Read a backend response from a JSON file.
///
/// Only unreadable files and malformed JSON fail; any well-formed JSON
/// value yields an envelope.
pub async fn load_envelope(path: impl AsRef<Path>) -> Result<AnalysisEnvelope, RecordError> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)?;
    Ok(AnalysisEnvelope::from_value(value))
}
