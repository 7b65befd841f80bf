//! Analyze-then-present flow.
//!
//! [`Dashboard`] ties the pieces together: validate input, call the
//! analysis service once, parse the response and present it. The results
//! summary is always built; the visual sections are rendered only when the
//! response carries an advanced record.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::backend::{AnalysisBackend, AnalysisRequest, InputValidator};
use crate::error::AppResult;
use crate::record::AnalysisEnvelope;
use crate::render::{RenderDispatcher, RenderOutcome, RenderTargetSet};
use crate::viz::{build_summary, ResultsSummary};

/// Everything presented for one analysis response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub summary: ResultsSummary,
    /// Visual sections, when the response had an advanced record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<RenderOutcome>,
}

/// Outcome of a successful analysis call.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Response body as received.
    pub response: Value,
    pub view: DashboardView,
}

pub struct Dashboard {
    backend: Arc<dyn AnalysisBackend>,
    validator: InputValidator,
    dispatcher: RenderDispatcher,
}

impl Dashboard {
    pub fn new(
        backend: Arc<dyn AnalysisBackend>,
        validator: InputValidator,
        dispatcher: RenderDispatcher,
    ) -> Self {
        Self {
            backend,
            validator,
            dispatcher,
        }
    }

    pub fn validator(&self) -> &InputValidator {
        &self.validator
    }

    pub fn dispatcher(&self) -> &RenderDispatcher {
        &self.dispatcher
    }

    pub fn backend(&self) -> &Arc<dyn AnalysisBackend> {
        &self.backend
    }

    /// Validate, analyze and present. Targets are untouched on failure.
    pub async fn analyze(
        &self,
        request: AnalysisRequest,
        targets: &mut RenderTargetSet,
    ) -> AppResult<AnalysisReport> {
        let request = self.validator.request(request)?;
        let response = self.backend.analyze(request).await?;
        let envelope = AnalysisEnvelope::from_value(response.clone());
        let view = self.present(&envelope, targets);
        Ok(AnalysisReport { response, view })
    }

    /// Present an already-parsed response.
    pub fn present(&self, envelope: &AnalysisEnvelope, targets: &mut RenderTargetSet) -> DashboardView {
        let summary = build_summary(envelope, self.dispatcher.mapper());
        let sections = if envelope.has_advanced() {
            Some(self.dispatcher.render(envelope.record(), targets))
        } else {
            None
        };
        info!(
            level = %summary.level_label,
            advanced = sections.is_some(),
            "Results presented"
        );
        DashboardView { summary, sections }
    }
}
