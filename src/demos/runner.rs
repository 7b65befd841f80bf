//! Demo execution.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::registry::DemoRegistry;
use crate::backend::AnalysisRequest;
use crate::dashboard::{Dashboard, DashboardView};
use crate::error::{AppError, AppResult};
use crate::notice::UserNotice;
use crate::render::RenderTargetSet;

/// Record of one demo run.
#[derive(Debug, Clone, Serialize)]
pub struct DemoRun {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub scenario_id: String,
    pub expected_risk: u8,
    /// Text placed in the analysis input.
    pub prefilled_text: String,
    /// Notices raised during the run, in order.
    pub notices: Vec<UserNotice>,
    /// Presented results; `None` when the analysis failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<DashboardView>,
    pub duration_ms: u64,
}

impl DemoRun {
    pub fn succeeded(&self) -> bool {
        self.view.is_some()
    }

    /// Blended risk score the service returned, if the run succeeded.
    pub fn actual_risk(&self) -> Option<f64> {
        self.view.as_ref().map(|v| v.summary.score.score)
    }
}

/// Runs demo scenarios through the normal analyze-then-present flow.
pub struct DemoRunner {
    registry: DemoRegistry,
    dashboard: Dashboard,
}

impl DemoRunner {
    pub fn new(registry: DemoRegistry, dashboard: Dashboard) -> Self {
        Self {
            registry,
            dashboard,
        }
    }

    pub fn registry(&self) -> &DemoRegistry {
        &self.registry
    }

    /// Run a scenario by id.
    ///
    /// # Errors
    /// Only an unknown id is an error. A failed analysis is reported as an
    /// error notice on the run, and `targets` are left as they were.
    pub async fn run(&self, id: &str, targets: &mut RenderTargetSet) -> AppResult<DemoRun> {
        let scenario = self.registry.get(id).ok_or_else(|| AppError::UnknownDemo {
            id: id.to_string(),
        })?;

        let started_at = Utc::now();
        let start = Instant::now();
        let run_id = Uuid::new_v4();
        let mut notices = vec![UserNotice::demo(&scenario.category, scenario.expected_risk)];

        info!(%run_id, scenario = %scenario.id, "Starting demo run");

        let view = match self
            .dashboard
            .analyze(AnalysisRequest::Text(scenario.text.clone()), targets)
            .await
        {
            Ok(report) => Some(report.view),
            Err(e) => {
                warn!(%run_id, scenario = %scenario.id, error = %e, "Demo analysis failed");
                notices.push(UserNotice::from_error(&e));
                None
            }
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(%run_id, succeeded = view.is_some(), duration_ms, "Demo run finished");

        Ok(DemoRun {
            run_id,
            started_at,
            scenario_id: scenario.id,
            expected_risk: scenario.expected_risk,
            prefilled_text: scenario.text,
            notices,
            view,
            duration_ms,
        })
    }
}
