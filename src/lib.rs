//! # Misinformation Risk Dashboard
//!
//! Turns the output of a misinformation-risk analysis service into a set of
//! renderable dashboard primitives.
//!
//! ## Features
//!
//! - **Lenient records**: any JSON value parses; missing or mistyped fields
//!   fall back to documented defaults
//! - **Color banding**: fixed threshold tables for risk, pattern and
//!   confidence scores
//! - **Visual models**: risk gauge, credibility radar, urgency panel,
//!   relationship graph, pattern breakdown and confidence ring
//! - **Render dispatch**: ordered sections drawn onto named mount points,
//!   skipping any that are missing
//! - **Analysis client**: text, URL and image analysis over HTTP
//! - **Demo scenarios**: canned inputs with their expected risk
//!
//! ## Architecture
//!
//! ```text
//! JSON response → AnalysisEnvelope → normalize → viz models → RenderDispatcher → surfaces
//!                        ↓
//!                 ResultsSummary
//! ```
//!
//! ## Example
//!
//! ```
//! use misinfo_dashboard::record::AnalysisRecord;
//! use misinfo_dashboard::render::{RenderDispatcher, RenderTargetSet};
//!
//! let record = AnalysisRecord::from_value(serde_json::json!({
//!     "risk_assessment": { "overall_risk_score": 85, "risk_level": "HIGH RISK" }
//! }));
//! let mut targets = RenderTargetSet::standard().without("timeline-section");
//! let outcome = RenderDispatcher::default().render(&record, &mut targets);
//! assert_eq!(outcome.rendered(), 4);
//! assert_eq!(outcome.skipped(), 1);
//! ```

/// Analysis service client, request types and input validation.
pub mod backend;
/// Command-line interface.
pub mod cli;
/// Configuration loaded from the environment.
pub mod config;
/// Validate, analyze and present in one flow.
pub mod dashboard;
/// Demo scenario catalogue and runner.
pub mod demos;
/// Error types and result aliases for the application.
pub mod error;
/// Transient user-facing notices.
pub mod notice;
/// Analysis record schema, envelope parsing and normalization.
pub mod record;
/// Drawing primitives, render targets and the dispatcher.
pub mod render;
/// Visual models and the color palette.
pub mod viz;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use record::{normalize, AnalysisEnvelope, AnalysisRecord, NormalizedView};
pub use render::{RenderDispatcher, RenderOutcome, RenderTargetSet};
