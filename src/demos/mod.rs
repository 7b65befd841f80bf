//! Demo scenarios that pre-fill sample input and run a full analysis.
//!
//! This module provides:
//! - `DemoScenario`: a canned text with its expected risk
//! - `DemoRegistry`: registration and lookup of scenarios
//! - `DemoRunner`: runs a scenario through validate, analyze and present

pub mod builtins;
mod registry;
mod runner;
mod types;

pub use registry::DemoRegistry;
pub use runner::{DemoRun, DemoRunner};
pub use types::*;
