//! Analysis service access.
//!
//! This module provides:
//! - [`AnalysisBackend`]: the seam the rest of the crate calls through
//! - [`AnalysisClient`]: the reqwest implementation of that seam
//! - [`InputValidator`]: checks run before any request is sent

mod client;
mod types;
mod validate;

pub use client::*;
pub use types::*;
pub use validate::*;
