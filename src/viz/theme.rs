//! Color palette shared by every visual section.

use serde::{Deserialize, Serialize};

/// Symbolic color slot.
///
/// Bands and nodes refer to tokens; a [`Theme`] turns a token into a
/// concrete color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    /// Accent color for neutral chrome and the content hub.
    Primary,
    /// Critical / failing.
    Danger,
    /// High but not critical.
    Orange,
    /// Medium / caution.
    Warning,
    /// Low.
    Teal,
    /// Minimal / passing.
    Success,
    /// Informational.
    Info,
    /// Muted text and secondary nodes.
    Secondary,
    /// Unfilled track behind gauges and rings.
    Track,
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColorToken::Primary => "primary",
            ColorToken::Danger => "danger",
            ColorToken::Orange => "orange",
            ColorToken::Warning => "warning",
            ColorToken::Teal => "teal",
            ColorToken::Success => "success",
            ColorToken::Info => "info",
            ColorToken::Secondary => "secondary",
            ColorToken::Track => "track",
        };
        write!(f, "{}", name)
    }
}

/// Immutable palette handed to the band mapper and the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary: String,
    pub danger: String,
    pub orange: String,
    pub warning: String,
    pub teal: String,
    pub success: String,
    pub info: String,
    pub secondary: String,
    pub track: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#667eea".to_string(),
            danger: "#dc3545".to_string(),
            orange: "#fd7e14".to_string(),
            warning: "#ffc107".to_string(),
            teal: "#20c997".to_string(),
            success: "#28a745".to_string(),
            info: "#17a2b8".to_string(),
            secondary: "#6c757d".to_string(),
            track: "#e9ecef".to_string(),
        }
    }
}

impl Theme {
    /// Replace the primary accent color.
    pub fn with_primary(mut self, primary: impl Into<String>) -> Self {
        self.primary = primary.into();
        self
    }

    /// Resolve a token to its color string.
    pub fn color(&self, token: ColorToken) -> &str {
        match token {
            ColorToken::Primary => &self.primary,
            ColorToken::Danger => &self.danger,
            ColorToken::Orange => &self.orange,
            ColorToken::Warning => &self.warning,
            ColorToken::Teal => &self.teal,
            ColorToken::Success => &self.success,
            ColorToken::Info => &self.info,
            ColorToken::Secondary => &self.secondary,
            ColorToken::Track => &self.track,
        }
    }
}
